pub mod avatar;
pub mod chat;
