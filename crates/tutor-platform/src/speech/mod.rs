pub mod recognition;
pub mod synthesis;

pub use recognition::WebSpeechInput;
pub use synthesis::WebSpeechOutput;
