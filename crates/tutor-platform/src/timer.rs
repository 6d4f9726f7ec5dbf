//! Timer adapter — the artificial reply delay, backed by gloo's
//! setTimeout future.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use tutor_core::ports::DelayPort;

pub struct BrowserDelay;

#[async_trait(?Send)]
impl DelayPort for BrowserDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
