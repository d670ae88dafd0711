//! Timer-backed retry delay

use std::time::Duration;

use async_trait::async_trait;
use blogctx_domain::ports::Delay;

/// Sleeps on the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
