use std::time::Duration;

use async_trait::async_trait;

use super::service::TickOutcome;

/// Source of countdown ticks. Production waits one real second; tests tick instantly.
#[async_trait]
pub trait Ticker: Send + Sync {
    async fn wait(&self);
}

#[derive(Debug, Clone, Copy)]
pub struct IntervalTicker {
    period: Duration,
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl IntervalTicker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn wait(&self) {
        tokio::time::sleep(self.period).await;
    }
}

/// Drive one countdown: wait, deliver a tick, repeat until the tick reports that
/// this countdown expired or went stale.
///
/// `on_tick` is expected to call `QuizSession::tick` with the ticket the countdown
/// was started under.
pub async fn run_countdown<F>(ticker: &dyn Ticker, mut on_tick: F) -> TickOutcome
where
    F: FnMut() -> TickOutcome,
{
    loop {
        ticker.wait().await;
        let outcome = on_tick();
        if !outcome.keeps_running() {
            return outcome;
        }
    }
}
