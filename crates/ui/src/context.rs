use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::{QuizLoopService, Ticker};

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn ticker(&self) -> Arc<dyn Ticker>;
    fn start_sample_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    ticker: Arc<dyn Ticker>,
    start_sample_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            ticker: app.ticker(),
            start_sample_once: Arc::new(AtomicBool::new(app.start_sample_on_launch())),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn ticker(&self) -> Arc<dyn Ticker> {
        Arc::clone(&self.ticker)
    }

    /// True exactly once when the app was launched with the sample preset.
    #[must_use]
    pub fn take_start_sample_on_launch(&self) -> bool {
        self.start_sample_once.swap(false, Ordering::AcqRel)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
