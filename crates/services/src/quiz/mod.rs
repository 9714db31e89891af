mod progress;
mod service;
mod ticker;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use service::{QuizSession, QuizState, Step, TickOutcome, Transition};
pub use ticker::{IntervalTicker, Ticker, run_countdown};
pub use view::{ChosenAnswer, QuestionView, QuizResult};
pub use workflow::QuizLoopService;
