#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod html;
pub mod joke_source;
pub mod quiz;
pub mod shuffle;
pub mod trivia_source;

pub use quiz_core::Clock;

pub use config::ProviderConfig;
pub use error::{QuizError, SourceError};
pub use joke_source::{JOKE_FALLBACK, JokeApiSource, JokeSource, JokeText, fetch_joke_or_fallback};
pub use shuffle::{AnswerShuffler, KeepOrder, RandomShuffler, SeededShuffler};
pub use trivia_source::{OpenTdbSource, QuestionSource};

pub use quiz::{
    ChosenAnswer, IntervalTicker, QuestionView, QuizLoopService, QuizProgress, QuizResult,
    QuizSession, QuizState, Step, TickOutcome, Ticker, Transition, run_countdown,
};
