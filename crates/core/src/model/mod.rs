mod item;
mod options;
mod score;

pub use item::{BOOLEAN_ANSWERS, QuizItem, QuizItemError};
pub use options::{
    CategoryId, DEFAULT_AMOUNT, Difficulty, MAX_AMOUNT, MIN_AMOUNT, OptionsError, QuestionType,
    QuizOptions,
};
pub use score::{QuizScore, ScoreBand};
