use thiserror::Error;

use crate::model::{Difficulty, QuestionType};

/// Fixed answer order for `QuestionType::Boolean` items.
pub const BOOLEAN_ANSWERS: [&str; 2] = ["True", "False"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizItemError {
    #[error("item has no answers")]
    NoAnswers,

    #[error("correct index {index} is out of range for {len} answers")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("boolean item answers must be exactly [\"True\", \"False\"]")]
    BooleanAnswers,
}

/// One normalized trivia question, ready for display.
///
/// Text fields are already HTML-entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    category: String,
    difficulty: Difficulty,
    question: String,
    answers: Vec<String>,
    correct_index: usize,
    question_type: QuestionType,
}

impl QuizItem {
    /// # Errors
    ///
    /// Returns `QuizItemError` if `correct_index` does not point into `answers`,
    /// or a boolean item does not carry the fixed `["True", "False"]` answers.
    pub fn new(
        category: impl Into<String>,
        difficulty: Difficulty,
        question: impl Into<String>,
        answers: Vec<String>,
        correct_index: usize,
        question_type: QuestionType,
    ) -> Result<Self, QuizItemError> {
        if answers.is_empty() {
            return Err(QuizItemError::NoAnswers);
        }
        if correct_index >= answers.len() {
            return Err(QuizItemError::CorrectIndexOutOfRange {
                index: correct_index,
                len: answers.len(),
            });
        }
        if question_type == QuestionType::Boolean && answers != BOOLEAN_ANSWERS {
            return Err(QuizItemError::BooleanAnswers);
        }

        Ok(Self {
            category: category.into(),
            difficulty,
            question: question.into(),
            answers,
            correct_index,
            question_type,
        })
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.answers[self.correct_index]
    }

    #[must_use]
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    #[must_use]
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let err = QuizItem::new(
            "General",
            Difficulty::Easy,
            "Q?",
            answers(&["a", "b"]),
            2,
            QuestionType::Multiple,
        )
        .unwrap_err();
        assert_eq!(err, QuizItemError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn boolean_items_require_fixed_order() {
        let err = QuizItem::new(
            "General",
            Difficulty::Easy,
            "Q?",
            answers(&["False", "True"]),
            0,
            QuestionType::Boolean,
        )
        .unwrap_err();
        assert_eq!(err, QuizItemError::BooleanAnswers);

        let item = QuizItem::new(
            "General",
            Difficulty::Easy,
            "Q?",
            answers(&BOOLEAN_ANSWERS),
            1,
            QuestionType::Boolean,
        )
        .unwrap();
        assert_eq!(item.correct_answer(), "False");
        assert!(item.is_correct(1));
        assert!(!item.is_correct(0));
    }

    #[test]
    fn rejects_empty_answers() {
        let err = QuizItem::new(
            "General",
            Difficulty::Hard,
            "Q?",
            Vec::new(),
            0,
            QuestionType::Multiple,
        )
        .unwrap_err();
        assert_eq!(err, QuizItemError::NoAnswers);
    }
}
