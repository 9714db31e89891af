use chrono::Duration;

use quiz_core::model::{Difficulty, QuizScore};

/// The answer recorded for the question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenAnswer {
    pub index: usize,
    pub is_correct: bool,
}

/// Presentation-agnostic snapshot of the active question.
///
/// This is intentionally **not** a UI view-model: indices are zero-based and no
/// strings are pre-formatted. The UI decides labels, casing and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub category: String,
    pub difficulty: Difficulty,
    pub question: String,
    pub answers: Vec<String>,
    pub chosen: Option<ChosenAnswer>,
    /// The countdown expired on this question; answers can no longer change.
    pub locked: bool,
    pub seconds_remaining: u32,
    pub can_go_back: bool,
    /// Next should read "Finish".
    pub is_last: bool,
}

impl QuestionView {
    /// One-based position for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// `round((index + 1) / total * 100)`.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let shown = self.number() as u64;
        let total = self.total as u64;
        u32::try_from((shown * 200 + total) / (total * 2)).unwrap_or(100)
    }
}

/// Outcome of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: QuizScore,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(index: usize, total: usize) -> QuestionView {
        QuestionView {
            index,
            total,
            category: "Art".into(),
            difficulty: Difficulty::Medium,
            question: "Q?".into(),
            answers: vec!["True".into(), "False".into()],
            chosen: None,
            locked: false,
            seconds_remaining: 25,
            can_go_back: index > 0,
            is_last: index + 1 == total,
        }
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        assert_eq!(view(0, 3).progress_percent(), 33);
        assert_eq!(view(1, 3).progress_percent(), 67);
        assert_eq!(view(2, 3).progress_percent(), 100);
        assert_eq!(view(0, 8).progress_percent(), 13);
        assert_eq!(view(4, 5).number(), 5);
    }
}
