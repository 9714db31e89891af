/// Aggregated counts for a quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    /// Questions with a recorded answer, right or wrong.
    pub answered: usize,
    /// Zero-based index of the question on screen; `None` when not active.
    pub position: Option<usize>,
    pub is_finished: bool,
}

