use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NetworkFailed,
    FetchFailed,
    EmptyBatch,
    InvalidOptions,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NetworkFailed => {
                "Could not load questions. Check your connection and try again."
            }
            Self::FetchFailed => {
                "Could not load questions. The quiz provider rejected the request or sent an unusable response."
            }
            Self::EmptyBatch => {
                "No questions matched those settings. Try another category or difficulty."
            }
            Self::InvalidOptions => "Please check the quiz settings.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }

    /// Map a failed load to the notice shown on the settings screen.
    ///
    /// Returns `None` for loads that were superseded; those are dropped silently.
    #[must_use]
    pub fn from_quiz_error(err: &QuizError) -> Option<Self> {
        match err {
            QuizError::Superseded => None,
            QuizError::EmptyBatch => Some(Self::EmptyBatch),
            QuizError::Source(source) if source.is_network() => Some(Self::NetworkFailed),
            QuizError::Source(_) => Some(Self::FetchFailed),
            _ => Some(Self::Unknown),
        }
    }
}
