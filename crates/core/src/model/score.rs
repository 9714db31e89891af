use std::fmt;

/// Qualitative category for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// At least 80% correct.
    Excellent,
    /// At least 50% and below 80%.
    Nice,
    /// Below 50%.
    KeepPracticing,
}

impl ScoreBand {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Nice => "nice",
            ScoreBand::KeepPracticing => "keep practicing",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final tally for a finished quiz.
///
/// Band thresholds compare exact fractions, so `4 / 5` is `Excellent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    correct: u32,
    total: u32,
}

impl QuizScore {
    /// `correct` is capped at `total`.
    #[must_use]
    pub fn new(correct: u32, total: u32) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Fraction of correct answers; `0.0` for an empty quiz.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total)
    }

    /// Rounded percentage in `0..=100`.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // Round half up on integers.
        (self.correct * 200 + self.total) / (self.total * 2)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        let correct = u64::from(self.correct);
        let total = u64::from(self.total);
        if total > 0 && correct * 5 >= total * 4 {
            ScoreBand::Excellent
        } else if total > 0 && correct * 2 >= total {
            ScoreBand::Nice
        } else {
            ScoreBand::KeepPracticing
        }
    }
}
