use quiz_core::model::ScoreBand;
use services::{QuizProgress, QuizResult};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score_label: String,
    pub detail: String,
    pub band: ScoreBand,
    pub answered_label: String,
    pub elapsed_label: String,
}

#[must_use]
pub fn map_result(result: &QuizResult, progress: &QuizProgress) -> ResultVm {
    let score = result.score;
    let pct = score.percent();
    let detail = match score.band() {
        ScoreBand::Excellent => format!("Excellent! You nailed {pct}%"),
        ScoreBand::Nice => format!("Nice! You scored {pct}%"),
        ScoreBand::KeepPracticing => format!("Keep practicing. Score: {pct}%"),
    };

    ResultVm {
        score_label: format!("{} / {}", score.correct(), score.total()),
        detail,
        band: score.band(),
        answered_label: format!("Answered {} of {}", progress.answered, progress.total),
        elapsed_label: format!("Time: {}", format_elapsed(result.elapsed)),
    }
}
