mod quiz_vm;
mod result_vm;
mod settings_vm;
mod time_fmt;

pub use quiz_vm::{AnswerVm, QuestionCardVm, QuizOutcome, QuizVm, map_question_card};
pub use result_vm::{ResultVm, map_result};
pub use settings_vm::{CATEGORY_CHOICES, SettingsForm};
pub use time_fmt::format_elapsed;
