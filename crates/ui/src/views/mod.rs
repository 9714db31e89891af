mod joke;
mod quiz;
mod result;
mod settings;
mod shell;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use joke::JokeBox;
pub use quiz::{LoadingPanel, QuestionPanel};
pub use result::{ResultPanel, ResultSummary};
pub use settings::SettingsPanel;
pub use shell::QuizShell;
pub use state::ViewError;
