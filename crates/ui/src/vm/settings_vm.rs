use quiz_core::model::{DEFAULT_AMOUNT, OptionsError, QuizOptions};

/// Provider categories offered in the settings form, as `(id, label)`.
pub const CATEGORY_CHOICES: &[(&str, &str)] = &[
    ("9", "General Knowledge"),
    ("10", "Entertainment: Books"),
    ("11", "Entertainment: Film"),
    ("12", "Entertainment: Music"),
    ("14", "Entertainment: Television"),
    ("15", "Entertainment: Video Games"),
    ("17", "Science & Nature"),
    ("18", "Science: Computers"),
    ("19", "Science: Mathematics"),
    ("21", "Sports"),
    ("22", "Geography"),
    ("23", "History"),
    ("27", "Animals"),
];

/// Raw settings-form values, exactly as typed or selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub amount: String,
    pub category: String,
    pub difficulty: String,
    pub question_type: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT.to_string(),
            category: String::new(),
            difficulty: String::new(),
            question_type: String::new(),
        }
    }
}

impl SettingsForm {
    /// The one-click sample preset, as the form would show it.
    #[must_use]
    pub fn sample() -> Self {
        let options = QuizOptions::sample();
        Self {
            amount: options.amount().to_string(),
            category: options
                .category()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            difficulty: options
                .difficulty()
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            question_type: options
                .question_type()
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns `OptionsError` when a select carries an unknown value.
    pub fn to_options(&self) -> Result<QuizOptions, OptionsError> {
        QuizOptions::from_form(
            &self.amount,
            &self.category,
            &self.difficulty,
            &self.question_type,
        )
    }
}
