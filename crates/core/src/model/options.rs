use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest batch the provider is asked for.
pub const MIN_AMOUNT: u8 = 3;
/// Largest batch the provider is asked for.
pub const MAX_AMOUNT: u8 = 20;
/// Amount used when the form value is missing or not a number.
pub const DEFAULT_AMOUNT: u8 = 8;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("category identifier cannot be empty")]
    EmptyCategory,
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire representation used by the trivia provider.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(OptionsError::UnknownDifficulty(s.to_string())),
        }
    }
}

//
// ─── QUESTION TYPE ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Four answers, shuffled per item.
    Multiple,
    /// True/False, never shuffled.
    Boolean,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::Multiple, QuestionType::Boolean];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Multiple => "multiple",
            QuestionType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multiple" => Ok(Self::Multiple),
            "boolean" => Ok(Self::Boolean),
            _ => Err(OptionsError::UnknownQuestionType(s.to_string())),
        }
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Opaque provider category identifier (e.g. `"18"` for Science: Computers).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(String);

impl CategoryId {
    /// # Errors
    ///
    /// Returns `OptionsError::EmptyCategory` when the identifier is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, OptionsError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OptionsError::EmptyCategory);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// User-chosen parameters for one quiz batch.
///
/// `amount` is always within `[MIN_AMOUNT, MAX_AMOUNT]`. A `None` filter means "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptions {
    amount: u8,
    category: Option<CategoryId>,
    difficulty: Option<Difficulty>,
    question_type: Option<QuestionType>,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self::new(u32::from(DEFAULT_AMOUNT))
    }
}

impl QuizOptions {
    /// Options for `amount` questions of any category, difficulty and type.
    #[must_use]
    pub fn new(amount: u32) -> Self {
        Self {
            amount: clamp_amount(i64::from(amount)),
            category: None,
            difficulty: None,
            question_type: None,
        }
    }

    /// One-click preset: five easy multiple-choice computer science questions.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            amount: 5,
            category: Some(CategoryId("18".to_string())),
            difficulty: Some(Difficulty::Easy),
            question_type: Some(QuestionType::Multiple),
        }
    }

    /// Build options from raw settings-form values.
    ///
    /// Any numeric text counts, fractions are truncated. A non-numeric or zero
    /// amount falls back to `DEFAULT_AMOUNT` before clamping.
    /// Blank category, difficulty or type means "any".
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` when difficulty or type text is not recognised.
    pub fn from_form(
        amount: &str,
        category: &str,
        difficulty: &str,
        question_type: &str,
    ) -> Result<Self, OptionsError> {
        let amount = match amount.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() && value != 0.0 => value,
            _ => f64::from(DEFAULT_AMOUNT),
        };
        let category = non_blank(category).map(CategoryId::new).transpose()?;
        let difficulty: Option<Difficulty> = non_blank(difficulty).map(str::parse).transpose()?;
        let question_type: Option<QuestionType> =
            non_blank(question_type).map(str::parse).transpose()?;

        Ok(Self {
            amount: clamp_form_amount(amount),
            category,
            difficulty,
            question_type,
        })
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn with_question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    #[must_use]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[must_use]
    pub fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn question_type(&self) -> Option<QuestionType> {
        self.question_type
    }
}

fn clamp_amount(raw: i64) -> u8 {
    let clamped = raw.clamp(i64::from(MIN_AMOUNT), i64::from(MAX_AMOUNT));
    u8::try_from(clamped).unwrap_or(MAX_AMOUNT)
}

fn clamp_form_amount(raw: f64) -> u8 {
    // Clamped into [MIN_AMOUNT, MAX_AMOUNT] first, so the cast is exact.
    raw.trunc()
        .clamp(f64::from(MIN_AMOUNT), f64::from(MAX_AMOUNT)) as u8
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
