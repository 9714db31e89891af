use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use quiz_core::model::{BOOLEAN_ANSWERS, Difficulty, QuestionType, QuizItem, QuizOptions};

use crate::error::SourceError;
use crate::html::decode_entities;
use crate::shuffle::{AnswerShuffler, RandomShuffler};

/// Provider `response_code` meaning "success".
const CODE_SUCCESS: u8 = 0;
/// Provider `response_code` meaning "not enough questions for the query".
const CODE_NO_RESULTS: u8 = 1;

/// Contract for anything that can hand the quiz a batch of questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch and normalize one batch for `options`. Never retries.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Network`/`HttpStatus` when no usable response arrives,
    /// and `SourceError::Malformed` when the body does not have the expected shape.
    async fn fetch(&self, options: &QuizOptions) -> Result<Vec<QuizItem>, SourceError>;
}

/// Open Trivia Database client.
#[derive(Clone)]
pub struct OpenTdbSource {
    client: Client,
    base_url: String,
    shuffler: Arc<dyn AnswerShuffler>,
}

impl OpenTdbSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            shuffler: Arc::new(RandomShuffler),
        }
    }

    #[must_use]
    pub fn with_shuffler(mut self, shuffler: Arc<dyn AnswerShuffler>) -> Self {
        self.shuffler = shuffler;
        self
    }

    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` if the configured base URL does not parse.
    pub fn request_url(&self, options: &QuizOptions) -> Result<Url, SourceError> {
        Ok(build_request_url(&self.base_url, options)?)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    async fn fetch(&self, options: &QuizOptions) -> Result<Vec<QuizItem>, SourceError> {
        let url = self.request_url(options)?;
        debug!(%url, "fetching trivia batch");

        let response = self.client.get(url).send().await.inspect_err(|err| {
            warn!(error = %err, "trivia request failed");
        })?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "trivia provider returned an error status");
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let batch: RawBatch = serde_json::from_slice(&body)?;
        let items = normalize_batch(batch, self.shuffler.as_ref())?;
        debug!(count = items.len(), "trivia batch normalized");
        Ok(items)
    }
}

/// Build the provider GET URL. `amount` is already clamped by `QuizOptions`;
/// absent filters are omitted so the provider treats them as "any".
///
/// # Errors
///
/// Returns `url::ParseError` if `base_url` is not a valid URL.
pub fn build_request_url(base_url: &str, options: &QuizOptions) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("amount", &options.amount().to_string());
        if let Some(category) = options.category() {
            query.append_pair("category", category.as_str());
        }
        if let Some(difficulty) = options.difficulty() {
            query.append_pair("difficulty", difficulty.as_str());
        }
        if let Some(question_type) = options.question_type() {
            query.append_pair("type", question_type.as_str());
        }
    }
    Ok(url)
}

//
// ─── WIRE SHAPE ────────────────────────────────────────────────────────────────
//

/// Response body as sent by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBatch {
    #[serde(default)]
    pub response_code: Option<u8>,
    pub results: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

//
// ─── NORMALIZATION ─────────────────────────────────────────────────────────────
//

/// Turn a provider batch into display-ready items.
///
/// # Errors
///
/// Returns `SourceError::Provider` for error response codes and
/// `SourceError::Malformed` for items that cannot be normalized.
pub fn normalize_batch(
    batch: RawBatch,
    shuffler: &dyn AnswerShuffler,
) -> Result<Vec<QuizItem>, SourceError> {
    match batch.response_code {
        None | Some(CODE_SUCCESS | CODE_NO_RESULTS) => {}
        Some(code) => return Err(SourceError::Provider { code }),
    }

    batch
        .results
        .into_iter()
        .map(|raw| normalize_question(raw, shuffler))
        .collect()
}

/// Normalize one question.
///
/// Boolean items always get `["True", "False"]`. Multiple-choice answers are
/// shuffled with the correct answer tracked through the shuffle.
///
/// # Errors
///
/// Returns `SourceError::Malformed` if a boolean item's correct answer is
/// neither `True` nor `False`.
pub fn normalize_question(
    raw: RawQuestion,
    shuffler: &dyn AnswerShuffler,
) -> Result<QuizItem, SourceError> {
    let (answers, correct_index) = match raw.question_type {
        QuestionType::Boolean => {
            let correct_index = BOOLEAN_ANSWERS
                .iter()
                .position(|answer| *answer == raw.correct_answer.trim())
                .ok_or_else(|| {
                    SourceError::Malformed(format!(
                        "boolean correct answer {:?} is not True/False",
                        raw.correct_answer
                    ))
                })?;
            let answers = BOOLEAN_ANSWERS.iter().map(|a| (*a).to_string()).collect();
            (answers, correct_index)
        }
        QuestionType::Multiple => {
            let mut entries: Vec<(bool, String)> = raw
                .incorrect_answers
                .into_iter()
                .map(|answer| (false, answer))
                .collect();
            entries.push((true, raw.correct_answer));
            shuffler.shuffle(&mut entries);

            let correct_index = entries
                .iter()
                .position(|(is_correct, _)| *is_correct)
                .ok_or_else(|| SourceError::Malformed("correct answer lost".into()))?;
            let answers = entries
                .into_iter()
                .map(|(_, text)| decode_entities(&text))
                .collect();
            (answers, correct_index)
        }
    };

    Ok(QuizItem::new(
        decode_entities(&raw.category),
        raw.difficulty,
        decode_entities(&raw.question),
        answers,
        correct_index,
        raw.question_type,
    )?)
}
