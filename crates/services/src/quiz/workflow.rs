use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use quiz_core::Clock;
use quiz_core::model::QuizOptions;
use tracing::{debug, warn};

use super::service::QuizSession;
use crate::config::ProviderConfig;
use crate::error::QuizError;
use crate::joke_source::{JokeApiSource, JokeSource, JokeText, fetch_joke_or_fallback};
use crate::trivia_source::{OpenTdbSource, QuestionSource};

/// Identifies one in-flight question load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoadTicket(u64);

/// Orchestrates loading a batch and starting a session from it.
///
/// Each load is tagged with a generation. Starting another load or calling
/// `cancel_pending` bumps the generation, and a response that arrives for an
/// older generation is dropped with `QuizError::Superseded`.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionSource>,
    jokes: Arc<dyn JokeSource>,
    seconds_per_question: NonZeroU32,
    generation: Arc<AtomicU64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        questions: Arc<dyn QuestionSource>,
        jokes: Arc<dyn JokeSource>,
        seconds_per_question: NonZeroU32,
    ) -> Self {
        Self {
            clock,
            questions,
            jokes,
            seconds_per_question,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wire the HTTP providers described by `config`.
    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            Clock::default(),
            Arc::new(OpenTdbSource::new(config.trivia_url.clone())),
            Arc::new(JokeApiSource::new(config.joke_url.clone())),
            config.seconds_per_question,
        )
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> NonZeroU32 {
        self.seconds_per_question
    }

    /// A fresh `Empty` session with this service's clock and pacing.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(self.seconds_per_question).with_clock(self.clock)
    }

    /// Invalidate every load that is still in flight.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Fetch a batch for `options` and start a session on it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Superseded` if another load started (or the load was
    /// cancelled) while this one was in flight, `QuizError::Source` for provider
    /// failures, and `QuizError::EmptyBatch` when the provider returned nothing.
    pub async fn start_quiz(&self, options: &QuizOptions) -> Result<QuizSession, QuizError> {
        let ticket = self.begin_load();
        debug!(amount = options.amount(), "loading quiz batch");

        let fetched = self.questions.fetch(options).await;
        if !self.is_current(ticket) {
            debug!("discarding superseded quiz batch");
            return Err(QuizError::Superseded);
        }

        let items = fetched.inspect_err(|err| warn!(error = %err, "quiz batch failed to load"))?;
        let mut session = self.new_session();
        session.start(items)?;
        Ok(session)
    }

    /// Best-effort joke; never fails.
    pub async fn fetch_joke(&self) -> JokeText {
        fetch_joke_or_fallback(self.jokes.as_ref()).await
    }
}
