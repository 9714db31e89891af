use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::num::NonZeroU32;

use quiz_core::model::{QuizItem, QuizScore};
use quiz_core::{Clock, Countdown, CountdownTick, TimerTicket};
use tracing::info;

use super::progress::QuizProgress;
use super::view::{ChosenAnswer, QuestionView, QuizResult};
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// No batch loaded.
    Empty,
    /// Showing the question at `index`.
    Active { index: usize },
    /// Terminal; the score is fixed.
    Finished,
}

/// Direction for `QuizSession::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

/// What `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (before the first question, already finished, or empty).
    Unchanged,
    /// Now showing `index`; the countdown restarted under `ticket`.
    Moved { index: usize, ticket: TimerTicket },
    /// Moved past the last question.
    Finished(QuizScore),
}

/// What a countdown tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a countdown that was already cancelled or restarted.
    Stale,
    /// Still counting down.
    Running { remaining: u32 },
    /// Time ran out; the session advanced as if Next was pressed.
    Expired(Transition),
}

impl TickOutcome {
    /// True while the ticket that produced this outcome should keep ticking.
    #[must_use]
    pub fn keeps_running(&self) -> bool {
        matches!(self, TickOutcome::Running { .. })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run of the quiz: a fixed batch, the user's choices and the per-question countdown.
///
/// All operations are total. Out-of-range navigation and selection are silent no-ops;
/// the only fallible call is `start`, which refuses an empty batch.
pub struct QuizSession {
    clock: Clock,
    items: Vec<QuizItem>,
    state: QuizState,
    chosen: BTreeMap<usize, usize>,
    locked: BTreeSet<usize>,
    countdown: Countdown,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    score: Option<QuizScore>,
}

impl QuizSession {
    #[must_use]
    pub fn new(seconds_per_question: NonZeroU32) -> Self {
        Self {
            clock: Clock::default(),
            items: Vec::new(),
            state: QuizState::Empty,
            chosen: BTreeMap::new(),
            locked: BTreeSet::new(),
            countdown: Countdown::new(seconds_per_question),
            started_at: None,
            finished_at: None,
            score: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Load a batch and show its first question.
    ///
    /// Any previous run is discarded, including its countdown.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBatch` if `items` is empty; the session is then `Empty`.
    pub fn start(&mut self, items: Vec<QuizItem>) -> Result<TimerTicket, QuizError> {
        self.reset();
        if items.is_empty() {
            return Err(QuizError::EmptyBatch);
        }
        info!(questions = items.len(), "quiz session started");
        self.items = items;
        self.state = QuizState::Active { index: 0 };
        self.started_at = Some(self.clock.now());
        Ok(self.countdown.restart())
    }

    /// Back to `Empty`, cancelling the countdown.
    pub fn reset(&mut self) {
        self.countdown.cancel();
        self.items.clear();
        self.chosen.clear();
        self.locked.clear();
        self.state = QuizState::Empty;
        self.started_at = None;
        self.finished_at = None;
        self.score = None;
    }

    /// Record `answer_index` for the current question without moving on.
    ///
    /// Returns `false` (and changes nothing) outside `Active`, for an index past the
    /// answer list, or when the question's countdown already expired.
    pub fn select_answer(&mut self, answer_index: usize) -> bool {
        let Some(index) = self.current_index() else {
            return false;
        };
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if answer_index >= item.answers().len() || self.locked.contains(&index) {
            return false;
        }
        self.chosen.insert(index, answer_index);
        true
    }

    pub fn advance(&mut self, step: Step) -> Transition {
        let QuizState::Active { index } = self.state else {
            return Transition::Unchanged;
        };
        match step {
            Step::Back => {
                let Some(next) = index.checked_sub(1) else {
                    return Transition::Unchanged;
                };
                self.move_to(next)
            }
            Step::Forward => {
                let next = index + 1;
                if next >= self.items.len() {
                    return Transition::Finished(self.finish());
                }
                self.move_to(next)
            }
        }
    }

    /// Deliver one elapsed second for the countdown identified by `ticket`.
    ///
    /// On expiry the current question is locked and the session advances forward.
    pub fn tick(&mut self, ticket: TimerTicket) -> TickOutcome {
        match self.countdown.tick(ticket) {
            CountdownTick::Stale => TickOutcome::Stale,
            CountdownTick::Running(remaining) => TickOutcome::Running { remaining },
            CountdownTick::Expired => {
                if let QuizState::Active { index } = self.state {
                    self.locked.insert(index);
                }
                TickOutcome::Expired(self.advance(Step::Forward))
            }
        }
    }

    /// End the quiz and return the score. Idempotent once finished.
    ///
    /// Unanswered questions count as incorrect. An `Empty` session finishes with `0 / 0`.
    pub fn finish(&mut self) -> QuizScore {
        if let Some(score) = self.score {
            return score;
        }
        self.countdown.cancel();

        let correct = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, item)| self.chosen.get(i).is_some_and(|c| item.is_correct(*c)))
            .count();
        let score = QuizScore::new(
            u32::try_from(correct).unwrap_or(u32::MAX),
            u32::try_from(self.items.len()).unwrap_or(u32::MAX),
        );

        self.state = QuizState::Finished;
        self.finished_at = Some(self.clock.now());
        self.score = Some(score);
        info!(
            correct = score.correct(),
            total = score.total(),
            band = %score.band(),
            "quiz session finished"
        );
        score
    }

    fn move_to(&mut self, index: usize) -> Transition {
        self.state = QuizState::Active { index };
        let ticket = self.countdown.restart();
        Transition::Moved { index, ticket }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Active { index } => Some(index),
            QuizState::Empty | QuizState::Finished => None,
        }
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.current_index().and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn chosen_answer(&self, index: usize) -> Option<usize> {
        self.chosen.get(&index).copied()
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.contains(&index)
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> NonZeroU32 {
        self.countdown.per_question()
    }

    /// Ticket of the running countdown, if a question is active.
    #[must_use]
    pub fn timer_ticket(&self) -> Option<TimerTicket> {
        self.countdown.ticket()
    }

    #[must_use]
    pub fn score(&self) -> Option<QuizScore> {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.items.len(),
            answered: self.chosen.len(),
            position: self.current_index(),
            is_finished: self.is_finished(),
        }
    }

    /// Presenter-facing snapshot of the current question.
    #[must_use]
    pub fn view(&self) -> Option<QuestionView> {
        let index = self.current_index()?;
        let item = self.items.get(index)?;
        let total = self.items.len();
        let chosen = self.chosen_answer(index).map(|answer| ChosenAnswer {
            index: answer,
            is_correct: item.is_correct(answer),
        });

        Some(QuestionView {
            index,
            total,
            category: item.category().to_string(),
            difficulty: item.difficulty(),
            question: item.question().to_string(),
            answers: item.answers().to_vec(),
            chosen,
            locked: self.is_locked(index),
            seconds_remaining: self.time_remaining(),
            can_go_back: index > 0,
            is_last: index + 1 == total,
        })
    }

    /// Final result once finished.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        let score = self.score?;
        let elapsed = match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        };
        Some(QuizResult { score, elapsed })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("items_len", &self.items.len())
            .field("state", &self.state)
            .field("chosen", &self.chosen)
            .field("locked", &self.locked)
            .field("remaining", &self.countdown.remaining())
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
