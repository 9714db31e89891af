use quiz_core::TimerTicket;
use services::{QuestionView, QuizSession, Step, TickOutcome, Transition};

use crate::vm::result_vm::{ResultVm, map_result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerVm {
    pub index: usize,
    pub text: String,
    pub class: &'static str,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub number: usize,
    pub meta_label: String,
    pub progress_percent: u32,
    pub question: String,
    pub answers: Vec<AnswerVm>,
    pub timer_label: String,
    pub prev_disabled: bool,
    pub next_label: &'static str,
}

/// What the screen should do after a quiz event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Nothing to reschedule.
    Unchanged,
    /// A new question is on screen; its countdown runs under this ticket.
    Question(TimerTicket),
    /// Show the result screen.
    Finished,
}

impl From<Transition> for QuizOutcome {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Unchanged => QuizOutcome::Unchanged,
            Transition::Moved { ticket, .. } => QuizOutcome::Question(ticket),
            Transition::Finished(_) => QuizOutcome::Finished,
        }
    }
}

/// UI wrapper around a running `QuizSession`.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn card(&self) -> Option<QuestionCardVm> {
        self.session.view().map(|view| map_question_card(&view))
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.session.current_index()
    }

    #[must_use]
    pub fn timer_ticket(&self) -> Option<TimerTicket> {
        self.session.timer_ticket()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultVm> {
        let result = self.session.result()?;
        Some(map_result(&result, &self.session.progress()))
    }

    pub fn choose(&mut self, answer_index: usize) -> bool {
        self.session.select_answer(answer_index)
    }

    pub fn next(&mut self) -> QuizOutcome {
        self.session.advance(Step::Forward).into()
    }

    pub fn prev(&mut self) -> QuizOutcome {
        self.session.advance(Step::Back).into()
    }

    pub fn tick(&mut self, ticket: TimerTicket) -> TickOutcome {
        self.session.tick(ticket)
    }

    /// Drop the run and its countdown.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}

#[must_use]
pub fn map_question_card(view: &QuestionView) -> QuestionCardVm {
    let answers = view
        .answers
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let chosen = view.chosen.filter(|c| c.index == index);
            let class = match chosen {
                Some(c) if c.is_correct => "answer correct",
                Some(_) => "answer wrong",
                None => "answer",
            };
            AnswerVm {
                index,
                text: text.clone(),
                class,
                checked: chosen.is_some(),
                disabled: view.locked,
            }
        })
        .collect();

    QuestionCardVm {
        number: view.number(),
        meta_label: format!(
            "Q{} / {} - {} . {}",
            view.number(),
            view.total,
            view.category,
            view.difficulty.as_str().to_uppercase()
        ),
        progress_percent: view.progress_percent(),
        question: view.question.clone(),
        answers,
        timer_label: format!("{}s", view.seconds_remaining),
        prev_disabled: !view.can_go_back,
        next_label: if view.is_last { "Finish" } else { "Next" },
    }
}
