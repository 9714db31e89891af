use std::sync::Arc;

use dioxus::core::Task;
use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::TimerTicket;
use quiz_core::model::QuizOptions;
use services::{TickOutcome, Ticker, Transition, run_countdown};

use crate::context::AppContext;
use crate::views::quiz::QUIZ_PANEL_ID;
use crate::views::{LoadingPanel, QuestionPanel, ResultPanel, SettingsPanel, ViewError};
use crate::vm::{QuizOutcome, QuizVm, SettingsForm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Settings,
    Loading,
    Quiz,
    Result,
}

/// Follow one question's countdown, and the next question's after an expiry,
/// until the quiz finishes or the ticket goes stale.
async fn drive_countdown(
    ticker: Arc<dyn Ticker>,
    mut vm: Signal<Option<QuizVm>>,
    mut screen: Signal<Screen>,
    first: TimerTicket,
) {
    let mut ticket = first;
    loop {
        let outcome = run_countdown(ticker.as_ref(), || {
            vm.write()
                .as_mut()
                .map_or(TickOutcome::Stale, |quiz| quiz.tick(ticket))
        })
        .await;

        match outcome {
            TickOutcome::Expired(Transition::Moved { ticket: next, .. }) => ticket = next,
            TickOutcome::Expired(Transition::Finished(_)) => {
                screen.set(Screen::Result);
                return;
            }
            TickOutcome::Expired(Transition::Unchanged)
            | TickOutcome::Stale
            | TickOutcome::Running { .. } => return,
        }
    }
}

#[component]
pub fn QuizShell() -> Element {
    let ctx = use_context::<AppContext>();

    let mut screen = use_signal(|| Screen::Settings);
    let mut vm = use_signal(|| None::<QuizVm>);
    let mut notice = use_signal(|| None::<ViewError>);
    let form = use_signal(SettingsForm::default);
    let mut last_options = use_signal(|| None::<QuizOptions>);
    let mut timer = use_signal(|| None::<Task>);

    // At most one countdown task runs; every reschedule cancels the previous one.
    let schedule = {
        let ticker = ctx.ticker();
        use_callback(move |ticket: Option<TimerTicket>| {
            if let Some(task) = timer.write().take() {
                task.cancel();
            }
            if let Some(ticket) = ticket {
                let task = spawn(drive_countdown(Arc::clone(&ticker), vm, screen, ticket));
                timer.set(Some(task));
            }
        })
    };

    let apply = use_callback(move |outcome: QuizOutcome| match outcome {
        QuizOutcome::Unchanged => {}
        QuizOutcome::Question(ticket) => schedule.call(Some(ticket)),
        QuizOutcome::Finished => {
            schedule.call(None);
            screen.set(Screen::Result);
        }
    });

    let start = {
        let quiz_loop = ctx.quiz_loop();
        use_callback(move |options: QuizOptions| {
            schedule.call(None);
            notice.set(None);
            vm.set(None);
            last_options.set(Some(options.clone()));
            screen.set(Screen::Loading);

            let quiz_loop = Arc::clone(&quiz_loop);
            spawn(async move {
                match quiz_loop.start_quiz(&options).await {
                    Ok(session) => {
                        let ticket = session.timer_ticket();
                        vm.set(Some(QuizVm::new(session)));
                        screen.set(Screen::Quiz);
                        schedule.call(ticket);
                    }
                    Err(err) => {
                        if let Some(view_err) = ViewError::from_quiz_error(&err) {
                            notice.set(Some(view_err));
                            screen.set(Screen::Settings);
                        }
                    }
                }
            });
        })
    };

    let back_to_settings = {
        let quiz_loop = ctx.quiz_loop();
        use_callback(move |()| {
            quiz_loop.cancel_pending();
            schedule.call(None);
            if let Some(quiz) = vm.write().as_mut() {
                quiz.reset();
            }
            vm.set(None);
            screen.set(Screen::Settings);
        })
    };

    let restart = use_callback(move |()| {
        if let Some(options) = last_options() {
            start.call(options);
        }
    });

    let on_choose = use_callback(move |index: usize| {
        if let Some(quiz) = vm.write().as_mut() {
            quiz.choose(index);
        }
    });

    let on_next = use_callback(move |()| {
        let outcome = vm.write().as_mut().map_or(QuizOutcome::Unchanged, QuizVm::next);
        apply.call(outcome);
    });

    let on_prev = use_callback(move |()| {
        let outcome = vm.write().as_mut().map_or(QuizOutcome::Unchanged, QuizVm::prev);
        apply.call(outcome);
    });

    // Keep arrow keys working: focus the panel whenever another question shows.
    let mut focused_position = use_signal(|| None::<usize>);
    use_effect(move || {
        let position = if screen() == Screen::Quiz {
            vm.read().as_ref().and_then(QuizVm::position)
        } else {
            None
        };
        if *focused_position.peek() == position {
            return;
        }
        focused_position.set(position);
        if position.is_some() {
            let _ = eval(&format!(
                "document.getElementById({QUIZ_PANEL_ID:?})?.focus();"
            ));
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ShellTestHandles>() {
                handles.register(ShellCallbacks {
                    start,
                    back_to_settings,
                    restart,
                    choose: on_choose,
                    next: on_next,
                    prev: on_prev,
                });
            }
        }
    }

    use_effect(move || {
        if ctx.take_start_sample_on_launch() {
            start.call(QuizOptions::sample());
        }
    });

    match screen() {
        Screen::Settings => rsx! {
            SettingsPanel { form, notice: notice(), on_start: move |options| start.call(options) }
        },
        Screen::Loading => rsx! {
            LoadingPanel { on_settings: move |()| back_to_settings.call(()) }
        },
        Screen::Quiz => {
            let card = vm.read().as_ref().and_then(QuizVm::card);
            match card {
                Some(card) => rsx! {
                    QuestionPanel {
                        card,
                        on_choose: move |index| on_choose.call(index),
                        on_prev: move |()| on_prev.call(()),
                        on_next: move |()| on_next.call(()),
                        on_settings: move |()| back_to_settings.call(()),
                    }
                },
                None => rsx! {
                    LoadingPanel { on_settings: move |()| back_to_settings.call(()) }
                },
            }
        }
        Screen::Result => {
            let result = vm.read().as_ref().and_then(QuizVm::result);
            match result {
                Some(result) => rsx! {
                    ResultPanel {
                        result,
                        on_restart: move |()| restart.call(()),
                        on_settings: move |()| back_to_settings.call(()),
                    }
                },
                None => rsx! {
                    SettingsPanel { form, notice: notice(), on_start: move |options| start.call(options) }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct ShellCallbacks {
    pub start: Callback<QuizOptions>,
    pub back_to_settings: Callback<()>,
    pub restart: Callback<()>,
    pub choose: Callback<usize>,
    pub next: Callback<()>,
    pub prev: Callback<()>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    shell: Rc<RefCell<Option<ShellCallbacks>>>,
    joke: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    pub(crate) fn register(&self, callbacks: ShellCallbacks) {
        *self.shell.borrow_mut() = Some(callbacks);
    }

    /// The most recently mounted joke box wins.
    pub(crate) fn register_joke(&self, fetch: Callback<()>) {
        *self.joke.borrow_mut() = Some(fetch);
    }

    pub(crate) fn shell(&self) -> ShellCallbacks {
        (*self.shell.borrow()).expect("shell callbacks registered")
    }

    pub(crate) fn joke(&self) -> Callback<()> {
        (*self.joke.borrow()).expect("joke box registered")
    }
}
