use dioxus::prelude::*;
use services::Step;

use crate::views::JokeBox;
use crate::vm::QuestionCardVm;

/// Element id of the question panel; focused whenever a new question shows.
pub const QUIZ_PANEL_ID: &str = "quiz-panel";

/// Arrow keys that move between questions.
pub(crate) fn key_step(key: &Key) -> Option<Step> {
    match key {
        Key::ArrowRight => Some(Step::Forward),
        Key::ArrowLeft => Some(Step::Back),
        _ => None,
    }
}

#[component]
pub fn LoadingPanel(on_settings: EventHandler<()>) -> Element {
    rsx! {
        section { class: "panel panel--quiz",
            div { class: "progress", div { class: "progress-bar", style: "width: 0%" } }
            p { class: "loading", "Loading questions..." }
            div { class: "actions",
                button { class: "btn btn-ghost", onclick: move |_| on_settings.call(()), "Back to settings" }
            }
        }
    }
}

/// One question with its answers, timer and navigation.
///
/// ArrowLeft and ArrowRight map to Prev and Next while the panel has focus.
#[component]
pub fn QuestionPanel(
    card: QuestionCardVm,
    on_choose: EventHandler<usize>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_settings: EventHandler<()>,
) -> Element {
    let prev_disabled = card.prev_disabled;
    let on_key = move |evt: KeyboardEvent| {
        let Some(step) = key_step(&evt.data.key()) else {
            return;
        };
        // Radio inputs would otherwise move the selection too.
        evt.prevent_default();
        match step {
            Step::Forward => on_next.call(()),
            Step::Back if !prev_disabled => on_prev.call(()),
            Step::Back => {}
        }
    };

    rsx! {
        section {
            id: QUIZ_PANEL_ID,
            class: "panel panel--quiz",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_key,

            div { class: "progress",
                div { class: "progress-bar", style: "width: {card.progress_percent}%" }
            }
            div { class: "quiz-header",
                span { class: "meta", "{card.meta_label}" }
                span { class: "timer", "{card.timer_label}" }
            }
            h2 { class: "question", "{card.question}" }

            div { class: "answers", role: "radiogroup",
                {card.answers.iter().map(|answer| {
                    let index = answer.index;
                    let disabled = answer.disabled;
                    rsx! {
                        label {
                            key: "{index}",
                            class: answer.class,
                            onclick: move |_| {
                                if !disabled {
                                    on_choose.call(index);
                                }
                            },
                            input {
                                r#type: "radio",
                                name: "answer",
                                value: "{index}",
                                checked: answer.checked,
                                disabled: answer.disabled,
                            }
                            span { "{answer.text}" }
                        }
                    }
                })}
            }

            div { class: "actions",
                button {
                    class: "btn",
                    disabled: card.prev_disabled,
                    onclick: move |_| on_prev.call(()),
                    "Prev"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_next.call(()),
                    "{card.next_label}"
                }
                button { class: "btn btn-ghost", onclick: move |_| on_settings.call(()), "Back to settings" }
            }

            JokeBox { key: "{card.number}" }
        }
    }
}
