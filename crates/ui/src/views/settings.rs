use dioxus::prelude::*;
use quiz_core::model::{Difficulty, MAX_AMOUNT, MIN_AMOUNT, QuestionType, QuizOptions};

use crate::views::{JokeBox, ViewError};
use crate::vm::{CATEGORY_CHOICES, SettingsForm};

#[component]
pub fn SettingsPanel(
    form: Signal<SettingsForm>,
    notice: Option<ViewError>,
    on_start: EventHandler<QuizOptions>,
) -> Element {
    let mut form = form;
    let mut invalid = use_signal(|| false);

    let on_submit = move |_| {
        let parsed = form.read().to_options();
        match parsed {
            Ok(options) => {
                invalid.set(false);
                on_start.call(options);
            }
            Err(_) => invalid.set(true),
        }
    };

    let on_sample = move |_| {
        invalid.set(false);
        form.set(SettingsForm::sample());
        on_start.call(QuizOptions::sample());
    };

    let notice = if invalid() {
        Some(ViewError::InvalidOptions)
    } else {
        notice
    };
    let notice_text = notice.map(ViewError::message);
    let values = form.read().clone();

    rsx! {
        section { class: "panel panel--settings",
            h2 { "Quiz settings" }

            if let Some(text) = notice_text {
                p { class: "notice", role: "alert", "{text}" }
            }

            label { class: "field",
                span { "Questions" }
                input {
                    r#type: "number",
                    min: "{MIN_AMOUNT}",
                    max: "{MAX_AMOUNT}",
                    value: "{values.amount}",
                    oninput: move |evt| form.write().amount = evt.value(),
                }
            }

            label { class: "field",
                span { "Category" }
                select {
                    value: "{values.category}",
                    onchange: move |evt| form.write().category = evt.value(),
                    option { value: "", "Any category" }
                    for (id, label) in CATEGORY_CHOICES.iter() {
                        option { key: "{id}", value: *id, "{label}" }
                    }
                }
            }

            label { class: "field",
                span { "Difficulty" }
                select {
                    value: "{values.difficulty}",
                    onchange: move |evt| form.write().difficulty = evt.value(),
                    option { value: "", "Any difficulty" }
                    for difficulty in Difficulty::ALL {
                        option { key: "{difficulty}", value: difficulty.as_str(), {difficulty_label(difficulty)} }
                    }
                }
            }

            label { class: "field",
                span { "Type" }
                select {
                    value: "{values.question_type}",
                    onchange: move |evt| form.write().question_type = evt.value(),
                    option { value: "", "Any type" }
                    for question_type in QuestionType::ALL {
                        option { key: "{question_type}", value: question_type.as_str(), {question_type_label(question_type)} }
                    }
                }
            }

            div { class: "actions",
                button { class: "btn btn-primary", onclick: on_submit, "Start quiz" }
                button { class: "btn", onclick: on_sample, "Sample quiz" }
            }

            JokeBox {}
        }
    }
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

fn question_type_label(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::Multiple => "Multiple choice",
        QuestionType::Boolean => "True / False",
    }
}
