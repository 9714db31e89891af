use dioxus::prelude::*;
use quiz_core::model::ScoreBand;

use crate::vm::ResultVm;

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "result result--excellent",
        ScoreBand::Nice => "result result--nice",
        ScoreBand::KeepPracticing => "result result--practice",
    }
}

#[component]
pub fn ResultSummary(result: ResultVm) -> Element {
    rsx! {
        div { class: band_class(result.band),
            p { class: "score", "{result.score_label}" }
            p { class: "detail", "{result.detail}" }
            p { class: "muted", "{result.answered_label}" }
            p { class: "muted", "{result.elapsed_label}" }
        }
    }
}

#[component]
pub fn ResultPanel(
    result: ResultVm,
    on_restart: EventHandler<()>,
    on_settings: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "panel panel--result",
            h2 { "Your result" }
            ResultSummary { result }
            div { class: "actions",
                button { class: "btn btn-primary", onclick: move |_| on_restart.call(()), "Restart" }
                button { class: "btn", onclick: move |_| on_settings.call(()), "New quiz" }
            }
        }
    }
}
