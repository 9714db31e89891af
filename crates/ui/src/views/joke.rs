use dioxus::prelude::*;
use services::JokeText;

use crate::context::AppContext;

/// "Tell me a joke" button plus the last joke fetched.
///
/// Keyed by the caller so that a new question starts with an empty box.
#[component]
pub fn JokeBox() -> Element {
    let ctx = use_context::<AppContext>();
    let mut joke = use_signal(|| None::<JokeText>);
    let mut loading = use_signal(|| false);

    let fetch = use_callback(move |()| {
        if loading() {
            return;
        }
        let quiz_loop = ctx.quiz_loop();
        loading.set(true);
        spawn(async move {
            let text = quiz_loop.fetch_joke().await;
            joke.set(Some(text));
            loading.set(false);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::shell::ShellTestHandles>() {
                handles.register_joke(fetch);
            }
        }
    }

    let current = joke.read().clone();

    rsx! {
        div { class: "joke-box",
            button { class: "btn btn-ghost", disabled: loading(), onclick: move |_| fetch.call(()), "Tell me a joke" }
            if loading() {
                p { class: "joke joke--loading", "Fetching a joke..." }
            } else if let Some(text) = current {
                p { class: "joke",
                    strong { "Joke: " }
                    "{text.headline}"
                }
                if let Some(punchline) = text.punchline {
                    p { class: "joke joke--punchline", em { "{punchline}" } }
                }
            }
        }
    }
}
