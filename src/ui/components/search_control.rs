use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::Debouncer;

/// Search box that commits its text once typing pauses for `delay`.
#[component]
pub fn SearchControl(value: String, delay: Duration, on_commit: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| value.clone());
    let mut debouncer = use_signal(Debouncer::<String>::default);

    rsx! {
        div { class: "search",
            input {
                r#type: "search",
                placeholder: "Search units by name",
                value: "{draft}",
                oninput: move |evt| {
                    let text = evt.value();
                    draft.set(text.clone());
                    let ticket = debouncer.with_mut(|pending| pending.push(text));
                    spawn(async move {
                        tokio::time::sleep(delay).await;
                        if let Some(text) = debouncer.with_mut(|pending| pending.settle(ticket)) {
                            tracing::debug!(search = %text, "search committed");
                            on_commit.call(text);
                        }
                    });
                },
            }
            if debouncer.read().is_pending() {
                span { class: "muted", "Searching..." }
            }
            if !draft().is_empty() {
                button {
                    class: "btn",
                    onclick: move |_| {
                        debouncer.with_mut(|pending| pending.cancel());
                        draft.set(String::new());
                        on_commit.call(String::new());
                    },
                    "Clear"
                }
            }
        }
    }
}
