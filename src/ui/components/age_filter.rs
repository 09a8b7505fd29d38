use dioxus::prelude::*;

use crate::domain::{age_options, AgeFilter};
use crate::ui::theme;

#[component]
pub fn AgeFilterGroup(selected: AgeFilter, on_change: EventHandler<AgeFilter>) -> Element {
    rsx! {
        div {
            span { class: "label", "Age" }
            div { class: "age-group",
                for (option, active) in age_options(selected) {
                    button {
                        key: "{option.label()}",
                        class: theme::button(active),
                        onclick: move |_| on_change.call(option),
                        "{option.label()}"
                    }
                }
            }
        }
    }
}
