use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let on_units = matches!(current_route, Route::Units { .. } | Route::UnitDetail { .. });

    rsx! {
        div {
            header { class: "shell-header",
                h1 { class: "shell-title", "{APP_NAME}" }
                nav { class: "shell-nav",
                    NavButton {
                        active: matches!(current_route, Route::Home {}),
                        onclick: move |_| { nav.push(Route::Home {}); },
                        label: "Home",
                    }
                    NavButton {
                        active: on_units,
                        onclick: move |_| { nav.push(Route::Units { query: String::new() }); },
                        label: "Units",
                    }
                }
            }
            main { class: "shell-main",
                {children}
            }
            footer { class: "shell-footer", "{APP_NAME} {version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
