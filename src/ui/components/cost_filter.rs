use dioxus::prelude::*;

use crate::domain::{CostRange, ResourceKind, MAX_COST, MIN_COST};

/// Toggle plus min/max sliders for one resource.
#[component]
pub fn CostFilterRow(
    kind: ResourceKind,
    range: Option<CostRange>,
    on_change: EventHandler<(ResourceKind, Option<CostRange>)>,
) -> Element {
    let enabled = range.is_some();
    let shown = range.unwrap_or_else(CostRange::full);
    let (min, max) = (shown.min(), shown.max());
    let range_class = if enabled { "cost-range" } else { "cost-range muted" };

    rsx! {
        div { class: "cost-row",
            label {
                input {
                    r#type: "checkbox",
                    checked: enabled,
                    onchange: move |_| {
                        let next = if enabled { None } else { Some(CostRange::full()) };
                        on_change.call((kind, next));
                    },
                }
                " {kind.label()}"
            }
            div { class: "cost-sliders",
                input {
                    r#type: "range",
                    min: "{MIN_COST}",
                    max: "{MAX_COST}",
                    value: "{min}",
                    disabled: !enabled,
                    "aria-label": "Minimum {kind.label()}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            on_change.call((kind, Some(shown.with_min(value))));
                        }
                    },
                }
                input {
                    r#type: "range",
                    min: "{MIN_COST}",
                    max: "{MAX_COST}",
                    value: "{max}",
                    disabled: !enabled,
                    "aria-label": "Maximum {kind.label()}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            on_change.call((kind, Some(shown.with_max(value))));
                        }
                    },
                }
            }
            span { class: range_class, "{shown}" }
        }
    }
}
