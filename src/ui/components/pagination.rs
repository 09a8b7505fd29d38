use dioxus::prelude::*;

use crate::domain::PAGE_SIZE_OPTIONS;

#[component]
pub fn Pager(
    summary: String,
    page_index: usize,
    page_count: usize,
    page_size: usize,
    can_previous: bool,
    can_next: bool,
    last_page: usize,
    on_page: EventHandler<usize>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let shown_count = page_count.max(1);
    let current = page_index + 1;

    rsx! {
        div { class: "pagination",
            span { class: "muted", "{summary}" }
            label { class: "page-size",
                span { class: "label", "Rows per page " }
                select {
                    value: "{page_size}",
                    onchange: move |evt| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            on_page_size.call(size);
                        }
                    },
                    for size in PAGE_SIZE_OPTIONS {
                        option { key: "{size}", value: "{size}", selected: size == page_size, "{size}" }
                    }
                }
            }
            div { class: "page-controls",
                button {
                    class: "btn",
                    disabled: !can_previous,
                    title: "First page",
                    onclick: move |_| on_page.call(0),
                    "«"
                }
                button {
                    class: "btn",
                    disabled: !can_previous,
                    title: "Previous page",
                    onclick: move |_| on_page.call(page_index.saturating_sub(1)),
                    "‹"
                }
                span { "Page {current} of {shown_count}" }
                button {
                    class: "btn",
                    disabled: !can_next,
                    title: "Next page",
                    onclick: move |_| on_page.call(page_index + 1),
                    "›"
                }
                button {
                    class: "btn",
                    disabled: !can_next,
                    title: "Last page",
                    onclick: move |_| on_page.call(last_page),
                    "»"
                }
            }
        }
    }
}
