use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{
    AgeFilter, AppState, CatalogView, CostRange, LoadStatus, ResourceKind, SortColumn, Unit,
    UrlSync,
};
use crate::ui::components::{
    age_filter::AgeFilterGroup,
    cost_filter::CostFilterRow,
    pagination::Pager,
    search_control::SearchControl,
    units_table::UnitsTable,
};
use crate::ui::theme;

pub const NO_MATCHES: &str = "No units match the current filters.";

/// Units page. `query` seeds the view once; afterwards the view drives the URL,
/// and an address bar that drifts away from the view is rewritten.
#[component]
pub fn UnitsPage(query: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let mut sync = use_signal(UrlSync::default);
    let mut view = use_signal(|| sync.write().initialize(&query));

    use_effect(move || {
        let current = view.read().clone();
        if let Some(query) = sync.with_mut(|guard| guard.on_state_change(&current)) {
            tracing::debug!(%query, "writing units view to url");
            nav.replace(Route::Units { query });
        }
    });

    use_effect(use_reactive!(|query| {
        let current = view.peek().clone();
        if let Some(rewritten) = sync.with_mut(|guard| guard.observe(&query, &current)) {
            nav.replace(Route::Units { query: rewritten });
        }
    }));

    use_effect(move || {
        let app = state.read();
        if !app.status.is_ready() {
            return;
        }
        let mut clamped = view.read().clone();
        let total_items = clamped.render(app.units()).total_items;
        if clamped.clamp_page(total_items) {
            view.set(clamped);
        }
    });

    let app = state.read();
    match &app.status {
        LoadStatus::Pending => rsx! {
            div { class: theme::state_message(false), "Loading units..." }
        },
        LoadStatus::Failed(message) => rsx! {
            div { class: theme::state_message(true), "Error loading units: {message}" }
        },
        LoadStatus::Succeeded => {
            let current = view();
            let table = current.render(app.units());
            let total_items = table.total_items;
            let rows: Vec<Unit> = table.page_rows.iter().map(|unit| (*unit).clone()).collect();
            let delay = app.config.search_debounce();

            rsx! {
                FilterPanel {
                    view: current.clone(),
                    filtered: total_items,
                    total: app.total_units(),
                    on_age: move |age: AgeFilter| view.with_mut(|v| v.set_age(age)),
                    on_cost: move |(kind, range): (ResourceKind, Option<CostRange>)| {
                        view.with_mut(|v| v.set_cost_filter(kind, range))
                    },
                    on_reset: move |_| view.with_mut(|v| v.reset_filters()),
                }
                SearchControl {
                    value: current.search.clone(),
                    delay,
                    on_commit: move |text: String| view.with_mut(|v| v.set_search(text)),
                }
                if total_items == 0 {
                    div { class: theme::state_message(false),
                        p { "{NO_MATCHES}" }
                        button {
                            class: "btn",
                            onclick: move |_| view.with_mut(|v| v.reset_filters()),
                            "Reset Filters"
                        }
                    }
                } else {
                    UnitsTable {
                        rows,
                        sort: current.sort.clone(),
                        on_sort: move |(column, multi): (SortColumn, bool)| {
                            view.with_mut(|v| v.toggle_sort(column, multi))
                        },
                        on_open: move |id: u32| {
                            nav.push(Route::UnitDetail { id });
                        },
                    }
                    Pager {
                        summary: table.summary(),
                        page_index: table.pagination.page_index,
                        page_count: table.page_count,
                        page_size: table.pagination.page_size,
                        can_previous: table.can_previous(),
                        can_next: table.can_next(),
                        last_page: table.last_page_index(),
                        on_page: move |index: usize| view.with_mut(|v| v.go_to_page(index, total_items)),
                        on_page_size: move |size: usize| {
                            view.with_mut(|v| v.set_page_size(size, total_items))
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn FilterPanel(
    view: CatalogView,
    filtered: usize,
    total: usize,
    on_age: EventHandler<AgeFilter>,
    on_cost: EventHandler<(ResourceKind, Option<CostRange>)>,
    on_reset: EventHandler<()>,
) -> Element {
    let filters = view.filters;
    rsx! {
        section { class: "panel",
            div { class: "filter-header",
                h2 { "Filters" }
                span { class: "muted", "{filtered} of {total} units" }
                button {
                    class: "btn btn-danger",
                    disabled: filters.is_default(),
                    onclick: move |_| on_reset.call(()),
                    "Reset Filters"
                }
            }
            AgeFilterGroup { selected: filters.age, on_change: on_age }
            span { class: "label", "Costs" }
            if filters.costs.is_empty() {
                span { class: "muted", " (any)" }
            }
            for kind in ResourceKind::ALL {
                CostFilterRow {
                    key: "{kind.param()}",
                    kind,
                    range: filters.costs.get(kind),
                    on_change: on_cost,
                }
            }
        }
    }
}
