use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{Age, AgeFilter, AppState, CatalogView};
use crate::util::version::APP_NAME;

/// Canned units-page links, one per age.
fn age_shortcuts() -> Vec<(Age, String)> {
    Age::ALL
        .into_iter()
        .map(|age| {
            let mut view = CatalogView::default();
            view.set_age(AgeFilter::Only(age));
            (age, view.to_query())
        })
        .collect()
}

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let total = state.with(|app| app.total_units());

    rsx! {
        div { class: "hero",
            h2 { "Welcome to the {APP_NAME}" }
            p { class: "muted", "Explore units, stats, and details for Age of Empires II." }
            if total > 0 {
                p { class: "muted", "{total} units in the catalog." }
            }
            div { class: "age-group",
                Link { class: "btn btn-active", to: Route::Units { query: String::new() }, "Browse all units" }
                for (age, query) in age_shortcuts() {
                    Link { key: "{age}", class: "btn", to: Route::Units { query }, "{age} Age" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_link_to_single_age_views() {
        let shortcuts = age_shortcuts();
        assert_eq!(shortcuts.len(), 4);
        assert_eq!(shortcuts[1], (Age::Feudal, "age=Feudal".to_string()));
        for (age, query) in shortcuts {
            assert_eq!(CatalogView::from_query(&query).filters.age, AgeFilter::Only(age));
        }
    }
}
