use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, LoadStatus},
    infra::dataset::load_units,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{HomePage, UnitDetailPage, UnitsPage},
        shell::Shell,
    },
    util::{assets, config::load_config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/units?:..query")]
    Units { query: String },
    #[route("/units/:id")]
    UnitDetail { id: u32 },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::new(load_config()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let _units = use_resource(move || async move { fetch_units(state, toasts).await });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn fetch_units(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) -> LoadStatus {
    let config = state.peek().config.clone();
    let custom_source = config.dataset_path.is_some();
    let result = load_units(&config).await;

    match &result {
        Ok(units) if units.is_empty() => {
            push_toast(toasts, ToastKind::Warning, "The unit dataset is empty.");
        }
        Ok(units) if custom_source => {
            push_toast(
                toasts,
                ToastKind::Info,
                format!("Loaded {} units from a custom dataset.", units.len()),
            );
        }
        Ok(_) => {}
        Err(err) => {
            push_toast(toasts, ToastKind::Error, format!("Failed to load units: {err}"));
        }
    }

    state.with_mut(|st| st.apply_load(result));
    state.peek().status.clone()
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Units(query: String) -> Element {
    rsx! { Shell { UnitsPage { query } } }
}

#[component]
pub fn UnitDetail(id: u32) -> Element {
    rsx! { Shell { UnitDetailPage { id } } }
}
