//! Catalog domain: units, filters, table transforms and URL state.

pub mod app_state;
pub mod catalog;
pub mod debounce;
pub mod entities;
pub mod filters;
pub mod query;
pub mod table;

#[cfg(test)]
pub mod fixtures;

pub use app_state::{AppState, LoadStatus};
pub use catalog::{age_options, CatalogView, UrlSync};
pub use debounce::Debouncer;
pub use entities::{Age, ResourceKind, Unit};
pub use filters::{AgeFilter, CostRange, MAX_COST, MIN_COST};
pub use table::{sort_direction, SortColumn, SortKey, PAGE_SIZE_OPTIONS};
