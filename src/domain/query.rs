//! Query-string encoding of [`CatalogView`].
//!
//! Decoding never fails: every malformed parameter falls back to its default,
//! so any link, however mangled, still opens the units page.

use std::fmt;

use serde_json::Value;
use url::form_urlencoded;

use super::catalog::CatalogView;
use super::entities::ResourceKind;
use super::filters::{AgeFilter, CostRange};
use super::table::{Pagination, SortKey, DEFAULT_PAGE_SIZE};

pub const AGE_PARAM: &str = "age";
pub const SEARCH_PARAM: &str = "search";
pub const SORT_PARAM: &str = "sort";
pub const PAGE_PARAM: &str = "page";
pub const SIZE_PARAM: &str = "size";

impl CatalogView {
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut view = CatalogView::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                AGE_PARAM => view.filters.age = AgeFilter::parse(&value),
                SEARCH_PARAM => view.search = value.into_owned(),
                SORT_PARAM => view.sort = parse_sort(&value),
                PAGE_PARAM => {
                    view.pagination.page_index = value.trim().parse().unwrap_or(0);
                }
                SIZE_PARAM => {
                    view.pagination.page_size = value
                        .trim()
                        .parse()
                        .ok()
                        .filter(|size| Pagination::is_allowed_size(*size))
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                other => {
                    if let Some(kind) = ResourceKind::ALL.into_iter().find(|k| k.param() == other) {
                        view.filters.costs.set(kind, CostRange::parse(&value));
                    }
                }
            }
        }

        view
    }

    /// Canonical query string; default-valued parameters are left out.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let AgeFilter::Only(age) = self.filters.age {
            out.append_pair(AGE_PARAM, age.label());
        }
        for (kind, range) in self.filters.costs.active() {
            out.append_pair(kind.param(), &range.to_string());
        }
        if !self.search.is_empty() {
            out.append_pair(SEARCH_PARAM, &self.search);
        }
        if !self.sort.is_empty() {
            match serde_json::to_string(&self.sort) {
                Ok(sort) => {
                    out.append_pair(SORT_PARAM, &sort);
                }
                Err(err) => tracing::warn!("failed to encode sort state: {err}"),
            }
        }
        if self.pagination.page_index != 0 {
            out.append_pair(PAGE_PARAM, &self.pagination.page_index.to_string());
        }
        if self.pagination.page_size != DEFAULT_PAGE_SIZE {
            out.append_pair(SIZE_PARAM, &self.pagination.page_size.to_string());
        }

        out.finish()
    }
}

/// Parses the JSON sort list, skipping unknown or repeated columns.
fn parse_sort(raw: &str) -> Vec<SortKey> {
    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(raw, "ignoring malformed sort parameter: {err}");
            return Vec::new();
        }
    };

    let mut keys: Vec<SortKey> = Vec::with_capacity(entries.len());
    for entry in entries {
        let Ok(key) = serde_json::from_value::<SortKey>(entry) else {
            continue;
        };
        if keys.iter().all(|existing| existing.column != key.column) {
            keys.push(key);
        }
    }
    keys
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}
