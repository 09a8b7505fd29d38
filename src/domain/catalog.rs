//! View state of the units page and its synchronisation with the address bar.
//!
//! Every intent that changes which units are visible, or their order, moves
//! the table back to the first page. Page-size changes re-clamp instead so the
//! first visible row stays on screen.

use super::entities::{ResourceKind, Unit};
use super::filters::{filter_units, AgeFilter, CostRange, FilterState};
use super::table::{paginate, search_units, sort_units, toggle_sort, Pagination, SortColumn, SortKey};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub filters: FilterState,
    pub search: String,
    pub sort: Vec<SortKey>,
    pub pagination: Pagination,
}

impl CatalogView {
    pub fn set_age(&mut self, age: AgeFilter) {
        self.filters.age = age;
        self.first_page();
    }

    pub fn set_cost_filter(&mut self, kind: ResourceKind, range: Option<CostRange>) {
        self.filters.costs.set(kind, range);
        self.first_page();
    }

    /// Clears age and cost filters. Search and sort survive a reset.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.first_page();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search == self.search {
            return;
        }
        self.search = search;
        self.first_page();
    }

    pub fn set_sort(&mut self, sort: Vec<SortKey>) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.first_page();
    }

    pub fn toggle_sort(&mut self, column: SortColumn, multi: bool) {
        let next = toggle_sort(&self.sort, column, multi);
        self.set_sort(next);
    }

    /// Jumps to `page_index`, clamped against the current match count.
    pub fn go_to_page(&mut self, page_index: usize, total_items: usize) {
        self.pagination = Pagination {
            page_index,
            ..self.pagination
        }
        .clamped(total_items);
    }

    pub fn set_page_size(&mut self, page_size: usize, total_items: usize) {
        if !Pagination::is_allowed_size(page_size) {
            return;
        }
        self.pagination = self.pagination.with_page_size(page_size, total_items);
    }

    /// Pulls a stored page index that points past the end back onto the last page.
    /// Returns whether anything changed.
    pub fn clamp_page(&mut self, total_items: usize) -> bool {
        let clamped = self.pagination.clamped(total_items);
        if clamped == self.pagination {
            return false;
        }
        self.pagination = clamped;
        true
    }

    fn first_page(&mut self) {
        self.pagination.page_index = 0;
    }

    /// Filter, search, sort and slice `units` for display.
    pub fn render<'a>(&self, units: &'a [Unit]) -> TableView<'a> {
        let filtered = filter_units(units, &self.filters);
        let mut rows = search_units(filtered, &self.search);
        sort_units(&mut rows, &self.sort);

        let window = paginate(&rows, self.pagination);
        TableView {
            page_rows: window.items.to_vec(),
            pagination: window.pagination,
            total_items: window.total_items,
            page_count: window.page_count,
            start_item: window.start_item,
            end_item: window.end_item,
        }
    }
}

/// Everything the table and pagination controls display.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView<'a> {
    pub page_rows: Vec<&'a Unit>,
    /// Pagination actually shown, after clamping.
    pub pagination: Pagination,
    /// Units left after search; what the pager counts.
    pub total_items: usize,
    pub page_count: usize,
    pub start_item: usize,
    pub end_item: usize,
}

impl TableView<'_> {
    pub fn can_previous(&self) -> bool {
        self.pagination.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.pagination.page_index + 1 < self.page_count
    }

    pub fn last_page_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} units",
            self.start_item, self.end_item, self.total_items
        )
    }
}

/// Two-phase URL synchronisation.
///
/// The URL seeds the view exactly once through [`UrlSync::initialize`]; after
/// that only [`UrlSync::on_state_change`] runs, and it yields a query string
/// only when the encoded state differs from what was last written. A URL that
/// changes underneath a mounted page is reported through [`UrlSync::observe`],
/// which answers with the view's own query so the address bar is rewritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlSync {
    initialized: bool,
    last_written: String,
}

impl UrlSync {
    /// Decodes the mount-time query. Later calls keep the first result's guard
    /// and simply decode again without re-arming.
    pub fn initialize(&mut self, query: &str) -> CatalogView {
        let view = CatalogView::from_query(query);
        if !self.initialized {
            self.initialized = true;
            self.last_written = query.trim_start_matches('?').to_string();
            tracing::debug!(query, "seeded units view from url");
        }
        view
    }

    pub fn on_state_change(&mut self, view: &CatalogView) -> Option<String> {
        if !self.initialized {
            return None;
        }
        let encoded = view.to_query();
        if encoded == self.last_written {
            return None;
        }
        self.last_written = encoded.clone();
        Some(encoded)
    }

    /// Records a query seen in the address bar. Returns the view's query when
    /// the two disagree; the view is never re-seeded after initialization.
    pub fn observe(&mut self, query: &str, view: &CatalogView) -> Option<String> {
        if !self.initialized {
            return None;
        }
        let query = query.trim_start_matches('?');
        if query == self.last_written {
            return None;
        }
        tracing::debug!(query, "address bar diverged from units view");
        self.last_written = query.to_string();
        self.on_state_change(view)
    }
}

/// Age buttons shown above the table, paired with whether each is selected.
pub fn age_options(selected: AgeFilter) -> Vec<(AgeFilter, bool)> {
    AgeFilter::OPTIONS
        .into_iter()
        .map(|option| (option, option == selected))
        .collect()
}
