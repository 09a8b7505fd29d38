//! Search, sort and pagination over the filtered unit list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::entities::Unit;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Keeps units whose name contains `query`, ignoring case. An empty query keeps all.
pub fn search_units<'a>(units: Vec<&'a Unit>, query: &str) -> Vec<&'a Unit> {
    if query.is_empty() {
        return units;
    }
    let needle = query.to_lowercase();
    units
        .into_iter()
        .filter(|unit| unit.name.to_lowercase().contains(&needle))
        .collect()
}

/// Sortable table columns. `Cost` sorts by the summed cost record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Name,
    Description,
    Age,
    Cost,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Description,
        SortColumn::Age,
        SortColumn::Cost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Age => "Age",
            Self::Cost => "Costs",
        }
    }
}

/// One entry of the sort list; serialises as `{"id":"cost","desc":true}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    #[serde(rename = "id")]
    pub column: SortColumn,
    #[serde(default)]
    pub desc: bool,
}

impl SortKey {
    pub fn asc(column: SortColumn) -> Self {
        Self { column, desc: false }
    }

    pub fn desc(column: SortColumn) -> Self {
        Self { column, desc: true }
    }
}

/// Direction currently applied to `column`, if it is part of the sort.
pub fn sort_direction(sort: &[SortKey], column: SortColumn) -> Option<bool> {
    sort.iter().find(|key| key.column == column).map(|key| key.desc)
}

/// Header-click cycle: unsorted -> ascending -> descending -> unsorted.
///
/// Without `multi` the clicked column replaces the whole sort list; with it the
/// column is cycled in place, or appended as the lowest-priority key.
pub fn toggle_sort(sort: &[SortKey], column: SortColumn, multi: bool) -> Vec<SortKey> {
    let next = match sort_direction(sort, column) {
        None => Some(SortKey::asc(column)),
        Some(false) => Some(SortKey::desc(column)),
        Some(true) => None,
    };

    if !multi {
        return next.into_iter().collect();
    }

    let mut updated: Vec<SortKey> = Vec::with_capacity(sort.len() + 1);
    let mut placed = false;
    for key in sort {
        if key.column == column {
            placed = true;
            updated.extend(next);
        } else {
            updated.push(*key);
        }
    }
    if !placed {
        updated.extend(next);
    }
    updated
}

/// Stable multi-key sort; the first key is the primary one.
pub fn sort_units(units: &mut [&Unit], sort: &[SortKey]) {
    if sort.is_empty() {
        return;
    }
    units.sort_by(|a, b| {
        sort.iter()
            .map(|key| compare_by(a, b, *key))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

fn compare_by(a: &Unit, b: &Unit, key: SortKey) -> Ordering {
    let ord = match key.column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Description => a.description.cmp(&b.description),
        SortColumn::Age => a.age.cmp(&b.age),
        // Unknown costs stay in front in both directions.
        SortColumn::Cost => return compare_total_cost(a.total_cost(), b.total_cost(), key.desc),
    };
    if key.desc {
        ord.reverse()
    } else {
        ord
    }
}

fn compare_total_cost(a: Option<u32>, b: Option<u32>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(av), Some(bv)) => {
            let ord = av.cmp(&bv);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Requested page; the index may point past the end until clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn is_allowed_size(size: usize) -> bool {
        PAGE_SIZE_OPTIONS.contains(&size)
    }

    /// Number of pages for `total` items; zero when there is nothing to show.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    /// Pulls the index back onto the last available page.
    pub fn clamped(self, total: usize) -> Self {
        let last = self.page_count(total).saturating_sub(1);
        Self {
            page_index: self.page_index.min(last),
            ..self
        }
    }

    /// Switches page size, keeping the first visible item on screen.
    pub fn with_page_size(self, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let current = self.clamped(total);
        let first_item = current.page_index.saturating_mul(current.page_size.max(1));
        Self {
            page_index: first_item / page_size,
            page_size,
        }
        .clamped(total)
    }
}

/// One rendered page plus the numbers behind "Showing X to Y of Z".
#[derive(Clone, Debug, PartialEq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    pub pagination: Pagination,
    pub total_items: usize,
    pub page_count: usize,
    /// 1-based index of the first visible item, 0 when empty.
    pub start_item: usize,
    /// 1-based index of the last visible item, 0 when empty.
    pub end_item: usize,
}

impl<T> PageWindow<'_, T> {
    pub fn can_previous(&self) -> bool {
        self.pagination.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.pagination.page_index + 1 < self.page_count
    }
}

pub fn paginate<T>(items: &[T], pagination: Pagination) -> PageWindow<'_, T> {
    let total_items = items.len();
    let pagination = pagination.clamped(total_items);
    let page_count = pagination.page_count(total_items);
    let start = (pagination.page_index * pagination.page_size).min(total_items);
    let end = (start + pagination.page_size).min(total_items);
    let (start_item, end_item) = if start == end { (0, 0) } else { (start + 1, end) };

    PageWindow {
        items: &items[start..end],
        pagination,
        total_items,
        page_count,
        start_item,
        end_item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Age;
    use crate::domain::fixtures::{cost, ids, sample_units, unit};

    #[test]
    fn empty_search_is_identity() {
        let units = sample_units();
        let all: Vec<&Unit> = units.iter().collect();
        assert_eq!(search_units(all.clone(), ""), all);
    }

    #[test]
    fn search_matches_substring_ignoring_case() {
        let units = sample_units();
        let all: Vec<&Unit> = units.iter().collect();
        assert_eq!(ids(&search_units(all.clone(), "MAN")), vec![2, 3, 6, 7]);
        assert_eq!(ids(&search_units(all.clone(), "cav")), vec![12]);
        assert!(search_units(all, "trebuchet").is_empty());
    }

    #[test]
    fn sorts_by_name() {
        let units = sample_units();
        let mut rows: Vec<&Unit> = units.iter().take(4).collect();
        sort_units(&mut rows, &[SortKey::asc(SortColumn::Name)]);
        assert_eq!(ids(&rows), vec![4, 2, 1, 3]);
        sort_units(&mut rows, &[SortKey::desc(SortColumn::Name)]);
        assert_eq!(ids(&rows), vec![3, 1, 2, 4]);
    }

    #[test]
    fn sorts_ages_by_progression_not_alphabet() {
        let units = vec![
            unit(1, "A", Age::Imperial, None),
            unit(2, "B", Age::Dark, None),
            unit(3, "C", Age::Castle, None),
            unit(4, "D", Age::Feudal, None),
        ];
        let mut rows: Vec<&Unit> = units.iter().collect();
        sort_units(&mut rows, &[SortKey::asc(SortColumn::Age)]);
        assert_eq!(ids(&rows), vec![2, 4, 3, 1]);
    }

    #[test]
    fn cost_sort_uses_total_of_present_resources() {
        let units = vec![
            unit(1, "Knight", Age::Castle, cost(None, Some(60), Some(75))),
            unit(2, "Villager", Age::Dark, cost(None, Some(50), None)),
            unit(3, "Archer", Age::Feudal, cost(Some(25), None, Some(45))),
        ];
        let mut rows: Vec<&Unit> = units.iter().collect();
        sort_units(&mut rows, &[SortKey::asc(SortColumn::Cost)]);
        assert_eq!(ids(&rows), vec![2, 3, 1]);
        sort_units(&mut rows, &[SortKey::desc(SortColumn::Cost)]);
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn unknown_cost_sorts_first_in_both_directions() {
        let units = vec![
            unit(1, "Knight", Age::Castle, cost(None, Some(60), Some(75))),
            unit(2, "Missionary", Age::Castle, None),
            unit(3, "Villager", Age::Dark, cost(None, Some(50), None)),
        ];
        let mut rows: Vec<&Unit> = units.iter().collect();
        sort_units(&mut rows, &[SortKey::asc(SortColumn::Cost)]);
        assert_eq!(ids(&rows), vec![2, 3, 1]);
        sort_units(&mut rows, &[SortKey::desc(SortColumn::Cost)]);
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let units = sample_units();
        let mut rows: Vec<&Unit> = units.iter().collect();
        sort_units(
            &mut rows,
            &[SortKey::asc(SortColumn::Age), SortKey::desc(SortColumn::Id)],
        );
        assert_eq!(&ids(&rows)[..3], &[12, 10, 1]);
    }

    #[test]
    fn toggle_cycles_through_directions() {
        let once = toggle_sort(&[], SortColumn::Cost, false);
        assert_eq!(once, vec![SortKey::asc(SortColumn::Cost)]);
        let twice = toggle_sort(&once, SortColumn::Cost, false);
        assert_eq!(twice, vec![SortKey::desc(SortColumn::Cost)]);
        assert!(toggle_sort(&twice, SortColumn::Cost, false).is_empty());
    }

    #[test]
    fn toggle_without_multi_replaces_other_columns() {
        let sort = vec![SortKey::asc(SortColumn::Name)];
        assert_eq!(
            toggle_sort(&sort, SortColumn::Age, false),
            vec![SortKey::asc(SortColumn::Age)]
        );
    }

    #[test]
    fn toggle_with_multi_appends_and_keeps_position() {
        let sort = vec![SortKey::asc(SortColumn::Name)];
        let added = toggle_sort(&sort, SortColumn::Age, true);
        assert_eq!(
            added,
            vec![SortKey::asc(SortColumn::Name), SortKey::asc(SortColumn::Age)]
        );
        let flipped = toggle_sort(&added, SortColumn::Name, true);
        assert_eq!(
            flipped,
            vec![SortKey::desc(SortColumn::Name), SortKey::asc(SortColumn::Age)]
        );
    }

    #[test]
    fn paginates_and_reports_visible_bounds() {
        let items: Vec<u32> = (1..=45).collect();
        let window = paginate(&items, Pagination { page_index: 1, page_size: 20 });
        assert_eq!(window.items.first(), Some(&21));
        assert_eq!(window.items.len(), 20);
        assert_eq!((window.start_item, window.end_item, window.total_items), (21, 40, 45));
        assert_eq!(window.page_count, 3);
        assert!(window.can_previous());
        assert!(window.can_next());
    }

    #[test]
    fn page_past_the_end_clamps_to_last_page() {
        let items: Vec<u32> = (1..=45).collect();
        let window = paginate(&items, Pagination { page_index: 9, page_size: 20 });
        assert_eq!(window.pagination.page_index, 2);
        assert_eq!(window.items, &[41, 42, 43, 44, 45]);
        assert_eq!((window.start_item, window.end_item), (41, 45));
        assert!(!window.can_next());
    }

    #[test]
    fn empty_input_yields_empty_page_zero() {
        let items: Vec<u32> = Vec::new();
        let window = paginate(&items, Pagination { page_index: 3, page_size: 10 });
        assert!(window.items.is_empty());
        assert_eq!(window.pagination.page_index, 0);
        assert_eq!((window.start_item, window.end_item, window.page_count), (0, 0, 0));
        assert!(!window.can_previous());
        assert!(!window.can_next());
    }

    #[test]
    fn changing_page_size_never_points_past_last_page() {
        let current = Pagination { page_index: 4, page_size: 10 };
        let resized = current.with_page_size(100, 45);
        assert_eq!(resized, Pagination { page_index: 0, page_size: 100 });

        let resized = current.with_page_size(20, 45);
        assert_eq!(resized, Pagination { page_index: 2, page_size: 20 });
    }

    #[test]
    fn resizing_from_an_absurd_index_lands_on_last_page() {
        let current = Pagination { page_index: usize::MAX / 2, page_size: 100 };
        let resized = current.with_page_size(10, 45);
        assert_eq!(resized, Pagination { page_index: 4, page_size: 10 });
    }
}
