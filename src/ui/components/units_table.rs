use dioxus::prelude::*;

use crate::domain::{sort_direction, ResourceKind, SortColumn, SortKey, Unit};
use crate::ui::theme;

pub const UNKNOWN_COST: &str = "Unknown Cost";

/// One line per resource the unit actually costs, e.g. `Food: 60`.
pub fn cost_lines(unit: &Unit) -> Option<Vec<String>> {
    let cost = unit.cost?;
    Some(
        ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| cost.get(kind).map(|amount| format!("{}: {amount}", kind.label())))
            .collect(),
    )
}

#[component]
pub fn UnitsTable(
    rows: Vec<Unit>,
    sort: Vec<SortKey>,
    on_sort: EventHandler<(SortColumn, bool)>,
    on_open: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "table-wrap",
            table {
                thead {
                    tr {
                        for column in SortColumn::ALL {
                            th {
                                key: "{column.label()}",
                                title: "Click to sort, shift-click to add a secondary sort",
                                onclick: move |evt: MouseEvent| {
                                    let multi = evt.modifiers().contains(Modifiers::SHIFT);
                                    on_sort.call((column, multi));
                                },
                                "{column.label()}{theme::sort_indicator(sort_direction(&sort, column))}"
                            }
                        }
                    }
                }
                tbody {
                    for unit in rows {
                        UnitRow { key: "{unit.id}", unit, on_open }
                    }
                }
            }
        }
    }
}

#[component]
fn UnitRow(unit: Unit, on_open: EventHandler<u32>) -> Element {
    let id = unit.id;
    let costs = cost_lines(&unit);
    rsx! {
        tr {
            onclick: move |_| on_open.call(id),
            td { "{unit.id}" }
            td { "{unit.name}" }
            td { class: "description-cell", "{unit.description}" }
            td { "{unit.age}" }
            td {
                match costs {
                    Some(lines) => rsx! {
                        div { class: "cost-details",
                            for line in lines {
                                span { "{line}" }
                            }
                        }
                    },
                    None => rsx! { span { class: "unknown-cost", "{UNKNOWN_COST}" } },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{cost, unit};
    use crate::domain::Age;

    #[test]
    fn cost_lines_skip_absent_resources() {
        let archer = unit(4, "Archer", Age::Feudal, cost(Some(25), None, Some(45)));
        assert_eq!(
            cost_lines(&archer),
            Some(vec!["Wood: 25".to_string(), "Gold: 45".to_string()])
        );
    }

    #[test]
    fn missing_cost_record_has_no_lines() {
        let king = unit(37, "King", Age::Dark, None);
        assert_eq!(cost_lines(&king), None);
    }
}
