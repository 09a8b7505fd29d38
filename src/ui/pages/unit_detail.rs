use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, LoadStatus, ResourceKind, Unit};
use crate::ui::theme;

const UNKNOWN: &str = "Unknown";

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |value| value.to_string())
}

/// Label/value pairs for the detail grid.
pub fn detail_rows(unit: &Unit) -> Vec<(&'static str, String)> {
    let cost_of = |kind: ResourceKind| or_unknown(unit.cost.and_then(|cost| cost.get(kind)));
    vec![
        ("ID", unit.id.to_string()),
        ("Name", unit.name.clone()),
        ("Description", unit.description.clone()),
        ("Min. Required Age", unit.age.to_string()),
        ("Wood Cost", cost_of(ResourceKind::Wood)),
        ("Food Cost", cost_of(ResourceKind::Food)),
        ("Gold Cost", cost_of(ResourceKind::Gold)),
        ("Build Time", or_unknown(unit.build_time)),
        ("Reload Time", or_unknown(unit.reload_time)),
        ("Hit Points", unit.hit_points.to_string()),
        ("Attack", or_unknown(unit.attack)),
        ("Accuracy", or_unknown(unit.accuracy.clone())),
    ]
}

/// Secondary stats, listed only when the dataset has them.
pub fn extra_rows(unit: &Unit) -> Vec<(&'static str, String)> {
    let joined = |values: &[String]| (!values.is_empty()).then(|| values.join(", "));
    [
        ("Expansion", (!unit.expansion.is_empty()).then(|| unit.expansion.clone())),
        ("Movement Rate", unit.movement_rate.map(|v| v.to_string())),
        ("Line of Sight", unit.line_of_sight.map(|v| v.to_string())),
        ("Range", unit.range.as_ref().map(|v| v.to_string())),
        ("Attack Delay", unit.attack_delay.map(|v| v.to_string())),
        ("Armor", unit.armor.clone()),
        ("Attack Bonus", joined(&unit.attack_bonus)),
        ("Armor Bonus", joined(&unit.armor_bonus)),
        ("Search Radius", unit.search_radius.map(|v| v.to_string())),
        ("Blast Radius", unit.blast_radius.map(|v| v.to_string())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|value| (label, value)))
    .collect()
}

#[component]
pub fn UnitDetailPage(id: u32) -> Element {
    let state = use_context::<Signal<AppState>>();
    let app = state.read();

    match &app.status {
        LoadStatus::Pending => rsx! {
            div { class: theme::state_message(false), "Loading unit details..." }
        },
        LoadStatus::Failed(message) => rsx! {
            div { class: theme::state_message(true), "Error loading unit details: {message}" }
        },
        LoadStatus::Succeeded => match app.find_unit(id) {
            None => rsx! {
                div { class: theme::state_message(true), "Unit not found" }
                BackLink {}
            },
            Some(unit) => {
                let rows = detail_rows(unit);
                let extras = extra_rows(unit);
                rsx! {
                    section { class: "panel",
                        div { class: "filter-header",
                            h2 { "{unit.name}" }
                            BackLink {}
                        }
                        div { class: "detail-grid",
                            for (label, value) in rows {
                                span { key: "{label}", class: "detail-label", "{label}:" }
                                span { "{value}" }
                            }
                        }
                    }
                    if !extras.is_empty() {
                        section { class: "panel",
                            h3 { class: "label", "More stats" }
                            div { class: "detail-grid",
                                for (label, value) in extras {
                                    span { key: "{label}", class: "detail-label", "{label}:" }
                                    span { "{value}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn BackLink() -> Element {
    rsx! {
        Link { class: "btn", to: Route::Units { query: String::new() }, "Back to Units" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{cost, unit};
    use crate::domain::entities::UnitRange;
    use crate::domain::Age;

    fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
        rows.iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value.as_str())
            .unwrap()
    }

    #[test]
    fn absent_values_read_unknown() {
        let mut archer = unit(4, "Archer", Age::Feudal, cost(Some(25), None, Some(45)));
        archer.build_time = Some(35.0);
        archer.accuracy = Some("80%".to_string());
        let rows = detail_rows(&archer);

        assert_eq!(value(&rows, "Wood Cost"), "25");
        assert_eq!(value(&rows, "Food Cost"), "Unknown");
        assert_eq!(value(&rows, "Build Time"), "35");
        assert_eq!(value(&rows, "Reload Time"), "Unknown");
        assert_eq!(value(&rows, "Accuracy"), "80%");
        assert_eq!(value(&rows, "Min. Required Age"), "Feudal");
    }

    #[test]
    fn unknown_cost_record_hides_every_resource() {
        let king = unit(37, "King", Age::Dark, None);
        let rows = detail_rows(&king);
        for label in ["Wood Cost", "Food Cost", "Gold Cost"] {
            assert_eq!(value(&rows, label), "Unknown");
        }
        assert_eq!(rows.len(), 12);
    }

    #[test]
    fn extra_rows_skip_missing_stats() {
        let mut scorpion = unit(20, "Scorpion", Age::Castle, cost(Some(75), None, Some(75)));
        scorpion.expansion.clear();
        assert!(extra_rows(&scorpion).is_empty());

        scorpion.range = Some(UnitRange::Number(7.0));
        scorpion.attack_bonus = vec!["+6 war elephants".to_string(), "+2 rams".to_string()];
        let rows = extra_rows(&scorpion);
        assert_eq!(
            rows,
            vec![
                ("Range", "7".to_string()),
                ("Attack Bonus", "+6 war elephants, +2 rams".to_string()),
            ]
        );
    }
}
