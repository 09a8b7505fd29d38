use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Game progression tier a unit becomes available in.
///
/// Variant order is the in-game order, so `Ord` sorts Dark before Imperial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Age {
    Dark,
    Feudal,
    Castle,
    Imperial,
}

impl Age {
    pub const ALL: [Age; 4] = [Age::Dark, Age::Feudal, Age::Castle, Age::Imperial];

    pub fn label(&self) -> &'static str {
        match self {
            Age::Dark => "Dark",
            Age::Feudal => "Feudal",
            Age::Castle => "Castle",
            Age::Imperial => "Imperial",
        }
    }

    /// Case-insensitive lookup of an age by its label.
    pub fn from_label(label: &str) -> Option<Age> {
        let label = label.trim();
        Age::ALL
            .into_iter()
            .find(|age| age.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Age::from_label(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown age `{raw}`")))
    }
}

/// Resources a unit can cost. Filters are evaluated in `ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Wood,
    Food,
    Gold,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Wood, ResourceKind::Food, ResourceKind::Gold];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Wood => "Wood",
            ResourceKind::Food => "Food",
            ResourceKind::Gold => "Gold",
        }
    }

    /// Query-string parameter carrying this resource's cost range.
    pub fn param(&self) -> &'static str {
        match self {
            ResourceKind::Wood => "wood",
            ResourceKind::Food => "food",
            ResourceKind::Gold => "gold",
        }
    }
}

/// Partial cost record. A missing resource costs nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCost {
    #[serde(rename = "Wood", default, skip_serializing_if = "Option::is_none")]
    pub wood: Option<u32>,
    #[serde(rename = "Food", default, skip_serializing_if = "Option::is_none")]
    pub food: Option<u32>,
    #[serde(rename = "Gold", default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
}

impl UnitCost {
    pub fn get(&self, kind: ResourceKind) -> Option<u32> {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Food => self.food,
            ResourceKind::Gold => self.gold,
        }
    }

    pub fn amount(&self, kind: ResourceKind) -> u32 {
        self.get(kind).unwrap_or(0)
    }

    /// Sum of every resource present in the record.
    pub fn total(&self) -> u32 {
        ResourceKind::ALL.iter().map(|kind| self.amount(*kind)).sum()
    }
}

/// `range` is numeric for ranged units and free text (e.g. "0.5") for some others.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitRange {
    Number(f64),
    Text(String),
}

impl fmt::Display for UnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRange::Number(value) => write!(f, "{value}"),
            UnitRange::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expansion: String,
    pub age: Age,
    /// `None` means the cost is unknown, not free.
    pub cost: Option<UnitCost>,
    pub build_time: Option<f64>,
    pub reload_time: Option<f64>,
    pub attack_delay: Option<f64>,
    pub movement_rate: Option<f64>,
    pub line_of_sight: Option<f64>,
    pub hit_points: u32,
    pub range: Option<UnitRange>,
    pub attack: Option<u32>,
    pub armor: Option<String>,
    #[serde(default)]
    pub attack_bonus: Vec<String>,
    pub accuracy: Option<String>,
    pub search_radius: Option<f64>,
    pub blast_radius: Option<f64>,
    #[serde(default)]
    pub armor_bonus: Vec<String>,
}

impl Unit {
    /// Total cost used by the cost column, `None` when the cost is unknown.
    pub fn total_cost(&self) -> Option<u32> {
        self.cost.map(|cost| cost.total())
    }
}
