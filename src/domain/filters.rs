//! Age and cost-range filtering of the unit catalog.

use std::fmt;

use super::entities::{Age, ResourceKind, Unit};

pub const MIN_COST: u32 = 0;
pub const MAX_COST: u32 = 200;

/// Inclusive cost range, always within `MIN_COST..=MAX_COST` with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostRange {
    min: u32,
    max: u32,
}

impl CostRange {
    /// Returns `None` for inverted or out-of-domain bounds.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        if max > MAX_COST || min > max {
            return None;
        }
        Some(Self { min, max })
    }

    /// Range applied when a resource filter is first switched on.
    pub fn full() -> Self {
        Self {
            min: MIN_COST,
            max: MAX_COST,
        }
    }

    /// Parses `"<min>-<max>"`. Anything else yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (min, max) = raw.split_once('-')?;
        if max.contains('-') {
            return None;
        }
        let min = min.trim().parse::<u32>().ok()?;
        let max = max.trim().parse::<u32>().ok()?;
        Self::new(min, max)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Moves the lower bound, dragging the upper bound along if needed.
    pub fn with_min(self, min: u32) -> Self {
        let min = min.min(MAX_COST);
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Moves the upper bound, dragging the lower bound along if needed.
    pub fn with_max(self, max: u32) -> Self {
        let max = max.min(MAX_COST);
        Self {
            min: self.min.min(max),
            max,
        }
    }
}

impl fmt::Display for CostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Age selection; `All` disables age filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AgeFilter {
    #[default]
    All,
    Only(Age),
}

impl AgeFilter {
    pub const OPTIONS: [AgeFilter; 5] = [
        AgeFilter::All,
        AgeFilter::Only(Age::Dark),
        AgeFilter::Only(Age::Feudal),
        AgeFilter::Only(Age::Castle),
        AgeFilter::Only(Age::Imperial),
    ];

    /// Unrecognised labels collapse to `All`.
    pub fn parse(raw: &str) -> Self {
        Age::from_label(raw).map(AgeFilter::Only).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeFilter::All => "All",
            AgeFilter::Only(age) => age.label(),
        }
    }

    pub fn matches(&self, age: Age) -> bool {
        match self {
            AgeFilter::All => true,
            AgeFilter::Only(selected) => *selected == age,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CostFilters {
    wood: Option<CostRange>,
    food: Option<CostRange>,
    gold: Option<CostRange>,
}

impl CostFilters {
    pub fn get(&self, kind: ResourceKind) -> Option<CostRange> {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Food => self.food,
            ResourceKind::Gold => self.gold,
        }
    }

    pub fn set(&mut self, kind: ResourceKind, range: Option<CostRange>) {
        let slot = match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Food => &mut self.food,
            ResourceKind::Gold => &mut self.gold,
        };
        *slot = range;
    }

    pub fn with(mut self, kind: ResourceKind, range: CostRange) -> Self {
        self.set(kind, Some(range));
        self
    }

    /// Active ranges in evaluation order.
    pub fn active(&self) -> impl Iterator<Item = (ResourceKind, CostRange)> + '_ {
        ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|range| (kind, range)))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub age: AgeFilter,
    pub costs: CostFilters,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn matches(&self, unit: &Unit) -> bool {
        if !self.age.matches(unit.age) {
            return false;
        }

        for (kind, range) in self.costs.active() {
            // Unknown cost: the first active range decides the whole outcome.
            let Some(cost) = unit.cost else {
                return range.min() == 0;
            };
            if !range.contains(cost.amount(kind)) {
                return false;
            }
        }

        true
    }
}

/// Units passing every active filter, in their original order.
pub fn filter_units<'a>(units: &'a [Unit], filters: &FilterState) -> Vec<&'a Unit> {
    units.iter().filter(|unit| filters.matches(unit)).collect()
}
