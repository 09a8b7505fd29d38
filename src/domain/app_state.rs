use super::entities::Unit;
use crate::util::config::CodexConfig;

/// Progress of the one-off dataset load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Succeeded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Succeeded)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: CodexConfig,
    pub status: LoadStatus,
    units: Vec<Unit>,
}

impl AppState {
    pub fn new(config: CodexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn apply_load<E: std::fmt::Display>(&mut self, result: Result<Vec<Unit>, E>) {
        match result {
            Ok(units) => {
                self.units = units;
                self.status = LoadStatus::Succeeded;
            }
            Err(err) => {
                self.units.clear();
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    /// The dataset, or nothing at all until it has loaded successfully.
    pub fn units(&self) -> &[Unit] {
        if self.status.is_ready() {
            &self.units
        } else {
            &[]
        }
    }

    /// Size of the whole dataset as shown next to the filtered count.
    pub fn total_units(&self) -> usize {
        self.units().len()
    }

    pub fn find_unit(&self, id: u32) -> Option<&Unit> {
        self.units().iter().find(|unit| unit.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_units;

    #[test]
    fn starts_pending_with_no_units() {
        let state = AppState::default();
        assert_eq!(state.status, LoadStatus::Pending);
        assert!(state.units().is_empty());
    }

    #[test]
    fn successful_load_exposes_units() {
        let mut state = AppState::default();
        state.apply_load::<String>(Ok(sample_units()));
        assert!(state.status.is_ready());
        assert_eq!(state.total_units(), 14);
        assert_eq!(state.find_unit(13).map(|u| u.name.as_str()), Some("Monk"));
        assert!(state.find_unit(99).is_none());
    }

    #[test]
    fn failed_load_reports_message_and_hides_units() {
        let mut state = AppState::default();
        state.apply_load::<String>(Ok(sample_units()));
        state.apply_load::<String>(Err("Network Error".to_string()));
        assert_eq!(state.status, LoadStatus::Failed("Network Error".to_string()));
        assert!(state.units().is_empty());
        assert!(state.find_unit(1).is_none());
    }
}
