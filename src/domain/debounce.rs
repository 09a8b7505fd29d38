use std::time::Duration;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Last-write-wins bookkeeping for debounced input.
///
/// Each keystroke is pushed and gets a ticket. When a timer armed for that
/// ticket fires, [`Debouncer::settle`] hands back the value only if no newer
/// keystroke arrived in the meantime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn push(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value so in-flight timers commit nothing.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_keystrokes_commit_only_the_last_value() {
        let mut debouncer = Debouncer::default();
        let tickets: Vec<u64> = ["k", "kn", "kni"]
            .into_iter()
            .map(|value| debouncer.push(value.to_string()))
            .collect();

        let committed: Vec<String> = tickets
            .into_iter()
            .filter_map(|ticket| debouncer.settle(ticket))
            .collect();
        assert_eq!(committed, vec!["kni".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn quiet_input_commits_each_value() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.push("arch");
        assert_eq!(debouncer.settle(first), Some("arch"));
        let second = debouncer.push("archer");
        assert_eq!(debouncer.settle(second), Some("archer"));
    }

    #[test]
    fn settle_is_one_shot() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.push(1);
        assert_eq!(debouncer.settle(ticket), Some(1));
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.push("monk");
        debouncer.cancel();
        assert_eq!(debouncer.settle(ticket), None);
    }
}
