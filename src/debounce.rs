/// Search input delay before a query reaches the filter.
pub const SEARCH_DEBOUNCE_MS: u64 = 200;

/// Keeps only the latest pushed value; older tickets fire as no-ops.
///
/// The caller schedules a timer per push and hands the ticket back when it
/// fires. Only the most recent ticket yields a value.
#[derive(Debug, Clone, Default)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value; any outstanding ticket becomes stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_value_wins() {
        let mut d = Debouncer::new();
        let a = d.push("r");
        let b = d.push("ru");
        let c = d.push("rust");

        assert_eq!(d.fire(a), None);
        assert_eq!(d.fire(b), None);
        assert_eq!(d.fire(c), Some("rust"));
        // fires once
        assert_eq!(d.fire(c), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new();
        let t = d.push(1);
        d.cancel();
        assert_eq!(d.fire(t), None);
    }
}
