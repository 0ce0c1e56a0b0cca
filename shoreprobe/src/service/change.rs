//! Change detection against the last observed value.

/// Remembers one previous value and reports whether a new one differs.
#[derive(Debug, Clone)]
pub struct ChangeDetector<T> {
    previous: T,
}

impl<T: PartialEq + Clone> ChangeDetector<T> {
    /// Create a detector whose first comparison is against `initial`.
    pub fn new(initial: T) -> Self {
        Self { previous: initial }
    }

    /// Compare `current` with the previous value, then remember `current`.
    pub fn has_changed(&mut self, current: &T) -> bool {
        let changed = *current != self.previous;
        self.previous = current.clone();
        changed
    }

    /// The remembered value.
    pub fn previous(&self) -> &T {
        &self.previous
    }
}
