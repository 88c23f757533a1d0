//! Tracks which single item of an external sequence is open.

/// Single-selection state: at most one index is open at a time.
///
/// The manager does not own the sequence it indexes into, so it never
/// validates bounds. Selecting an index past the end is accepted and simply
/// never matches a real item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleSelection {
    open: Option<usize>,
}

impl SingleSelection {
    /// Start with `default` open, or nothing open when `None`.
    pub fn new(default: Option<usize>) -> Self {
        Self { open: default }
    }

    /// Start with the first item open.
    pub fn first_open() -> Self {
        Self::new(Some(0))
    }

    pub fn select(&mut self, index: usize) {
        self.open = Some(index);
    }

    pub fn clear(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }
}
