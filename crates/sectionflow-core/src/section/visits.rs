use std::collections::HashSet;

/// Sections whose entry animation has been triggered at least once.
///
/// Append-only for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct VisitTracker {
    visited: HashSet<usize>,
}

impl VisitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit; returns `true` if this is the first one
    pub fn mark(&mut self, section: usize) -> bool {
        self.visited.insert(section)
    }

    pub fn contains(&self, section: usize) -> bool {
        self.visited.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Visited sections in ascending order
    pub fn sorted(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.visited.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_monotonic() {
        let mut visits = VisitTracker::new();
        assert!(visits.mark(2));
        assert!(!visits.mark(2));
        assert!(visits.mark(0));
        assert_eq!(visits.sorted(), vec![0, 2]);
        assert_eq!(visits.len(), 2);
    }
}
