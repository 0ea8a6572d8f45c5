//! View-local row/card expansion state.

use crate::model::StageId;
use std::collections::HashSet;

/// Which stages a view currently has expanded.
///
/// Expansion defaults to collapsed and is local to each view; the list
/// and map views keep independent instances.
#[derive(Debug, Clone, Default)]
pub struct ViewExpansion {
    expanded: HashSet<StageId>,
}

impl ViewExpansion {
    /// Creates a fully collapsed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given stage is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: StageId) -> bool {
        self.expanded.contains(&id)
    }

    /// Expands a stage.
    pub fn expand(&mut self, id: StageId) {
        self.expanded.insert(id);
    }

    /// Collapses a stage.
    pub fn collapse(&mut self, id: StageId) {
        self.expanded.remove(&id);
    }

    /// Toggles a stage, returning the new state.
    pub fn toggle(&mut self, id: StageId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collapsed() {
        let expansion = ViewExpansion::new();
        assert!(!expansion.is_expanded(StageId::new()));
    }

    #[test]
    fn test_toggle_round_trip() {
        let id = StageId::new();
        let mut expansion = ViewExpansion::new();

        assert!(expansion.toggle(id));
        assert!(expansion.is_expanded(id));
        assert!(!expansion.toggle(id));
        assert!(!expansion.is_expanded(id));
    }

    #[test]
    fn test_expand_collapse() {
        let id = StageId::new();
        let mut expansion = ViewExpansion::new();

        expansion.expand(id);
        assert!(expansion.is_expanded(id));
        expansion.collapse(id);
        assert!(!expansion.is_expanded(id));
    }
}
