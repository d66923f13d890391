use crate::report_parsing::domain::{Coordinate, NodeId};
use std::collections::HashMap;

/// BackReferenceResolver service tracking first-seen coordinates
///
/// One resolver covers exactly one configuration; back-references never
/// cross configuration or project boundaries.
#[derive(Debug, Default)]
pub struct BackReferenceResolver {
    canonical: HashMap<Coordinate, NodeId>,
}

impl BackReferenceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` as canonical for `coordinate` unless one was recorded already
    pub fn record(&mut self, coordinate: &Coordinate, id: NodeId) {
        self.canonical.entry(coordinate.clone()).or_insert(id);
    }

    /// Canonical node for a coordinate marked as already expanded
    pub fn resolve(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.canonical.get(coordinate).copied()
    }

    /// Forgets every recorded coordinate (start of a new configuration)
    pub fn reset(&mut self) {
        self.canonical.clear();
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
