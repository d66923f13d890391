use super::{Coordinate, NodeKind};

/// Index of a node inside its configuration's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// DependencyNode entity representing one dependency line of a report
///
/// Children are owned through the configuration arena and listed by id in
/// report order. A back-reference node owns no subtree; `back_reference`
/// points at the canonical node with the same coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    level: usize,
    identity: Coordinate,
    requested_version: Option<String>,
    resolved_version: Option<String>,
    back_reference: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DependencyNode {
    pub fn new(
        level: usize,
        identity: Coordinate,
        requested_version: Option<String>,
        resolved_version: Option<String>,
    ) -> Self {
        Self {
            level,
            identity,
            requested_version,
            resolved_version,
            back_reference: None,
            children: Vec::new(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn kind(&self) -> NodeKind {
        self.identity.kind()
    }

    pub fn identity(&self) -> &Coordinate {
        &self.identity
    }

    pub fn requested_version(&self) -> Option<&str> {
        self.requested_version.as_deref()
    }

    pub fn resolved_version(&self) -> Option<&str> {
        self.resolved_version.as_deref()
    }

    pub fn is_back_reference(&self) -> bool {
        self.back_reference.is_some()
    }

    /// Canonical node this node refers back to, if it is a back-reference
    pub fn back_reference(&self) -> Option<NodeId> {
        self.back_reference
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn set_back_reference(&mut self, target: Option<NodeId>) {
        self.back_reference = target;
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Copy of this node without children, used when rebuilding arenas
    pub(crate) fn detached(&self) -> Self {
        Self {
            children: Vec::new(),
            back_reference: None,
            ..self.clone()
        }
    }
}
