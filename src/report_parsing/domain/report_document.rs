use super::{DependencyNode, Diagnostic, NodeId, Severity};

/// ConfigurationSection aggregate: one named dependency scope and its forest
///
/// Nodes are stored in an arena in report order; `roots` lists the level-0
/// nodes. When `is_empty` is set the report stated "No dependencies".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSection {
    name: String,
    description: Option<String>,
    is_empty: bool,
    aborted: bool,
    nodes: Vec<DependencyNode>,
    roots: Vec<NodeId>,
}

impl ConfigurationSection {
    pub fn new(
        name: String,
        description: Option<String>,
        is_empty: bool,
        aborted: bool,
        nodes: Vec<DependencyNode>,
        roots: Vec<NodeId>,
    ) -> Self {
        Self {
            name,
            description,
            is_empty,
            aborted,
            nodes,
            roots,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True iff the report printed the empty-dependencies sentinel
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// True when a malformed line stopped assembly of this configuration
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn root_ids(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn roots(&self) -> impl Iterator<Item = &DependencyNode> + '_ {
        self.roots.iter().map(move |id| &self.nodes[id.index()])
    }

    pub fn node(&self, id: NodeId) -> Option<&DependencyNode> {
        self.nodes.get(id.index())
    }

    pub fn children<'a>(
        &'a self,
        node: &'a DependencyNode,
    ) -> impl Iterator<Item = &'a DependencyNode> + 'a {
        node.children().iter().map(move |id| &self.nodes[id.index()])
    }

    /// Resolves a back-reference to its canonical node; other nodes resolve to themselves
    pub fn canonical<'a>(&'a self, node: &'a DependencyNode) -> &'a DependencyNode {
        node.back_reference()
            .and_then(|id| self.node(id))
            .unwrap_or(node)
    }

    /// All nodes in report order
    pub fn nodes(&self) -> &[DependencyNode] {
        &self.nodes
    }

    /// Number of nodes owning their own subtree.
    ///
    /// Back-references are excluded. A leaf coordinate the report repeats
    /// without the `(*)` marker is counted once per occurrence, so this is
    /// not a count of distinct coordinates.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_back_reference()).count()
    }

    /// Number of dependency lines materialized, back-references included
    pub fn occurrence_count(&self) -> usize {
        self.nodes.len()
    }
}

/// ProjectSection aggregate: one project block of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSection {
    path: String,
    description: Option<String>,
    configurations: Vec<ConfigurationSection>,
}

impl ProjectSection {
    pub fn new(
        path: String,
        description: Option<String>,
        configurations: Vec<ConfigurationSection>,
    ) -> Self {
        Self {
            path,
            description,
            configurations,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn configurations(&self) -> &[ConfigurationSection] {
        &self.configurations
    }

    pub fn configuration(&self, name: &str) -> Option<&ConfigurationSection> {
        self.configurations.iter().find(|c| c.name == name)
    }

    /// Appends the configurations of a repeated header for the same path.
    /// The first non-empty description is kept.
    pub(crate) fn absorb(
        &mut self,
        description: Option<String>,
        configurations: Vec<ConfigurationSection>,
    ) {
        if self.description.is_none() {
            self.description = description;
        }
        self.configurations.extend(configurations);
    }
}

/// ReportDocument aggregate: ordered project sections of one report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDocument {
    projects: Vec<ProjectSection>,
}

impl ReportDocument {
    pub fn new(projects: Vec<ProjectSection>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[ProjectSection] {
        &self.projects
    }

    pub fn project(&self, path: &str) -> Option<&ProjectSection> {
        self.projects.iter().find(|p| p.path == path)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn configuration_count(&self) -> usize {
        self.projects.iter().map(|p| p.configurations.len()).sum()
    }
}

/// Result of one parse call: the document and everything noticed on the way
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReport {
    pub document: ReportDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}
