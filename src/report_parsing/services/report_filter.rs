use super::SelectionSetResolver;
use crate::report_parsing::domain::{
    ConfigurationSection, DependencyNode, DependencyRule, NodeId, ProjectSection, ReportDocument,
    Selection,
};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Name-based selections deciding what part of a document is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub included_projects: Vec<Selection<String>>,
    pub excluded_projects: Vec<Selection<String>>,
    pub included_configurations: Vec<Selection<String>>,
    pub excluded_configurations: Vec<Selection<String>>,
    pub dependency_rules: Vec<Selection<DependencyRule>>,
    /// Drop project references to the enclosing project itself
    pub suppress_self_references: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            included_projects: vec![Selection::All],
            excluded_projects: Vec::new(),
            included_configurations: vec![Selection::All],
            excluded_configurations: Vec::new(),
            dependency_rules: vec![Selection::All],
            suppress_self_references: false,
        }
    }
}

/// ReportFilter service applying resolved selection sets to a document
///
/// A dropped node takes its subtree with it. Back-references whose canonical
/// node was dropped become ordinary nodes.
#[derive(Debug)]
pub struct ReportFilter {
    projects: HashSet<String>,
    configurations: HashSet<String>,
    rules: HashSet<DependencyRule>,
    suppress_self_references: bool,
}

impl ReportFilter {
    /// Resolves the criteria against the projects and configurations present in `document`
    pub fn new(criteria: &FilterCriteria, document: &ReportDocument) -> Self {
        let project_domain: Vec<String> = document
            .projects()
            .iter()
            .map(|p| p.path().to_string())
            .collect();
        let configuration_domain: Vec<String> = document
            .projects()
            .iter()
            .flat_map(|p| p.configurations())
            .map(|c| c.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let included_projects = normalize_projects(&criteria.included_projects);
        let excluded_projects = normalize_projects(&criteria.excluded_projects);

        let projects = difference(
            SelectionSetResolver::resolve(&included_projects, &project_domain),
            SelectionSetResolver::resolve(&excluded_projects, &project_domain),
        );
        let configurations = difference(
            SelectionSetResolver::resolve(&criteria.included_configurations, &configuration_domain),
            SelectionSetResolver::resolve(&criteria.excluded_configurations, &configuration_domain),
        );
        let rules = SelectionSetResolver::resolve(&criteria.dependency_rules, DependencyRule::ALL);

        Self {
            projects,
            configurations,
            rules,
            suppress_self_references: criteria.suppress_self_references,
        }
    }

    pub fn retains_project(&self, path: &str) -> bool {
        self.projects.contains(path)
    }

    pub fn retains_configuration(&self, name: &str) -> bool {
        self.configurations.contains(name)
    }

    pub fn apply(&self, document: &ReportDocument) -> ReportDocument {
        let projects = document
            .projects()
            .iter()
            .filter(|p| self.retains_project(p.path()))
            .map(|project| {
                let configurations = project
                    .configurations()
                    .iter()
                    .filter(|c| self.retains_configuration(c.name()))
                    .map(|c| self.filter_configuration(c, project.path()))
                    .collect();
                ProjectSection::new(
                    project.path().to_string(),
                    project.description().map(str::to_string),
                    configurations,
                )
            })
            .collect();

        ReportDocument::new(projects)
    }

    fn retains_node(&self, node: &DependencyNode, project_path: &str) -> bool {
        let kind_selected = self.rules.iter().any(|rule| rule.matches(node.kind()));
        let self_reference = self.suppress_self_references
            && node.identity().project_path() == Some(project_path);
        kind_selected && !self_reference
    }

    fn filter_configuration(
        &self,
        section: &ConfigurationSection,
        project_path: &str,
    ) -> ConfigurationSection {
        let mut nodes = Vec::new();
        let mut remap = HashMap::new();
        let roots: Vec<NodeId> = section
            .root_ids()
            .iter()
            .filter_map(|&id| self.copy_subtree(section, id, project_path, &mut nodes, &mut remap))
            .collect();

        for (old_id, new_id) in &remap {
            let target = section
                .node(*old_id)
                .and_then(DependencyNode::back_reference)
                .and_then(|target| remap.get(&target).copied());
            nodes[new_id.index()].set_back_reference(target);
        }

        ConfigurationSection::new(
            section.name().to_string(),
            section.description().map(str::to_string),
            section.is_empty(),
            section.is_aborted(),
            nodes,
            roots,
        )
    }

    fn copy_subtree(
        &self,
        section: &ConfigurationSection,
        id: NodeId,
        project_path: &str,
        nodes: &mut Vec<DependencyNode>,
        remap: &mut HashMap<NodeId, NodeId>,
    ) -> Option<NodeId> {
        let node = section.node(id)?;
        if !self.retains_node(node, project_path) {
            return None;
        }

        let new_id = NodeId::new(nodes.len());
        nodes.push(node.detached());
        remap.insert(id, new_id);

        for &child in node.children() {
            if let Some(copied) = self.copy_subtree(section, child, project_path, nodes, remap) {
                nodes[new_id.index()].push_child(copied);
            }
        }
        Some(new_id)
    }
}

/// Project selections match paths with or without the leading `:`
fn normalize_projects(selections: &[Selection<String>]) -> Vec<Selection<String>> {
    selections
        .iter()
        .cloned()
        .map(|s| {
            s.map(|value| {
                if value.starts_with(':') {
                    value
                } else {
                    format!(":{}", value)
                }
            })
        })
        .collect()
}

fn difference(included: HashSet<String>, excluded: HashSet<String>) -> HashSet<String> {
    included.difference(&excluded).cloned().collect()
}
