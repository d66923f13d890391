//! Builder for constructing ReportReadModel from parse results

use super::report_read_model::{
    ConfigurationView, DependencyView, DiagnosticView, MetadataView, ProjectView,
    ReportReadModel, SourceView, SummaryView,
};
use crate::application::dto::{ParseResponse, ParsedSource, ReportMetadata};
use crate::report_parsing::domain::{
    ConfigurationSection, DependencyNode, Diagnostic, ProjectSection, Severity,
};

pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    pub fn build(response: &ParseResponse) -> ReportReadModel {
        let sources: Vec<SourceView> = response.reports.iter().map(Self::build_source).collect();

        ReportReadModel {
            metadata: Self::build_metadata(&response.metadata),
            summary: Self::build_summary(response),
            sources,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> MetadataView {
        MetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            run_id: metadata.run_id().to_string(),
        }
    }

    fn build_summary(response: &ParseResponse) -> SummaryView {
        let documents = response.reports.iter().map(|r| &r.parsed.document);
        SummaryView {
            sources: response.reports.len(),
            projects: documents.clone().map(|d| d.project_count()).sum(),
            configurations: documents.clone().map(|d| d.configuration_count()).sum(),
            dependencies: documents
                .flat_map(|d| d.projects())
                .flat_map(ProjectSection::configurations)
                .map(ConfigurationSection::node_count)
                .sum(),
            errors: response.count_by_severity(Severity::Error),
            warnings: response.count_by_severity(Severity::Warning),
        }
    }

    fn build_source(parsed_source: &ParsedSource) -> SourceView {
        SourceView {
            source: parsed_source.source.to_string(),
            projects: parsed_source
                .parsed
                .document
                .projects()
                .iter()
                .map(Self::build_project)
                .collect(),
            diagnostics: parsed_source
                .parsed
                .diagnostics
                .iter()
                .map(Self::build_diagnostic)
                .collect(),
        }
    }

    fn build_project(project: &ProjectSection) -> ProjectView {
        ProjectView {
            path: project.path().to_string(),
            description: project.description().map(str::to_string),
            configurations: project
                .configurations()
                .iter()
                .map(Self::build_configuration)
                .collect(),
        }
    }

    fn build_configuration(section: &ConfigurationSection) -> ConfigurationView {
        ConfigurationView {
            name: section.name().to_string(),
            description: section.description().map(str::to_string),
            empty: section.is_empty(),
            aborted: section.is_aborted(),
            dependency_count: section.node_count(),
            dependencies: section
                .roots()
                .map(|node| Self::build_dependency(section, node))
                .collect(),
        }
    }

    fn build_dependency(section: &ConfigurationSection, node: &DependencyNode) -> DependencyView {
        DependencyView {
            coordinate: node.identity().clone(),
            requested_version: node.requested_version().map(str::to_string),
            resolved_version: node.resolved_version().map(str::to_string),
            already_expanded: node.is_back_reference(),
            dependencies: section
                .children(node)
                .map(|child| Self::build_dependency(section, child))
                .collect(),
        }
    }

    fn build_diagnostic(diagnostic: &Diagnostic) -> DiagnosticView {
        DiagnosticView {
            severity: diagnostic.severity(),
            line: diagnostic.issue.line_number(),
            project: diagnostic.project.clone(),
            configuration: diagnostic.configuration.clone(),
            message: diagnostic.issue.to_string(),
        }
    }
}
