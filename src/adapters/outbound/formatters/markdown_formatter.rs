use crate::application::read_models::{
    ConfigurationView, DependencyView, DiagnosticView, ProjectView, ReportReadModel, SourceView,
    SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::report_parsing::domain::Coordinate;
use crate::shared::Result;

/// Markdown table header for diagnostics
const DIAGNOSTIC_TABLE_HEADER: &str = "| Severity | Line | Project | Configuration | Message |\n";

/// Markdown table separator line for diagnostics
const DIAGNOSTIC_TABLE_SEPARATOR: &str = "|----------|------|---------|---------------|---------|\n";

/// Indentation per tree level in nested lists
const LIST_INDENT: &str = "  ";

/// MarkdownFormatter adapter rendering parsed reports as nested lists
///
/// One section per source, one subsection per project and configuration.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_dependency(dependency: &DependencyView) -> String {
        let mut label = match &dependency.coordinate {
            Coordinate::Project { path } => format!("project `{}`", path),
            Coordinate::Module {
                group,
                artifact,
                version,
            } => match dependency.requested_version.as_deref() {
                Some(requested) if requested != version => {
                    format!("`{}:{}` {} → {}", group, artifact, requested, version)
                }
                _ => format!("`{}:{}:{}`", group, artifact, version),
            },
        };
        if dependency.already_expanded {
            label.push_str(" _(already listed)_");
        }
        label
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str("# Dependency Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Reports: {}\n", summary.sources));
        output.push_str(&format!("- Projects: {}\n", summary.projects));
        output.push_str(&format!("- Configurations: {}\n", summary.configurations));
        output.push_str(&format!("- Dependencies: {}\n", summary.dependencies));
        output.push_str(&format!(
            "- Diagnostics: {} error(s), {} warning(s)\n\n",
            summary.errors, summary.warnings
        ));
    }

    fn render_source(&self, output: &mut String, source: &SourceView) {
        output.push_str(&format!("## Report: {}\n\n", source.source));

        if source.projects.is_empty() {
            output.push_str("*No projects selected.*\n\n");
        }
        for project in &source.projects {
            self.render_project(output, project);
        }

        if !source.diagnostics.is_empty() {
            self.render_diagnostics(output, &source.diagnostics);
        }
    }

    fn render_project(&self, output: &mut String, project: &ProjectView) {
        output.push_str(&format!("### Project `{}`\n\n", project.path));
        if let Some(description) = &project.description {
            output.push_str(&format!("{}\n\n", description));
        }
        for configuration in &project.configurations {
            self.render_configuration(output, configuration);
        }
    }

    fn render_configuration(&self, output: &mut String, configuration: &ConfigurationView) {
        output.push_str(&format!("#### `{}`", configuration.name));
        if let Some(description) = &configuration.description {
            output.push_str(&format!(" - {}", description));
        }
        output.push_str("\n\n");

        if configuration.aborted {
            output.push_str("> ⚠️ Parsing of this configuration stopped early; the tree below is partial.\n\n");
        }

        if configuration.dependencies.is_empty() {
            output.push_str("*No dependencies*\n\n");
            return;
        }

        for dependency in &configuration.dependencies {
            self.render_dependency(output, dependency, 0);
        }
        output.push('\n');
    }

    fn render_dependency(&self, output: &mut String, dependency: &DependencyView, depth: usize) {
        output.push_str(&LIST_INDENT.repeat(depth));
        output.push_str("- ");
        output.push_str(&Self::format_dependency(dependency));
        output.push('\n');

        for child in &dependency.dependencies {
            self.render_dependency(output, child, depth + 1);
        }
    }

    fn render_diagnostics(&self, output: &mut String, diagnostics: &[DiagnosticView]) {
        output.push_str("### Diagnostics\n\n");
        output.push_str(DIAGNOSTIC_TABLE_HEADER);
        output.push_str(DIAGNOSTIC_TABLE_SEPARATOR);
        for diagnostic in diagnostics {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                diagnostic.severity,
                diagnostic.line,
                Self::escape_markdown_table_cell(diagnostic.project.as_deref().unwrap_or("-")),
                Self::escape_markdown_table_cell(
                    diagnostic.configuration.as_deref().unwrap_or("-")
                ),
                Self::escape_markdown_table_cell(&diagnostic.message)
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.summary);
        for source in &model.sources {
            self.render_source(&mut output, source);
        }

        Ok(output)
    }
}
