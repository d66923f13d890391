use super::{ClassifiedLine, LineClassifier, TreeAssembler};
use crate::report_parsing::domain::{
    ConfigurationSection, Diagnostic, ParseIssue, ParsedReport, ProjectSection, ReportDocument,
};

const PROJECT_HEADER_PREFIX: &str = "Project ";
const ROOT_PROJECT_HEADER_PREFIX: &str = "Root project";
const DESCRIPTION_SEPARATOR: &str = " - ";

/// Path given to the root project and to configurations listed before any project header
pub const ROOT_PROJECT_PATH: &str = ":";

/// Parses a complete dependency report.
///
/// Pure function: the same text always yields an equal [`ParsedReport`], and
/// independent calls share no state, so reports may be parsed on separate
/// threads.
pub fn parse_report(raw_text: &str) -> ParsedReport {
    ReportSectionizer::split(raw_text)
}

/// ReportSectionizer service splitting a report into project and configuration sections
///
/// Each configuration body is fed line by line into its own
/// [`TreeAssembler`]. A malformed line aborts only the configuration it
/// appears in; parsing resumes at the next recognized header.
pub struct ReportSectionizer;

impl ReportSectionizer {
    pub fn split(raw_text: &str) -> ParsedReport {
        let mut state = SectionizerState::default();
        for (index, line) in raw_text.lines().enumerate() {
            state.consume(index + 1, line);
        }
        state.finish()
    }
}

/// Parses `Project :path [- description]`, `Project ':path'` or `Root project ...`
///
/// The root project's name stands in for its description when none is given.
pub fn parse_project_header(text: &str) -> Option<(String, Option<String>)> {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix(ROOT_PROJECT_HEADER_PREFIX) {
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        let (name, description) = split_description(rest.trim());
        let name = name.trim().trim_matches('\'');
        let description = description.or_else(|| (!name.is_empty()).then(|| name.to_string()));
        return Some((ROOT_PROJECT_PATH.to_string(), description));
    }

    let rest = trimmed.strip_prefix(PROJECT_HEADER_PREFIX)?;
    let (path_part, description) = split_description(rest.trim());
    let path = path_part.trim().trim_matches('\'');
    if !path.starts_with(':') || path.contains(char::is_whitespace) {
        return None;
    }
    Some((path.to_string(), description))
}

/// Parses `name [- description.]`; the name must be a single identifier-like token
pub fn parse_configuration_header(text: &str) -> Option<(String, Option<String>)> {
    let trimmed = text.trim();
    let (name, description) = match trimmed.split_once(DESCRIPTION_SEPARATOR) {
        Some((name, description)) => (name.trim(), clean_description(description)),
        None => (trimmed.strip_suffix('.').unwrap_or(trimmed), None),
    };

    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    let valid = starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    valid.then(|| (name.to_string(), description))
}

fn split_description(text: &str) -> (&str, Option<String>) {
    if let Some(description) = text.strip_prefix("- ") {
        return ("", clean_description(description));
    }
    match text.split_once(DESCRIPTION_SEPARATOR) {
        Some((head, description)) => (head, clean_description(description)),
        None => (text, None),
    }
}

fn clean_description(text: &str) -> Option<String> {
    let text = text.trim();
    let text = text.strip_suffix('.').unwrap_or(text).trim_end();
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyState {
    /// Lines still belong to the forest
    Open,
    /// A blank line ended the forest; only headers are expected
    Closed,
    /// Assembly was aborted; everything up to the next header is skipped
    Skipping,
}

struct ConfigurationBuilder {
    name: String,
    description: Option<String>,
    is_empty: bool,
    aborted: bool,
    /// Repeated section: its body is skipped and nothing is kept
    discarded: bool,
    state: BodyState,
    assembler: TreeAssembler,
}

impl ConfigurationBuilder {
    fn new(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description,
            is_empty: false,
            aborted: false,
            discarded: false,
            state: BodyState::Open,
            assembler: TreeAssembler::new(),
        }
    }

    fn discarded(name: String) -> Self {
        Self {
            discarded: true,
            state: BodyState::Skipping,
            ..Self::new(name, None)
        }
    }

    fn has_content(&self) -> bool {
        self.is_empty || !self.assembler.is_empty()
    }
}

struct ProjectBuilder {
    path: String,
    description: Option<String>,
    configurations: Vec<ConfigurationSection>,
    /// Index of an earlier section with the same path; finished sections merge into it
    merge_into: Option<usize>,
}

#[derive(Default)]
struct SectionizerState {
    projects: Vec<ProjectSection>,
    project: Option<ProjectBuilder>,
    configuration: Option<ConfigurationBuilder>,
    diagnostics: Vec<Diagnostic>,
    orphan_reported: bool,
}

impl SectionizerState {
    fn consume(&mut self, line_number: usize, line: &str) {
        match LineClassifier::classify(line) {
            ClassifiedLine::Connector { level, payload } => {
                self.on_connector(line_number, line, level, payload)
            }
            ClassifiedLine::NoDependencies => self.on_sentinel(line_number, line),
            ClassifiedLine::Blank => {
                if let Some(configuration) = self.configuration.as_mut() {
                    if configuration.state == BodyState::Open && configuration.has_content() {
                        configuration.state = BodyState::Closed;
                    }
                }
            }
            ClassifiedLine::Banner | ClassifiedLine::Legend => {}
            ClassifiedLine::Text(text) => self.on_text(line_number, line, text),
        }
    }

    fn on_connector(&mut self, line_number: usize, line: &str, level: usize, payload: &str) {
        let Some(configuration) = self.configuration.as_mut() else {
            self.report_orphan(line_number, line);
            return;
        };

        let result = match configuration.state {
            BodyState::Skipping => return,
            BodyState::Closed => Err(ParseIssue::malformed_line(
                line_number,
                line,
                "dependency line after the configuration body ended",
            )),
            BodyState::Open if configuration.is_empty => Err(ParseIssue::malformed_line(
                line_number,
                line,
                "dependency line after 'No dependencies'",
            )),
            BodyState::Open => configuration
                .assembler
                .push(line_number, line, level, payload)
                .map(|_| ()),
        };

        if let Err(issue) = result {
            self.abort_configuration(issue);
        }
    }

    fn on_sentinel(&mut self, line_number: usize, line: &str) {
        let Some(configuration) = self.configuration.as_mut() else {
            self.report_orphan(line_number, line);
            return;
        };

        let issue = match configuration.state {
            BodyState::Skipping => return,
            BodyState::Closed => ParseIssue::malformed_line(
                line_number,
                line,
                "'No dependencies' after the configuration body ended",
            ),
            BodyState::Open if !configuration.assembler.is_empty() => ParseIssue::malformed_line(
                line_number,
                line,
                "'No dependencies' after dependency lines",
            ),
            BodyState::Open => {
                configuration.is_empty = true;
                return;
            }
        };
        self.abort_configuration(issue);
    }

    fn on_text(&mut self, line_number: usize, line: &str, text: &str) {
        // Headers start at column zero; indented text belongs to a body
        let at_margin = !line.starts_with(char::is_whitespace);

        if let Some((path, description)) = parse_project_header(text).filter(|_| at_margin) {
            self.open_project(path, description);
            self.orphan_reported = false;
            return;
        }

        if let Some((name, description)) = parse_configuration_header(text).filter(|_| at_margin)
        {
            self.finish_configuration();
            self.orphan_reported = false;
            if self.project.is_none() {
                tracing::debug!(
                    "Configuration '{}' appears before any project header; assigning it to the root project",
                    name
                );
                self.open_project(ROOT_PROJECT_PATH.to_string(), None);
            }
            let builder = if self.has_configuration(&name) {
                self.diagnostics.push(Diagnostic::new(
                    self.project.as_ref().map(|p| p.path.clone()),
                    Some(name.clone()),
                    ParseIssue::DuplicateConfiguration {
                        line_number,
                        configuration: name.clone(),
                    },
                ));
                ConfigurationBuilder::discarded(name)
            } else {
                ConfigurationBuilder::new(name, description)
            };
            self.configuration = Some(builder);
            return;
        }

        match self.configuration.as_ref().map(|c| c.state) {
            Some(BodyState::Open) => self.abort_configuration(ParseIssue::malformed_line(
                line_number,
                line,
                "text is neither a dependency line nor a section header",
            )),
            _ => tracing::debug!("Ignoring report line {}: {}", line_number, text),
        }
    }

    fn open_project(&mut self, path: String, description: Option<String>) {
        self.finish_project();
        let merge_into = self.projects.iter().position(|p| p.path() == path);
        if merge_into.is_some() {
            tracing::debug!("Project '{}' listed again; merging its configurations", path);
        }
        self.project = Some(ProjectBuilder {
            path,
            description,
            configurations: Vec::new(),
            merge_into,
        });
    }

    /// Whether the open project already has a configuration with this name
    fn has_configuration(&self, name: &str) -> bool {
        let Some(project) = self.project.as_ref() else {
            return false;
        };
        project.configurations.iter().any(|c| c.name() == name)
            || project
                .merge_into
                .and_then(|index| self.projects.get(index))
                .is_some_and(|earlier| earlier.configuration(name).is_some())
    }

    fn report_orphan(&mut self, line_number: usize, line: &str) {
        if self.orphan_reported {
            return;
        }
        self.orphan_reported = true;
        self.diagnostics.push(Diagnostic::new(
            self.project.as_ref().map(|p| p.path.clone()),
            None,
            ParseIssue::malformed_line(
                line_number,
                line,
                "dependency line outside of any configuration",
            ),
        ));
    }

    fn abort_configuration(&mut self, issue: ParseIssue) {
        let project = self.project.as_ref().map(|p| p.path.clone());
        if let Some(configuration) = self.configuration.as_mut() {
            tracing::debug!(
                "Aborting configuration '{}' at line {}",
                configuration.name,
                issue.line_number()
            );
            configuration.aborted = true;
            configuration.state = BodyState::Skipping;
            self.diagnostics.push(Diagnostic::new(
                project,
                Some(configuration.name.clone()),
                issue,
            ));
        }
    }

    fn finish_configuration(&mut self) {
        let Some(builder) = self.configuration.take() else {
            return;
        };
        if builder.discarded {
            return;
        }
        let forest = builder.assembler.finish();
        let project_path = self.project.as_ref().map(|p| p.path.clone());

        for warning in forest.warnings {
            self.diagnostics.push(Diagnostic::new(
                project_path.clone(),
                Some(builder.name.clone()),
                warning,
            ));
        }

        let section = ConfigurationSection::new(
            builder.name,
            builder.description,
            builder.is_empty,
            builder.aborted,
            forest.nodes,
            forest.roots,
        );
        if let Some(project) = self.project.as_mut() {
            project.configurations.push(section);
        }
    }

    fn finish_project(&mut self) {
        self.finish_configuration();
        let Some(project) = self.project.take() else {
            return;
        };
        match project.merge_into.and_then(|index| self.projects.get_mut(index)) {
            Some(earlier) => earlier.absorb(project.description, project.configurations),
            None => self.projects.push(ProjectSection::new(
                project.path,
                project.description,
                project.configurations,
            )),
        }
    }

    fn finish(mut self) -> ParsedReport {
        self.finish_project();

        // Warnings are collected per configuration at its end; restore report order
        self.diagnostics.sort_by_key(|d| d.issue.line_number());

        ParsedReport {
            document: ReportDocument::new(self.projects),
            diagnostics: self.diagnostics,
        }
    }
}
