use clap::Parser;
use std::path::PathBuf;

use deptree_report::application::dto::OutputFormat;
use deptree_report::ports::outbound::ReportSource;
use deptree_report::report_parsing::domain::{DependencyRule, Selection};

/// Path argument that stands for standard input
const STDIN_MARKER: &str = "-";

/// Parse indented build-tool dependency reports into per-configuration dependency trees
#[derive(Parser, Debug)]
#[command(name = "deptree-report")]
#[command(version)]
#[command(about = "Parse Gradle-style dependency reports into per-configuration dependency trees", long_about = None)]
pub struct Args {
    /// Report files to parse; reads standard input when none (or `-`) is given
    #[arg(value_name = "REPORT")]
    pub reports: Vec<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep only these projects (path, ALL or NONE). Can be repeated
    #[arg(long = "include-project", value_name = "PROJECT")]
    pub include_projects: Vec<Selection<String>>,

    /// Drop these projects (path, ALL or NONE). Can be repeated
    #[arg(long = "exclude-project", value_name = "PROJECT")]
    pub exclude_projects: Vec<Selection<String>>,

    /// Keep only these configurations (name, ALL or NONE). Can be repeated
    #[arg(long = "include-configuration", value_name = "CONFIGURATION")]
    pub include_configurations: Vec<Selection<String>>,

    /// Drop these configurations (name, ALL or NONE). Can be repeated
    #[arg(long = "exclude-configuration", value_name = "CONFIGURATION")]
    pub exclude_configurations: Vec<Selection<String>>,

    /// Dependency kinds to keep: project, module, ALL or NONE. Can be repeated
    #[arg(long = "dependency-rule", value_name = "RULE")]
    pub dependency_rules: Vec<Selection<DependencyRule>>,

    /// Drop project dependencies that point at the project being reported
    #[arg(long)]
    pub suppress_self_references: bool,

    /// Exit with code 1 when any report produced an error diagnostic
    #[arg(long)]
    pub fail_on_diagnostics: bool,

    /// Configuration file (defaults to ./deptree-report.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Report sources in command-line order
    pub fn sources(&self) -> Vec<ReportSource> {
        if self.reports.is_empty() {
            return vec![ReportSource::Stdin];
        }
        self.reports
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_MARKER {
                    ReportSource::Stdin
                } else {
                    ReportSource::File(path.clone())
                }
            })
            .collect()
    }
}
