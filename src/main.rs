mod cli;

use cli::Args;
use deptree_report::adapters::outbound::console::StderrProgressReporter;
use deptree_report::adapters::outbound::filesystem::FileSystemReader;
use deptree_report::application::dto::ParseRequest;
use deptree_report::application::factories::{FormatterFactory, PresenterFactory};
use deptree_report::application::read_models::ReportReadModelBuilder;
use deptree_report::application::use_cases::ParseReportsUseCase;
use deptree_report::config::{self, ConfigFile};
use deptree_report::report_parsing::domain::Selection;
use deptree_report::report_parsing::services::FilterCriteria;
use deptree_report::shared::error::ExitCode;
use deptree_report::shared::Result;
use std::process;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr so they never mix with a report written to stdout.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "deptree_report=debug"
    } else {
        "deptree_report=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => match config::discover_config(&std::env::current_dir()?)? {
            Some(config) => {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
                config
            }
            None => ConfigFile::default(),
        },
    };

    let format = args.format.or(config.format).unwrap_or_default();
    let fail_on_diagnostics = args.fail_on_diagnostics || config.fail_on_diagnostics.unwrap_or(false);
    let criteria = merge_criteria(&args, &config)?;
    tracing::debug!(?criteria, %format, "resolved settings");

    let request = ParseRequest::builder()
        .sources(args.sources())
        .criteria(criteria)
        .build()?;

    // Create adapters (Dependency Injection)
    let use_case = ParseReportsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let model = ReportReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterFactory::from_output(args.output));
    presenter.present(&formatted_output)?;

    if fail_on_diagnostics && response.has_errors() {
        eprintln!("❌ Error diagnostics found in the parsed report(s).");
        return Ok(ExitCode::DiagnosticsFound);
    }
    Ok(ExitCode::Success)
}

/// Command-line selections replace the config file's list for the same field
fn merge_criteria(args: &Args, config: &ConfigFile) -> Result<FilterCriteria> {
    let from_config = config.filter_criteria()?;

    Ok(FilterCriteria {
        included_projects: prefer_cli(&args.include_projects, from_config.included_projects),
        excluded_projects: prefer_cli(&args.exclude_projects, from_config.excluded_projects),
        included_configurations: prefer_cli(
            &args.include_configurations,
            from_config.included_configurations,
        ),
        excluded_configurations: prefer_cli(
            &args.exclude_configurations,
            from_config.excluded_configurations,
        ),
        dependency_rules: prefer_cli(&args.dependency_rules, from_config.dependency_rules),
        suppress_self_references: args.suppress_self_references
            || from_config.suppress_self_references,
    })
}

fn prefer_cli<T: Clone>(cli: &[Selection<T>], fallback: Vec<Selection<T>>) -> Vec<Selection<T>> {
    if cli.is_empty() {
        fallback
    } else {
        cli.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use deptree_report::report_parsing::domain::DependencyRule;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("deptree-report").chain(extra.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_merge_defaults() {
        let criteria = merge_criteria(&args(&[]), &ConfigFile::default()).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_merge_config_values_used_when_cli_silent() {
        let config = ConfigFile {
            excluded_configurations: Some(vec!["testCompile".to_string()]),
            dependency_rules: Some(vec!["project".to_string()]),
            suppress_self_references: Some(true),
            ..ConfigFile::default()
        };
        let criteria = merge_criteria(&args(&[]), &config).unwrap();

        assert_eq!(
            criteria.excluded_configurations,
            vec![Selection::Value("testCompile".to_string())]
        );
        assert_eq!(
            criteria.dependency_rules,
            vec![Selection::Value(DependencyRule::Project)]
        );
        assert!(criteria.suppress_self_references);
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = ConfigFile {
            included_projects: Some(vec![":lib".to_string()]),
            dependency_rules: Some(vec!["project".to_string()]),
            ..ConfigFile::default()
        };
        let criteria = merge_criteria(
            &args(&["--include-project", ":app", "--dependency-rule", "ALL"]),
            &config,
        )
        .unwrap();

        assert_eq!(
            criteria.included_projects,
            vec![Selection::Value(":app".to_string())]
        );
        assert_eq!(criteria.dependency_rules, vec![Selection::All]);
    }

    #[test]
    fn test_merge_rejects_invalid_config_rule() {
        let config = ConfigFile {
            dependency_rules: Some(vec!["plugin".to_string()]),
            ..ConfigFile::default()
        };
        assert!(merge_criteria(&args(&[]), &config).is_err());
    }
}
