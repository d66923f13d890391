//! Configuration file support for deptree-report.
//!
//! Provides YAML-based configuration through `deptree-report.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::report_parsing::domain::{DependencyRule, Selection};
use crate::report_parsing::services::FilterCriteria;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree-report.config.yml";

/// Top-level configuration file schema.
///
/// Selection lists take concrete names plus the `ALL` / `NONE` sentinels.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub included_projects: Option<Vec<String>>,
    pub excluded_projects: Option<Vec<String>>,
    pub included_configurations: Option<Vec<String>>,
    pub excluded_configurations: Option<Vec<String>>,
    pub dependency_rules: Option<Vec<String>>,
    pub suppress_self_references: Option<bool>,
    pub fail_on_diagnostics: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Builds filter criteria from the file; absent lists keep their defaults
    ///
    /// # Errors
    /// Returns an error if a dependency rule is not recognized
    pub fn filter_criteria(&self) -> Result<FilterCriteria> {
        let defaults = FilterCriteria::default();
        Ok(FilterCriteria {
            included_projects: names_or(&self.included_projects, defaults.included_projects),
            excluded_projects: names_or(&self.excluded_projects, defaults.excluded_projects),
            included_configurations: names_or(
                &self.included_configurations,
                defaults.included_configurations,
            ),
            excluded_configurations: names_or(
                &self.excluded_configurations,
                defaults.excluded_configurations,
            ),
            dependency_rules: match &self.dependency_rules {
                Some(values) => parse_selections::<DependencyRule>(values)
                    .map_err(|e| anyhow::anyhow!(e))?,
                None => defaults.dependency_rules,
            },
            suppress_self_references: self
                .suppress_self_references
                .unwrap_or(defaults.suppress_self_references),
        })
    }
}

/// Parses each string as a selection, stopping at the first invalid value
pub fn parse_selections<T: FromStr>(
    values: &[String],
) -> std::result::Result<Vec<Selection<T>>, T::Err> {
    values.iter().map(|v| v.parse()).collect()
}

fn names_or(values: &Option<Vec<String>>, default: Vec<Selection<String>>) -> Vec<Selection<String>> {
    match values {
        Some(values) => parse_selections::<String>(values).unwrap_or_else(|never| match never {}),
        None => default,
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        ReportError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
            hint: "Ensure the file contains valid YAML and 'format' is 'json' or 'markdown'."
                .to_string(),
        }
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let lists = [
        ("included_projects", &config.included_projects),
        ("excluded_projects", &config.excluded_projects),
        ("included_configurations", &config.included_configurations),
        ("excluded_configurations", &config.excluded_configurations),
        ("dependency_rules", &config.dependency_rules),
    ];
    for (field, values) in lists {
        let Some(values) = values else { continue };
        if let Some(i) = values.iter().position(|v| v.trim().is_empty()) {
            return Err(ReportError::ConfigError {
                path: path.to_path_buf(),
                details: format!("{}[{}] must not be empty", field, i),
                hint: "Use a name, 'ALL' or 'NONE'.".to_string(),
            }
            .into());
        }
    }

    if let Some(rules) = &config.dependency_rules {
        parse_selections::<DependencyRule>(rules).map_err(|details| ReportError::ConfigError {
            path: path.to_path_buf(),
            details,
            hint: "Valid dependency rules are 'project', 'module', 'ALL' and 'NONE'.".to_string(),
        })?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field ignored");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
included_projects:
  - ":app"
  - lib
excluded_configurations:
  - testCompile
dependency_rules:
  - module
suppress_self_references: true
fail_on_diagnostics: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Markdown));
        assert_eq!(config.fail_on_diagnostics, Some(true));

        let criteria = config.filter_criteria().unwrap();
        assert_eq!(
            criteria.included_projects,
            vec![
                Selection::Value(":app".to_string()),
                Selection::Value("lib".to_string())
            ]
        );
        assert!(criteria.excluded_projects.is_empty());
        assert_eq!(
            criteria.excluded_configurations,
            vec![Selection::Value("testCompile".to_string())]
        );
        assert_eq!(
            criteria.dependency_rules,
            vec![Selection::Value(DependencyRule::Module)]
        );
        assert!(criteria.suppress_self_references);
    }

    #[test]
    fn test_sentinels_in_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "included_configurations: [NONE]\ndependency_rules: [all]\n",
        )
        .unwrap();

        let criteria = load_config_from_path(&config_path)
            .unwrap()
            .filter_criteria()
            .unwrap();
        assert_eq!(criteria.included_configurations, vec![Selection::None]);
        assert_eq!(criteria.dependency_rules, vec![Selection::All]);
        assert_eq!(criteria.included_projects, vec![Selection::All]);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.filter_criteria().unwrap(), FilterCriteria::default());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid configuration file"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_invalid_dependency_rule_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "dependency_rules: [plugins]\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid dependency rule: plugins"));
    }

    #[test]
    fn test_empty_selection_value_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "excluded_projects:\n  - \"\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("excluded_projects[0] must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: json\ncheck_cve: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("check_cve"));
    }
}
