/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const CONFIG_FILENAME: &str = "deptree-report.config.yml";

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy the sample report into a scratch directory.
fn create_report(dir: &Path) -> PathBuf {
    let report = dir.join("deps.txt");
    fs::copy(fixtures_path().join("sample-report.txt"), &report).unwrap();
    report
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_exclusions() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());

        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
excluded_projects:
  - ":core"
excluded_configurations:
  - annotationProcessor
"#,
        );

        let output = cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .output()
            .unwrap();

        assert!(output.status.success());
        let value = json(&output.stdout);
        let projects = value["sources"][0]["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        let names: Vec<_> = projects[0]["configurations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["compileClasspath", "testCompileClasspath"]);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "format: markdown\n");

        let output = cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Dependency Report"));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());

        let output = cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .output()
            .unwrap();

        assert!(output.status.success());
        // Default format is JSON
        assert_eq!(json(&output.stdout)["summary"]["configurations"], 4);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            r#"
included_configurations: [compileClasspath]
dependency_rules: [module]
"#,
        );

        let output = cargo_bin_cmd!("deptree-report")
            .arg(&report)
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let value = json(&output.stdout);
        let root_compile = &value["sources"][0]["projects"][0]["configurations"][0];
        assert_eq!(root_compile["name"], "compileClasspath");
        let dependencies = root_compile["dependencies"].as_array().unwrap();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0]["artifact"], "commons-lang3");
    }

    #[test]
    fn test_missing_explicit_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());

        cargo_bin_cmd!("deptree-report")
            .arg(&report)
            .args(["--config", "/nonexistent/deptree-report.config.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "dependency_rules: [plugins]\n");

        let output = cargo_bin_cmd!("deptree-report")
            .arg(&report)
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid configuration file"));
        assert!(stderr.contains("Invalid dependency rule: plugins"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "format: json\nexclude_packages: [pip]\n");

        let output = cargo_bin_cmd!("deptree-report")
            .arg(&report)
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'exclude_packages'"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());
        write_config(&dir.path().join(CONFIG_FILENAME), "format: markdown\n");

        let output = cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .args(["-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(json(&output.stdout)["metadata"].is_object());
    }

    #[test]
    fn test_cli_selection_replaces_config_list() {
        let dir = TempDir::new().unwrap();
        let report = create_report(dir.path());
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "included_projects: [\":core\"]\n",
        );

        let output = cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .args(["--include-project", "ALL", "--exclude-project", ":core"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value = json(&output.stdout);
        let projects = value["sources"][0]["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["path"], ":");
    }

    #[test]
    fn test_fail_on_diagnostics_from_config() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("broken.txt");
        fs::copy(fixtures_path().join("broken-report.txt"), &report).unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "fail_on_diagnostics: true\n",
        );

        cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .assert()
            .code(1);
    }

    #[test]
    fn test_suppress_self_references_flag() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("self.txt");
        fs::write(
            &report,
            "Project :app\n\ncompile\n+--- project :app\n\\--- g:a:1.0\n",
        )
        .unwrap();

        let output = cargo_bin_cmd!("deptree-report")
            .current_dir(dir.path())
            .arg(&report)
            .arg("--suppress-self-references")
            .output()
            .unwrap();

        assert!(output.status.success());
        let value = json(&output.stdout);
        let dependencies = value["sources"][0]["projects"][0]["configurations"][0]["dependencies"]
            .as_array()
            .unwrap();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0]["kind"], "module");
    }
}
