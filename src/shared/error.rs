use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean parse from a parse
/// that produced error diagnostics and from outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - reports parsed (diagnostics tolerated unless requested otherwise)
    Success = 0,
    /// Error diagnostics were found and `--fail-on-diagnostics` was given
    DiagnosticsFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, configuration, output, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DiagnosticsFound => write!(f, "Diagnostics Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors around report parsing.
///
/// Parse problems inside a report are not errors here; they are collected as
/// diagnostics on the parsed document.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Dependency report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read dependency report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ReportReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns and option values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid configuration file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::DiagnosticsFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::DiagnosticsFound),
            "Diagnostics Found (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_report_not_found_display() {
        let error = ReportError::ReportNotFound {
            path: PathBuf::from("/build/deps.txt"),
            suggestion: "Run `gradle dependencies > deps.txt` first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Dependency report not found"));
        assert!(display.contains("/build/deps.txt"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("gradle dependencies"));
    }

    #[test]
    fn test_report_read_error_display() {
        let error = ReportError::ReportReadError {
            path: PathBuf::from("/build/deps.txt"),
            details: "stream did not contain valid UTF-8".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read dependency report"));
        assert!(display.contains("valid UTF-8"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ReportError::ConfigError {
            path: PathBuf::from("deptree-report.config.yml"),
            details: "unknown format 'xml'".to_string(),
            hint: "Use 'json' or 'markdown'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration file"));
        assert!(display.contains("unknown format 'xml'"));
        assert!(display.contains("Use 'json' or 'markdown'"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ReportError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
    }
}
