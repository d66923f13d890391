use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "deptree-report";

/// ReportMetadata value object describing one parsing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, run_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    /// Stamps a run with the current time and a fresh `urn:uuid:` identifier
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    pub fn generate_default() -> Self {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadata::generate("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.run_id().starts_with("urn:uuid:"));
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportMetadata::generate_default();
        assert_eq!(metadata.tool_name(), "deptree-report");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_run_ids_are_unique() {
        let first = ReportMetadata::generate_default();
        let second = ReportMetadata::generate_default();
        assert_ne!(first.run_id(), second.run_id());
    }
}
