use deptree_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ReportReader serving report texts from memory
#[derive(Default, Clone)]
pub struct MockReportReader {
    reports: HashMap<String, String>,
    failing: Vec<String>,
    pub reads: Arc<Mutex<Vec<String>>>,
}

impl MockReportReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the text returned for `source` (`<stdin>` for standard input)
    pub fn with_report(mut self, source: &str, content: &str) -> Self {
        self.reports.insert(source.to_string(), content.to_string());
        self
    }

    pub fn with_failure(mut self, source: &str) -> Self {
        self.failing.push(source.to_string());
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, source: &ReportSource) -> Result<String> {
        let key = source.to_string();
        self.reads.lock().unwrap().push(key.clone());

        if self.failing.contains(&key) {
            anyhow::bail!("Mock report read failure: {}", key);
        }
        self.reports
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Dependency report not found: {}", key))
    }
}
