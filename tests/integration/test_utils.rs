//! Shared test utilities for integration tests
//!
//! Each test gets its own temp directory standing in for the working directory,
//! so the default config file path never touches the real one.

use axe_crawler::logging::{LogRecord, MemorySink, Severity};
use axe_crawler::OptionsResolver;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestWorkspace {
    pub dir: TempDir,
    pub sink: Arc<MemorySink>,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            sink: Arc::new(MemorySink::new()),
        }
    }

    /// Path the resolver treats as `./.axe-crawler.json`.
    pub fn default_config_path(&self) -> PathBuf {
        self.dir.path().join(".axe-crawler.json")
    }

    pub fn write_default_config(&self, contents: &str) {
        std::fs::write(self.default_config_path(), contents).unwrap();
    }

    pub fn resolver(&self) -> OptionsResolver {
        OptionsResolver::new()
            .with_sink(self.sink.clone())
            .with_default_config_path(self.default_config_path())
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.sink.records()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.severity == Severity::Error && !r.forced)
            .map(|r| r.message)
            .collect()
    }
}
