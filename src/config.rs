//! Configuration for student-records
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{RecordsError, Result};

/// Main configuration for a records session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding the whole collection as a JSON array
    pub records_path: PathBuf,

    // -------------------------------------------------------------------------
    // Validation Configuration
    // -------------------------------------------------------------------------
    /// Which characters are accepted in names and subjects
    pub name_policy: NamePolicy,
}

/// Validation policy for names and subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Letters only ("Mary", not "Mary Jane" or "Mary-Jane")
    #[default]
    Strict,

    /// Letters, plus single spaces between words ("Van Der Berg")
    AllowSpaces,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(Self::DEFAULT_RECORDS_FILE),
            name_policy: NamePolicy::Strict,
        }
    }
}

impl Config {
    /// File used when no path is given
    pub const DEFAULT_RECORDS_FILE: &'static str = "student_records.json";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations that cannot name a backing file
    pub fn validate(&self) -> Result<()> {
        if self.records_path.as_os_str().is_empty() {
            return Err(RecordsError::Config("records path is empty".to_string()));
        }
        if self.records_path.is_dir() {
            return Err(RecordsError::Config(format!(
                "records path {} is a directory",
                self.records_path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn records_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.records_path = path.into();
        self
    }

    /// Set the name/subject validation policy
    pub fn name_policy(mut self, policy: NamePolicy) -> Self {
        self.config.name_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
