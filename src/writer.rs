//! Persistence of finished report records into the results directory.

use crate::config::Config;
use crate::error::WriterResult;
use crate::models::TestReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default directory Allure tooling reads results from.
pub const DEFAULT_RESULTS_DIR: &str = "allure-results";

/// Writes finalized report records and environment info to the results directory.
#[derive(Debug, Clone)]
pub struct ResultsWriter {
    results_dir: PathBuf,
}

impl ResultsWriter {
    /// Create a writer targeting the given directory.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        ResultsWriter {
            results_dir: results_dir.into(),
        }
    }

    /// Create a writer from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.results_dir)
    }

    /// The directory this writer targets.
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Write a finished record as `<uuid>-result.json`, creating the results
    /// directory if needed. Returns the written path.
    pub fn write_result(&self, report: &TestReport) -> WriterResult<PathBuf> {
        fs::create_dir_all(&self.results_dir)?;

        let path = self
            .results_dir
            .join(format!("{}-result.json", report.uuid));
        let json = serde_json::to_vec_pretty(report)?;
        fs::write(&path, json)?;

        debug!("Wrote result record: {}", path.display());
        Ok(path)
    }

    /// Write `environment.properties` from key-value pairs, one per line.
    ///
    /// Allure surfaces these on the report's environment widget.
    pub fn write_environment<'a, I>(&self, entries: I) -> WriterResult<PathBuf>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        fs::create_dir_all(&self.results_dir)?;

        let mut contents = String::new();
        for (key, value) in entries {
            contents.push_str(key);
            contents.push('=');
            contents.push_str(value);
            contents.push('\n');
        }

        let path = self.results_dir.join("environment.properties");
        fs::write(&path, contents)?;

        debug!("Wrote environment properties: {}", path.display());
        Ok(path)
    }
}

impl Default for ResultsWriter {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_DIR)
    }
}
