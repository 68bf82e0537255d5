use crate::core::session::Session;
use crate::core::{ConfigProvider, ReportStore};
use crate::utils::error::{Result, StatsError};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Writes the report to a single file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ReportStore for LocalStorage {
    async fn write_report(&self, report: &str) -> Result<()> {
        let write_err = |source| StatsError::ReportWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        tokio::fs::write(&self.path, report).await.map_err(write_err)?;
        tracing::debug!("Wrote {} bytes to {}", report.len(), self.path.display());
        Ok(())
    }

    async fn read_report(&self) -> Result<String> {
        let report = tokio::fs::read_to_string(&self.path).await?;
        Ok(report)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl<R: BufRead, W: Write> Session<R, W, LocalStorage> {
    /// Session writing to the configured report file with the configured quit token.
    pub fn from_config<C: ConfigProvider>(input: R, output: W, config: &C) -> Self {
        Session::new(input, output, LocalStorage::new(config.output_path()))
            .with_quit_token(config.quit_token())
    }
}
