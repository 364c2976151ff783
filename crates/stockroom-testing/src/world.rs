//! TestWorld pattern for CLI integration tests.
//!
//! Every world gets its own temp directory holding `config.toml`,
//! `catalog.json` and the log file, and passes `--config` explicitly so the
//! user's real configuration is never read.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use stockroom_types::Product;
use tempfile::TempDir;

use crate::fixtures::write_catalog;

pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").expect("Failed to write config");

        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Replace the config file contents.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write `products` to `catalog.json` and point the config at it.
    pub fn with_catalog(self, products: &[Product]) -> Self {
        let catalog_path = self.temp_dir.path().join("catalog.json");
        write_catalog(&catalog_path, products).expect("Failed to write catalog");

        let config = format!(
            "[catalog]\nseed_file = {:?}\n",
            catalog_path.display().to_string()
        );
        self.with_config(&config)
    }

    /// Apply the world's working directory and config path to a command.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env_remove("STOCKROOM_CONFIG")
            .arg("--config")
            .arg(&self.config_path)
    }

    /// Run the `stockroom` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("stockroom")
            .map_err(|e| anyhow::anyhow!("Failed to find stockroom binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
