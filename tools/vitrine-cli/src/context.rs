//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use vitrine_commerce::catalog::Catalog;
use vitrine_router::Router;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog named in the config, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        match self.config.store.catalog {
            Some(ref path) => {
                let resolved = self.resolve_path(path);
                self.output
                    .debug(&format!("Loading catalog feed: {}", resolved.display()));
                Catalog::load(&resolved)
                    .with_context(|| format!("Failed to load catalog: {}", resolved.display()))
            }
            None => Ok(Catalog::seed()),
        }
    }

    /// Router mounted at the configured base path.
    pub fn router(&self) -> Router {
        Router::new(&self.config.store.base_path)
    }

    /// Resolve a path relative to the config file, or the working directory
    /// when no config file was found.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        let base = self
            .config_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}
