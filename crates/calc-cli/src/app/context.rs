//! Application context for the Calc CLI.
//!
//! Combines CLI arguments with lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use calc_core::{Calculator, FileStore};

use crate::cli::Cli;
use crate::config::{read_config_or_default, CalcConfig};
use crate::ui::{Prefs, UiContext};

use super::resolver::{resolve_config_path, resolve_store_dir};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CalcConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&CalcConfig> {
        self.config
            .get_or_try_init(|| read_config_or_default(&resolve_config_path()?))
    }

    pub fn store_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_store_dir(self.cli, self.config()?)
    }

    /// Open a calculator session backed by the history store.
    pub fn open_calculator(&self) -> anyhow::Result<Calculator<FileStore>> {
        let dir = self.store_dir()?;
        tracing::debug!(store = %dir.display(), "opening history store");
        Ok(Calculator::new(FileStore::new(dir)))
    }

    /// UI context from flags, with `[ui]` config as a fallback.
    ///
    /// A broken config file falls back to defaults here; commands that need
    /// the config report the error themselves.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let (config_ascii, config_no_color) = match self.config() {
            Ok(config) => (config.ui.ascii, config.ui.no_color),
            Err(_) => (false, false),
        };
        let prefs = Prefs {
            ascii: self.cli.ascii || config_ascii,
            no_color: self.cli.no_color || config_no_color,
        };
        UiContext::from_env(json, format, prefs)
    }
}
