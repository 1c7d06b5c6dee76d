//! Path resolution for the config file and history store.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_dir, CalcConfig};

/// Resolve the config file path, checking CALC_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("CALC_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the history store directory.
///
/// Order: `--store` / `CALC_STORE`, then `[store] dir` in config, then
/// `$XDG_DATA_HOME/calc`.
pub fn resolve_store_dir(cli: &Cli, config: &CalcConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.store.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.store.dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_store_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["calc", "--store", "/tmp/flag", "keys"]).unwrap();
        let mut config = CalcConfig::default();
        config.store.dir = Some("/tmp/config".to_string());
        assert_eq!(
            resolve_store_dir(&cli, &config).unwrap(),
            PathBuf::from("/tmp/flag")
        );
    }

    #[test]
    fn test_config_dir_used_without_flag() {
        let mut cli = Cli::try_parse_from(["calc", "keys"]).unwrap();
        cli.store = None;
        let mut config = CalcConfig::default();
        config.store.dir = Some("/tmp/config".to_string());
        assert_eq!(
            resolve_store_dir(&cli, &config).unwrap(),
            PathBuf::from("/tmp/config")
        );
    }
}
