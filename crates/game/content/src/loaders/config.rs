//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use icy_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the [`GameConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(config.grid_size > 0, "grid_size must be positive");
        anyhow::ensure!(
            config.grid_size <= GameConfig::MAX_GRID_SIZE,
            "grid_size {} exceeds the maximum of {}",
            config.grid_size,
            GameConfig::MAX_GRID_SIZE
        );
        anyhow::ensure!(
            config.king_halt_after > 0 && config.emperor_halt_after > 0,
            "special action halt limits must be positive"
        );
        tracing::debug!(?config, "loaded game config");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_overrides_and_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid_size = 12\nking_halt_after = 4").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.king_halt_after, 4);
        assert_eq!(
            config.emperor_halt_after,
            GameConfig::DEFAULT_EMPEROR_HALT_AFTER
        );
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn zero_grid_is_rejected() {
        assert!(ConfigLoader::parse("grid_size = 0").is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let too_big = format!("grid_size = {}", GameConfig::MAX_GRID_SIZE + 1);
        assert!(ConfigLoader::parse(&too_big).is_err());
        assert!(ConfigLoader::parse("grid_size = 18446744073709551615").is_err());

        let largest = format!("grid_size = {}", GameConfig::MAX_GRID_SIZE);
        assert_eq!(
            ConfigLoader::parse(&largest).unwrap().grid_size,
            GameConfig::MAX_GRID_SIZE
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let error = ConfigLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("absent.toml"));
    }
}
