use crate::error::ConfigError;
use crate::icons::{AsciiIcons, IconSet, UnicodeIcons};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

pub const MIN_BREAKPOINT: u16 = 40;
pub const TICK_RANGE_MS: (u64, u64) = (10, 5000);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Auto,
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn resolve(&self, columns: u16, breakpoint: u16) -> Viewport {
        match self {
            LayoutMode::Desktop => Viewport::Desktop,
            LayoutMode::Mobile => Viewport::Mobile,
            LayoutMode::Auto if columns >= breakpoint => Viewport::Desktop,
            LayoutMode::Auto => Viewport::Mobile,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Unicode,
    Ascii,
}

impl IconStyle {
    pub fn icon_set(&self) -> Box<dyn IconSet> {
        match self {
            IconStyle::Unicode => Box::new(UnicodeIcons),
            IconStyle::Ascii => Box::new(AsciiIcons),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u16,
    #[serde(default)]
    pub icons: IconStyle,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

pub fn default_breakpoint() -> u16 {
    110
}

pub fn default_tick_ms() -> u64 {
    250
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            breakpoint: default_breakpoint(),
            icons: IconStyle::default(),
            tick_ms: default_tick_ms(),
            log_file: None,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint < MIN_BREAKPOINT {
            return Err(ConfigError::BreakpointTooSmall {
                min: MIN_BREAKPOINT,
                got: self.breakpoint,
            });
        }
        let (min, max) = TICK_RANGE_MS;
        if !(min..=max).contains(&self.tick_ms) {
            return Err(ConfigError::TickOutOfRange {
                min,
                max,
                got: self.tick_ms,
            });
        }
        Ok(())
    }
}

/// Reads a JSON config. A missing file yields the defaults.
pub async fn load_config(path: &Path) -> Result<ViewerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ViewerConfig::default());
    }
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layout_resolution() {
        assert_eq!(LayoutMode::Auto.resolve(120, 110), Viewport::Desktop);
        assert_eq!(LayoutMode::Auto.resolve(110, 110), Viewport::Desktop);
        assert_eq!(LayoutMode::Auto.resolve(109, 110), Viewport::Mobile);
        assert_eq!(LayoutMode::Mobile.resolve(300, 110), Viewport::Mobile);
        assert_eq!(LayoutMode::Desktop.resolve(20, 110), Viewport::Desktop);
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = ViewerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        config.breakpoint = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BreakpointTooSmall { got: 10, .. })
        ));
        config.breakpoint = 80;
        config.tick_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TickOutOfRange { got: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = load_config(&dir.path().join("viewer.json")).await?;
        assert_eq!(config, ViewerConfig::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("viewer.json");
        tokio::fs::write(&path, r#"{ "layout": "mobile", "icons": "ascii" }"#).await?;
        let config = load_config(&path).await?;
        assert_eq!(config.layout, LayoutMode::Mobile);
        assert_eq!(config.icons, IconStyle::Ascii);
        assert_eq!(config.breakpoint, 110);
        assert_eq!(config.tick_ms, 250);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("viewer.json");
        tokio::fs::write(&path, r#"{ "breakpoint": 12 }"#).await?;
        let err = load_config(&path).await.unwrap_err();
        assert!(format!("{:#}", err).contains("breakpoint must be at least 40"));

        tokio::fs::write(&path, "not json").await?;
        assert!(load_config(&path).await.is_err());
        Ok(())
    }
}
