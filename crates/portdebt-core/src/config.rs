//! Configuration types for portdebt.
//!
//! [`Config::load`] layers `~/.config/portdebt/config.toml` (if present) and
//! any extra file the caller names on top of the built-in defaults. Nothing
//! is ever written back. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[encoding]
size_scale      = 0.0000001
min_size        = 0.5
max_size        = 5.0
base_hue        = 120.0
hue_per_percent = 1.2
saturation      = 100.0
lightness       = 50.0

[source]
skip_rows        = 2
required_columns = ["Country Name", "Debt to China"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/portdebt/config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub encoding: EncodingConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// `[encoding]` section: marker size and colour mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EncodingConfig {
    #[serde(default = "default_size_scale")]
    pub size_scale: f64,
    #[serde(default = "default_min_size")]
    pub min_size: f64,
    #[serde(default = "default_max_size")]
    pub max_size: f64,
    #[serde(default = "default_base_hue")]
    pub base_hue: f64,
    #[serde(default = "default_hue_per_percent")]
    pub hue_per_percent: f64,
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    #[serde(default = "default_lightness")]
    pub lightness: f64,
}

fn default_size_scale() -> f64 { crate::encoding::SIZE_SCALE }
fn default_min_size() -> f64 { crate::encoding::MIN_SIZE }
fn default_max_size() -> f64 { crate::encoding::MAX_SIZE }
fn default_base_hue() -> f64 { crate::encoding::BASE_HUE }
fn default_hue_per_percent() -> f64 { crate::encoding::HUE_PER_PERCENT }
fn default_saturation() -> f64 { crate::encoding::SATURATION }
fn default_lightness() -> f64 { crate::encoding::LIGHTNESS }

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            size_scale: default_size_scale(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            base_hue: default_base_hue(),
            hue_per_percent: default_hue_per_percent(),
            saturation: default_saturation(),
            lightness: default_lightness(),
        }
    }
}

/// `[source]` section: how raw records are loaded and cleaned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceConfig {
    /// Lines above the CSV header row (title, notes) to discard.
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
    /// Rows lacking any of these columns are dropped before normalisation.
    #[serde(default = "default_required_columns")]
    pub required_columns: Vec<String>,
}

fn default_skip_rows() -> usize { 2 }
fn default_required_columns() -> Vec<String> {
    vec!["Country Name".to_string(), "Debt to China".to_string()]
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            skip_rows: default_skip_rows(),
            required_columns: default_required_columns(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/portdebt/config.toml` and then `extra`, each
    /// layered on top of the built-in defaults. Missing user config is fine;
    /// a missing `extra` file is an error.
    pub fn load(extra: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();
        tracing::debug!(path = %path.display(), "loading config");

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false));
        if let Some(extra) = extra {
            builder = builder.add_source(config::File::from(extra).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("portdebt")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
