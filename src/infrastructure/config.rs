use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};
use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::layout::{PaneBounds, PaneLayout, PaneLayoutError},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Initial widths and bounds of one pane row
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RowConfig {
    pub widths: Vec<f64>,
    /// `[min, max]` per pane
    pub bounds: Vec<[f64; 2]>,
}

impl RowConfig {
    pub fn build(&self) -> Result<PaneLayout, PaneLayoutError> {
        let bounds = self
            .bounds
            .iter()
            .map(|[min, max]| PaneBounds::new(*min, *max))
            .collect();
        PaneLayout::new(self.widths.clone(), bounds)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub home: RowConfig,
    pub topic: RowConfig,
    /// Percent moved per keyboard resize
    pub resize_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            home: RowConfig {
                widths: vec![75.0, 25.0],
                bounds: vec![[50.0, 85.0], [15.0, 50.0]],
            },
            topic: RowConfig {
                widths: vec![25.0, 50.0, 25.0],
                bounds: vec![[20.0, 40.0], [30.0, 60.0], [20.0, 40.0]],
            },
            resize_step: 2.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        self.home
            .build()
            .map_err(|e| eyre!("invalid home layout: {e}"))?;
        self.topic
            .build()
            .map_err(|e| eyre!("invalid topic layout: {e}"))?;
        if !self.resize_step.is_finite() || self.resize_step <= 0.0 {
            return Err(eyre!(
                "invalid resize step {}, expected a positive number",
                self.resize_step
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub reply_delay_ms: u64,
    pub reply_text: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            reply_text: "This is a dummy response from the agent.".to_string(),
        }
    }
}

/// Signed-in user shown in the header
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub role: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "BigHank9000".to_string(),
            role: "researcher".to_string(),
        }
    }
}

impl Config {
    /// Built-in configuration shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load the user configuration on top of the built-in one.
    /// A missing user file is fine; an invalid layout is not.
    pub fn new() -> Result<Self> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        cfg.layout.validate()?;
        Ok(cfg)
    }
}
