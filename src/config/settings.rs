//! Configuration settings for the universe driver

use crate::game_of_life::UniverseOption;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for generations advanced per frame
pub const MAX_TICKS_PER_FRAME: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub universe: UniverseOption,
    pub ticks_per_frame: u32,
    pub frames: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub show_fps: bool,
    pub show_grid: bool,
    pub frame_delay_ms: u64,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                width: 64,
                height: 64,
                universe: UniverseOption::Dead,
                ticks_per_frame: 1,
                frames: 100,
            },
            display: DisplayConfig {
                show_fps: false,
                show_grid: true,
                frame_delay_ms: 0,
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.width == 0 || self.simulation.height == 0 {
            anyhow::bail!(
                "Universe dimensions must be positive, got {}x{}",
                self.simulation.width,
                self.simulation.height
            );
        }

        if !(1..=MAX_TICKS_PER_FRAME).contains(&self.simulation.ticks_per_frame) {
            anyhow::bail!(
                "Ticks per frame must be between 1 and {}, got {}",
                MAX_TICKS_PER_FRAME,
                self.simulation.ticks_per_frame
            );
        }

        if self.simulation.frames == 0 {
            anyhow::bail!("Number of frames must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(universe) = cli_overrides.universe {
            self.simulation.universe = universe;
        }
        if let Some(ticks_per_frame) = cli_overrides.ticks_per_frame {
            self.simulation.ticks_per_frame = ticks_per_frame;
        }
        if let Some(frames) = cli_overrides.frames {
            self.simulation.frames = frames;
        }
        if let Some(show_fps) = cli_overrides.show_fps {
            self.display.show_fps = show_fps;
        }
        if let Some(format) = cli_overrides.format {
            self.display.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub universe: Option<UniverseOption>,
    pub ticks_per_frame: Option<u32>,
    pub frames: Option<usize>,
    pub show_fps: Option<bool>,
    pub format: Option<OutputFormat>,
}
