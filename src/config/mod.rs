//! Configuration management for the universe driver

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, OutputFormat, Settings, SimulationConfig, MAX_TICKS_PER_FRAME,
};
