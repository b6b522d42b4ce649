//! Conway's Game of Life universe
//!
//! A fixed-size toroidal universe stepped one generation at a time, with a
//! zero-copy byte view of its cells for renderers, plus an explicit frame
//! driver and configuration for hosting it.

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use driver::{Driver, DriverEvent, FrameReport};
pub use game_of_life::{Cell, Universe, UniverseError, UniverseOption};

use anyhow::{Context, Result};

/// Create the universe described by `settings` and run it for the configured number of frames
pub fn simulate(settings: &Settings) -> Result<Universe> {
    settings.validate().context("Invalid settings")?;

    let mut universe = Universe::new(
        settings.simulation.universe,
        settings.simulation.width,
        settings.simulation.height,
    )?;
    let generations = settings
        .simulation
        .frames
        .checked_mul(settings.simulation.ticks_per_frame as usize)
        .with_context(|| {
            format!(
                "{} frames of {} ticks exceed the generation limit",
                settings.simulation.frames, settings.simulation.ticks_per_frame
            )
        })?;
    game_of_life::GameOfLifeRules::evolve_generations(&mut universe, generations);

    Ok(universe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_two_seven() {
        let mut settings = Settings::default();
        settings.simulation.universe = UniverseOption::TwoSeven;
        settings.simulation.width = 16;
        settings.simulation.height = 16;
        settings.simulation.frames = 3;
        settings.simulation.ticks_per_frame = 2;

        let universe = simulate(&settings).unwrap();

        let mut expected = Universe::new(UniverseOption::TwoSeven, 16, 16).unwrap();
        for _ in 0..6 {
            expected.tick();
        }
        assert_eq!(universe, expected);
    }

    #[test]
    fn test_simulate_rejects_generation_overflow() {
        let mut settings = Settings::default();
        settings.simulation.frames = usize::MAX;
        settings.simulation.ticks_per_frame = 2;

        let err = simulate(&settings).unwrap_err();
        assert!(err.to_string().contains("exceed the generation limit"));
    }

    #[test]
    fn test_simulate_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.simulation.height = 0;
        assert!(simulate(&settings).is_err());
    }
}
