//! Command line driver for the Game of Life universe

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_universe::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::{parse_coordinates, parse_placement, Driver, DriverEvent},
    game_of_life::{GameOfLifeRules, Pattern, Universe, UniverseOption, GLIDER},
    utils::{ColorOutput, UniverseFormatter},
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life_universe")]
#[command(about = "Conway's Game of Life on a toroidal universe")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the universe frame by frame
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Universe width (overrides config)
        #[arg(long)]
        width: Option<u32>,

        /// Universe height (overrides config)
        #[arg(long)]
        height: Option<u32>,

        /// Initial layout: dead, random or two_seven (overrides config)
        #[arg(short, long)]
        universe: Option<UniverseOption>,

        /// Generations per frame (overrides config)
        #[arg(short, long)]
        ticks_per_frame: Option<u32>,

        /// Number of frames to run (overrides config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Stamp a glider at ROW,COL before the first frame
        #[arg(long, value_parser = parse_coordinates)]
        glider: Vec<(u32, u32)>,

        /// Toggle the cell at ROW,COL before the first frame
        #[arg(long, value_parser = parse_coordinates)]
        toggle: Vec<(u32, u32)>,

        /// Stamp a built-in pattern (glider, blinker, block) at NAME@ROW,COL before the first frame
        #[arg(long, value_parser = parse_placement)]
        pattern: Vec<(&'static Pattern, u32, u32)>,

        /// Print frame rate statistics
        #[arg(long)]
        fps: bool,

        /// Print frames as JSON snapshots
        #[arg(long)]
        json: bool,
    },

    /// Print a universe once
    Render {
        /// Initial layout
        #[arg(short, long, default_value = "two_seven")]
        universe: UniverseOption,

        #[arg(long, default_value_t = 16)]
        width: u32,

        #[arg(long, default_value_t = 16)]
        height: u32,

        /// Generations to advance before printing
        #[arg(short, long, default_value_t = 0)]
        ticks: usize,

        /// Stamp a glider at ROW,COL
        #[arg(long, value_parser = parse_coordinates)]
        glider: Vec<(u32, u32)>,

        /// Stamp a built-in pattern (glider, blinker, block) at NAME@ROW,COL
        #[arg(long, value_parser = parse_placement)]
        pattern: Vec<(&'static Pattern, u32, u32)>,

        /// Show row and column numbers
        #[arg(long)]
        coords: bool,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            universe,
            ticks_per_frame,
            frames,
            glider,
            toggle,
            pattern,
            fps,
            json,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                universe,
                ticks_per_frame,
                frames,
                show_fps: fps.then_some(true),
                format: json.then_some(OutputFormat::Json),
            };
            let mut events: Vec<DriverEvent> = glider
                .into_iter()
                .map(|(row, column)| DriverEvent::ToggleGlider { row, column })
                .collect();
            events.extend(toggle.into_iter().map(|(row, column)| DriverEvent::ToggleCell { row, column }));
            events.extend(
                pattern
                    .into_iter()
                    .map(|(pattern, row, column)| DriverEvent::Stamp { pattern, row, column }),
            );

            run_command(config, overrides, events)
        }
        Commands::Render {
            universe,
            width,
            height,
            ticks,
            glider,
            pattern,
            coords,
        } => {
            let mut placements: Vec<(&'static Pattern, u32, u32)> = glider
                .into_iter()
                .map(|(row, column)| (&GLIDER, row, column))
                .collect();
            placements.extend(pattern);
            render_command(universe, width, height, ticks, placements, coords)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, events: Vec<DriverEvent>) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    info!(
        width = settings.simulation.width,
        height = settings.simulation.height,
        universe = %settings.simulation.universe,
        "starting universe"
    );

    let mut driver = Driver::new(&settings.simulation)
        .context("Failed to start driver")?;
    for event in events {
        driver.push(event);
    }

    let frame_delay = Duration::from_millis(settings.display.frame_delay_ms);
    let start_time = Instant::now();

    for _ in 0..settings.simulation.frames {
        let report = driver.frame()?;

        if settings.display.show_grid {
            match settings.display.format {
                OutputFormat::Text => {
                    println!("{}", UniverseFormatter::format_frame(driver.universe(), &report));
                }
                OutputFormat::Json => {
                    println!("{}", UniverseFormatter::snapshot_json(driver.universe(), report.generation)?);
                }
            }
        }

        if settings.display.show_fps {
            if let Some(fps) = report.fps {
                println!("{}", fps);
            }
        }

        if !frame_delay.is_zero() {
            std::thread::sleep(frame_delay);
        }
    }

    println!("{}", ColorOutput::success(&format!(
        "Ran {} frame(s), {} generation(s) in {:.3}s, {} living cells",
        settings.simulation.frames,
        driver.generation(),
        start_time.elapsed().as_secs_f64(),
        driver.universe().living_count()
    )));

    Ok(())
}

fn render_command(
    option: UniverseOption,
    width: u32,
    height: u32,
    ticks: usize,
    placements: Vec<(&'static Pattern, u32, u32)>,
    coords: bool,
) -> Result<()> {
    let mut universe = Universe::new(option, width, height)
        .context("Failed to create universe")?;

    for (pattern, row, column) in placements {
        universe.stamp(pattern, row, column);
    }
    GameOfLifeRules::evolve_generations(&mut universe, ticks);

    if coords {
        print!("{}", UniverseFormatter::format_with_coords(&universe));
    } else {
        print!("{}", universe.render());
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut two_seven = Settings::default();
    two_seven.simulation.universe = UniverseOption::TwoSeven;
    two_seven.simulation.width = 32;
    two_seven.simulation.height = 32;
    two_seven.simulation.frames = 20;
    two_seven.to_file(&examples_dir.join("two_seven.yaml"))?;

    let mut fast_random = Settings::default();
    fast_random.simulation.universe = UniverseOption::Random;
    fast_random.simulation.ticks_per_frame = 10;
    fast_random.display.show_grid = false;
    fast_random.display.show_fps = true;
    fast_random.to_file(&examples_dir.join("fast_random.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml --glider 5,5");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_universe",
            "run",
            "--config", "test.yaml",
            "--universe", "two-seven",
            "--glider", "3,4",
            "--glider", "10,10",
            "--frames", "5",
        ]);

        match cli.unwrap().command {
            Commands::Run { universe, glider, frames, .. } => {
                assert_eq!(universe, Some(UniverseOption::TwoSeven));
                assert_eq!(glider, vec![(3, 4), (10, 10)]);
                assert_eq!(frames, Some(5));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_pattern_placement() {
        let cli = Cli::try_parse_from([
            "game_of_life_universe",
            "render",
            "--pattern", "blinker@1,2",
            "--pattern", "block@4,4",
        ]);

        match cli.unwrap().command {
            Commands::Render { pattern, .. } => {
                let names: Vec<&str> = pattern.iter().map(|(p, _, _)| p.name).collect();
                assert_eq!(names, vec!["blinker", "block"]);
                assert_eq!((pattern[0].1, pattern[0].2), (1, 2));
            }
            _ => panic!("expected render command"),
        }

        assert!(Cli::try_parse_from(["game_of_life_universe", "run", "--pattern", "spaceship@1,1"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["game_of_life_universe", "run", "--universe", "glider"]).is_err());
        assert!(Cli::try_parse_from(["game_of_life_universe", "run", "--glider", "3"]).is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        let default_config = temp_dir.path().join("config/default.yaml");
        assert!(default_config.exists());
        assert_eq!(Settings::from_file(&default_config).unwrap(), Settings::default());
        assert!(temp_dir.path().join("config/examples/two_seven.yaml").exists());
    }

    #[test]
    fn test_run_command_with_defaults() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            width: Some(8),
            height: Some(8),
            frames: Some(2),
            ..Default::default()
        };
        let events = vec![DriverEvent::ToggleGlider { row: 2, column: 2 }];

        let result = run_command(temp_dir.path().join("missing.yaml"), overrides, events);
        assert!(result.is_ok());
    }

    #[test]
    fn test_render_command() {
        assert!(render_command(UniverseOption::Dead, 6, 6, 4, vec![(&GLIDER, 2, 2)], true).is_ok());
        assert!(render_command(UniverseOption::Dead, 0, 6, 0, vec![], false).is_err());
    }
}
