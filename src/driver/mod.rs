//! Frame loop that drives a universe from queued events and an injected clock

pub mod clock;
pub mod events;
pub mod fps;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{parse_coordinates, parse_placement, DriverEvent};
pub use fps::{FpsCounter, FpsStats};

use crate::config::{SimulationConfig, MAX_TICKS_PER_FRAME};
use crate::game_of_life::{Universe, UniverseOption};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, debug_span, warn};

/// Outcome of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameReport {
    /// Generations elapsed since the universe was (re)created
    pub generation: u64,
    /// Generations advanced during this frame
    pub ticks: u32,
    pub paused: bool,
    pub fps: Option<FpsStats>,
}

/// Owns a universe and advances it once per frame.
///
/// Events pushed between frames are applied in order at the start of the
/// next frame, before any generation is computed.
pub struct Driver<C: Clock = SystemClock> {
    universe: Universe,
    ticks_per_frame: u32,
    paused: bool,
    generation: u64,
    events: VecDeque<DriverEvent>,
    fps: FpsCounter,
    clock: C,
}

impl Driver<SystemClock> {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Driver<C> {
    pub fn with_clock(config: &SimulationConfig, clock: C) -> Result<Self> {
        let universe = Universe::new(config.universe, config.width, config.height)
            .context("Failed to create universe")?;

        Ok(Self {
            universe,
            ticks_per_frame: clamp_ticks_per_frame(config.ticks_per_frame),
            paused: false,
            generation: 0,
            events: VecDeque::new(),
            fps: FpsCounter::new(clock.now()),
            clock,
        })
    }

    /// Queue an event for the next frame
    pub fn push(&mut self, event: DriverEvent) {
        self.events.push_back(event);
    }

    /// Apply pending events, advance the universe and record the frame time
    pub fn frame(&mut self) -> Result<FrameReport> {
        let mut steps = 0u32;
        while let Some(event) = self.events.pop_front() {
            self.apply(event, &mut steps)?;
        }

        let ticks = if self.paused { steps } else { self.ticks_per_frame };
        if ticks > 0 {
            let _span = debug_span!("ticks", count = ticks, generation = self.generation).entered();
            let started = Instant::now();
            for _ in 0..ticks {
                self.universe.tick();
            }
            debug!(elapsed_us = started.elapsed().as_micros() as u64, "ticks computed");
        }
        self.generation += u64::from(ticks);

        let fps = self.fps.record(self.clock.now());

        Ok(FrameReport {
            generation: self.generation,
            ticks,
            paused: self.paused,
            fps,
        })
    }

    fn apply(&mut self, event: DriverEvent, steps: &mut u32) -> Result<()> {
        match event {
            DriverEvent::ToggleCell { row, column } => self.universe.toggle_cell(row, column),
            DriverEvent::ToggleGlider { row, column } => self.universe.toggle_glider(row, column),
            DriverEvent::Stamp { pattern, row, column } => self.universe.stamp(pattern, row, column),
            DriverEvent::Select(option) => self.recreate(option)?,
            DriverEvent::Reset => {
                self.recreate(UniverseOption::Dead)?;
                self.paused = true;
            }
            DriverEvent::SetTicksPerFrame(ticks) => {
                self.ticks_per_frame = clamp_ticks_per_frame(ticks);
            }
            DriverEvent::Play => self.paused = false,
            DriverEvent::Pause => self.paused = true,
            DriverEvent::Step => {
                if self.paused {
                    *steps += 1;
                }
            }
        }
        Ok(())
    }

    fn recreate(&mut self, option: UniverseOption) -> Result<()> {
        self.universe = Universe::new(option, self.universe.width(), self.universe.height())
            .context("Failed to recreate universe")?;
        self.generation = 0;
        debug!(%option, "universe recreated");
        Ok(())
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn clamp_ticks_per_frame(ticks: u32) -> u32 {
    let clamped = ticks.clamp(1, MAX_TICKS_PER_FRAME);
    if clamped != ticks {
        warn!(requested = ticks, used = clamped, "ticks per frame out of range");
    }
    clamped
}
