//! Frame rate measurement over a sliding window

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

/// Number of frames kept for the statistics
pub const FPS_WINDOW: usize = 100;

/// Summary of the recent frame rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FpsStats {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for FpsStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames per second:")?;
        writeln!(f, "LATEST = {:.0}", self.latest)?;
        writeln!(f, "AVG of last {} = {:.0}", FPS_WINDOW, self.mean)?;
        writeln!(f, "MIN of last {} = {:.0}", FPS_WINDOW, self.min)?;
        write!(f, "MAX of last {} = {:.0}", FPS_WINDOW, self.max)
    }
}

/// Tracks frames per second for the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: VecDeque<f64>,
    last_frame: Instant,
}

impl FpsCounter {
    pub fn new(start: Instant) -> Self {
        Self {
            frames: VecDeque::with_capacity(FPS_WINDOW + 1),
            last_frame: start,
        }
    }

    /// Record a frame rendered at `now` and return the updated statistics.
    ///
    /// Frames with no measurable delay since the previous one are skipped.
    pub fn record(&mut self, now: Instant) -> Option<FpsStats> {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if !delta.is_zero() {
            self.frames.push_back(1.0 / delta.as_secs_f64());
            if self.frames.len() > FPS_WINDOW {
                self.frames.pop_front();
            }
        }

        self.stats()
    }

    pub fn stats(&self) -> Option<FpsStats> {
        let latest = *self.frames.back()?;
        let sum: f64 = self.frames.iter().sum();
        let min = self.frames.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.frames.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(FpsStats {
            latest,
            mean: sum / self.frames.len() as f64,
            min,
            max,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_empty_counter() {
        let counter = FpsCounter::new(Instant::now());
        assert!(counter.stats().is_none());
        assert!(counter.is_empty());
    }

    #[test]
    fn test_statistics() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);

        counter.record(start + Duration::from_millis(10));
        let stats = counter.record(start + Duration::from_millis(30)).unwrap();

        assert!((stats.latest - 50.0).abs() < 1e-6);
        assert!((stats.max - 100.0).abs() < 1e-6);
        assert!((stats.min - 50.0).abs() < 1e-6);
        assert!((stats.mean - 75.0).abs() < 1e-6);
        assert!(stats.to_string().contains("LATEST = 50"));
    }

    #[test]
    fn test_window_is_bounded() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        for i in 1..=(FPS_WINDOW as u64 + 20) {
            counter.record(start + Duration::from_millis(i * 20));
        }
        assert_eq!(counter.len(), FPS_WINDOW);
    }

    #[test]
    fn test_zero_delta_is_skipped() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        assert!(counter.record(start).is_none());
        assert_eq!(counter.len(), 0);
    }
}
