//! Time management utilities

use std::time::Instant;

/// Frame timer feeding the per-tick elapsed time to the simulation
///
/// `update` samples the wall clock; `advance` feeds a fixed step instead,
/// which is what headless drivers and tests use.
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    max_delta: Option<f32>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            max_delta: None,
        }
    }

    /// Clamp wall-clock deltas to `max_delta` seconds (e.g. after a debugger stall)
    pub fn with_max_delta(mut self, max_delta: Option<f32>) -> Self {
        self.max_delta = max_delta.filter(|m| *m > 0.0);
        self
    }

    /// Update the timer from the wall clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let mut elapsed = now.duration_since(self.last_frame).as_secs_f32();
        if let Some(max) = self.max_delta {
            if elapsed > max {
                log::trace!("Frame time {:.3}s clamped to {:.3}s", elapsed, max);
                elapsed = max;
            }
        }
        self.last_frame = now;
        self.record(elapsed);
    }

    /// Advance by a fixed step without touching the wall clock
    pub fn advance(&mut self, delta_time: f32) {
        self.last_frame = Instant::now();
        self.record(delta_time.max(0.0));
    }

    fn record(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_accumulates() {
        let mut timer = Timer::new();
        timer.advance(0.25);
        timer.advance(0.5);

        assert_relative_eq!(timer.delta_time(), 0.5);
        assert_relative_eq!(timer.total_time(), 0.75);
        assert_eq!(timer.frame_count(), 2);
        assert_relative_eq!(timer.average_fps(), 2.0 / 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_negative_step_is_ignored() {
        let mut timer = Timer::new();
        timer.advance(-1.0);
        assert_eq!(timer.delta_time(), 0.0);
    }

    #[test]
    fn test_wall_clock_delta_is_clamped() {
        let mut timer = Timer::new().with_max_delta(Some(0.0001));
        std::thread::sleep(std::time::Duration::from_millis(2));
        timer.update();
        assert!(timer.delta_time() <= 0.0001);
    }
}
