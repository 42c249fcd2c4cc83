//! Time management utilities

use std::time::Instant;

/// Frame timer that reports a per-frame delta clamped to `max_delta`
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    max_delta: f32,
}

impl Timer {
    /// Create a new timer that clamps deltas to `max_delta` seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            max_delta,
        }
    }

    /// Advance the timer (call once per frame) and return the clamped delta
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.delta_time = clamp_delta(elapsed, self.max_delta);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the clamped time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total simulated time since timer creation
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

/// Clamp a raw frame delta into `[0, max_delta]`
///
/// Negative and non-finite deltas become zero.
pub fn clamp_delta(dt: f32, max_delta: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    if max_delta > 0.0 && dt > max_delta {
        log::warn!("Frame delta {dt:.3}s exceeds {max_delta:.3}s, clamping");
        return max_delta;
    }
    dt
}
