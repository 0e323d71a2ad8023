//! Frame timing for the host loop.
//!
//! The simulation itself steps once per displayed frame and never reads
//! wall-clock time. The clock only feeds the periodic FPS report.
//!
//! # Example
//!
//! ```ignore
//! use glowmesh::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // Once per rendered frame:
//! if let Some(fps) = clock.tick() {
//!     log::debug!("{fps:.1} fps");
//! }
//! ```

use std::time::{Duration, Instant};

/// Counts frames and estimates FPS over a fixed reporting interval.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps: f32,
    window_start: Instant,
    window_frames: u64,
    report_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_report_interval(Duration::from_secs(5))
    }

    pub fn with_report_interval(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps: 0.0,
            window_start: now,
            window_frames: 0,
            report_interval,
        }
    }

    /// Record a frame. Returns a fresh FPS estimate once per report interval.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        self.window_frames += 1;

        let window = now.saturating_duration_since(self.window_start);
        if window >= self.report_interval && !window.is_zero() {
            self.fps = self.window_frames as f32 / window.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Time between the last two frames.
    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Most recent FPS estimate, 0 before the first report.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.delta(), Duration::ZERO);
    }

    #[test]
    fn test_reports_once_per_interval() {
        let mut clock = FrameClock::with_report_interval(Duration::from_secs(1));
        let start = clock.window_start;

        // 60 frames spread evenly over one second.
        let mut reports = Vec::new();
        for i in 1..=60u64 {
            let at = start + Duration::from_micros(i * 1_000_000 / 60);
            if let Some(fps) = clock.tick_at(at) {
                reports.push(fps);
            }
        }

        assert_eq!(clock.frame(), 60);
        assert_eq!(reports.len(), 1);
        assert!((reports[0] - 60.0).abs() < 0.5, "got {}", reports[0]);
        assert!((clock.delta().as_secs_f32() - 1.0 / 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_clock_going_backwards_does_not_panic() {
        let mut clock = FrameClock::new();
        let earlier = clock.last_frame - Duration::from_millis(5);
        clock.tick_at(earlier);
        assert_eq!(clock.delta(), Duration::ZERO);
    }
}
