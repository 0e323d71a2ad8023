//! The per-frame loop as an explicit two-state machine.
//!
//! The host calls [`AnimationScheduler::tick`] from its redraw callback and
//! asks for another redraw only while [`AnimationScheduler::is_running`]
//! holds. Stopping flips a shared flag, so a tick that is already queued
//! observes the stop and neither draws nor reschedules.

use crate::render::Canvas;
use crate::simulation::{FrameStats, MeshSimulation};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Stopped,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered(FrameStats),
    /// No canvas yet. Nothing was integrated or drawn; the next tick retries.
    Skipped,
    /// The scheduler was stopped before this tick.
    Stopped,
}

/// Cloneable, idempotent stop switch for a scheduler.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Safe to call any number of times, from any clone.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives one simulation frame per display refresh until stopped.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    stop: StopHandle,
    frames_rendered: u64,
    frames_skipped: u64,
}

impl AnimationScheduler {
    /// A new scheduler starts out running.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SchedulerState {
        if self.stop.is_stopped() {
            SchedulerState::Stopped
        } else {
            SchedulerState::Running
        }
    }

    /// Whether the host should request another frame.
    pub fn is_running(&self) -> bool {
        self.state() == SchedulerState::Running
    }

    pub fn stop(&self) {
        if !self.stop.is_stopped() {
            log::debug!("animation stopped after {} frames", self.frames_rendered);
        }
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run one iteration if still running.
    pub fn tick(
        &mut self,
        sim: &mut MeshSimulation,
        canvas: Option<&mut dyn Canvas>,
    ) -> FrameOutcome {
        if self.stop.is_stopped() {
            return FrameOutcome::Stopped;
        }
        let Some(canvas) = canvas else {
            self.frames_skipped += 1;
            return FrameOutcome::Skipped;
        };

        let stats = sim.frame(canvas);
        self.frames_rendered += 1;
        FrameOutcome::Rendered(stats)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshConfig;
    use crate::render::FrameBatch;
    use crate::viewport::Viewport;

    fn sim() -> MeshSimulation {
        MeshSimulation::with_seed(MeshConfig::default(), Viewport::new(640.0, 480.0, 1.0), 1)
    }

    #[test]
    fn test_starts_running() {
        let scheduler = AnimationScheduler::new();
        assert_eq!(scheduler.state(), SchedulerState::Running);
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_missing_canvas_skips_without_touching_particles() {
        let mut sim = sim();
        let target = sim.field().particles()[0].position;
        sim.pointer_mut().move_to(target);
        let before = sim.field().particles().to_vec();

        let mut scheduler = AnimationScheduler::new();
        assert_eq!(scheduler.tick(&mut sim, None), FrameOutcome::Skipped);
        assert!(scheduler.is_running());
        assert_eq!(sim.field().particles(), before.as_slice());
        assert_eq!(scheduler.frames_skipped(), 1);
    }

    #[test]
    fn test_stop_is_idempotent_and_final() {
        let mut sim = sim();
        let mut batch = FrameBatch::new();
        let mut scheduler = AnimationScheduler::new();
        assert!(matches!(
            scheduler.tick(&mut sim, Some(&mut batch)),
            FrameOutcome::Rendered(_)
        ));

        scheduler.stop();
        scheduler.stop();
        scheduler.stop_handle().stop();
        assert_eq!(scheduler.state(), SchedulerState::Stopped);

        batch.reset();
        for _ in 0..10 {
            assert_eq!(
                scheduler.tick(&mut sim, Some(&mut batch)),
                FrameOutcome::Stopped
            );
        }
        assert!(batch.is_empty());
        assert_eq!(batch.clear_color(), None);
        assert_eq!(scheduler.frames_rendered(), 1);
    }

    #[test]
    fn test_stop_from_a_cloned_handle() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.stop_handle();
        let remote = handle.clone();
        remote.stop();
        assert!(!scheduler.is_running());
        assert!(handle.is_stopped());
    }
}
