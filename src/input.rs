//! Pointer tracking for the mesh.
//!
//! Mouse and touch events both end up as a single surface-space coordinate.
//! When nothing points at the surface the tracker holds
//! [`POINTER_SENTINEL`], which is far enough outside any viewport that no
//! particle is ever within interaction range of it.
//!
//! # Usage
//!
//! ```ignore
//! // In the host's window_event handler:
//! pointer.handle_event(&event, window.scale_factor());
//!
//! // Once per frame, by the integrator:
//! let target = pointer.current();
//! ```

use crate::config::POINTER_SENTINEL;
use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase, WindowEvent};

/// Latest pointer position in logical surface pixels.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: Vec2,
    // Only the first active touch drives the pointer.
    active_touch: Option<u64>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: POINTER_SENTINEL,
            active_touch: None,
        }
    }

    /// Position the integrator should react to.
    pub fn current(&self) -> Vec2 {
        self.position
    }

    /// Whether a mouse or touch is currently over the surface.
    pub fn is_active(&self) -> bool {
        self.position != POINTER_SENTINEL
    }

    pub fn move_to(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Pointer left the surface or the touch ended.
    pub fn release(&mut self) {
        self.position = POINTER_SENTINEL;
        self.active_touch = None;
    }

    /// Apply a touch sample. Returns `true` if it moved the pointer.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) -> bool {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                let active = *self.active_touch.get_or_insert(id);
                if active == id {
                    self.move_to(position);
                    true
                } else {
                    false
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch.is_none_or(|active| active == id) {
                    self.release();
                }
                false
            }
        }
    }

    /// Process a winit window event. Other event kinds are ignored.
    pub fn handle_event(&mut self, event: &WindowEvent, scale_factor: f64) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_to(to_logical(*position, scale_factor));
            }
            WindowEvent::CursorLeft { .. } => self.release(),
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => {
                self.touch(*id, *phase, to_logical(*location, scale_factor));
            }
            _ => {}
        }
    }
}

fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    };
    Vec2::new((position.x / scale) as f32, (position.y / scale) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_sentinel() {
        let pointer = PointerTracker::new();
        assert_eq!(pointer.current(), POINTER_SENTINEL);
        assert!(!pointer.is_active());
    }

    #[test]
    fn test_move_and_release() {
        let mut pointer = PointerTracker::new();
        pointer.move_to(Vec2::new(10.0, 20.0));
        assert_eq!(pointer.current(), Vec2::new(10.0, 20.0));
        assert!(pointer.is_active());

        pointer.release();
        assert_eq!(pointer.current(), POINTER_SENTINEL);
    }

    #[test]
    fn test_non_finite_positions_are_ignored() {
        let mut pointer = PointerTracker::new();
        pointer.move_to(Vec2::new(5.0, 5.0));
        pointer.move_to(Vec2::new(f32::NAN, 1.0));
        assert_eq!(pointer.current(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_first_touch_wins() {
        let mut pointer = PointerTracker::new();
        assert!(pointer.touch(1, TouchPhase::Started, Vec2::new(1.0, 1.0)));
        assert!(!pointer.touch(2, TouchPhase::Started, Vec2::new(9.0, 9.0)));
        assert!(pointer.touch(1, TouchPhase::Moved, Vec2::new(2.0, 2.0)));
        assert_eq!(pointer.current(), Vec2::new(2.0, 2.0));

        // Lifting the ignored finger leaves the pointer alone.
        pointer.touch(2, TouchPhase::Ended, Vec2::new(9.0, 9.0));
        assert_eq!(pointer.current(), Vec2::new(2.0, 2.0));

        pointer.touch(1, TouchPhase::Ended, Vec2::new(2.0, 2.0));
        assert_eq!(pointer.current(), POINTER_SENTINEL);

        // Another finger can take over after release.
        assert!(pointer.touch(2, TouchPhase::Moved, Vec2::new(4.0, 4.0)));
        assert_eq!(pointer.current(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_physical_to_logical() {
        let logical = to_logical(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(logical, Vec2::new(100.0, 50.0));
        let logical = to_logical(PhysicalPosition::new(200.0, 100.0), 0.0);
        assert_eq!(logical, Vec2::new(200.0, 100.0));
    }
}
