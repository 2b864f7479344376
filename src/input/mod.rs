//! Input unification - one event vocabulary for both input styles
//!
//! Pointer-driven surfaces (down/drag/up callbacks) emit `StrokeEvent`s
//! directly. Contact-driven surfaces (a per-frame raycast or physics
//! poll against a 3D brush) go through `ContactTracker`, which turns
//! hit/no-hit transitions into the same three logical events. Either
//! way a single state machine in the engine consumes them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A logical stroke event in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeEvent {
    Begin(Vec2),
    Continue(Vec2),
    End,
}

/// Synthesizes stroke events from a per-frame contact signal.
///
/// Feed it the mapped canvas coordinate each frame (`None` when the
/// brush is not touching the surface or the mapping was invalid); it
/// reports the event to forward to the engine, if any.
#[derive(Debug, Default)]
pub struct ContactTracker {
    in_contact: bool,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame of contact state
    pub fn poll(&mut self, contact: Option<Vec2>) -> Option<StrokeEvent> {
        match (self.in_contact, contact) {
            (false, Some(coord)) => {
                self.in_contact = true;
                Some(StrokeEvent::Begin(coord))
            }
            (true, Some(coord)) => Some(StrokeEvent::Continue(coord)),
            (true, None) => {
                self.in_contact = false;
                Some(StrokeEvent::End)
            }
            (false, None) => None,
        }
    }

    pub fn in_contact(&self) -> bool {
        self.in_contact
    }
}
