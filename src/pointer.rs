/*
 * Pointer Module
 *
 * An immutable snapshot of the mouse as seen by the particles during one
 * frame. Event handlers replace the snapshot between frames; particles only
 * ever read it.
 */

use nannou::prelude::*;

use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Surface-space position, `None` while the mouse is outside the window.
    pub position: Option<Vec2>,
    pub influence_radius: f32,
}

impl Pointer {
    // An absent pointer sized for the given surface
    pub fn for_surface(surface: &Surface) -> Self {
        Self {
            position: None,
            influence_radius: surface.influence_radius(),
        }
    }

    pub fn at(position: Vec2, influence_radius: f32) -> Self {
        Self {
            position: Some(position),
            influence_radius,
        }
    }

    pub fn moved_to(self, position: Vec2) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    pub fn left(self) -> Self {
        Self {
            position: None,
            ..self
        }
    }

    // Re-derive the influence radius after a resize, keeping the position
    pub fn resized(self, surface: &Surface) -> Self {
        Self {
            influence_radius: surface.influence_radius(),
            ..self
        }
    }
}
