/*
 * Geometry Module
 *
 * Small vector helpers shared by the pointer interaction and the
 * connection scan. Distances stay squared wherever a comparison or a
 * squared-unit formula is all that is needed.
 */

use nannou::prelude::*;

// Squared euclidean distance between two points
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

// True when both components are finite
#[inline]
pub fn is_finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
