/*
 * Surface Module
 *
 * The 2D drawing area the particles live in. Surface coordinates have their
 * origin at the top-left corner with y growing downwards; nannou windows put
 * the origin at the centre with y growing upwards, so this module also owns
 * the conversion between the two.
 */

use nannou::prelude::*;

use crate::error::ConfigError;
use crate::{INFLUENCE_DIVISOR, LINK_THRESHOLD_DIVISOR};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ConfigError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }

    // Build a surface from a window rectangle
    pub fn from_rect(rect: Rect) -> Result<Self, ConfigError> {
        Self::new(rect.w(), rect.h())
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Squared-distance threshold below which two particles are linked.
    pub fn link_threshold(&self) -> f32 {
        self.area() / LINK_THRESHOLD_DIVISOR
    }

    /// Radius around the pointer within which particles react.
    pub fn influence_radius(&self) -> f32 {
        (self.height / INFLUENCE_DIVISOR) * (self.width / INFLUENCE_DIVISOR)
    }

    pub fn in_top_left_quadrant(&self, p: Vec2) -> bool {
        p.x < self.width / 2.0 && p.y < self.height / 2.0
    }

    // Convert a point from surface space to nannou window space
    pub fn surface_to_window(&self, p: Vec2) -> Vec2 {
        vec2(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }

    // Convert a point from nannou window space to surface space
    pub fn window_to_surface(&self, p: Vec2) -> Vec2 {
        vec2(p.x + self.width / 2.0, self.height / 2.0 - p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert!(Surface::new(f32::NAN, 10.0).is_err());
        assert!(Surface::new(10.0, f32::INFINITY).is_err());
        assert!(Surface::new(-1.0, 10.0).is_err());
        assert!(Surface::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn derived_thresholds() {
        let s = Surface::new(800.0, 600.0).unwrap();
        assert_eq!(s.link_threshold(), 12000.0);
        assert_eq!(s.influence_radius(), 75.0);
    }

    #[test]
    fn quadrant_is_strict() {
        let s = Surface::new(800.0, 600.0).unwrap();
        assert!(s.in_top_left_quadrant(vec2(0.0, 0.0)));
        assert!(s.in_top_left_quadrant(vec2(399.0, 299.0)));
        assert!(!s.in_top_left_quadrant(vec2(400.0, 10.0)));
        assert!(!s.in_top_left_quadrant(vec2(10.0, 300.0)));
    }

    #[test]
    fn window_conversion_round_trips() {
        let s = Surface::new(800.0, 600.0).unwrap();
        assert_eq!(s.surface_to_window(vec2(0.0, 0.0)), vec2(-400.0, 300.0));
        assert_eq!(s.surface_to_window(vec2(400.0, 300.0)), vec2(0.0, 0.0));
        let p = vec2(123.0, 456.0);
        assert_eq!(s.window_to_surface(s.surface_to_window(p)), p);
    }
}
