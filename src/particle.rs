/*
 * Particle Module
 *
 * This module defines the Particle struct and its per-frame update rule.
 * Each frame a particle:
 * 1. Reflects its velocity off the surface edges (using its pre-move position)
 * 2. Steps away from the pointer if the pointer is close enough
 * 3. Moves by its velocity
 * 4. Draws itself as a filled circle
 */

use nannou::prelude::*;

use crate::canvas::Canvas;
use crate::geometry::distance_squared;
use crate::pointer::Pointer;
use crate::surface::Surface;
use crate::{EDGE_MARGIN_FACTOR, REACT_STEP};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    pub color: Rgb<u8>,
    /// Reserved for leader selection, see `LeaderPolicy`.
    pub leader: bool,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgb<u8>) -> Self {
        Self {
            position,
            velocity,
            radius: radius.max(0.0),
            color,
            leader: false,
        }
    }

    // Radius is fixed at creation
    pub fn radius(&self) -> f32 {
        self.radius
    }

    // Advance one frame and draw the result
    pub fn update<C: Canvas + ?Sized>(&mut self, surface: &Surface, pointer: &Pointer, canvas: &mut C) {
        self.reflect(surface);
        self.repel(surface, pointer);

        self.position += self.velocity;

        self.render(canvas);
    }

    // Flip velocity components whose axis is out of bounds. The particle is
    // not clamped back inside.
    fn reflect(&mut self, surface: &Surface) {
        if self.position.x > surface.width() || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > surface.height() || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    // Step away from the pointer on each axis independently, unless the step
    // would start from within the edge margin on that side
    fn repel(&mut self, surface: &Surface, pointer: &Pointer) {
        let Some(target) = pointer.position else {
            return;
        };

        let reach = pointer.influence_radius + self.radius;
        if distance_squared(target, self.position) >= reach * reach {
            return;
        }

        let margin = self.radius * EDGE_MARGIN_FACTOR;

        if target.x < self.position.x && self.position.x < surface.width() - margin {
            self.position.x += REACT_STEP;
        }
        if target.x > self.position.x && self.position.x > margin {
            self.position.x -= REACT_STEP;
        }
        if target.y < self.position.y && self.position.y < surface.height() - margin {
            self.position.y += REACT_STEP;
        }
        if target.y > self.position.y && self.position.y > margin {
            self.position.y -= REACT_STEP;
        }
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_circle(self.position, self.radius, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};

    fn white() -> Rgb<u8> {
        rgb(236, 253, 253)
    }

    fn surface() -> Surface {
        Surface::new(800.0, 600.0).unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn moves_by_velocity_without_pointer() {
        let mut p = Particle::new(vec2(100.0, 100.0), vec2(0.2, 0.3), 2.0, white());
        let mut list = DisplayList::new();
        p.update(&surface(), &Pointer::for_surface(&surface()), &mut list);

        assert!(approx(p.position.x, 100.2));
        assert!(approx(p.position.y, 100.3));
        assert_eq!(list.circle_count(), 1);
    }

    #[test]
    fn reflects_using_pre_move_position_without_clamping() {
        let mut p = Particle::new(vec2(801.0, 300.0), vec2(0.5, 0.1), 0.0, white());
        let mut list = DisplayList::new();
        p.update(&surface(), &Pointer::for_surface(&surface()), &mut list);

        assert_eq!(p.velocity.x, -0.5);
        assert_eq!(p.velocity.y, 0.1);
        assert!(approx(p.position.x, 800.5));
        assert!(p.position.x > surface().width());
    }

    #[test]
    fn reflects_each_axis_independently() {
        let mut p = Particle::new(vec2(-1.0, -1.0), vec2(-0.1, -0.2), 0.0, white());
        let mut list = DisplayList::new();
        p.update(&surface(), &Pointer::for_surface(&surface()), &mut list);
        assert_eq!(p.velocity, vec2(0.1, 0.2));
    }

    #[test]
    fn pointer_pushes_on_both_axes() {
        let mut p = Particle::new(vec2(60.0, 60.0), vec2(0.0, 0.0), 2.0, white());
        let pointer = Pointer::at(vec2(50.0, 50.0), 100.0);
        let mut list = DisplayList::new();
        p.update(&surface(), &pointer, &mut list);

        assert!(approx(p.position.x, 61.2));
        assert!(approx(p.position.y, 61.2));
    }

    #[test]
    fn pointer_pulls_toward_smaller_coordinates_when_on_the_other_side() {
        let mut p = Particle::new(vec2(300.0, 200.0), vec2(0.0, 0.0), 1.0, white());
        let pointer = Pointer::at(vec2(310.0, 210.0), 50.0);
        let mut list = DisplayList::new();
        p.update(&surface(), &pointer, &mut list);

        assert!(approx(p.position.x, 298.8));
        assert!(approx(p.position.y, 198.8));
    }

    #[test]
    fn pointer_out_of_reach_has_no_effect() {
        let mut p = Particle::new(vec2(300.0, 300.0), vec2(0.0, 0.0), 2.0, white());
        let pointer = Pointer::at(vec2(100.0, 100.0), 50.0);
        let mut list = DisplayList::new();
        p.update(&surface(), &pointer, &mut list);
        assert_eq!(p.position, vec2(300.0, 300.0));
    }

    #[test]
    fn repulsion_suppressed_near_edge() {
        // radius 2 => 20px margin; x = 790 is inside the right margin
        let mut p = Particle::new(vec2(790.0, 300.0), vec2(0.0, 0.0), 2.0, white());
        let pointer = Pointer::at(vec2(780.0, 290.0), 50.0);
        let mut list = DisplayList::new();
        p.update(&surface(), &pointer, &mut list);

        assert_eq!(p.position.x, 790.0);
        assert!(approx(p.position.y, 301.2));
    }

    #[test]
    fn renders_at_the_moved_position() {
        let mut p = Particle::new(vec2(10.0, 10.0), vec2(1.0, 1.0), 0.8, white());
        let mut list = DisplayList::new();
        p.update(&surface(), &Pointer::for_surface(&surface()), &mut list);

        assert_eq!(
            list.commands(),
            &[DrawCommand::Circle {
                center: vec2(11.0, 11.0),
                radius: 0.8,
                color: white(),
            }]
        );
    }

    #[test]
    fn negative_radius_is_floored() {
        let p = Particle::new(vec2(0.0, 0.0), vec2(0.0, 0.0), -3.0, white());
        assert_eq!(p.radius(), 0.0);
        assert!(!p.leader);
    }
}
