/*
 * Connection Module
 *
 * Decides which pairs of particles are linked this frame and how each link
 * looks. Everything is recomputed from the current particle snapshot and
 * surface dimensions; nothing carries over between frames.
 *
 * Distances stay squared throughout: both the link threshold
 * (`width * height / 40`) and the opacity falloff are in squared units.
 *
 * The brute-force scan visits all n(n-1)/2 pairs and is the dominant cost per
 * frame. The spatial grid strategy only visits pairs in neighbouring cells and
 * yields the same links in the same order.
 */

use nannou::prelude::*;

use crate::canvas::Canvas;
use crate::geometry::distance_squared;
use crate::particle::Particle;
use crate::spatial_grid::SpatialGrid;
use crate::surface::Surface;
use crate::OPACITY_FALLOFF;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Lower particle index.
    pub a: usize,
    /// Higher particle index.
    pub b: usize,
    pub squared_distance: f32,
    pub opacity: f32,
    pub stroke_width: f32,
    pub color: Rgb<u8>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStrategy {
    #[default]
    BruteForce,
    SpatialGrid,
}

pub struct ConnectionGraph {
    pub base_color: Rgb<u8>,
    pub accent_color: Rgb<u8>,
    pub strategy: LinkStrategy,
}

// Opacity for a squared distance, clamped to [0, 1]
#[inline]
pub fn link_opacity(squared_distance: f32) -> f32 {
    (1.0 - squared_distance / OPACITY_FALLOFF).clamp(0.0, 1.0)
}

// Approaches 2 as the particles touch and 1 as they separate
#[inline]
pub fn link_width(squared_distance: f32) -> f32 {
    1.0 + 1.0 / (1.0 + squared_distance)
}

impl ConnectionGraph {
    pub fn new(base_color: Rgb<u8>, accent_color: Rgb<u8>) -> Self {
        Self {
            base_color,
            accent_color,
            strategy: LinkStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: LinkStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    // All links for the current snapshot, ordered by (a, b)
    pub fn links(&self, particles: &[Particle], surface: &Surface) -> Vec<Link> {
        let threshold = surface.link_threshold();
        if particles.len() < 2 || threshold <= 0.0 {
            return Vec::new();
        }

        match self.strategy {
            LinkStrategy::BruteForce => self.links_brute_force(particles, surface, threshold),
            LinkStrategy::SpatialGrid => self.links_with_spatial_grid(particles, surface, threshold),
        }
    }

    // Compute and draw every link, returning how many were drawn
    pub fn evaluate<C: Canvas + ?Sized>(
        &self,
        particles: &[Particle],
        surface: &Surface,
        canvas: &mut C,
    ) -> usize {
        let links = self.links(particles, surface);

        for link in &links {
            canvas.stroke_line(
                particles[link.a].position,
                particles[link.b].position,
                link.color,
                link.opacity,
                link.stroke_width,
            );
        }

        links.len()
    }

    fn links_brute_force(&self, particles: &[Particle], surface: &Surface, threshold: f32) -> Vec<Link> {
        let mut links = Vec::new();

        for a in 0..particles.len() {
            for b in (a + 1)..particles.len() {
                if let Some(link) = self.link_between(particles, a, b, surface, threshold) {
                    links.push(link);
                }
            }
        }

        links
    }

    fn links_with_spatial_grid(&self, particles: &[Particle], surface: &Surface, threshold: f32) -> Vec<Link> {
        // Cells as wide as the link distance keep every linked pair adjacent
        let mut grid = SpatialGrid::new(threshold.sqrt(), surface);

        for (i, particle) in particles.iter().enumerate() {
            grid.insert(i, particle.position);
        }

        let mut links = Vec::new();

        for (a, particle) in particles.iter().enumerate() {
            for b in grid.get_nearby_indices(particle.position) {
                if b <= a {
                    continue;
                }
                if let Some(link) = self.link_between(particles, a, b, surface, threshold) {
                    links.push(link);
                }
            }
        }

        // Same draw order as the full scan
        links.sort_unstable_by_key(|link| (link.a, link.b));
        links
    }

    fn link_between(
        &self,
        particles: &[Particle],
        a: usize,
        b: usize,
        surface: &Surface,
        threshold: f32,
    ) -> Option<Link> {
        let first = &particles[a];
        let squared_distance = distance_squared(first.position, particles[b].position);

        if squared_distance >= threshold {
            return None;
        }

        // Tint depends only on where the first particle of the pair sits
        let color = if surface.in_top_left_quadrant(first.position) {
            self.accent_color
        } else {
            self.base_color
        };

        Some(Link {
            a,
            b,
            squared_distance,
            opacity: link_opacity(squared_distance),
            stroke_width: link_width(squared_distance),
            color,
        })
    }
}
