/*
 * Particle Field Module
 *
 * Owns the ordered collection of particles. The field only grows: `populate`
 * replaces the whole collection, `spawn_at` appends one particle per click and
 * nothing ever removes one. Order does not affect the physics (a particle's
 * update only reads its own state and the pointer) but later particles are
 * drawn on top of earlier ones.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::canvas::Canvas;
use crate::error::ConfigError;
use crate::geometry::is_finite;
use crate::leaders::{LeaderPolicy, NoLeaders};
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::Surface;
use crate::{DRIFT_X, DRIFT_Y, SEED_RADIUS, SPAWN_RADIUS};

pub struct ParticleField {
    particles: Vec<Particle>,
    color: Rgb<u8>,
    leaders: Box<dyn LeaderPolicy>,
}

impl ParticleField {
    pub fn new(color: Rgb<u8>) -> Self {
        Self {
            particles: Vec::new(),
            color,
            leaders: Box::new(NoLeaders),
        }
    }

    // Build a field around an existing set of particles
    pub fn from_particles(particles: Vec<Particle>, color: Rgb<u8>) -> Self {
        Self {
            particles,
            ..Self::new(color)
        }
    }

    pub fn with_leader_policy(mut self, policy: Box<dyn LeaderPolicy>) -> Self {
        self.leaders = policy;
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of particles `populate` seeds for a surface.
    pub fn seed_count(surface: &Surface, density: f32) -> Result<usize, ConfigError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }
        Ok((surface.area() / density).floor() as usize)
    }

    pub fn populate(&mut self, width: f32, height: f32, density: f32) -> Result<usize, ConfigError> {
        self.populate_with(&mut rand::thread_rng(), width, height, density)
    }

    // Replace every particle with a freshly seeded set. Validation happens
    // before the old set is touched.
    pub fn populate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        width: f32,
        height: f32,
        density: f32,
    ) -> Result<usize, ConfigError> {
        let surface = Surface::new(width, height)?;
        let count = Self::seed_count(&surface, density)?;

        let margin = SEED_RADIUS * 2.0;
        let mut particles = Vec::with_capacity(count);

        for _ in 0..count {
            let x = sample_between(rng, margin, width - margin);
            let y = sample_between(rng, margin, height - margin);
            let velocity = sample_drift(rng);
            particles.push(Particle::new(vec2(x, y), velocity, SEED_RADIUS, self.color));
        }

        self.particles = particles;
        self.choose_leaders();

        log::info!(
            "populated {} particles on a {:.0}x{:.0} surface",
            count,
            width,
            height
        );

        Ok(count)
    }

    pub fn spawn_at(&mut self, x: f32, y: f32) {
        self.spawn_at_with(&mut rand::thread_rng(), x, y);
    }

    // Append one larger particle at the given point. There is no cap on how
    // many can accumulate.
    pub fn spawn_at_with<R: Rng + ?Sized>(&mut self, rng: &mut R, x: f32, y: f32) {
        let position = vec2(x, y);
        if !is_finite(position) {
            log::warn!("ignoring spawn at non-finite position ({}, {})", x, y);
            return;
        }

        let velocity = sample_drift(rng);
        self.particles
            .push(Particle::new(position, velocity, SPAWN_RADIUS, self.color));

        log::debug!(
            "spawned particle at ({:.1}, {:.1}), field size {}",
            x,
            y,
            self.particles.len()
        );
    }

    // Update every particle in order; each draws itself as it goes
    pub fn tick<C: Canvas + ?Sized>(&mut self, surface: &Surface, pointer: &Pointer, canvas: &mut C) {
        for particle in &mut self.particles {
            particle.update(surface, pointer, canvas);
        }
    }

    pub fn choose_leaders(&mut self) {
        self.leaders.choose_leaders(&mut self.particles);
    }
}

fn sample_between<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

// Asymmetric drift: always rightwards and downwards, faster vertically
fn sample_drift<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    vec2(rng.gen_range(0.0..DRIFT_X), rng.gen_range(0.0..DRIFT_Y))
}
