/*
 * Leaders Module
 *
 * Extension point for selecting a "leader" subset of particles. No selection
 * rule exists yet: the only policy shipped is `NoLeaders`, which leaves every
 * particle's `leader` flag untouched.
 */

use crate::particle::Particle;

pub trait LeaderPolicy {
    fn choose_leaders(&mut self, particles: &mut [Particle]);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoLeaders;

impl LeaderPolicy for NoLeaders {
    fn choose_leaders(&mut self, _particles: &mut [Particle]) {}
}
