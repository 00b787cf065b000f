/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct holding the settings that
 * are not physics: seeding density, colors and display toggles. The toggles
 * can be changed through the UI; snapshot-based change detection lets the
 * app react once per change.
 */

use nannou::prelude::*;

use crate::connection::LinkStrategy;
use crate::error::ConfigError;
use crate::DEFAULT_DENSITY;

pub struct SimulationParams {
    pub density: f32,
    pub particle_color: Rgb<u8>,
    pub accent_color: Rgb<u8>,
    pub background_color: Rgb<u8>,
    pub show_links: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,
    pub enable_spatial_grid: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Copy, PartialEq)]
struct ParamSnapshot {
    show_links: bool,
    show_debug: bool,
    pause_simulation: bool,
    enable_spatial_grid: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            particle_color: rgb(236, 253, 253),
            accent_color: rgb(86, 153, 33),
            background_color: rgb(12, 18, 28),
            show_links: true,
            show_debug: false,
            pause_simulation: false,
            enable_spatial_grid: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    pub fn link_strategy(&self) -> LinkStrategy {
        if self.enable_spatial_grid {
            LinkStrategy::SpatialGrid
        } else {
            LinkStrategy::BruteForce
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Check if any toggle has changed since the last snapshot
    pub fn detect_changes(&self) -> bool {
        match &self.previous_values {
            Some(prev) => *prev != self.snapshot(),
            None => false,
        }
    }

    // Get parameter range for the density slider
    pub fn get_density_range() -> std::ops::RangeInclusive<f32> {
        1000.0..=40000.0
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            show_links: self.show_links,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            enable_spatial_grid: self.enable_spatial_grid,
        }
    }
}
