/*
 * Constellations - Module Definitions
 *
 * This file defines the module structure for the particle constellation.
 * The simulation core (geometry, particle, field, connection, scene) has no
 * dependency on a window and is driven through the Canvas trait; the nannou
 * front end (app, input, renderer, ui) wires it to a real window.
 */

// Re-export key components for easier access
pub use app::Model;
pub use canvas::{Canvas, DisplayList, DrawCommand};
pub use connection::{ConnectionGraph, Link, LinkStrategy};
pub use debug::DebugInfo;
pub use error::ConfigError;
pub use field::ParticleField;
pub use leaders::{LeaderPolicy, NoLeaders};
pub use params::SimulationParams;
pub use particle::Particle;
pub use pointer::Pointer;
pub use scene::{FrameStats, Scene};
pub use spatial_grid::SpatialGrid;
pub use surface::Surface;

// Define modules
pub mod app;
pub mod canvas;
pub mod connection;
pub mod debug;
pub mod error;
pub mod field;
pub mod geometry;
pub mod input;
pub mod leaders;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod scene;
pub mod spatial_grid;
pub mod surface;
pub mod ui;

// Constants

/// Surface area (in square pixels) per seeded particle.
pub const DEFAULT_DENSITY: f32 = 9000.0;
/// Fixed per-axis step a particle takes away from the pointer.
pub const REACT_STEP: f32 = 1.2;
/// Repulsion is suppressed within `radius * EDGE_MARGIN_FACTOR` of an edge.
pub const EDGE_MARGIN_FACTOR: f32 = 10.0;
/// Exclusive upper bound of the horizontal drift component.
pub const DRIFT_X: f32 = 0.25;
/// Exclusive upper bound of the vertical drift component.
pub const DRIFT_Y: f32 = 0.7;
/// Radius of particles seeded by `populate`. Zero-radius particles are
/// invisible but still move, react and link.
pub const SEED_RADIUS: f32 = 0.0;
/// Radius of particles inserted by a pointer click.
pub const SPAWN_RADIUS: f32 = 0.8;
/// The link threshold is `width * height / LINK_THRESHOLD_DIVISOR`.
pub const LINK_THRESHOLD_DIVISOR: f32 = 40.0;
/// Squared distance at which link opacity reaches zero.
pub const OPACITY_FALLOFF: f32 = 10000.0;
/// The pointer influence radius is `(height / d) * (width / d)`.
pub const INFLUENCE_DIVISOR: f32 = 80.0;
