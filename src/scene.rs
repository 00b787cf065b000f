/*
 * Scene Module
 *
 * The frame driver. A Scene owns the particle field, the connection graph,
 * the current surface and the pointer snapshot, and runs one frame at a time:
 *
 * 1. Clear the frame's display list
 * 2. Update and draw every particle
 * 3. Draw the links between the updated particles
 *
 * Pointer and resize events only ever arrive between frames; they replace the
 * pointer snapshot or the surface and never touch a frame in progress.
 */

use nannou::prelude::*;

use crate::canvas::DisplayList;
use crate::connection::{ConnectionGraph, LinkStrategy};
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::params::SimulationParams;
use crate::pointer::Pointer;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

pub struct Scene {
    field: ParticleField,
    graph: ConnectionGraph,
    surface: Surface,
    pointer: Pointer,
    frame: DisplayList,
    show_links: bool,
}

impl Scene {
    // Create a scene and seed it for the given surface
    pub fn new(surface: Surface, params: &SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut field = ParticleField::new(params.particle_color);
        field.populate(surface.width(), surface.height(), params.density)?;

        let graph = ConnectionGraph::new(params.particle_color, params.accent_color)
            .with_strategy(params.link_strategy());

        let mut scene = Self::with_field(surface, field, graph);
        scene.show_links = params.show_links;
        Ok(scene)
    }

    // Create a scene around an already built field
    pub fn with_field(surface: Surface, field: ParticleField, graph: ConnectionGraph) -> Self {
        Self {
            field,
            graph,
            pointer: Pointer::for_surface(&surface),
            surface,
            frame: DisplayList::new(),
            show_links: true,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Draw calls produced by the last frame.
    pub fn display_list(&self) -> &DisplayList {
        &self.frame
    }

    // Run one complete frame
    pub fn frame(&mut self) -> FrameStats {
        self.frame.clear();

        self.field.tick(&self.surface, &self.pointer, &mut self.frame);

        let links = if self.show_links {
            self.graph
                .evaluate(self.field.particles(), &self.surface, &mut self.frame)
        } else {
            0
        };

        FrameStats {
            particles: self.field.len(),
            links,
        }
    }

    // Adopt new surface dimensions. Particles are kept where they are.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.surface = Surface::new(width, height)?;
        self.pointer = self.pointer.resized(&self.surface);

        log::info!(
            "surface resized to {:.0}x{:.0}, influence radius {:.1}",
            width,
            height,
            self.pointer.influence_radius
        );
        Ok(())
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        if self.pointer.position.is_none() {
            log::debug!("pointer entered at ({:.1}, {:.1})", position.x, position.y);
        }
        self.pointer = self.pointer.moved_to(position);
    }

    pub fn pointer_left(&mut self) {
        log::debug!("pointer left the surface");
        self.pointer = self.pointer.left();
    }

    pub fn pointer_clicked(&mut self, position: Vec2) {
        self.field.spawn_at(position.x, position.y);
    }

    pub fn repopulate(&mut self, density: f32) -> Result<usize, ConfigError> {
        self.field
            .populate(self.surface.width(), self.surface.height(), density)
    }

    pub fn set_link_strategy(&mut self, strategy: LinkStrategy) {
        self.graph.strategy = strategy;
    }

    pub fn set_show_links(&mut self, show_links: bool) {
        self.show_links = show_links;
    }
}
