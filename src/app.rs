/*
 * Application Module
 *
 * This module defines the nannou model for the constellation and the update
 * callback. The app runs in refresh-synced loop mode, so `update` is called
 * once per display refresh: it handles the UI, then runs exactly one frame of
 * the scene into its display list. `view` (see the renderer module) only
 * replays that list.
 */

use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::connection::ConnectionGraph;
use crate::debug::DebugInfo;
use crate::field::ParticleField;
use crate::input::{mouse_exited, mouse_moved, mouse_pressed, raw_window_event, window_resized};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::scene::Scene;
use crate::surface::Surface;
use crate::ui;

const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 800);

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    app.set_loop_mode(LoopMode::RefreshSync);

    // Size the window to 80% of the primary monitor when one is reported
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    // Create the main window
    let window_id = app
        .new_window()
        .title("Constellations")
        .size(window_width, window_height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_exited(mouse_exited)
        .resized(window_resized)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app
        .window(window_id)
        .expect("main window closed during start-up");

    // Create the UI
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();

    let surface = Surface::from_rect(window.rect()).unwrap_or_else(|e| {
        log::warn!("{}, starting with an empty surface", e);
        Surface::default()
    });

    let scene = Scene::new(surface, &params).unwrap_or_else(|e| {
        log::error!("failed to seed particles: {}", e);
        Scene::with_field(
            surface,
            ParticleField::new(params.particle_color),
            ConnectionGraph::new(params.particle_color, params.accent_color),
        )
    });

    Model {
        scene,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check whether the field should be reseeded
    let (should_repopulate, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if ui_changed {
        log::debug!(
            "display settings changed: links={} grid={} paused={}",
            model.params.show_links,
            model.params.enable_spatial_grid,
            model.params.pause_simulation
        );
        model.scene.set_show_links(model.params.show_links);
        model.scene.set_link_strategy(model.params.link_strategy());
    }

    if should_repopulate {
        if let Err(e) = model.scene.repopulate(model.params.density) {
            log::error!("repopulate rejected: {}", e);
        }
    }

    // Run one frame unless paused; a paused scene keeps showing its last frame
    if !model.params.pause_simulation {
        let start = Instant::now();
        let stats = model.scene.frame();
        model.debug_info.record_frame(&stats, start.elapsed());
    }

    model.debug_info.pointer = model.scene.pointer().position;
}
