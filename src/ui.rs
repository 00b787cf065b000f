/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui: a small control panel with frame statistics and display
 * toggles, and a text panel drawn on the canvas when debug is enabled.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the field should be repopulated and whether any toggle changed
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> (bool, bool) {
    let mut should_repopulate = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Constellation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.density, SimulationParams::get_density_range())
                        .text("Area per particle"),
                );

                if ui.button("Repopulate").clicked() {
                    should_repopulate = true;
                }

                ui.label("Click anywhere to add a particle");
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.enable_spatial_grid, "Enable Spatial Grid");

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Tick time: {:.2} ms", debug_info.tick_time.as_secs_f64() * 1000.0));
                ui.label(format!("Particles: {}", debug_info.particle_count));
                ui.label(format!("Links: {}", debug_info.link_count));
            });

            ui.checkbox(&mut params.show_links, "Show Links");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    (should_repopulate, params.detect_changes())
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = panel_x;
    let text_y = window_rect.top() - margin;

    let pointer = match debug_info.pointer {
        Some(p) => format!("Pointer: ({:.0}, {:.0})", p.x, p.y),
        None => "Pointer: none".to_string(),
    };

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Tick time: {:.2} ms", debug_info.tick_time.as_secs_f64() * 1000.0),
        format!("Particles: {}", debug_info.particle_count),
        format!("Links: {}", debug_info.link_count),
        pointer,
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
