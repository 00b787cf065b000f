/*
 * Input Module
 *
 * This module turns window events into scene events. nannou reports mouse
 * positions in window space (origin at the centre, y up), so every position
 * is converted to surface space before the scene sees it.
 *
 * - Mouse moved: update the pointer snapshot
 * - Mouse left the window: pointer becomes absent
 * - Left click outside the UI: spawn a particle under the pointer
 * - Resize: re-derive the surface and the pointer influence radius
 */

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let surface_pos = model.scene.surface().window_to_surface(pos);
    model.scene.pointer_moved(surface_pos);
}

// Mouse left the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.scene.pointer_left();
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Clicks on the control panel belong to the UI
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    if let Some(position) = model.scene.pointer().position {
        model.scene.pointer_clicked(position);
    }
}

// Window resized event handler
pub fn window_resized(_app: &App, model: &mut Model, size: Vec2) {
    if let Err(e) = model.scene.resize(size.x, size.y) {
        log::warn!("ignoring resize: {}", e);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
