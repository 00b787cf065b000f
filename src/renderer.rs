/*
 * Renderer Module
 *
 * This module draws the constellation. The scene has already recorded the
 * frame's draw calls in surface space; the renderer replays them through a
 * nannou-backed Canvas that converts to window space, then adds the debug
 * overlay and the UI on top.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::canvas::Canvas;
use crate::surface::Surface;
use crate::ui;

// Canvas implementation on top of a nannou Draw
pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    surface: Surface,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, surface: Surface) -> Self {
        Self { draw, surface }
    }
}

impl Canvas for NannouCanvas<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>) {
        // Zero-radius particles still move and link but have nothing to fill
        if radius <= 0.0 {
            return;
        }
        self.draw
            .ellipse()
            .xy(self.surface.surface_to_window(center))
            .radius(radius)
            .color(color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb<u8>, opacity: f32, width: f32) {
        self.draw
            .line()
            .start(self.surface.surface_to_window(from))
            .end(self.surface.surface_to_window(to))
            .weight(width)
            .color(rgba(
                color.red as f32 / 255.0,
                color.green as f32 / 255.0,
                color.blue as f32 / 255.0,
                opacity,
            ));
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    // Clear the background
    draw.background().color(model.params.background_color);

    let surface = *model.scene.surface();
    let mut canvas = NannouCanvas::new(&draw, surface);
    model.scene.display_list().replay(&mut canvas);

    if model.params.show_debug {
        // Pointer influence radius
        let pointer = model.scene.pointer();
        if let Some(position) = pointer.position {
            draw.ellipse()
                .xy(surface.surface_to_window(position))
                .radius(pointer.influence_radius)
                .no_fill()
                .stroke(rgba(1.0, 0.5, 0.0, 0.7))
                .stroke_weight(1.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", e);
    }

    // Draw the egui UI
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw UI: {:?}", e);
    }
}
