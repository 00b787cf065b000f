/*
 * Canvas Module
 *
 * The two draw primitives the simulation needs, expressed as a trait so the
 * core never owns a rendering backend. All coordinates are in surface space.
 *
 * DisplayList records the calls of one frame. The nannou front end fills a
 * DisplayList during `update` and replays it during `view`; tests inspect it
 * directly.
 */

use nannou::prelude::*;

pub trait Canvas {
    /// Fill a circle centred at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>);

    /// Stroke a straight line. `opacity` is in `[0, 1]`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb<u8>, opacity: f32, width: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb<u8>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgb<u8>,
        opacity: f32,
        width: f32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    // Replay every recorded command, in order, onto another canvas
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) {
        for command in &self.commands {
            match *command {
                DrawCommand::Circle { center, radius, color } => {
                    target.fill_circle(center, radius, color)
                }
                DrawCommand::Line { from, to, color, opacity, width } => {
                    target.stroke_line(from, to, color, opacity, width)
                }
            }
        }
    }
}

impl Canvas for DisplayList {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb<u8>, opacity: f32, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            opacity,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_replays_in_order() {
        let white: Rgb<u8> = rgb(255, 255, 255);
        let mut list = DisplayList::new();
        list.fill_circle(vec2(1.0, 2.0), 3.0, white);
        list.stroke_line(vec2(0.0, 0.0), vec2(1.0, 1.0), white, 0.5, 1.5);
        assert_eq!(list.circle_count(), 1);
        assert_eq!(list.line_count(), 1);

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy.commands(), list.commands());

        list.clear();
        assert!(list.is_empty());
    }
}
