/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame statistics
 * displayed in the UI and the on-screen debug overlay.
 */

use std::time::Duration;

use nannou::prelude::*;

use crate::scene::FrameStats;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick_time: Duration,
    pub particle_count: usize,
    pub link_count: usize,
    pub pointer: Option<Vec2>,
}

impl DebugInfo {
    pub fn record_frame(&mut self, stats: &FrameStats, tick_time: Duration) {
        self.particle_count = stats.particles;
        self.link_count = stats.links;
        self.tick_time = tick_time;
    }
}
