/*
 * Constellations
 *
 * Draws a field of slowly drifting particles that bounce off the window
 * edges, step away from the mouse and are joined by lines to every nearby
 * particle. Clicking adds a particle under the mouse.
 *
 * Set RUST_LOG (e.g. RUST_LOG=constellations=debug) for log output.
 */

use constellations::app;

fn main() {
    env_logger::init();
    log::info!("starting constellations");

    nannou::app(app::model).update(app::update).run();
}
