//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod enemies;
pub mod player;
pub mod projectiles;
pub mod round;
pub mod world;

// Render-only
pub mod camera;
pub mod hud;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    world::plugin(app);
    player::plugin(app);
    projectiles::plugin(app);
    enemies::plugin(app);
    round::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    hud::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
