//! Camera plugin (render-only).
//!
//! One fixed `Camera2d` on the arena center. The game is a single screen, so
//! the camera never moves; gameplay systems only use the `MainCamera` marker
//! to convert the cursor into world space.

use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
