//! Player plugin.
//!
//! Pipeline:
//! - Update: sample held keys into `PlayerInput`, poll the cursor into `Aim`,
//!   turn the sprite toward the aim point.
//! - FixedUpdate (`TickSet::Movement`): apply one tick of displacement.
//!
//! Movement contract:
//! - opposing keys cancel per axis (W+S = no vertical move);
//! - diagonal movement scales both axes by 1/sqrt(2) so its magnitude equals
//!   the base speed;
//! - each axis is clamped independently: a step that would push the draw
//!   rectangle past the playfield border is rejected on that axis only.
//!
//! The facing angle is a per-frame derivation from the cursor, never stored:
//! the same `facing_angle` computation is used here for the sprite rotation
//! and by the projectile producer for the fire direction.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::schedule::TickSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;

#[derive(Component)]
pub struct Player;

/// Held movement keys, reduced to a per-axis direction in {-1, 0, 1}.
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub axis: Vec2,
}

/// Polled pointer position in world space. `None` while the cursor is outside
/// the window (or in headless apps, always).
#[derive(Resource, Default, Debug)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

/// Angle from `from` toward `to`, in radians counter-clockwise from +X.
pub fn facing_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d.length_squared() < 1e-4 { 0.0 } else { d.to_angle() }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .insert_resource(Aim::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, update_aim, face_cursor).run_if(in_state(GameState::InGame)),
        )
        .add_systems(FixedUpdate, apply_movement.in_set(TickSet::Movement));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.92, 0.88, 0.82),
            custom_size: Some(tunables.player_size),
            ..default()
        },
        Transform::from_translation(tunables.player_start.extend(1.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return };

    let mut axis = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.axis = axis;
}

/// Convert the window cursor to world space through the main camera.
fn update_aim(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    aim.world_cursor = None;

    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Ok((camera, camera_tf)) = q_camera.single() else { return };
    let Ok(world_cursor) = camera.viewport_to_world_2d(camera_tf, cursor) else {
        return;
    };

    aim.world_cursor = Some(world_cursor);
}

/// Presentation: turn the sprite toward the pointer.
fn face_cursor(aim: Res<Aim>, mut q_player: Query<&mut Transform, With<Player>>) {
    let Some(cursor) = aim.world_cursor else { return };
    let Ok(mut tf) = q_player.single_mut() else { return };
    let angle = facing_angle(tf.translation.truncate(), cursor);
    tf.rotation = Quat::from_rotation_z(angle);
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut tf) = q_player.single_mut() else {
        return;
    };

    let diagonal = input.axis.x != 0.0 && input.axis.y != 0.0;
    let step = if diagonal {
        tunables.player_speed * std::f32::consts::FRAC_1_SQRT_2
    } else {
        tunables.player_speed
    };

    let (lo, hi) = tunables.move_bounds(tunables.player_size * 0.5);

    // Axes are independent: rejecting one does not block the other.
    let x = tf.translation.x + input.axis.x * step;
    if (lo.x..=hi.x).contains(&x) {
        tf.translation.x = x;
    }
    let y = tf.translation.y + input.axis.y * step;
    if (lo.y..=hi.y).contains(&y) {
        tf.translation.y = y;
    }
}

#[cfg(test)]
mod tests;
