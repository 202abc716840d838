//! World plugin: the grass field and the defended structure column.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

const TILE: f32 = 32.0;

/// Marker for the castles along the left edge.
///
/// Structures share one health pool (`RoundState::structure_health`); the
/// entities exist for rendering and for counting in tests.
#[derive(Component, Debug, Clone, Copy)]
pub struct Structure;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_field);
    app.add_systems(OnEnter(GameState::InGame), spawn_structures);
}

/// Spawn a two-tone grass checker.
///
/// We intentionally build the field from solid-color sprites so the project has
/// no assets.
fn spawn_field(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.half_extents();
    let cols = (tunables.arena_width / TILE).ceil() as i32;
    let rows = (tunables.arena_height / TILE).ceil() as i32;

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let world_pos = Vec3::new(
                -half.x + TILE * (x as f32 + 0.5),
                -half.y + TILE * (y as f32 + 0.5),
                0.0,
            );
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.18, 0.38, 0.18)
            } else {
                Color::srgb(0.16, 0.34, 0.16)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_translation(world_pos),
            ));
        });
}

/// Spawn the column of four castles against the left edge.
fn spawn_structures(mut commands: Commands, tunables: Res<Tunables>) {
    let size = tunables.structure_size;
    let x = -tunables.arena_width * 0.5 + size.x * 0.5;

    for i in 0..4 {
        let y = 1.5 * size.y - size.y * i as f32;
        commands.spawn((
            Name::new(format!("Castle{i}")),
            Structure,
            Sprite {
                color: Color::srgb(0.55, 0.55, 0.6),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(x, y, 0.5),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
