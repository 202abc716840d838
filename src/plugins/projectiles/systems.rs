use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::cues::CombatCue;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::core::PendingDespawn;
use crate::plugins::round::RoundState;

use super::Arrow;
use super::messages::SpawnArrowRequest;

/// Consumer: spawn one arrow per request and count the shot.
///
/// Shots are counted here, not at hit time, so the counter is monotone in
/// fire inputs regardless of each arrow's fate.
pub fn spawn_arrows(
    mut commands: Commands,
    mut reader: MessageReader<SpawnArrowRequest>,
    mut round: ResMut<RoundState>,
    mut cues: MessageWriter<CombatCue>,
    tunables: Res<Tunables>,
) {
    for req in reader.read() {
        round.shots_fired += 1;
        cues.write(CombatCue::ShotFired);

        commands.spawn((
            Name::new("Arrow"),
            Arrow { angle: req.angle },
            Sprite {
                color: Color::srgb(0.65, 0.45, 0.2),
                custom_size: Some(tunables.arrow_size),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0))
                .with_rotation(Quat::from_rotation_z(req.angle)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Advance every live arrow one tick; cull the ones that left the arena.
///
/// An arrow is gone the tick its center first exits the screen rectangle —
/// marked here, despawned in `PostUpdate`, so the collision pass later this
/// tick already ignores it.
pub fn advance_arrows(
    tunables: Res<Tunables>,
    mut commands: Commands,
    mut q_arrows: Query<(Entity, &Arrow, &mut Transform), Without<PendingDespawn>>,
) {
    for (e, arrow, mut tf) in &mut q_arrows {
        tf.translation.x += tunables.arrow_speed * arrow.angle.cos();
        tf.translation.y += tunables.arrow_speed * arrow.angle.sin();

        if !tunables.contains(tf.translation.truncate()) {
            commands.entity(e).insert(PendingDespawn);
        }
    }
}
