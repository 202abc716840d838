//! Arrow-vs-enemy hit resolution.
//!
//! A plain rectangle scan: every live enemy against every live arrow. Hits
//! never mutate the scanned sets in place — matched entities are marked
//! `PendingDespawn` (applied after the pass) and spent arrows go into a
//! pass-local set, so the scan iterates over stable lists.
//!
//! At most one kill per enemy per tick, and a spent arrow kills nothing else
//! in the same pass.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::cues::CombatCue;
use crate::common::tunables::Tunables;
use crate::plugins::core::PendingDespawn;
use crate::plugins::enemies::Enemy;
use crate::plugins::round::RoundState;

use super::Arrow;

/// Axis-aligned overlap test on center positions + half sizes.
#[inline]
fn aabb_overlap(a: Vec2, a_size: Vec2, b: Vec2, b_size: Vec2) -> bool {
    let gap = (a - b).abs();
    let reach = (a_size + b_size) * 0.5;
    gap.x < reach.x && gap.y < reach.y
}

pub fn resolve_arrow_hits(
    tunables: Res<Tunables>,
    mut commands: Commands,
    mut round: ResMut<RoundState>,
    mut cues: MessageWriter<CombatCue>,
    q_enemies: Query<(Entity, &Transform), (With<Enemy>, Without<PendingDespawn>)>,
    q_arrows: Query<(Entity, &Transform), (With<Arrow>, Without<PendingDespawn>)>,
    // Arrows spent earlier in this pass.
    mut spent: Local<HashSet<Entity>>,
) {
    spent.clear();

    for (enemy_e, enemy_tf) in &q_enemies {
        for (arrow_e, arrow_tf) in &q_arrows {
            if spent.contains(&arrow_e) {
                continue;
            }
            if !aabb_overlap(
                enemy_tf.translation.truncate(),
                tunables.enemy_size,
                arrow_tf.translation.truncate(),
                tunables.arrow_size,
            ) {
                continue;
            }

            spent.insert(arrow_e);
            commands.entity(enemy_e).insert(PendingDespawn);
            commands.entity(arrow_e).insert(PendingDespawn);
            round.kills += 1;
            cues.write(CombatCue::EnemyKilled);
            break;
        }
    }
}

#[cfg(test)]
mod aabb_tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric_and_edge_exclusive() {
        let size = Vec2::splat(10.0);
        assert!(aabb_overlap(Vec2::ZERO, size, Vec2::new(9.0, 0.0), size));
        assert!(aabb_overlap(Vec2::new(9.0, 0.0), size, Vec2::ZERO, size));
        // Touching edges do not count as overlap.
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(10.0, 0.0), size));
    }
}
