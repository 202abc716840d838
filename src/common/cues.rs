//! Fire-and-forget combat feedback.
//!
//! Simulation systems announce noteworthy moments here and never look back;
//! presentation (HUD flash today, an audio backend tomorrow) subscribes with
//! a `MessageReader`. Nothing in the simulation depends on whether anyone
//! listens.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatCue {
    ShotFired,
    EnemyKilled,
    StructureHit { damage: i32 },
}
