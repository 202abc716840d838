//! Projectiles plugin: producer → message → consumer spawning, flight, and
//! the arrow-vs-enemy combat pass.
//!
//! # Data flow
//! ```text
//!   Update schedule (per frame)
//! ┌──────────────────────────────────────────────────────────────┐
//! │  (A) Producer: request_arrows                                │
//! │      - reads: MouseButton input, Aim, Player Transform       │
//! │      - writes: SpawnArrowRequest message                     │
//! │                                                              │
//! │  (B) Consumer: spawn_arrows                                  │
//! │      - reads: SpawnArrowRequest messages                     │
//! │      - spawns Arrow entities                                 │
//! │      - increments RoundState::shots_fired                    │
//! └──────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate (per tick)
//! ┌──────────────────────────────────────────────────────────────┐
//! │  (C) TickSet::Arrows: advance_arrows                         │
//! │      - moves each arrow by speed · (cos θ, sin θ)            │
//! │      - marks PendingDespawn when the center leaves the arena │
//! │                                                              │
//! │  (D) TickSet::Combat: resolve_arrow_hits                     │
//! │      - AABB scan of live enemies against live arrows         │
//! │      - marks both sides, counts the kill                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The producer does not spawn and does not touch counters; it only records
//! intent. The consumer is the single writer for arrow spawning, which is
//! also where "shots fired" is counted — a shot counts the moment it leaves
//! the bow, whatever happens to the arrow afterwards.

pub mod collision;
pub mod messages;
pub mod request;
pub mod systems;

use bevy::prelude::*;

use crate::common::schedule::TickSet;
use crate::common::state::GameState;

/// An arrow in flight. The angle is fixed at fire time; speed comes from
/// `Tunables`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Arrow {
    pub angle: f32,
}

pub fn plugin(app: &mut App) {
    app.add_message::<messages::SpawnArrowRequest>();

    app.add_systems(
        Update,
        (request::request_arrows, systems::spawn_arrows)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(FixedUpdate, systems::advance_arrows.in_set(TickSet::Arrows));
    app.add_systems(
        FixedUpdate,
        collision::resolve_arrow_hits.in_set(TickSet::Combat),
    );
}
