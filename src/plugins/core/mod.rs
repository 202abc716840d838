//! Core plugin: shared resources, the fixed-tick pipeline, and structural cleanup.
//!
//! Three responsibilities:
//! - insert the resources every other plugin leans on (`Tunables`, `RoundRng`,
//!   the `CombatCue` message channel) and pin the fixed timestep to the tick rate;
//! - chain the [`TickSet`]s so one `FixedUpdate` run executes the tick passes in
//!   their contractual order, and gate the whole chain on the round still running;
//! - own deferred despawning: tick passes only ever *mark* entities with
//!   [`PendingDespawn`], and `despawn_marked` removes them in `PostUpdate`. Passes
//!   later in the same tick filter on `Without<PendingDespawn>`, which is how an
//!   arrow or enemy "removed" mid-tick stops participating without mutating the
//!   entity lists while they are being scanned.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::common::cues::CombatCue;
use crate::common::schedule::TickSet;
use crate::common::state::GameState;
use crate::common::tunables::{TICK_HZ, Tunables};
use crate::plugins::round::round_ongoing;

/// Marker: entity should be removed from the world.
///
/// We don't despawn inside the fixed-step passes; we mark and despawn later.
/// This keeps structural changes centralized and avoids ordering hazards.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Seeded RNG resource.
///
/// All gameplay randomness (spawn height, impact damage) draws from this one
/// generator, so a round is reproducible from its seed.
#[derive(Resource, Debug)]
pub struct RoundRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl RoundRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for RoundRng {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(RoundRng::default());
    app.insert_resource(ClearColor(Color::srgb(0.16, 0.35, 0.16)));
    app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));

    app.add_message::<CombatCue>();

    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Movement,
            TickSet::Arrows,
            TickSet::Combat,
            TickSet::Enemies,
            TickSet::Spawn,
            TickSet::Outcome,
        )
            .chain()
            .run_if(in_state(GameState::InGame))
            .run_if(round_ongoing),
    );

    app.add_systems(PostUpdate, despawn_marked);
}

/// Despawn entities marked by the tick passes.
pub(crate) fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
