//! Fixed-tick system sets.
//!
//! One `FixedUpdate` run is one simulation tick. The sets below are chained
//! (see `plugins::core`) so every tick executes the same pass order:
//!
//! 1. `Movement` — player displacement from the sampled key state
//! 2. `Arrows`   — arrow advance + off-screen cull
//! 3. `Combat`   — arrow-vs-enemy hit resolution
//! 4. `Enemies`  — enemy advance + structure-impact pass
//! 5. `Spawn`    — spawn-timer tick
//! 6. `Outcome`  — elapsed-tick increment + win/lose check
//!
//! The Combat-before-Enemies order is load-bearing: an enemy hit on the same
//! tick it would have reached the structures counts as a kill, not a hit.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Movement,
    Arrows,
    Combat,
    Enemies,
    Spawn,
    Outcome,
}
