//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `StatesPlugin` backs the `GameState` machine.
//! - `configure_headless` installs the gameplay plugins only.
//!
//! `tick` drives the simulation deterministically: one `FixedUpdate` run is
//! one tick, and `PostUpdate` applies the deferred despawns, independent of
//! wall-clock time.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use bunny_defender::plugins::core::RoundRng;

pub fn app_headless(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    bunny_defender::game::configure_headless(&mut app);
    app.insert_resource(RoundRng::new(seed));

    // First update fires OnEnter(InGame): player spawn, round/spawner reset.
    app.update();
    app
}

#[allow(dead_code)]
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut().run_schedule(PostUpdate);
    }
}
