//! End-to-end round scenarios on the headless app.

mod common;

use bevy::prelude::*;

use bunny_defender::common::tunables::Tunables;
use bunny_defender::plugins::enemies::{AnimationPhase, Enemy};
use bunny_defender::plugins::projectiles::Arrow;
use bunny_defender::plugins::projectiles::messages::SpawnArrowRequest;
use bunny_defender::plugins::round::{Outcome, RoundState};

#[test]
fn idle_round_runs_out_the_clock_and_wins() {
    let mut app = common::app_headless(3);

    // Shorten the clock; the spawner (interval 100) never fires in 50 ticks.
    app.world_mut().resource_mut::<Tunables>().time_limit_ticks = 50;

    common::tick(&mut app, 50);

    let round = app.world().resource::<RoundState>();
    assert_eq!(round.outcome, Outcome::Won);
    assert_eq!(round.shots_fired, 0);
    assert_eq!(round.accuracy(), 0.0);
    assert_eq!(
        format!("{:.2}", round.accuracy()),
        "0.00",
        "end screen must show 0.00, not a division error"
    );
}

#[test]
fn terminal_round_stops_simulating() {
    let mut app = common::app_headless(4);
    app.world_mut().resource_mut::<Tunables>().time_limit_ticks = 10;

    common::tick(&mut app, 10);
    let elapsed = app.world().resource::<RoundState>().elapsed_ticks;
    assert_eq!(app.world().resource::<RoundState>().outcome, Outcome::Won);

    // Further ticks must not mutate the round.
    common::tick(&mut app, 25);
    assert_eq!(app.world().resource::<RoundState>().elapsed_ticks, elapsed);
}

#[test]
fn unopposed_enemy_breaches_and_costs_structure_health() {
    let mut app = common::app_headless(5);
    let tunables = app.world().resource::<Tunables>().clone();
    let start_health = app.world().resource::<RoundState>().structure_health;

    app.world_mut().spawn((
        Enemy,
        AnimationPhase::default(),
        Transform::from_xyz(tunables.impact_line() + tunables.enemy_speed * 2.0, 0.0, 1.0),
    ));

    common::tick(&mut app, 3);

    let health = app.world().resource::<RoundState>().structure_health;
    let lost = start_health - health;
    assert!(
        (tunables.damage_min..=tunables.damage_max).contains(&lost),
        "structure damage {lost} outside the configured range"
    );
    let enemies = app.world_mut().query::<&Enemy>().iter(app.world()).count();
    assert_eq!(enemies, 0, "the breaching enemy despawns");
}

#[test]
fn draining_the_structures_loses_the_round() {
    let mut app = common::app_headless(6);
    let tunables = app.world().resource::<Tunables>().clone();

    app.world_mut()
        .resource_mut::<RoundState>()
        .structure_health = tunables.damage_min;
    app.world_mut().spawn((
        Enemy,
        AnimationPhase::default(),
        Transform::from_xyz(tunables.impact_line() + 1.0, 0.0, 1.0),
    ));

    common::tick(&mut app, 1);

    let round = app.world().resource::<RoundState>();
    assert_eq!(round.structure_health, 0);
    assert_eq!(round.outcome, Outcome::Lost);
}

#[test]
fn fired_arrow_kills_an_enemy_in_its_path() {
    let mut app = common::app_headless(7);
    let tunables = app.world().resource::<Tunables>().clone();

    // Fire straight right from the center through the message pipeline.
    app.world_mut().write_message(SpawnArrowRequest {
        pos: Vec2::ZERO,
        angle: 0.0,
    });
    app.update();
    assert_eq!(app.world().resource::<RoundState>().shots_fired, 1);

    // Park an enemy a few ticks down the arrow's path.
    app.world_mut().spawn((
        Enemy,
        AnimationPhase::default(),
        Transform::from_xyz(tunables.arrow_speed * 4.0, 0.0, 1.0),
    ));

    common::tick(&mut app, 10);

    let round = app.world().resource::<RoundState>();
    assert_eq!(round.kills, 1);
    assert_eq!(round.shots_fired, 1);
    let enemies = app.world_mut().query::<&Enemy>().iter(app.world()).count();
    let arrows = app.world_mut().query::<&Arrow>().iter(app.world()).count();
    assert_eq!((enemies, arrows), (0, 0), "both sides of the hit despawn");
}
