use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

use super::{Player, PlayerInput, facing_angle};

fn world_with_player(pos: Vec2) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput::default());
    world.spawn((Player, Transform::from_translation(pos.extend(1.0))));
    world
}

fn player_pos(world: &mut World) -> Vec2 {
    world
        .query_filtered::<&Transform, With<Player>>()
        .single(world)
        .unwrap()
        .translation
        .truncate()
}

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn);
    assert!(world.query::<&Player>().iter(&world).next().is_some());
}

#[test]
fn axis_move_covers_base_speed() {
    let mut world = world_with_player(Vec2::ZERO);
    world.resource_mut::<PlayerInput>().axis = Vec2::new(1.0, 0.0);

    run_system_once(&mut world, super::apply_movement);

    let speed = world.resource::<Tunables>().player_speed;
    assert_eq!(player_pos(&mut world), Vec2::new(speed, 0.0));
}

#[test]
fn diagonal_magnitude_equals_base_speed() {
    let speed = Tunables::default().player_speed;
    for axis in [
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, -1.0),
    ] {
        let mut world = world_with_player(Vec2::ZERO);
        world.resource_mut::<PlayerInput>().axis = axis;

        run_system_once(&mut world, super::apply_movement);

        let moved = player_pos(&mut world).length();
        assert!(
            (moved - speed).abs() < 1e-4,
            "diagonal displacement {moved} should equal base speed {speed}"
        );
    }
}

#[test]
fn opposing_keys_cancel_per_axis() {
    // gather_input reduces the held-key set; feed the reduced axis directly.
    let mut world = world_with_player(Vec2::ZERO);
    world.resource_mut::<PlayerInput>().axis = Vec2::ZERO;

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(player_pos(&mut world), Vec2::ZERO);
}

#[test]
fn border_rejects_one_axis_but_not_the_other() {
    let tunables = Tunables::default();
    let (lo, _) = tunables.move_bounds(tunables.player_size * 0.5);

    // Sitting on the left bound: a further left+up move must still go up.
    let mut world = world_with_player(Vec2::new(lo.x, 0.0));
    world.resource_mut::<PlayerInput>().axis = Vec2::new(-1.0, 1.0);

    run_system_once(&mut world, super::apply_movement);

    let pos = player_pos(&mut world);
    assert_eq!(pos.x, lo.x, "left move past the border must be rejected");
    assert!(pos.y > 0.0, "vertical move must still apply");
}

#[test]
fn movement_never_escapes_the_border() {
    let tunables = Tunables::default();
    let (lo, hi) = tunables.move_bounds(tunables.player_size * 0.5);

    let mut world = world_with_player(Vec2::ZERO);
    // Drive hard into a corner for far longer than the arena is wide.
    world.resource_mut::<PlayerInput>().axis = Vec2::new(-1.0, -1.0);
    for _ in 0..500 {
        run_system_once(&mut world, super::apply_movement);
    }

    let pos = player_pos(&mut world);
    assert!(pos.x >= lo.x && pos.x <= hi.x);
    assert!(pos.y >= lo.y && pos.y <= hi.y);
}

#[test]
fn facing_angle_points_at_the_cursor() {
    let a = facing_angle(Vec2::ZERO, Vec2::new(0.0, 10.0));
    assert!((a - std::f32::consts::FRAC_PI_2).abs() < 1e-5);

    let b = facing_angle(Vec2::new(5.0, 5.0), Vec2::new(10.0, 5.0));
    assert!(b.abs() < 1e-5);
}
