//! Enemies plugin: timed spawning with a ramping cadence, leftward advance,
//! and structure impact.
//!
//! The spawner is the whole difficulty curve: every expiry shortens the next
//! interval by one tick until the floor, so pressure rises deterministically
//! while only the spawn height (and impact damage) is random.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::cues::CombatCue;
use crate::common::schedule::TickSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::core::{PendingDespawn, RoundRng};
use crate::plugins::round::RoundState;

#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Cosmetic walk cycle: four frames, advanced when a short countdown expires.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AnimationPhase {
    pub frame: u8,
    pub countdown: u8,
}

impl AnimationPhase {
    pub const FRAMES: u8 = 4;
    pub const HOLD_TICKS: u8 = 5;

    /// One tick of the cycle; returns through frame 0 after the last frame.
    pub fn tick(&mut self) {
        if self.countdown == 0 {
            self.countdown = Self::HOLD_TICKS;
            self.frame = (self.frame + 1) % Self::FRAMES;
        } else {
            self.countdown -= 1;
        }
    }
}

/// Spawn pacing state.
#[derive(Resource, Debug, Clone)]
pub struct Spawner {
    pub ticks_since_spawn: u32,
    pub current_interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self {
            ticks_since_spawn: 0,
            current_interval: interval,
        }
    }
}

pub fn plugin(app: &mut App) {
    let interval = app.world().resource::<Tunables>().spawn_interval_start;
    app.insert_resource(Spawner::new(interval));

    app.add_systems(OnEnter(GameState::InGame), reset_spawner);
    app.add_systems(
        FixedUpdate,
        (advance_enemies, animate_enemies)
            .chain()
            .in_set(TickSet::Enemies),
    );
    app.add_systems(FixedUpdate, tick_spawner.in_set(TickSet::Spawn));
}

fn reset_spawner(tunables: Res<Tunables>, mut spawner: ResMut<Spawner>) {
    *spawner = Spawner::new(tunables.spawn_interval_start);
}

/// Count the tick and spawn one enemy per interval expiry.
fn tick_spawner(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut spawner: ResMut<Spawner>,
    mut rng: ResMut<RoundRng>,
) {
    spawner.ticks_since_spawn += 1;
    if spawner.ticks_since_spawn < spawner.current_interval {
        return;
    }

    spawner.ticks_since_spawn = 0;
    let (y_min, y_max) = tunables.spawn_y_range();
    let y = rng.rng.gen_range(y_min..=y_max);
    spawn_enemy(&mut commands, &tunables, y);

    spawner.current_interval = spawner
        .current_interval
        .saturating_sub(1)
        .max(tunables.spawn_interval_floor);
}

pub fn spawn_enemy(commands: &mut Commands, tunables: &Tunables, y: f32) {
    commands.spawn((
        Name::new("Badger"),
        Enemy,
        AnimationPhase::default(),
        Sprite {
            color: Color::srgb(0.35, 0.3, 0.3),
            custom_size: Some(tunables.enemy_size),
            ..default()
        },
        Transform::from_xyz(tunables.spawn_x(), y, 1.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Advance every surviving enemy one tick; resolve structure impacts.
///
/// Runs after the combat pass, so an enemy killed this tick (already marked)
/// neither moves nor damages the structures.
fn advance_enemies(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut round: ResMut<RoundState>,
    mut rng: ResMut<RoundRng>,
    mut cues: MessageWriter<CombatCue>,
    mut q_enemies: Query<(Entity, &mut Transform), (With<Enemy>, Without<PendingDespawn>)>,
) {
    for (e, mut tf) in &mut q_enemies {
        tf.translation.x -= tunables.enemy_speed;

        if tf.translation.x <= tunables.impact_line() {
            commands.entity(e).insert(PendingDespawn);
            let damage = rng.rng.gen_range(tunables.damage_min..=tunables.damage_max);
            round.apply_structure_damage(damage);
            cues.write(CombatCue::StructureHit { damage });
        }
    }
}

/// Tick the walk cycle and tint the sprite per frame (asset-free animation).
fn animate_enemies(
    mut q_enemies: Query<(&mut AnimationPhase, &mut Sprite), (With<Enemy>, Without<PendingDespawn>)>,
) {
    for (mut phase, mut sprite) in &mut q_enemies {
        phase.tick();
        sprite.color = match phase.frame {
            1 => Color::srgb(0.40, 0.33, 0.31),
            3 => Color::srgb(0.30, 0.27, 0.29),
            _ => Color::srgb(0.35, 0.30, 0.30),
        };
    }
}
