//! Tunable gameplay constants.
//!
//! Speeds are in world units per simulation tick, not per second; the fixed
//! schedule is pinned to [`TICK_HZ`] so wall-clock pacing stays predictable.
//!
//! Coordinates: the arena is centered on the world origin. The defended
//! structures sit against the left edge, enemies enter at the right edge.

use bevy::prelude::*;

/// Fixed simulation rate. 90 seconds of round time = 5760 ticks.
pub const TICK_HZ: f64 = 64.0;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Width of the strip along each screen edge the player may not cross.
    pub border: f32,

    pub player_start: Vec2,
    pub player_speed: f32,
    pub arrow_speed: f32,
    pub enemy_speed: f32,

    pub player_size: Vec2,
    pub arrow_size: Vec2,
    pub enemy_size: Vec2,
    pub structure_size: Vec2,

    /// Gap past the structure column at which an enemy counts as impacting.
    pub impact_margin: f32,
    /// Vertical margin kept clear of the arena edges when picking spawn height.
    pub spawn_margin: f32,
    pub spawn_interval_start: u32,
    pub spawn_interval_floor: u32,

    pub structure_health: i32,
    pub damage_min: i32,
    pub damage_max: i32,

    pub time_limit_ticks: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            arena_width: 640.0,
            arena_height: 480.0,
            border: 40.0,

            player_start: Vec2::new(-220.0, 140.0),
            player_speed: 5.0,
            arrow_speed: 10.0,
            enemy_speed: 5.0,

            player_size: Vec2::new(44.0, 54.0),
            arrow_size: Vec2::new(32.0, 8.0),
            enemy_size: Vec2::new(50.0, 42.0),
            structure_size: Vec2::new(64.0, 105.0),

            impact_margin: 20.0,
            spawn_margin: 50.0,
            spawn_interval_start: 100,
            spawn_interval_floor: 30,

            structure_health: 194,
            damage_min: 5,
            damage_max: 20,

            time_limit_ticks: 5760,
        }
    }
}

impl Tunables {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.arena_width * 0.5, self.arena_height * 0.5)
    }

    /// True while a point is inside the arena rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        let half = self.half_extents();
        p.x.abs() <= half.x && p.y.abs() <= half.y
    }

    /// Center-position bounds keeping a sprite's draw rectangle inside the
    /// playfield border, given the sprite's half size.
    pub fn move_bounds(&self, half_size: Vec2) -> (Vec2, Vec2) {
        let half = self.half_extents();
        let lo = -half + Vec2::splat(self.border) + half_size;
        let hi = half - Vec2::splat(self.border) - half_size;
        (lo, hi)
    }

    /// X coordinate past which an advancing enemy damages the structures.
    pub fn impact_line(&self) -> f32 {
        -self.arena_width * 0.5 + self.structure_size.x + self.impact_margin
    }

    /// Enemies enter exactly at the right edge.
    pub fn spawn_x(&self) -> f32 {
        self.arena_width * 0.5
    }

    /// Inclusive range of valid enemy spawn heights.
    pub fn spawn_y_range(&self) -> (f32, f32) {
        let half_h = self.arena_height * 0.5;
        (-half_h + self.spawn_margin, half_h - self.spawn_margin)
    }
}
