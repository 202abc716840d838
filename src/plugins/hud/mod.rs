//! HUD plugin (render-only): timer, kill counter, health bar, impact flash,
//! and the end-of-round banner.
//!
//! Everything here is derived presentation. It reads `RoundState` and the
//! `CombatCue` stream and owns no gameplay truth; headless tests never load
//! this module.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::cues::CombatCue;
use crate::common::state::GameState;
use crate::common::tunables::{TICK_HZ, Tunables};
use crate::plugins::round::{Outcome, RoundState};

#[derive(Component)]
struct TimerText;

#[derive(Component)]
struct KillText;

#[derive(Component)]
struct HealthFill;

#[derive(Component)]
struct ImpactFlashOverlay;

/// Flash intensity in [0..1], bumped on structure hits, decayed per frame.
#[derive(Resource, Default, Debug)]
struct ImpactFlash(f32);

const HEALTH_BAR_LEFT: f32 = -312.0;
const HUD_Z: f32 = 5.0;
const OVERLAY_Z: f32 = 50.0;
const BANNER_Z: f32 = 60.0;

pub fn plugin(app: &mut App) {
    app.insert_resource(ImpactFlash::default());

    app.add_systems(OnEnter(GameState::InGame), spawn_hud);
    app.add_systems(
        Update,
        (sync_timer, sync_kills, sync_health, absorb_cues, apply_flash)
            .run_if(in_state(GameState::InGame)),
    );
    app.add_systems(OnEnter(GameState::RoundOver), spawn_end_screen);
}

fn spawn_hud(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.half_extents();

    commands.spawn((
        TimerText,
        Text2d::new("1:30"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Transform::from_xyz(half.x - 40.0, half.y - 18.0, HUD_Z),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        KillText,
        Text2d::new("0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Transform::from_xyz(half.x - 40.0, half.y - 48.0, HUD_Z),
        DespawnOnExit(GameState::InGame),
    ));

    // Health bar: dark backing plus a fill that shrinks with the pool,
    // one unit of width per health point.
    let max_w = tunables.structure_health as f32;
    commands.spawn((
        Sprite {
            color: Color::srgb(0.1, 0.1, 0.1),
            custom_size: Some(Vec2::new(max_w + 6.0, 14.0)),
            ..default()
        },
        Transform::from_xyz(HEALTH_BAR_LEFT + max_w * 0.5, half.y - 15.0, HUD_Z),
        DespawnOnExit(GameState::InGame),
    ));
    commands.spawn((
        HealthFill,
        Sprite {
            color: Color::srgb(0.85, 0.2, 0.2),
            custom_size: Some(Vec2::new(max_w, 10.0)),
            ..default()
        },
        Transform::from_xyz(HEALTH_BAR_LEFT + max_w * 0.5, half.y - 15.0, HUD_Z + 0.1),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        ImpactFlashOverlay,
        Sprite {
            color: Color::srgba(1.0, 0.2, 0.1, 0.0),
            custom_size: Some(Vec2::splat(5000.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
        Visibility::Hidden,
        DespawnOnExit(GameState::InGame),
    ));
}

/// Time remaining as M:SS, floored at 0:00.
fn sync_timer(
    tunables: Res<Tunables>,
    round: Res<RoundState>,
    mut q_text: Query<&mut Text2d, With<TimerText>>,
) {
    let Ok(mut text) = q_text.single_mut() else { return };
    let remaining = tunables.time_limit_ticks.saturating_sub(round.elapsed_ticks);
    let secs = (remaining as f64 / TICK_HZ) as u32;
    text.0 = format!("{}:{:02}", secs / 60, secs % 60);
}

fn sync_kills(round: Res<RoundState>, mut q_text: Query<&mut Text2d, With<KillText>>) {
    let Ok(mut text) = q_text.single_mut() else { return };
    text.0 = round.kills.to_string();
}

fn sync_health(
    round: Res<RoundState>,
    mut q_fill: Query<(&mut Sprite, &mut Transform), With<HealthFill>>,
) {
    let Ok((mut sprite, mut tf)) = q_fill.single_mut() else { return };
    let w = round.structure_health.max(0) as f32;
    sprite.custom_size = Some(Vec2::new(w, 10.0));
    // Keep the left edge pinned while the bar shrinks.
    tf.translation.x = HEALTH_BAR_LEFT + w * 0.5;
}

/// Consume combat cues; structure hits bump the flash.
fn absorb_cues(mut cues: MessageReader<CombatCue>, mut flash: ResMut<ImpactFlash>) {
    for cue in cues.read() {
        if matches!(cue, CombatCue::StructureHit { .. }) {
            flash.0 = 1.0;
        }
    }
}

fn apply_flash(
    time: Res<Time>,
    mut flash: ResMut<ImpactFlash>,
    mut q_overlay: Query<(&mut Sprite, &mut Visibility), With<ImpactFlashOverlay>>,
) {
    flash.0 = (flash.0 - 3.0 * time.delta_secs()).max(0.0);

    let Ok((mut sprite, mut vis)) = q_overlay.single_mut() else { return };
    if flash.0 > 0.001 {
        *vis = Visibility::Visible;
        let mut c = sprite.color.to_srgba();
        c.alpha = flash.0 * 0.25;
        sprite.color = c.into();
    } else {
        *vis = Visibility::Hidden;
    }
}

fn spawn_end_screen(mut commands: Commands, round: Res<RoundState>) {
    let (banner, color) = match round.outcome {
        Outcome::Won => ("YOU WIN", Color::srgb(0.95, 0.85, 0.2)),
        _ => ("GAME OVER", Color::srgb(0.85, 0.15, 0.15)),
    };

    commands.spawn((
        Text2d::new(banner),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(color),
        Transform::from_xyz(0.0, 30.0, BANNER_Z),
    ));

    commands.spawn((
        Text2d::new(format!("Accuracy: {:.2} %", round.accuracy())),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Transform::from_xyz(0.0, -24.0, BANNER_Z),
    ));
}
