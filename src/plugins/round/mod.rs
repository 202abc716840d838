//! Round state machine: health, timer, counters, and the terminal check.
//!
//! `Ongoing -> Won` when the elapsed ticks reach the time limit;
//! `Ongoing -> Lost` when structure health reaches zero. Both are terminal.
//! The time limit is checked first, so a round that hits zero health on the
//! very tick the timer expires resolves to `Won` — a deliberate tie-break,
//! kept deterministic rather than left to pass order.
//!
//! The terminal transition flips `GameState` to `RoundOver`, which stops the
//! whole tick chain (see `plugins::core`); from then on the only accepted
//! input is "any key/click" to quit, plus Escape which quits at any time.

use bevy::prelude::*;

use crate::common::schedule::TickSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

#[derive(Resource, Debug, Clone)]
pub struct RoundState {
    /// Shared health pool of the castle column. Never negative.
    pub structure_health: i32,
    pub elapsed_ticks: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub outcome: Outcome,
}

impl RoundState {
    pub fn new(structure_health: i32) -> Self {
        Self {
            structure_health,
            elapsed_ticks: 0,
            kills: 0,
            shots_fired: 0,
            outcome: Outcome::Ongoing,
        }
    }

    /// Subtract impact damage, clamped at zero.
    pub fn apply_structure_damage(&mut self, damage: i32) {
        self.structure_health = (self.structure_health - damage).max(0);
    }

    /// Hit percentage for the end screen. Zero shots is defined as 0.0
    /// rather than a division error.
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.kills as f32 / self.shots_fired as f32 * 100.0
        }
    }
}

/// Run condition: the terminal outcome has not been reached yet.
///
/// The `GameState` transition lands one frame after the outcome is set; this
/// condition keeps the tick chain from mutating anything in between.
pub fn round_ongoing(round: Res<RoundState>) -> bool {
    round.outcome == Outcome::Ongoing
}

pub fn plugin(app: &mut App) {
    let health = app.world().resource::<Tunables>().structure_health;
    app.insert_resource(RoundState::new(health));

    app.add_systems(OnEnter(GameState::InGame), reset_round);
    app.add_systems(FixedUpdate, check_outcome.in_set(TickSet::Outcome));
    app.add_systems(
        Update,
        dismiss_end_screen.run_if(in_state(GameState::RoundOver)),
    );
    app.add_systems(Update, quit_on_escape);
}

fn reset_round(tunables: Res<Tunables>, mut round: ResMut<RoundState>) {
    *round = RoundState::new(tunables.structure_health);
}

/// Advance the round clock and resolve the terminal conditions.
fn check_outcome(
    tunables: Res<Tunables>,
    mut round: ResMut<RoundState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    round.elapsed_ticks += 1;

    // Time before health: the simultaneous case is a win.
    let outcome = if round.elapsed_ticks >= tunables.time_limit_ticks {
        Outcome::Won
    } else if round.structure_health <= 0 {
        Outcome::Lost
    } else {
        return;
    };

    round.outcome = outcome;
    next_state.set(GameState::RoundOver);
}

/// Any key or click on the end screen quits the game.
fn dismiss_end_screen(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let key = keys.is_some_and(|k| k.get_just_pressed().next().is_some());
    let click = buttons.is_some_and(|b| b.get_just_pressed().next().is_some());
    if key || click {
        app_exit.write(AppExit::Success);
    }
}

fn quit_on_escape(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if keys.is_some_and(|k| k.just_pressed(KeyCode::Escape)) {
        app_exit.write(AppExit::Success);
    }
}
