//! Global state machine.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    /// The round is being simulated.
    #[default]
    InGame,
    /// The round reached Won or Lost; the end screen is showing.
    RoundOver,
}
