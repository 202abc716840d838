//! Buffered fire requests.
//!
//! Producers create *intent*; the consumer applies it (entity spawn + shot
//! accounting). Keeping the two apart means input handling never needs write
//! access to round state.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnArrowRequest {
    /// Fire origin: the player's position at the moment of the click.
    pub pos: Vec2,
    /// Fire direction: the player's facing angle at the moment of the click.
    pub angle: f32,
}
