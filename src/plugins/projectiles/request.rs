use bevy::prelude::*;

use crate::plugins::player::{Aim, Player, facing_angle};

use super::messages::SpawnArrowRequest;

/// Producer: read fire input + aim, then write a SpawnArrowRequest message.
///
/// This system intentionally does **not** spawn anything.
pub fn request_arrows(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    aim: Res<Aim>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<SpawnArrowRequest>,
) {
    let Some(buttons) = buttons else { return };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(player_tf) = q_player.single() else {
        debug!("fire input with no single Player");
        return;
    };
    let origin = player_tf.translation.truncate();

    let Some(cursor) = aim.world_cursor else {
        debug!("fire input with no cursor position");
        return;
    };

    writer.write(SpawnArrowRequest {
        pos: origin,
        angle: facing_angle(origin, cursor),
    });
}
