use bevy::prelude::*;
use crate::shared::*;

/// Ease the camera toward the player center with an exponential step.
///
/// The tracked target persists across ticks and only ever moves
/// `CAMERA_SMOOTHING` of the remaining distance per tick, so the view lags
/// the player and converges geometrically once they stop. The render
/// transform is written here directly (simulation Y down → render Y up);
/// the camera carries no `LogicalPosition`.
pub fn camera_follow_player(
    player_query: Query<&LogicalPosition, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<(&mut CameraTracking, &mut Transform), With<MainCamera>>,
) {
    let Ok(player_pos) = player_query.get_single() else {
        return;
    };
    let Ok((mut tracking, mut cam_tf)) = camera_query.get_single_mut() else {
        return;
    };

    let delta = player_pos.0 - tracking.target;
    tracking.target += delta * CAMERA_SMOOTHING;

    cam_tf.translation.x = tracking.target.x;
    cam_tf.translation.y = -tracking.target.y;
}
