pub mod movement;
pub mod camera;
pub mod spawn;

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Spawn player when we enter Playing --
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);

        // -- Per-tick simulation steps --
        app.add_systems(
            Update,
            (
                (movement::apply_move_intents, movement::animate_walk_cycle)
                    .chain()
                    .in_set(TickSet::Movement),
                camera::camera_follow_player.in_set(TickSet::Camera),
            ),
        );
    }
}
