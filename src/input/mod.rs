use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, reset_and_read_input);
        app.add_systems(Update, toggle_pause);
    }
}

/// The single point where hardware input becomes game actions. The previous
/// frame's input is discarded wholesale; nothing downstream ever sees a
/// stale flag.
fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    // Movement is held-state; arrows are hardwired alternates.
    input.up = keys.pressed(bindings.move_up) || keys.pressed(KeyCode::ArrowUp);
    input.down = keys.pressed(bindings.move_down) || keys.pressed(KeyCode::ArrowDown);
    input.left = keys.pressed(bindings.move_left) || keys.pressed(KeyCode::ArrowLeft);
    input.right = keys.pressed(bindings.move_right) || keys.pressed(KeyCode::ArrowRight);

    // Discrete actions fire on the press edge only.
    input.drop = keys.just_pressed(bindings.drop);
    input.plant = keys.just_pressed(bindings.plant);
    input.pickup = keys.just_pressed(bindings.pickup);
    input.pause = keys.just_pressed(bindings.pause);
}

/// Flip between Playing and Paused on the pause key. Runs in both states so
/// the game can always be unpaused.
fn toggle_pause(
    input: Res<PlayerInput>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !input.pause {
        return;
    }

    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
    }
}
