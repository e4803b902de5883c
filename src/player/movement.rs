use bevy::prelude::*;
use crate::shared::*;

/// Core movement system — applies the frame's movement intents to the
/// player's position, facing, and moving flag.
///
/// The moving flag is reset at the top of every tick and re-derived from the
/// intents, so a tick with no input is an idle tick. Each axis moves the
/// full `speed` independently; holding two axes gives the diagonal vector
/// sum. Facing is assigned unconditionally per active intent in the fixed
/// order Up, Down, Left, Right, so when several are held the last evaluated
/// one wins: Right over Left over Down over Up. Gameplay (drop targeting)
/// depends on that tie-break, so the order here must not be shuffled.
pub fn apply_move_intents(
    input: Res<PlayerInput>,
    mut query: Query<(&mut LogicalPosition, &mut PlayerMovement), With<Player>>,
) {
    let Ok((mut pos, mut movement)) = query.get_single_mut() else {
        return;
    };

    movement.is_moving = false;

    if input.up {
        pos.0.y -= movement.speed;
        movement.facing = Facing::Up;
        movement.is_moving = true;
    }
    if input.down {
        pos.0.y += movement.speed;
        movement.facing = Facing::Down;
        movement.is_moving = true;
    }
    if input.left {
        pos.0.x -= movement.speed;
        movement.facing = Facing::Left;
        movement.is_moving = true;
    }
    if input.right {
        pos.0.x += movement.speed;
        movement.facing = Facing::Right;
        movement.is_moving = true;
    }
}

/// Advance the walk cycle by one frame every `WALK_FRAME_TICKS` ticks while
/// the player is moving. An idle player keeps the last frame shown; the
/// cycle resumes from there on the next move.
pub fn animate_walk_cycle(
    tick: Res<TickCount>,
    mut query: Query<(&PlayerMovement, &mut WalkCycle), With<Player>>,
) {
    let Ok((movement, mut cycle)) = query.get_single_mut() else {
        return;
    };

    if movement.is_moving && tick.0 % WALK_FRAME_TICKS == 1 {
        cycle.frame = (cycle.frame + 1) % WALK_FRAME_COUNT;
    }
}
