use bevy::prelude::*;
use crate::shared::*;

/// Spawn the player entity with all necessary components.
/// Runs once on `OnEnter(GameState::Playing)`.
pub fn spawn_player(mut commands: Commands, existing: Query<Entity, With<Player>>) {
    // Guard: don't double-spawn when returning to Playing from Paused.
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        // Tag
        Player,
        // Movement state
        PlayerMovement::default(),
        WalkCycle::default(),
        // Simulation-space position (entity center)
        LogicalPosition(PLAYER_SPAWN),
        // Placeholder sprite until the character sheet lands. The walk frame
        // and facing live on the entity for a spritesheet renderer to read.
        Sprite {
            color: Color::srgb(0.35, 0.3, 0.25),
            custom_size: Some(Vec2::splat(PLAYER_SIZE)),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, -PLAYER_SPAWN.y, Z_PLAYER),
        // Required for rendering
        Visibility::default(),
    ));

    info!(
        "[Player] Spawned at ({}, {}) with {} pine cones",
        PLAYER_SPAWN.x, PLAYER_SPAWN.y, STARTING_PINE_CONES
    );
}
