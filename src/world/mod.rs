//! World domain plugin for Pinegrove.
//!
//! Responsible for:
//! - Mapping simulation-space positions onto render transforms
//! - Spawning the static decor of the field
//!
//! Simulation space has Y growing downward (screen convention); Bevy's
//! world has Y growing upward. This module is the ONLY place the two meet:
//! every simulation entity carries a `LogicalPosition`, and the sync below
//! writes its `Transform` with the Y axis negated and whole-pixel rounding.

use bevy::prelude::*;
use crate::shared::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_decor);

        // After all simulation writes, before rendering extracts transforms.
        app.add_systems(PostUpdate, sync_logical_transforms);
    }
}

/// Syncs LogicalPosition → Transform with pixel rounding. Z is whatever the
/// entity was spawned with; layering is static in this game.
pub fn sync_logical_transforms(mut query: Query<(&LogicalPosition, &mut Transform)>) {
    for (logical, mut transform) in &mut query {
        transform.translation.x = logical.0.x.round();
        transform.translation.y = (-logical.0.y).round();
    }
}

/// Marker for purely visual set dressing.
#[derive(Component, Debug)]
pub struct Decor;

const STONE_TILE_SIZE: f32 = 64.0;
const NEST_SIZE: f32 = 80.0;

/// The field's fixed furniture: a small stone patio and the creature's
/// nest. Placeholder quads, same positions the final art will use.
fn spawn_decor(mut commands: Commands, existing: Query<Entity, With<Decor>>) {
    if !existing.is_empty() {
        return;
    }

    let stone_color = Color::srgb(0.62, 0.62, 0.65);
    let stones = [
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0 + STONE_TILE_SIZE, 100.0),
        Vec2::new(100.0, 100.0 + STONE_TILE_SIZE),
    ];

    for corner in stones {
        // Positions are top-left corners; centre the quad on the tile.
        let center = corner + Vec2::splat(STONE_TILE_SIZE * 0.5);
        commands.spawn((
            Decor,
            Sprite {
                color: stone_color,
                custom_size: Some(Vec2::splat(STONE_TILE_SIZE)),
                ..default()
            },
            LogicalPosition(center),
            Transform::from_xyz(center.x, -center.y, Z_DECOR),
            Visibility::default(),
        ));
    }

    let nest_center = Vec2::new(300.0, 200.0) + Vec2::splat(NEST_SIZE * 0.5);
    commands.spawn((
        Decor,
        Sprite {
            color: Color::srgb(0.5, 0.42, 0.3),
            custom_size: Some(Vec2::splat(NEST_SIZE)),
            ..default()
        },
        LogicalPosition(nest_center),
        Transform::from_xyz(nest_center.x, -nest_center.y, Z_DECOR),
        Visibility::default(),
    ));
}
