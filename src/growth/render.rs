//! Visual synchronisation — tree sprites grow upward out of the ground.

use bevy::prelude::*;
use crate::shared::*;

/// Links a sprite entity to its tree. Indices into `TreeField` are stable
/// because trees are never removed.
#[derive(Component, Debug)]
pub struct TreeSprite {
    pub index: usize,
}

/// How much of the full tree is visible at a given stage: a quarter per
/// stage, so a freshly planted tree already pokes out of the ground.
fn visible_height(stage: u8) -> f32 {
    TREE_HEIGHT * (stage + 1) as f32 / 4.0
}

/// Colour shifts from sapling green toward a deep pine as the tree matures.
fn tree_stage_color(stage: u8) -> Color {
    match stage {
        0 => Color::srgb(0.45, 0.72, 0.35),
        1 => Color::srgb(0.32, 0.6, 0.3),
        2 => Color::srgb(0.22, 0.48, 0.26),
        _ => Color::srgb(0.13, 0.38, 0.22),
    }
}

/// Spawn a sprite for every freshly planted tree.
pub fn spawn_tree_sprites(
    mut commands: Commands,
    mut planted_events: EventReader<TreePlantedEvent>,
) {
    for event in planted_events.read() {
        let height = visible_height(0);
        // The quad is centred, so lift it half its height off the base point.
        let center = event.position - Vec2::new(0.0, height * 0.5);

        commands.spawn((
            TreeSprite { index: event.index },
            Sprite {
                color: tree_stage_color(0),
                custom_size: Some(Vec2::new(TREE_WIDTH, height)),
                ..default()
            },
            LogicalPosition(center),
            Transform::from_xyz(center.x, -center.y, Z_TREES),
            Visibility::default(),
        ));
    }
}

/// Keep each tree sprite's size, colour, and anchor in step with its stage.
pub fn sync_tree_sprites(
    field: Res<TreeField>,
    mut query: Query<(&TreeSprite, &mut Sprite, &mut LogicalPosition)>,
) {
    if !field.is_changed() {
        return;
    }

    for (tree_sprite, mut sprite, mut logical) in &mut query {
        let Some(tree) = field.trees.get(tree_sprite.index) else {
            continue;
        };

        let height = visible_height(tree.stage);
        sprite.custom_size = Some(Vec2::new(TREE_WIDTH, height));
        sprite.color = tree_stage_color(tree.stage);
        logical.0 = tree.position - Vec2::new(0.0, height * 0.5);
    }
}
