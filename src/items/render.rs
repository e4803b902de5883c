//! Visual synchronisation — keep cone sprites in sync with the item field.

use bevy::prelude::*;
use crate::shared::*;

/// Marker for a sprite entity representing one dropped cone.
#[derive(Component, Debug)]
pub struct ConeSprite;

/// Rebuild the cone sprite set whenever the field changes. Removal shifts
/// the indices of everything behind it, so rather than patching entities we
/// despawn the lot and respawn from the field — the field is tiny.
pub fn sync_cone_sprites(
    mut commands: Commands,
    items: Res<DroppedItems>,
    existing: Query<Entity, With<ConeSprite>>,
) {
    if !items.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for item in &items.items {
        commands.spawn((
            ConeSprite,
            Sprite {
                color: Color::srgb(0.55, 0.38, 0.2),
                custom_size: Some(Vec2::splat(CONE_SIZE)),
                ..default()
            },
            LogicalPosition(item.position),
            Transform::from_xyz(item.position.x, -item.position.y, Z_ITEMS),
            Visibility::default(),
        ));
    }
}
