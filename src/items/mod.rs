//! Dropped-item field and the drop / pickup actions.
//!
//! Both actions resolve against the field with the same proximity query:
//! a linear scan in drop order that takes the first item strictly inside
//! `INTERACT_RADIUS`. Failing either action is a reported no-op, never an
//! error — an empty bag or an empty patch of ground is normal play.

pub mod render;

use bevy::prelude::*;
use crate::shared::*;

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), hydrate_inventory);

        app.add_systems(
            Update,
            (
                handle_drop.in_set(TickSet::Drop),
                handle_pickup.in_set(TickSet::Pickup),
                render::sync_cone_sprites,
            ),
        );
    }
}

/// Project the starting pine-cone count into the bag slots once at startup.
/// After this, every successful drop or pickup rebuilds the bag itself.
fn hydrate_inventory(cones: Res<PineConeCount>, mut inventory: ResMut<Inventory>) {
    inventory.rebuild(cones.0);
}

/// Drop one pine cone just past the player's edge in the facing direction.
/// With an empty bag this is a no-op.
pub fn handle_drop(
    input: Res<PlayerInput>,
    player_query: Query<(&LogicalPosition, &PlayerMovement), With<Player>>,
    mut items: ResMut<DroppedItems>,
    mut cones: ResMut<PineConeCount>,
    mut inventory: ResMut<Inventory>,
) {
    if !input.drop {
        return;
    }

    let Ok((pos, movement)) = player_query.get_single() else {
        return;
    };

    if cones.0 == 0 {
        info!("[Items] No pine cones to drop");
        return;
    }

    let spawn_pos = pos.0 + movement.facing.drop_offset();
    items.add(DroppedItem {
        position: spawn_pos,
        kind: ItemKind::PineCone,
    });
    cones.0 -= 1;
    inventory.rebuild(cones.0);

    info!(
        "[Items] Dropped pine cone at ({}, {}) facing {:?}, {} left in bag",
        spawn_pos.x, spawn_pos.y, movement.facing, cones.0
    );
}

/// Pick up the first pine cone within reach and return it to the bag.
/// With nothing in range this is a no-op.
pub fn handle_pickup(
    input: Res<PlayerInput>,
    player_query: Query<&LogicalPosition, With<Player>>,
    mut items: ResMut<DroppedItems>,
    mut cones: ResMut<PineConeCount>,
    mut inventory: ResMut<Inventory>,
) {
    if !input.pickup {
        return;
    }

    let Ok(pos) = player_query.get_single() else {
        return;
    };

    let Some(index) = items.find_near_within(pos.0, INTERACT_RADIUS) else {
        info!("[Items] No pine cone in range to pick up");
        return;
    };

    let item = items.remove_at(index);
    cones.0 += 1;
    inventory.rebuild(cones.0);

    info!(
        "[Items] Picked up pine cone from ({}, {}), {} in bag",
        item.position.x, item.position.y, cones.0
    );
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn cone_at(x: f32, y: f32) -> DroppedItem {
        DroppedItem {
            position: Vec2::new(x, y),
            kind: ItemKind::PineCone,
        }
    }

    #[test]
    fn test_find_near_within_returns_first_not_nearest() {
        let mut items = DroppedItems::default();
        // First cone is 140 px away, second only 60 px away.
        items.add(cone_at(140.0, 0.0));
        items.add(cone_at(60.0, 0.0));

        let hit = items.find_near_within(Vec2::ZERO, 150.0);
        assert_eq!(hit, Some(0), "drop order wins, not distance");
    }

    #[test]
    fn test_find_near_within_radius_is_strict() {
        let mut items = DroppedItems::default();
        items.add(cone_at(150.0, 0.0));
        assert_eq!(items.find_near_within(Vec2::ZERO, 150.0), None);

        items.add(cone_at(149.9, 0.0));
        assert_eq!(items.find_near_within(Vec2::ZERO, 150.0), Some(1));
    }

    #[test]
    fn test_find_near_within_uses_euclidean_distance() {
        let mut items = DroppedItems::default();
        // 3-4-5 triangle: 90/120 apart → 150 exactly, excluded.
        items.add(cone_at(90.0, 120.0));
        assert_eq!(items.find_near_within(Vec2::ZERO, 150.0), None);
        assert_eq!(items.find_near_within(Vec2::ZERO, 150.1), Some(0));
    }

    #[test]
    fn test_remove_at_preserves_remaining_order() {
        let mut items = DroppedItems::default();
        items.add(cone_at(1.0, 0.0));
        items.add(cone_at(2.0, 0.0));
        items.add(cone_at(3.0, 0.0));

        let removed = items.remove_at(1);
        assert_eq!(removed.position.x, 2.0);
        let xs: Vec<f32> = items.items.iter().map(|i| i.position.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
    }

    #[test]
    fn test_drop_offset_per_facing() {
        // Half the player body plus the clearance gap.
        let reach = PLAYER_SIZE * 0.5 + DROP_CLEARANCE;
        assert_eq!(Facing::Down.drop_offset(), Vec2::new(0.0, reach));
        assert_eq!(Facing::Up.drop_offset(), Vec2::new(0.0, -reach));
        assert_eq!(Facing::Left.drop_offset(), Vec2::new(-reach, 0.0));
        assert_eq!(Facing::Right.drop_offset(), Vec2::new(reach, 0.0));
    }
}
