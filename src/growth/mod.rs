//! Tree growth — planting a dropped cone and advancing growth stages.
//!
//! Planting consumes a cone from the field permanently: the cone becomes a
//! tree, it never returns to the bag, and trees are never destroyed. This
//! is the only way the total number of pine cones in play goes down.

pub mod render;

use bevy::prelude::*;
use crate::shared::*;

pub struct GrowthPlugin;

impl Plugin for GrowthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_plant.in_set(TickSet::Plant),
                advance_tree_growth.in_set(TickSet::Growth),
                render::spawn_tree_sprites,
                render::sync_tree_sprites,
            ),
        );
    }
}

/// Turn the first pine cone within reach into a freshly planted tree at the
/// cone's position. With nothing in range this is a no-op.
pub fn handle_plant(
    input: Res<PlayerInput>,
    player_query: Query<&LogicalPosition, With<Player>>,
    mut items: ResMut<DroppedItems>,
    mut field: ResMut<TreeField>,
    mut planted_events: EventWriter<TreePlantedEvent>,
) {
    if !input.plant {
        return;
    }

    let Ok(pos) = player_query.get_single() else {
        return;
    };

    let Some(index) = items.find_near_within(pos.0, INTERACT_RADIUS) else {
        info!("[Growth] No pine cone in range to plant");
        return;
    };

    let cone = items.remove_at(index);
    field.trees.push(Tree {
        position: cone.position,
        stage: 0,
        growing: true,
    });

    planted_events.send(TreePlantedEvent {
        index: field.trees.len() - 1,
        position: cone.position,
    });

    info!(
        "[Growth] Planted tree {} at ({}, {})",
        field.trees.len() - 1,
        cone.position.x,
        cone.position.y
    );
}

/// Advance every growing tree by one stage on growth-cadence ticks.
/// A tree reaching the final stage stops growing for good.
pub fn advance_tree_growth(tick: Res<TickCount>, mut field: ResMut<TreeField>) {
    let finished = advance_trees(&mut field, tick.0);
    for index in finished {
        info!("[Growth] Tree {} finished growing", index);
    }
}

/// Pure stage advancement, separated from the ECS for direct testing.
/// Returns the indices of trees that reached their final stage this tick.
pub fn advance_trees(field: &mut TreeField, tick: u64) -> Vec<usize> {
    if tick % GROWTH_INTERVAL_TICKS != 0 {
        return Vec::new();
    }

    let mut finished = Vec::new();
    for (index, tree) in field.trees.iter_mut().enumerate() {
        if !tree.growing {
            continue;
        }
        tree.stage += 1;
        if tree.stage >= TREE_MAX_STAGE {
            tree.stage = TREE_MAX_STAGE;
            tree.growing = false;
            finished.push(index);
        }
    }
    finished
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sapling_at_origin() -> TreeField {
        TreeField {
            trees: vec![Tree {
                position: Vec2::ZERO,
                stage: 0,
                growing: true,
            }],
        }
    }

    #[test]
    fn test_growth_only_on_interval_ticks() {
        let mut field = sapling_at_origin();

        advance_trees(&mut field, 59);
        assert_eq!(field.trees[0].stage, 0, "off-cadence tick must not grow");

        advance_trees(&mut field, 60);
        assert_eq!(field.trees[0].stage, 1);
    }

    #[test]
    fn test_tree_matures_after_three_intervals() {
        let mut field = sapling_at_origin();

        for tick in 1..=(3 * GROWTH_INTERVAL_TICKS) {
            advance_trees(&mut field, tick);
        }

        let tree = &field.trees[0];
        assert_eq!(tree.stage, TREE_MAX_STAGE);
        assert!(!tree.growing, "tree must stop growing at the final stage");
    }

    #[test]
    fn test_finished_tree_never_changes() {
        let mut field = sapling_at_origin();
        for tick in 1..=(3 * GROWTH_INTERVAL_TICKS) {
            advance_trees(&mut field, tick);
        }

        for tick in (3 * GROWTH_INTERVAL_TICKS + 1)..=(10 * GROWTH_INTERVAL_TICKS) {
            let finished = advance_trees(&mut field, tick);
            assert!(finished.is_empty());
        }

        let tree = &field.trees[0];
        assert_eq!(tree.stage, TREE_MAX_STAGE);
        assert!(!tree.growing);
    }

    #[test]
    fn test_trees_grow_independently() {
        let mut field = sapling_at_origin();
        // Second tree planted two intervals later.
        advance_trees(&mut field, 60);
        advance_trees(&mut field, 120);
        field.trees.push(Tree {
            position: Vec2::new(500.0, 0.0),
            stage: 0,
            growing: true,
        });

        let finished = advance_trees(&mut field, 180);
        assert_eq!(finished, vec![0], "only the older tree finishes");
        assert_eq!(field.trees[0].stage, 3);
        assert_eq!(field.trees[1].stage, 1);
        assert!(field.trees[1].growing);
    }
}
