//! HUD — the 4-slot bag bar and the pine-cone counter.
//!
//! Pure projection of `Inventory` and `PineConeCount`; nothing here writes
//! simulation state.

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_hud);
        app.add_systems(Update, (update_bag_slots, update_cone_counter));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS — used to query and update HUD elements
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

/// Marker for the "Pine Cones: N" text at the top left.
#[derive(Component)]
pub struct HudConeCounter;

/// Marker for the count text inside one bag slot.
#[derive(Component)]
pub struct BagSlotText {
    pub index: usize,
}

const SLOT_SIZE: f32 = 72.0;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN HUD
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands, existing: Query<Entity, With<HudRoot>>) {
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
        ))
        .with_children(|parent| {
            // ─── TOP-LEFT COUNTER ───
            parent.spawn((
                HudConeCounter,
                Text::new(format!("Pine Cones: {}", STARTING_PINE_CONES)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Node {
                    margin: UiRect::all(Val::Px(20.0)),
                    ..default()
                },
            ));

            // ─── BAG BAR ───
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(6.0),
                        margin: UiRect::all(Val::Px(24.0)),
                        padding: UiRect::all(Val::Px(8.0)),
                        align_self: AlignSelf::FlexStart,
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.45, 0.33, 0.2, 0.85)),
                ))
                .with_children(|bag| {
                    for index in 0..INVENTORY_SLOTS {
                        bag.spawn((
                            Node {
                                width: Val::Px(SLOT_SIZE),
                                height: Val::Px(SLOT_SIZE),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            BackgroundColor(Color::srgba(0.3, 0.22, 0.13, 0.9)),
                        ))
                        .with_children(|slot| {
                            slot.spawn((
                                BagSlotText { index },
                                Text::new(""),
                                TextFont {
                                    font_size: 22.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.95, 0.9, 0.8)),
                            ));
                        });
                    }
                });
        });
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATES
// ═══════════════════════════════════════════════════════════════════════

/// Mirror the bag slots into the slot texts whenever the bag is rebuilt.
pub fn update_bag_slots(
    inventory: Res<Inventory>,
    mut query: Query<(&BagSlotText, &mut Text)>,
) {
    if !inventory.is_changed() {
        return;
    }

    for (slot_text, mut text) in &mut query {
        let slot = &inventory.slots[slot_text.index];
        **text = match slot.item {
            ItemKind::PineCone if slot.count > 0 => format!("{}", slot.count),
            _ => String::new(),
        };
    }
}

pub fn update_cone_counter(
    cones: Res<PineConeCount>,
    mut query: Query<&mut Text, With<HudConeCounter>>,
) {
    if !cones.is_changed() {
        return;
    }

    for mut text in &mut query {
        **text = format!("Pine Cones: {}", cones.0);
    }
}
