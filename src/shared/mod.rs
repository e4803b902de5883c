//! Shared components, resources, events, and states for Pinegrove.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.
//!
//! Simulation space is screen-oriented: X grows right, Y grows DOWN, matching
//! the sprite sheet and drop-offset conventions. The world domain owns the
//! one place where this is mapped onto render transforms.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

// ═══════════════════════════════════════════════════════════════════════
// TICK PIPELINE — strict per-tick ordering
// ═══════════════════════════════════════════════════════════════════════

/// One simulation tick runs these steps in order, every frame while Playing:
/// movement (with facing + walk animation), camera follow, then the discrete
/// actions in the order the keys are polled (drop, plant, pickup), then tree
/// growth, then the tick counter advance. The chain is configured by the
/// clock domain; every system in a tick observes the same `TickCount` value.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Movement,
    Camera,
    Drop,
    Plant,
    Pickup,
    Growth,
    Advance,
}

/// Logical tick counter. Increments once per frame at the end of the
/// simulation pipeline; frozen while paused. All cadences (walk frames,
/// tree growth) are expressed in these ticks, never in wall-clock time.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TickCount(pub u64);

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit vector along the facing axis in simulation space (Y down).
    pub fn offset(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Where a dropped item lands relative to the player center: just past
    /// the player's own half-extent along the facing axis.
    pub fn drop_offset(self) -> Vec2 {
        self.offset() * (PLAYER_SIZE * 0.5 + DROP_CLEARANCE)
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

#[derive(Component, Debug, Clone)]
pub struct PlayerMovement {
    pub facing: Facing,
    pub is_moving: bool,
    pub speed: f32,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            facing: Facing::Down,
            is_moving: false,
            speed: PLAYER_SPEED,
        }
    }
}

/// Walk-cycle frame, advanced on a fixed tick cadence while moving.
/// The frame is deliberately NOT reset when the player stops — the idle
/// pose reuses whichever frame was last shown.
#[derive(Component, Debug, Clone, Default)]
pub struct WalkCycle {
    pub frame: usize,
}

/// Position in simulation space (entity center). The render transform is
/// derived from this every frame by the world domain; nothing else writes
/// `Transform` for simulation entities.
#[derive(Component, Debug, Clone, Copy)]
pub struct LogicalPosition(pub Vec2);

// ═══════════════════════════════════════════════════════════════════════
// CAMERA
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Clone, Default)]
pub struct MainCamera;

/// The camera's view target in simulation space. Retained across ticks and
/// eased toward the player center; never hard-assigned after spawn.
#[derive(Component, Debug, Clone)]
pub struct CameraTracking {
    pub target: Vec2,
}

impl Default for CameraTracking {
    fn default() -> Self {
        Self {
            target: PLAYER_SPAWN,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS & INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ItemKind {
    #[default]
    None,
    PineCone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InventorySlot {
    pub item: ItemKind,
    pub count: u32,
}

/// Fixed 4-slot bag. Only slot 0 is populated by current gameplay; the
/// remaining slots are reserved capacity for future item kinds.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Inventory {
    pub slots: [InventorySlot; INVENTORY_SLOTS],
}

impl Inventory {
    /// Rebuild every slot from the authoritative pine-cone count. Always a
    /// full rebuild, never a partial patch: clear all slots, then fill
    /// slot 0 when there is anything to show.
    pub fn rebuild(&mut self, pine_cones: u32) {
        self.slots = [InventorySlot::default(); INVENTORY_SLOTS];
        if pine_cones > 0 {
            self.slots[0] = InventorySlot {
                item: ItemKind::PineCone,
                count: pine_cones,
            };
        }
    }
}

/// Authoritative count of pine cones the player is holding. The bag UI and
/// `Inventory` slots are projections of this number.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PineConeCount(pub u32);

impl Default for PineConeCount {
    fn default() -> Self {
        Self(STARTING_PINE_CONES)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DroppedItem {
    pub position: Vec2,
    pub kind: ItemKind,
}

/// Every item lying in the field, in drop order. Insertion order is load
/// bearing: proximity queries return the FIRST item in range, not the
/// nearest one, so earlier drops win ties.
#[derive(Resource, Debug, Clone, Default)]
pub struct DroppedItems {
    pub items: Vec<DroppedItem>,
}

impl DroppedItems {
    pub fn add(&mut self, item: DroppedItem) {
        self.items.push(item);
    }

    /// Linear scan in insertion order; first item strictly closer than
    /// `radius` to `point` wins.
    pub fn find_near_within(&self, point: Vec2, radius: f32) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.position.distance(point) < radius)
    }

    /// Remove and return the item at `index`, preserving the relative order
    /// of the remainder. Indices are only valid within the current tick.
    pub fn remove_at(&mut self, index: usize) -> DroppedItem {
        self.items.remove(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TREES
// ═══════════════════════════════════════════════════════════════════════

/// A planted pine tree. `position` is the base point on the ground, fixed
/// at planting. Stage runs 0..=3; once it reaches 3 the tree is fully
/// grown and never changes again.
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    pub position: Vec2,
    pub stage: u8,
    pub growing: bool,
}

/// All trees ever planted, in planting order. Trees are never removed, so
/// an index into this collection stays valid for the life of the run.
#[derive(Resource, Debug, Clone, Default)]
pub struct TreeField {
    pub trees: Vec<Tree>,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// The frame's input, rebuilt from scratch in PreUpdate. Movement flags are
/// held-state, action flags are just-pressed edges. The simulation reads
/// only this value, never the keyboard.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub drop: bool,
    pub plant: bool,
    pub pickup: bool,
    pub pause: bool,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub drop: KeyCode,
    pub plant: KeyCode,
    pub pickup: KeyCode,
    pub pause: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            drop: KeyCode::Space,
            plant: KeyCode::KeyG,
            pickup: KeyCode::KeyV,
            pause: KeyCode::Escape,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct TreePlantedEvent {
    /// Index into `TreeField::trees` (stable — trees are never removed).
    pub index: usize,
    pub position: Vec2,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 1920.0;
pub const SCREEN_HEIGHT: f32 = 1080.0;

pub const PLAYER_SIZE: f32 = 100.0;
pub const PLAYER_SPEED: f32 = 3.0;
/// Player center at spawn (the 100×100 body sits at (200, 200)).
pub const PLAYER_SPAWN: Vec2 = Vec2::new(250.0, 250.0);

/// Walk frames advance on ticks where `tick % WALK_FRAME_TICKS == 1`.
pub const WALK_FRAME_TICKS: u64 = 8;
pub const WALK_FRAME_COUNT: usize = 4;

pub const CAMERA_SMOOTHING: f32 = 0.1;
pub const CAMERA_ZOOM: f32 = 1.0;

/// Shared by pickup and grow-start proximity queries (strict `<`).
pub const INTERACT_RADIUS: f32 = 150.0;
/// Gap between the player's edge and a freshly dropped item.
pub const DROP_CLEARANCE: f32 = 30.0;

/// Growing trees advance one stage on ticks where
/// `tick % GROWTH_INTERVAL_TICKS == 0`.
pub const GROWTH_INTERVAL_TICKS: u64 = 60;
pub const TREE_MAX_STAGE: u8 = 3;

pub const INVENTORY_SLOTS: usize = 4;
pub const STARTING_PINE_CONES: u32 = 5;

pub const CONE_SIZE: f32 = 24.0;
pub const TREE_WIDTH: f32 = 96.0;
pub const TREE_HEIGHT: f32 = 192.0;

// Render layers (Z in Bevy world space).
pub const Z_DECOR: f32 = 1.0;
pub const Z_ITEMS: f32 = 2.0;
pub const Z_TREES: f32 = 3.0;
pub const Z_PLAYER: f32 = 10.0;
