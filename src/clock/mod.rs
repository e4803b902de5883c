//! Clock domain — the heartbeat of Pinegrove.
//!
//! Responsible for:
//! - Owning the per-tick pipeline ordering (`TickSet`)
//! - Advancing the logical tick counter once per frame, after every other
//!   simulation step has observed the current value
//! - Freezing the simulation (and therefore every tick-gated cadence)
//!   while the game is paused

use bevy::prelude::*;
use crate::shared::*;

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickCount>();

        // The whole simulation runs as one strictly ordered chain, gated on
        // the Playing state. Pausing stops the chain and the counter with it.
        app.configure_sets(
            Update,
            (
                TickSet::Movement,
                TickSet::Camera,
                TickSet::Drop,
                TickSet::Plant,
                TickSet::Pickup,
                TickSet::Growth,
                TickSet::Advance,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(Update, advance_tick.in_set(TickSet::Advance));

        app.add_systems(OnEnter(GameState::Paused), announce_pause);
        app.add_systems(OnExit(GameState::Paused), announce_resume);
    }
}

/// Runs last in the pipeline: every system within a tick sees the same
/// counter value, and the next frame sees the next one.
pub fn advance_tick(mut tick: ResMut<TickCount>) {
    tick.0 = tick.0.wrapping_add(1);
}

fn announce_pause(tick: Res<TickCount>) {
    info!("[Clock] Simulation paused at tick {}", tick.0);
}

fn announce_resume(tick: Res<TickCount>) {
    info!("[Clock] Simulation resumed at tick {}", tick.0);
}

// ─── Tests ────────────────────────────────────────────────────────────────────
