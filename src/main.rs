mod shared;
mod input;
mod clock;
mod player;
mod items;
mod growth;
mod world;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pinegrove".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // The pale green of the field
        .insert_resource(ClearColor(Color::srgb_u8(147, 211, 196)))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<TickCount>()
        .init_resource::<PlayerInput>()
        .init_resource::<KeyBindings>()
        .init_resource::<PineConeCount>()
        .init_resource::<Inventory>()
        .init_resource::<DroppedItems>()
        .init_resource::<TreeField>()
        // Events
        .add_event::<TreePlantedEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(clock::ClockPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(items::ItemsPlugin)
        .add_plugins(growth::GrowthPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(ui::UiPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MainCamera,
        CameraTracking::default(),
        Transform::from_xyz(PLAYER_SPAWN.x, -PLAYER_SPAWN.y, 0.0)
            .with_scale(Vec3::splat(1.0 / CAMERA_ZOOM)),
    ));
}
