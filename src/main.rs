use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use sound_garden::plants::render::GardenViewPlugin;
use sound_garden::shared::*;
use sound_garden::GardenPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sound Garden".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(GardenPlugin)
        .add_plugins(GardenViewPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .add_systems(Update, pause_on_escape)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn pause_on_escape(keys: Res<ButtonInput<KeyCode>>, mut pause: EventWriter<TogglePauseEvent>) {
    if keys.just_pressed(KeyCode::Escape) {
        pause.send(TogglePauseEvent);
    }
}
