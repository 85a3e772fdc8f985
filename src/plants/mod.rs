//! Plants domain — plot slots, per-plant simulation, element indicators.
//!
//! Communicates with other domains exclusively through crate::shared events/resources.
//! The simulation types are plain Rust and usable without an `App`.

use std::sync::Arc;

use bevy::prelude::*;
use crate::shared::*;

pub mod indicator;
pub mod plot;
pub mod profile;
pub mod render;
pub mod simulation;

pub use indicator::{Indicator, IndicatorContent, IndicatorSignal};
pub use plot::PlotSlot;
pub use profile::{PlantProfile, ProfileError, SpriteEntry};
pub use simulation::PlantSimulation;

/// Every species the player can sow, shared read-only by all plants.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Arc<PlantProfile>>,
}

impl ProfileRegistry {
    /// Add a profile, replacing any existing one with the same name.
    pub fn insert(&mut self, profile: PlantProfile) {
        let profile = Arc::new(profile);
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(slot) => *slot = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<PlantProfile>> {
        self.profiles.iter().find(|p| p.name == name).cloned()
    }

    pub fn first(&self) -> Option<Arc<PlantProfile>> {
        self.profiles.first().cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Grid position of a plot, for layout and logging.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPosition {
    pub column: u32,
    pub row: u32,
}

pub struct PlantsPlugin;

impl Plugin for PlantsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProfileRegistry>()
            .configure_sets(Update, (GardenSet::Input, GardenSet::Simulate).chain())
            .add_systems(OnEnter(GameState::Playing), spawn_plots)
            .add_systems(
                Update,
                tick_plants
                    .in_set(GardenSet::Simulate)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Convert a plot grid position to a world-space translation (centre of tile).
pub fn plot_to_world(column: u32, row: u32) -> Vec3 {
    let origin_x = -(PLOT_COLUMNS as f32 - 1.0) * TILE_SIZE * 0.75;
    let origin_y = -(PLOT_ROWS as f32 - 1.0) * TILE_SIZE * 0.75;
    Vec3::new(
        origin_x + column as f32 * TILE_SIZE * 1.5,
        origin_y + row as f32 * TILE_SIZE * 1.5,
        1.0,
    )
}

/// Lay out the empty plots the first time the garden opens.
fn spawn_plots(
    mut commands: Commands,
    config: Res<GardenConfig>,
    existing: Query<(), With<PlotSlot>>,
) {
    if !existing.is_empty() {
        return;
    }

    for row in 0..PLOT_ROWS {
        for column in 0..PLOT_COLUMNS {
            commands.spawn((
                PlotSlot::new(config.evaporation).with_indicator(),
                PlotPosition { column, row },
                Transform::from_translation(plot_to_world(column, row)),
            ));
        }
    }
    info!("[Garden] Laid out {} plots", PLOT_COLUMNS * PLOT_ROWS);
}

/// Advance every occupied plot by this frame's delta under the current weather.
pub fn tick_plants(
    time: Res<Time>,
    weather: Res<CurrentWeather>,
    mut plots: Query<&mut PlotSlot>,
) {
    let dt = time.delta_secs();
    for mut plot in plots.iter_mut() {
        if plot.has_plant() {
            plot.advance(weather.0, dt);
        }
    }
}
