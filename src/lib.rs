//! Sound Garden library crate — the garden simulation and its Bevy plugins.
//!
//! The binary crate (`main.rs`) opens the window and adds the sprite
//! presenter. Everything else lives here so that `tests/` integration tests
//! can drive the garden headlessly, without a window or GPU.

use bevy::prelude::*;

pub mod shared;
pub mod data;
pub mod plants;
pub mod economy;
pub mod calendar;
pub mod weather;
pub mod spells;
pub mod tools;

use shared::*;

/// Game state, shared events and every logic plugin. Needs `StatesPlugin`
/// (part of `DefaultPlugins`) to be added first.
pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            // Events
            .add_event::<DayEndEvent>()
            .add_event::<WeatherChangeEvent>()
            .add_event::<PlotClickedEvent>()
            .add_event::<GoldChangeEvent>()
            .add_event::<TogglePauseEvent>()
            .add_event::<CastSpellEvent>()
            .add_event::<WordRecognisedEvent>()
            // Domain plugins
            .add_plugins(data::DataPlugin)
            .add_plugins(calendar::CalendarPlugin)
            .add_plugins(weather::WeatherPlugin)
            .add_plugins(spells::SpellsPlugin)
            .add_plugins(economy::EconomyPlugin)
            .add_plugins(plants::PlantsPlugin)
            .add_plugins(tools::ToolsPlugin);
    }
}
