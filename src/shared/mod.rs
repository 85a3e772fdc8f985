//! Shared components, resources, events, and states for Sound Garden.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    Paused,
}

/// Frame ordering inside `Update`: weather changes and tool clicks land
/// before plants tick, so every tick sees this frame's inputs.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GardenSet {
    Input,
    Simulate,
}

// ═══════════════════════════════════════════════════════════════════════
// WEATHER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeatherType {
    #[default]
    Sunny,
    Rainy,
    Cloudy,
    Stormy,
}

/// The weather every plant reads once per tick.
/// Written by the weather domain only; plants poll it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentWeather(pub WeatherType);

// ═══════════════════════════════════════════════════════════════════════
// PLANTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlantCategory {
    #[default]
    Flower,
    Tree,
    Bush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Healthy,
    Wilted,
    Blooming,
    Dead,
}

/// Growth stage. Ordered, so `Seeded < Seedling < Young < Mature`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum AgeTier {
    #[default]
    Seeded,
    Seedling,
    Young,
    Mature,
}

impl AgeTier {
    pub fn next(self) -> Option<Self> {
        match self {
            AgeTier::Seeded => Some(AgeTier::Seedling),
            AgeTier::Seedling => Some(AgeTier::Young),
            AgeTier::Young => Some(AgeTier::Mature),
            AgeTier::Mature => None,
        }
    }

    /// Fraction of the profile's growth duration needed to enter this tier.
    pub fn growth_fraction(self) -> f32 {
        match self {
            AgeTier::Seeded => 0.0,
            AgeTier::Seedling => 0.1,
            AgeTier::Young => 0.5,
            AgeTier::Mature => 1.0,
        }
    }
}

/// Water lost per second to evaporation. Garden-wide, not per species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaporationRates {
    pub sunny: f32,
    pub cloudy: f32,
}

impl Default for EvaporationRates {
    fn default() -> Self {
        Self {
            sunny: 0.02,
            cloudy: 0.01,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONFIG
// ═══════════════════════════════════════════════════════════════════════

/// Garden-wide tuning, read from `assets/data/garden.ron` at start-up.
/// Missing fields keep their defaults.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub evaporation: EvaporationRates,
    pub starting_balance: u32,
    pub daily_interest: u32,
    pub seconds_per_day: f32,
    /// Re-roll the weather at the end of every day.
    pub daily_weather_roll: bool,
    pub starting_weather: WeatherType,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            evaporation: EvaporationRates::default(),
            starting_balance: 100,
            daily_interest: 1,
            seconds_per_day: 60.0,
            daily_weather_roll: false,
            starting_weather: WeatherType::Sunny,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ECONOMY
// ═══════════════════════════════════════════════════════════════════════

/// Anything that can pay for seeds and receive sale proceeds.
///
/// The simulation never holds currency itself; it is handed a ledger for the
/// duration of a sow or sell call.
pub trait CurrencyLedger {
    /// Withdraw `amount` if the balance covers it. Returns false and leaves
    /// the balance alone otherwise.
    fn try_debit(&mut self, amount: u32) -> bool;
    fn credit(&mut self, amount: u32);
}

// ═══════════════════════════════════════════════════════════════════════
// GARDEN TOOLS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GardenTool {
    #[default]
    None,
    Plant,
    Shovel,
    Sell,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent when the day timer rolls over. `day` is the day that just ended.
#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    pub day: u32,
}

/// Request a weather change (completed spells, the daily roll).
#[derive(Event, Debug, Clone)]
pub struct WeatherChangeEvent {
    pub weather: WeatherType,
}

/// The player clicked a plot with whatever tool is active.
#[derive(Event, Debug, Clone)]
pub struct PlotClickedEvent {
    pub plot: Entity,
}

/// Toggle between Playing and Paused. Hosts send this from their pause key.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TogglePauseEvent;

/// The player picked a weather spell; a spell word is chosen for them to say.
#[derive(Event, Debug, Clone)]
pub struct CastSpellEvent {
    pub weather: WeatherType,
}

/// A speech recogniser (or any other host) heard the player say `word`.
#[derive(Event, Debug, Clone)]
pub struct WordRecognisedEvent {
    pub word: String,
}

/// Emitted after money actually moved, for HUD / floating text consumers.
#[derive(Event, Debug, Clone)]
pub struct GoldChangeEvent {
    pub amount: i64, // positive = gain, negative = spend
    pub reason: String,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 64.0;
pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

pub const PLOT_COLUMNS: u32 = 3;
pub const PLOT_ROWS: u32 = 2;

pub const PLANT_DATA_PATH: &str = "assets/data/plants.ron";
pub const GARDEN_CONFIG_PATH: &str = "assets/data/garden.ron";
pub const SPELL_WORDS_PATH: &str = "assets/data/spells.ron";
