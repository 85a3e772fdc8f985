//! Weather domain — owns `CurrentWeather`.
//!
//! Plants only ever read the resource. It changes when something sends a
//! `WeatherChangeEvent` (spells, debug keys) or, if enabled in the garden
//! config, when a new day starts.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentWeather>()
            .add_systems(OnExit(GameState::Loading), set_starting_weather)
            .add_systems(
                Update,
                (roll_weather_on_day_end, apply_weather_changes)
                    .chain()
                    .in_set(GardenSet::Input)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn set_starting_weather(config: Res<GardenConfig>, mut weather: ResMut<CurrentWeather>) {
    weather.0 = config.starting_weather;
}

/// Apply requested weather changes. The last request in a frame wins.
pub fn apply_weather_changes(
    mut events: EventReader<WeatherChangeEvent>,
    mut weather: ResMut<CurrentWeather>,
) {
    let Some(requested) = events.read().last().map(|ev| ev.weather) else {
        return;
    };
    if weather.0 != requested {
        info!("[Weather] {:?} -> {:?}", weather.0, requested);
        weather.0 = requested;
    }
}

/// Roll new weather for the next day when the daily roll is enabled.
pub fn roll_weather_on_day_end(
    mut day_end_events: EventReader<DayEndEvent>,
    config: Res<GardenConfig>,
    mut change_writer: EventWriter<WeatherChangeEvent>,
) {
    // Drain even when disabled so stale events never pile up.
    let days_ended = day_end_events.read().count();
    if days_ended == 0 || !config.daily_weather_roll {
        return;
    }

    let mut rng = rand::thread_rng();
    let weather = roll_weather(rng.gen());
    change_writer.send(WeatherChangeEvent { weather });
}

/// Map a uniform roll in 0..1 to a weather type.
///
/// Sunny 40%, Cloudy 30%, Rainy 20%, Stormy 10%.
pub fn roll_weather(roll: f32) -> WeatherType {
    if roll < 0.40 {
        WeatherType::Sunny
    } else if roll < 0.70 {
        WeatherType::Cloudy
    } else if roll < 0.90 {
        WeatherType::Rainy
    } else {
        WeatherType::Stormy
    }
}
