//! Per-plant life simulation: gauges, health, life state, age tier, visuals.
//!
//! `advance` runs six steps in a fixed order. Later steps read what earlier
//! steps wrote, so the order is part of the contract:
//!
//! 1. weather forcing on the water and sunlight gauges
//! 2. health from each gauge's distance to its optimal band
//! 3. life state (Dead / Wilted / Healthy / Blooming)
//! 4. growth and age tier
//! 5. sprite selection
//! 6. indicator selection, when an indicator is attached

use std::sync::Arc;

use bevy::prelude::*;
use crate::shared::*;
use super::indicator::{update_indicator, Indicator};
use super::profile::PlantProfile;

const RAIN_ABSORPTION_FACTOR: f32 = 2.0;
const STORM_ABSORPTION_FACTOR: f32 = 3.0;
const CLOUDY_SUN_FACTOR: f32 = 0.5;
const RAIN_SUN_LOSS: f32 = 0.05;
const STORM_SUN_LOSS: f32 = 0.1;

/// Health regained per second for each gauge sitting in its optimal band.
const OPTIMAL_RECOVERY: f32 = 1.0;

const LOW_BAND_RATIO: f32 = 0.5;
const HIGH_BAND_RATIO: f32 = 1.5;
const WILT_HEALTH_RATIO: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct PlantSimulation {
    profile: Arc<PlantProfile>,
    evaporation: EvaporationRates,

    health: f32,
    water_level: f32,
    sunlight_level: f32,

    life_state: LifeState,
    age_tier: AgeTier,

    growth_progress: f32,
    bloom_progress: f32,

    sprite: Option<String>,
    indicator: Option<Indicator>,
}

impl PlantSimulation {
    /// A freshly sown plant: full health, gauges at their optimum, Healthy and Seeded.
    pub fn initialize(profile: Arc<PlantProfile>) -> Self {
        let mut plant = Self {
            health: profile.max_health,
            water_level: profile.water_requirement,
            sunlight_level: profile.sunlight_requirement,
            profile,
            evaporation: EvaporationRates::default(),
            life_state: LifeState::Healthy,
            age_tier: AgeTier::Seeded,
            growth_progress: 0.0,
            bloom_progress: 0.0,
            sprite: None,
            indicator: None,
        };
        plant.update_visuals();
        plant
    }

    pub fn with_evaporation(mut self, evaporation: EvaporationRates) -> Self {
        self.evaporation = evaporation;
        self
    }

    /// Attach an indicator; it is refreshed on every subsequent tick.
    pub fn with_indicator(mut self) -> Self {
        self.indicator = Some(Indicator::default());
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn profile(&self) -> &PlantProfile {
        &self.profile
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn water_level(&self) -> f32 {
        self.water_level
    }

    pub fn sunlight_level(&self) -> f32 {
        self.sunlight_level
    }

    pub fn life_state(&self) -> LifeState {
        self.life_state
    }

    pub fn age_tier(&self) -> AgeTier {
        self.age_tier
    }

    pub fn growth_progress(&self) -> f32 {
        self.growth_progress
    }

    pub fn bloom_progress(&self) -> f32 {
        self.bloom_progress
    }

    /// Sprite key currently displayed. `None` until the profile provides one.
    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref()
    }

    pub fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    // ── Tick ────────────────────────────────────────────────────────────

    /// Advance the simulation by `dt` seconds under `weather`.
    ///
    /// Ticks that are zero, negative or not finite leave the plant untouched.
    pub fn advance(&mut self, weather: WeatherType, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.apply_weather(weather, dt);
        self.update_health(dt);
        self.update_state(dt);
        self.update_growth(dt);
        self.update_visuals();
        self.refresh_indicator();
    }

    fn apply_weather(&mut self, weather: WeatherType, dt: f32) {
        let p = &self.profile;
        match weather {
            WeatherType::Sunny => {
                self.sunlight_level += dt * p.sunlight_tolerance_rate;
                self.water_level -= dt * self.evaporation.sunny;
            }
            WeatherType::Rainy => {
                self.water_level += dt * p.water_absorption_rate * RAIN_ABSORPTION_FACTOR;
                self.sunlight_level -= dt * RAIN_SUN_LOSS;
            }
            WeatherType::Cloudy => {
                self.sunlight_level += dt * p.sunlight_tolerance_rate * CLOUDY_SUN_FACTOR;
                self.water_level -= dt * self.evaporation.cloudy;
            }
            WeatherType::Stormy => {
                self.water_level += dt * p.water_absorption_rate * STORM_ABSORPTION_FACTOR;
                self.sunlight_level -= dt * STORM_SUN_LOSS;
            }
        }

        self.water_level = self.water_level.clamp(0.0, 1.0);
        self.sunlight_level = self.sunlight_level.clamp(0.0, 1.0);
    }

    fn update_health(&mut self, dt: f32) {
        // A dead plant stays dead until the plot is cleared.
        if self.life_state == LifeState::Dead {
            self.health = 0.0;
            return;
        }

        let p = &self.profile;

        // Both gauges contribute independently, so two bad gauges hurt twice.
        let delta = gauge_health_delta(
            self.water_level,
            p.water_requirement,
            p.draught_tolerance,
            p.overwater_tolerance,
            dt,
        ) + gauge_health_delta(
            self.sunlight_level,
            p.sunlight_requirement,
            p.low_sunlight_tolerance,
            p.high_sunlight_tolerance,
            dt,
        );

        self.health = (self.health + delta).clamp(0.0, p.max_health);
    }

    fn update_state(&mut self, dt: f32) {
        let p = &self.profile;

        if self.health <= 0.0 {
            self.life_state = LifeState::Dead;
            self.growth_progress = 0.0;
            self.bloom_progress = 0.0;
        } else if self.health < p.max_health * WILT_HEALTH_RATIO {
            self.life_state = LifeState::Wilted;
            self.bloom_progress = 0.0;
        } else if self.age_tier == AgeTier::Mature && self.bloom_progress < p.blooming_time {
            self.life_state = LifeState::Healthy;
            self.bloom_progress += dt;
        } else if self.age_tier == AgeTier::Mature {
            self.life_state = LifeState::Blooming;
        } else {
            self.life_state = LifeState::Healthy;
        }
    }

    fn update_growth(&mut self, dt: f32) {
        if !matches!(self.life_state, LifeState::Healthy | LifeState::Blooming) {
            return;
        }

        self.growth_progress += dt * self.profile.growth_rate;

        // One-way promotion; a long tick may cross several thresholds.
        while let Some(next) = self.age_tier.next() {
            if self.growth_progress < self.profile.growth_threshold(next) {
                break;
            }
            self.age_tier = next;
        }
    }

    /// Pick the sprite for the current (age, state). A missing entry keeps
    /// whatever was shown before.
    fn update_visuals(&mut self) {
        if let Some(sprite) = self.profile.sprite_for(self.age_tier, self.life_state) {
            if self.sprite.as_deref() != Some(sprite) {
                self.sprite = Some(sprite.to_string());
            }
        }
    }

    fn refresh_indicator(&mut self) {
        if let Some(indicator) = self.indicator.as_mut() {
            update_indicator(
                indicator,
                &self.profile,
                self.water_level,
                self.sunlight_level,
                self.life_state == LifeState::Dead,
            );
        }
    }

    // ── Selling ─────────────────────────────────────────────────────────

    pub fn can_sell(&self) -> bool {
        self.life_state == LifeState::Blooming && self.age_tier == AgeTier::Mature
    }

    /// Harvest and sell the fruit. Credits the profile's sell value to `ledger`
    /// and restarts the bloom cycle. Returns false, changing nothing, when the
    /// plant is not blooming.
    pub fn sell(&mut self, ledger: &mut impl CurrencyLedger) -> bool {
        if !self.can_sell() {
            return false;
        }

        self.bloom_progress = 0.0;
        self.life_state = LifeState::Healthy;
        self.update_visuals();

        ledger.credit(self.profile.sell_value);
        info!(
            "[Garden] Sold {} for {}",
            self.profile.name, self.profile.sell_value
        );
        true
    }
}

/// Health change contributed by one gauge over `dt` seconds.
fn gauge_health_delta(level: f32, requirement: f32, low_penalty: f32, high_penalty: f32, dt: f32) -> f32 {
    if level < requirement * LOW_BAND_RATIO {
        -dt * low_penalty
    } else if level > (requirement * HIGH_BAND_RATIO).min(1.0) {
        -dt * high_penalty
    } else {
        dt * OPTIMAL_RECOVERY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plants::indicator::{IndicatorContent, IndicatorSignal};
    use crate::plants::profile::SpriteEntry;

    const ALL_WEATHER: [WeatherType; 4] = [
        WeatherType::Sunny,
        WeatherType::Rainy,
        WeatherType::Cloudy,
        WeatherType::Stormy,
    ];

    #[derive(Default)]
    struct TestLedger {
        balance: u32,
    }

    impl CurrencyLedger for TestLedger {
        fn try_debit(&mut self, amount: u32) -> bool {
            if self.balance < amount {
                return false;
            }
            self.balance -= amount;
            true
        }

        fn credit(&mut self, amount: u32) {
            self.balance += amount;
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn grapes() -> Arc<PlantProfile> {
        let mut profile = PlantProfile::named("Grapes");
        profile.sell_value = 25;
        Arc::new(profile)
    }

    /// A plant that never loses health, so only time drives it.
    fn hardy(growth_duration: f32, blooming_time: f32) -> Arc<PlantProfile> {
        let mut profile = PlantProfile::named("Hardy");
        profile.growth_duration = growth_duration;
        profile.blooming_time = blooming_time;
        profile.draught_tolerance = 0.0;
        profile.overwater_tolerance = 0.0;
        profile.low_sunlight_tolerance = 0.0;
        profile.high_sunlight_tolerance = 0.0;
        profile.sell_value = 40;
        Arc::new(profile)
    }

    fn blooming_plant() -> PlantSimulation {
        let mut plant = PlantSimulation::initialize(hardy(10.0, 5.0));
        for _ in 0..16 {
            plant.advance(WeatherType::Sunny, 1.0);
        }
        assert_eq!(plant.life_state(), LifeState::Blooming);
        plant
    }

    fn snapshot(p: &PlantSimulation) -> (f32, f32, f32, LifeState, AgeTier, f32, f32, Option<String>, Option<Indicator>) {
        (
            p.health,
            p.water_level,
            p.sunlight_level,
            p.life_state,
            p.age_tier,
            p.growth_progress,
            p.bloom_progress,
            p.sprite.clone(),
            p.indicator,
        )
    }

    #[test]
    fn initialize_resets_to_profile_defaults() {
        let plant = PlantSimulation::initialize(grapes());
        assert_eq!(plant.health(), 100.0);
        assert_eq!(plant.water_level(), 0.6);
        assert_eq!(plant.sunlight_level(), 0.7);
        assert_eq!(plant.life_state(), LifeState::Healthy);
        assert_eq!(plant.age_tier(), AgeTier::Seeded);
        assert_eq!(plant.growth_progress(), 0.0);
        assert_eq!(plant.bloom_progress(), 0.0);
        assert!(plant.indicator().is_none());
    }

    #[test]
    fn weather_forcing_per_type() {
        let mut plant = PlantSimulation::initialize(grapes());
        plant.advance(WeatherType::Sunny, 1.0);
        assert!(approx(plant.water_level(), 0.58));
        assert!(approx(plant.sunlight_level(), 0.8));

        let mut plant = PlantSimulation::initialize(grapes());
        plant.advance(WeatherType::Rainy, 1.0);
        assert!(approx(plant.water_level(), 0.8));
        assert!(approx(plant.sunlight_level(), 0.65));

        let mut plant = PlantSimulation::initialize(grapes());
        plant.advance(WeatherType::Cloudy, 1.0);
        assert!(approx(plant.water_level(), 0.59));
        assert!(approx(plant.sunlight_level(), 0.75));

        let mut plant = PlantSimulation::initialize(grapes());
        plant.advance(WeatherType::Stormy, 1.0);
        assert!(approx(plant.water_level(), 0.9));
        assert!(approx(plant.sunlight_level(), 0.6));
    }

    #[test]
    fn custom_evaporation_rates_apply() {
        let rates = EvaporationRates { sunny: 0.1, cloudy: 0.0 };
        let mut plant = PlantSimulation::initialize(grapes()).with_evaporation(rates);
        plant.advance(WeatherType::Sunny, 1.0);
        assert!(approx(plant.water_level(), 0.5));
        plant.advance(WeatherType::Cloudy, 1.0);
        assert!(approx(plant.water_level(), 0.5));
    }

    #[test]
    fn gauges_and_health_stay_clamped() {
        for weather in ALL_WEATHER {
            let mut plant = PlantSimulation::initialize(grapes());
            for dt in [0.5, 3.0, 40.0, 250.0] {
                plant.advance(weather, dt);
                assert!((0.0..=1.0).contains(&plant.water_level()), "{weather:?}");
                assert!((0.0..=1.0).contains(&plant.sunlight_level()), "{weather:?}");
                assert!((0.0..=100.0).contains(&plant.health()), "{weather:?}");
            }
        }
    }

    #[test]
    fn zero_length_tick_changes_nothing() {
        let mut plant = PlantSimulation::initialize(hardy(10.0, 5.0)).with_indicator();
        for weather in ALL_WEATHER {
            for _ in 0..7 {
                plant.advance(weather, 0.9);
            }
            let before = snapshot(&plant);
            plant.advance(weather, 0.0);
            assert_eq!(before, snapshot(&plant));
        }
    }

    #[test]
    fn negative_and_nan_ticks_are_ignored() {
        let mut plant = PlantSimulation::initialize(grapes());
        plant.advance(WeatherType::Sunny, 2.0);
        let before = snapshot(&plant);
        plant.advance(WeatherType::Stormy, -5.0);
        plant.advance(WeatherType::Stormy, f32::NAN);
        plant.advance(WeatherType::Stormy, f32::INFINITY);
        assert_eq!(before, snapshot(&plant));
    }

    #[test]
    fn eighteen_sunny_seconds_make_a_seedling() {
        let mut plant = PlantSimulation::initialize(grapes());
        for _ in 0..17 {
            plant.advance(WeatherType::Sunny, 1.0);
            assert_eq!(plant.age_tier(), AgeTier::Seeded);
        }
        plant.advance(WeatherType::Sunny, 1.0);
        assert_eq!(plant.growth_progress(), 18.0);
        assert_eq!(plant.age_tier(), AgeTier::Seedling);
        assert!(plant.health() > 50.0);
    }

    #[test]
    fn drought_wilts_and_resets_bloom() {
        let mut plant = PlantSimulation::initialize(grapes());
        plant.age_tier = AgeTier::Mature;
        plant.bloom_progress = 7.0;
        plant.water_level = 0.0;

        // Sunlight sits in band under sun (high edge is capped at 1.0), so
        // each second costs draught (2) minus recovery (1).
        let mut last = plant.health();
        while plant.health() >= 50.0 {
            plant.advance(WeatherType::Sunny, 1.0);
            assert_eq!(plant.water_level(), 0.0);
            if plant.health() >= 50.0 {
                assert!(approx(last - plant.health(), 1.0));
                assert!(plant.bloom_progress() > 0.0);
            }
            last = plant.health();
        }

        assert_eq!(plant.life_state(), LifeState::Wilted);
        assert_eq!(plant.bloom_progress(), 0.0);
    }

    #[test]
    fn both_gauges_out_of_range_penalties_add_up() {
        let mut plant = PlantSimulation::initialize(grapes());
        plant.water_level = 0.0;
        plant.sunlight_level = 0.0;
        plant.advance(WeatherType::Cloudy, 1.0);
        // water stays at 0 (draught 2), sunlight 0.05 is below 0.35 (low sunlight 0.5)
        assert!(approx(plant.health(), 97.5));
    }

    #[test]
    fn storm_soaked_soil_costs_overwater_tolerance() {
        let mut profile = PlantProfile::named("Grapes");
        profile.overwater_tolerance = 3.0;
        let mut plant = PlantSimulation::initialize(Arc::new(profile));
        plant.health = 90.0;
        plant.water_level = 1.0;
        plant.advance(WeatherType::Stormy, 1.0);
        // water pinned at 1.0, above min(0.9, 1); sunlight 0.6 is in band
        assert_eq!(plant.water_level(), 1.0);
        assert!(approx(plant.sunlight_level(), 0.6));
        assert!(approx(plant.health(), 90.0 - 3.0 + 1.0));
    }

    #[test]
    fn glaring_sun_costs_high_sunlight_tolerance() {
        let mut profile = PlantProfile::named("Grapes");
        profile.sunlight_requirement = 0.5;
        profile.high_sunlight_tolerance = 2.0;
        let mut plant = PlantSimulation::initialize(Arc::new(profile));
        plant.health = 90.0;
        plant.sunlight_level = 1.0;
        plant.advance(WeatherType::Sunny, 1.0);
        // sunlight 1.0 is above min(0.75, 1); water 0.58 is in band
        assert_eq!(plant.sunlight_level(), 1.0);
        assert!(approx(plant.health(), 90.0 - 2.0 + 1.0));
    }

    #[test]
    fn both_gauges_high_penalties_add_up() {
        let mut profile = PlantProfile::named("Grapes");
        profile.water_requirement = 0.5;
        profile.sunlight_requirement = 0.5;
        profile.overwater_tolerance = 1.5;
        profile.high_sunlight_tolerance = 2.0;
        let mut plant = PlantSimulation::initialize(Arc::new(profile));
        plant.health = 90.0;
        plant.water_level = 1.0;
        plant.sunlight_level = 1.0;
        plant.advance(WeatherType::Sunny, 1.0);
        // water 0.98 and sunlight 1.0 both above 0.75
        assert!(approx(plant.health(), 90.0 - 1.5 - 2.0));
    }

    #[test]
    fn wilted_plants_do_not_grow() {
        let mut plant = PlantSimulation::initialize(grapes());
        plant.health = 30.0;
        plant.advance(WeatherType::Sunny, 1.0);
        assert_eq!(plant.life_state(), LifeState::Wilted);
        assert_eq!(plant.growth_progress(), 0.0);
    }

    #[test]
    fn death_is_sticky() {
        let mut plant = PlantSimulation::initialize(grapes()).with_indicator();
        plant.growth_progress = 50.0;
        plant.age_tier = AgeTier::Seedling;
        plant.health = 0.5;
        plant.water_level = 0.0;
        plant.advance(WeatherType::Sunny, 1.0);
        assert_eq!(plant.life_state(), LifeState::Dead);

        // Storms would put both gauges back in band; the plant still stays dead.
        for weather in ALL_WEATHER.iter().cycle().take(40) {
            plant.advance(*weather, 1.0);
            assert_eq!(plant.life_state(), LifeState::Dead);
            assert_eq!(plant.health(), 0.0);
            assert_eq!(plant.growth_progress(), 0.0);
            assert_eq!(plant.bloom_progress(), 0.0);
        }
        assert_eq!(plant.age_tier(), AgeTier::Seedling);
    }

    #[test]
    fn dead_plant_keeps_dying_without_recovery() {
        let mut plant = PlantSimulation::initialize(grapes()).with_indicator();
        plant.health = 0.0;
        plant.water_level = 0.0;
        plant.sunlight_level = 0.0;
        for _ in 0..30 {
            plant.advance(WeatherType::Cloudy, 1.0);
            assert_eq!(plant.life_state(), LifeState::Dead);
            assert_eq!(plant.growth_progress(), 0.0);
            assert_eq!(plant.bloom_progress(), 0.0);
        }
        let indicator = plant.indicator().unwrap();
        assert_eq!(indicator.content, IndicatorContent::Dead);
        assert_eq!(indicator.signal, IndicatorSignal::Neutral);
    }

    #[test]
    fn age_tier_never_regresses() {
        let mut plant = PlantSimulation::initialize(grapes());
        let mut last = plant.age_tier();
        let schedule = [
            (WeatherType::Sunny, 30),
            (WeatherType::Stormy, 60),
            (WeatherType::Rainy, 40),
            (WeatherType::Sunny, 200),
            (WeatherType::Cloudy, 100),
        ];
        for (weather, ticks) in schedule {
            for _ in 0..ticks {
                plant.advance(weather, 1.0);
                assert!(plant.age_tier() >= last);
                last = plant.age_tier();
            }
        }
    }

    #[test]
    fn long_tick_crosses_several_tiers() {
        let mut plant = PlantSimulation::initialize(hardy(10.0, 5.0));
        plant.advance(WeatherType::Sunny, 6.0);
        assert_eq!(plant.age_tier(), AgeTier::Young);
        plant.advance(WeatherType::Sunny, 4.0);
        assert_eq!(plant.age_tier(), AgeTier::Mature);
    }

    #[test]
    fn mature_plant_blooms_after_blooming_time() {
        let mut plant = PlantSimulation::initialize(hardy(10.0, 5.0));
        for _ in 0..10 {
            plant.advance(WeatherType::Sunny, 1.0);
        }
        assert_eq!(plant.age_tier(), AgeTier::Mature);
        assert_eq!(plant.life_state(), LifeState::Healthy);

        for expected in 1..=5 {
            plant.advance(WeatherType::Sunny, 1.0);
            assert_eq!(plant.life_state(), LifeState::Healthy);
            assert_eq!(plant.bloom_progress(), expected as f32);
        }
        plant.advance(WeatherType::Sunny, 1.0);
        assert_eq!(plant.life_state(), LifeState::Blooming);
        assert!(plant.can_sell());
    }

    #[test]
    fn sell_is_refused_unless_blooming() {
        let mut ledger = TestLedger::default();
        let mut plant = PlantSimulation::initialize(hardy(10.0, 5.0));
        for _ in 0..12 {
            plant.advance(WeatherType::Sunny, 1.0);
            let before = snapshot(&plant);
            assert!(!plant.can_sell());
            assert!(!plant.sell(&mut ledger));
            assert_eq!(before, snapshot(&plant));
        }
        assert_eq!(ledger.balance, 0);
    }

    #[test]
    fn sell_credits_and_restarts_bloom() {
        let mut ledger = TestLedger::default();
        let mut plant = blooming_plant();

        assert!(plant.sell(&mut ledger));
        assert_eq!(ledger.balance, 40);
        assert_eq!(plant.life_state(), LifeState::Healthy);
        assert_eq!(plant.bloom_progress(), 0.0);
        assert_eq!(plant.age_tier(), AgeTier::Mature);

        // Second sale in a row is refused.
        assert!(!plant.sell(&mut ledger));
        assert_eq!(ledger.balance, 40);
    }

    #[test]
    fn sprite_follows_table_and_keeps_last_on_miss() {
        let mut profile = PlantProfile::named("Grapes");
        profile.growth_duration = 10.0;
        profile.sprites = vec![
            SpriteEntry {
                age: AgeTier::Seeded,
                state: LifeState::Healthy,
                sprite: "grapes/seeded.png".into(),
            },
            SpriteEntry {
                age: AgeTier::Young,
                state: LifeState::Healthy,
                sprite: "grapes/young.png".into(),
            },
        ];
        let mut plant = PlantSimulation::initialize(Arc::new(profile));
        assert_eq!(plant.sprite(), Some("grapes/seeded.png"));

        // Seedling has no entry: previous sprite stays.
        plant.advance(WeatherType::Sunny, 1.0);
        assert_eq!(plant.age_tier(), AgeTier::Seedling);
        assert_eq!(plant.sprite(), Some("grapes/seeded.png"));

        for _ in 0..4 {
            plant.advance(WeatherType::Sunny, 1.0);
        }
        assert_eq!(plant.age_tier(), AgeTier::Young);
        assert_eq!(plant.sprite(), Some("grapes/young.png"));
    }

    #[test]
    fn empty_sprite_table_shows_nothing() {
        let mut plant = PlantSimulation::initialize(grapes());
        plant.advance(WeatherType::Sunny, 1.0);
        assert_eq!(plant.sprite(), None);
    }

    #[test]
    fn attached_indicator_tracks_dry_soil() {
        let mut plant = PlantSimulation::initialize(grapes()).with_indicator();
        plant.water_level = 0.05;
        plant.advance(WeatherType::Sunny, 0.1);
        let indicator = plant.indicator().unwrap();
        assert_eq!(indicator.content, IndicatorContent::Water);
        assert_eq!(indicator.signal, IndicatorSignal::HeavyIncrease);
    }
}
