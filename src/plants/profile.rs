//! Per-species plant configuration and the sparse sprite table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::*;

/// One row of the sprite table: which image to show for an (age, state) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteEntry {
    pub age: AgeTier,
    pub state: LifeState,
    pub sprite: String,
}

/// Static species data. Authored in `assets/data/plants.ron` and shared
/// read-only by every plant of that species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantProfile {
    pub name: String,
    pub category: PlantCategory,

    pub max_health: f32,
    /// Seconds of growth needed to reach maturity.
    pub growth_duration: f32,
    /// Optimal water level, 0..=1.
    pub water_requirement: f32,
    /// Optimal sunlight level, 0..=1.
    pub sunlight_requirement: f32,

    pub growth_rate: f32,
    pub water_absorption_rate: f32,
    pub sunlight_tolerance_rate: f32,
    /// Seconds a mature plant must stay healthy before it blooms.
    pub blooming_time: f32,

    // Health lost per second while a gauge is out of range.
    pub draught_tolerance: f32,
    pub overwater_tolerance: f32,
    pub low_sunlight_tolerance: f32,
    pub high_sunlight_tolerance: f32,

    pub sell_value: u32,
    pub planting_cost: u32,

    pub sprites: Vec<SpriteEntry>,
}

impl Default for PlantProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: PlantCategory::Flower,
            max_health: 100.0,
            growth_duration: 180.0,
            water_requirement: 0.6,
            sunlight_requirement: 0.7,
            growth_rate: 1.0,
            water_absorption_rate: 0.1,
            sunlight_tolerance_rate: 0.1,
            blooming_time: 20.0,
            draught_tolerance: 2.0,
            overwater_tolerance: 1.0,
            low_sunlight_tolerance: 0.5,
            high_sunlight_tolerance: 0.8,
            sell_value: 0,
            planting_cost: 0,
            sprites: Vec::new(),
        }
    }
}

/// Why a profile was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// A rate, tolerance or duration is negative or not finite.
    #[error("{field} must be a non-negative number (got {value})")]
    InvalidValue { field: &'static str, value: f32 },
    /// A requirement lies outside 0..=1.
    #[error("{field} must lie in 0..=1 (got {value})")]
    RequirementOutOfRange { field: &'static str, value: f32 },
    #[error("max_health must be positive (got {0})")]
    NonPositiveMaxHealth(f32),
}

impl PlantProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First sprite registered for this (age, state) pair, if any.
    pub fn sprite_for(&self, age: AgeTier, state: LifeState) -> Option<&str> {
        self.sprites
            .iter()
            .find(|entry| entry.age == age && entry.state == state)
            .map(|entry| entry.sprite.as_str())
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.max_health.is_finite() || self.max_health <= 0.0 {
            return Err(ProfileError::NonPositiveMaxHealth(self.max_health));
        }

        let non_negative = [
            ("growth_duration", self.growth_duration),
            ("growth_rate", self.growth_rate),
            ("water_absorption_rate", self.water_absorption_rate),
            ("sunlight_tolerance_rate", self.sunlight_tolerance_rate),
            ("blooming_time", self.blooming_time),
            ("draught_tolerance", self.draught_tolerance),
            ("overwater_tolerance", self.overwater_tolerance),
            ("low_sunlight_tolerance", self.low_sunlight_tolerance),
            ("high_sunlight_tolerance", self.high_sunlight_tolerance),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidValue { field, value });
            }
        }

        let requirements = [
            ("water_requirement", self.water_requirement),
            ("sunlight_requirement", self.sunlight_requirement),
        ];
        for (field, value) in requirements {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::RequirementOutOfRange { field, value });
            }
        }

        Ok(())
    }

    /// Growth seconds at which `tier` is reached.
    pub fn growth_threshold(&self, tier: AgeTier) -> f32 {
        self.growth_duration * tier.growth_fraction()
    }
}
