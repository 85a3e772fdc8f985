use crate::shared::*;
use crate::plants::{PlantProfile, SpriteEntry};

/// The sparse sprite table every species ships with. Seeded plants have no
/// wilted or dead artwork, so they keep their last sprite in those states.
fn sprite_table(id: &str) -> Vec<SpriteEntry> {
    let rows = [
        (AgeTier::Seeded, LifeState::Healthy, "seeded"),
        (AgeTier::Seedling, LifeState::Healthy, "seedling"),
        (AgeTier::Young, LifeState::Healthy, "young"),
        (AgeTier::Mature, LifeState::Healthy, "mature"),
        (AgeTier::Mature, LifeState::Blooming, "blooming"),
        (AgeTier::Seedling, LifeState::Wilted, "seedling_wilted"),
        (AgeTier::Young, LifeState::Wilted, "young_wilted"),
        (AgeTier::Mature, LifeState::Wilted, "mature_wilted"),
        (AgeTier::Young, LifeState::Dead, "dead"),
        (AgeTier::Mature, LifeState::Dead, "dead"),
    ];
    rows.into_iter()
        .map(|(age, state, stage)| SpriteEntry {
            age,
            state,
            sprite: format!("sprites/plants/{}/{}.png", id, stage),
        })
        .collect()
}

/// Built-in species, identical to `assets/data/plants.ron`.
/// Used when the catalogue file is missing or unreadable.
pub fn default_profiles() -> Vec<PlantProfile> {
    vec![
        PlantProfile {
            name: "Grapes".into(),
            category: PlantCategory::Bush,
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
            sell_value: 25,
            planting_cost: 10,
            sprites: sprite_table("grapes"),
        },
        PlantProfile {
            name: "Cucumber".into(),
            category: PlantCategory::Flower,
            max_health: 80.0,
            growth_duration: 120.0,
            water_requirement: 0.7,
            sunlight_requirement: 0.6,
            growth_rate: 1.0,
            water_absorption_rate: 0.12,
            sunlight_tolerance_rate: 0.08,
            blooming_time: 15.0,
            draught_tolerance: 2.5,
            overwater_tolerance: 0.8,
            low_sunlight_tolerance: 0.6,
            high_sunlight_tolerance: 0.7,
            sell_value: 15,
            planting_cost: 5,
            sprites: sprite_table("cucumber"),
        },
        PlantProfile {
            name: "Pineapple".into(),
            category: PlantCategory::Tree,
            max_health: 150.0,
            growth_duration: 240.0,
            water_requirement: 0.4,
            sunlight_requirement: 0.85,
            growth_rate: 1.0,
            water_absorption_rate: 0.08,
            sunlight_tolerance_rate: 0.12,
            blooming_time: 30.0,
            draught_tolerance: 1.0,
            overwater_tolerance: 1.5,
            low_sunlight_tolerance: 0.8,
            high_sunlight_tolerance: 0.4,
            sell_value: 40,
            planting_cost: 20,
            sprites: sprite_table("pineapple"),
        },
    ]
}
