//! Data layer — loads garden content at start-up.
//!
//! This plugin runs in OnEnter(GameState::Loading), reads the garden config,
//! the plant catalogue and the spell words from RON files under
//! `assets/data/`, falls back to the compiled-in defaults when a file is
//! missing or malformed, then transitions the game into GameState::Playing.

mod plants;

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use crate::shared::*;
use crate::plants::{PlantProfile, ProfileRegistry};
use crate::spells::SpellWords;

pub use plants::default_profiles;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GardenConfig>()
            .add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Parse a plant catalogue: a RON list of profiles.
pub fn parse_profiles(source: &str) -> Result<Vec<PlantProfile>, String> {
    ron::from_str(source).map_err(|e| format!("Invalid plant catalogue: {}", e))
}

pub fn parse_garden_config(source: &str) -> Result<GardenConfig, String> {
    ron::from_str(source).map_err(|e| format!("Invalid garden config: {}", e))
}

pub fn parse_spell_words(source: &str) -> Result<SpellWords, String> {
    let words: SpellWords =
        ron::from_str(source).map_err(|e| format!("Invalid spell words: {}", e))?;
    if words.words.is_empty() {
        return Err("Spell word list is empty".to_string());
    }
    Ok(words)
}

pub fn read_spell_words(path: &Path) -> Result<SpellWords, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    parse_spell_words(&source)
}

pub fn read_profiles(path: &Path) -> Result<Vec<PlantProfile>, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    parse_profiles(&source)
}

pub fn read_garden_config(path: &Path) -> Result<GardenConfig, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    parse_garden_config(&source)
}

/// Register every valid profile, skipping (and logging) invalid ones.
/// Returns how many were registered.
pub fn populate_registry(registry: &mut ProfileRegistry, profiles: Vec<PlantProfile>) -> usize {
    let mut added = 0;
    for profile in profiles {
        match profile.validate() {
            Ok(()) => {
                registry.insert(profile);
                added += 1;
            }
            Err(err) => warn!("[Data] Skipping plant '{}': {}", profile.name, err),
        }
    }
    added
}

fn load_all_data(
    mut config: ResMut<GardenConfig>,
    mut registry: ResMut<ProfileRegistry>,
    mut spell_words: ResMut<SpellWords>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("[Data] Loading garden content…");

    match read_garden_config(Path::new(GARDEN_CONFIG_PATH)) {
        Ok(loaded) => *config = loaded,
        Err(err) => warn!("[Data] {}. Using default garden config.", err),
    }

    let profiles = match read_profiles(Path::new(PLANT_DATA_PATH)) {
        Ok(profiles) => profiles,
        Err(err) => {
            warn!("[Data] {}. Using built-in plants.", err);
            default_profiles()
        }
    };
    if populate_registry(&mut registry, profiles) == 0 {
        warn!("[Data] Plant catalogue is empty. Using built-in plants.");
        populate_registry(&mut registry, default_profiles());
    }
    info!(
        "[Data] Plants loaded: {} ({})",
        registry.len(),
        registry.names().collect::<Vec<_>>().join(", ")
    );

    match read_spell_words(Path::new(SPELL_WORDS_PATH)) {
        Ok(loaded) => *spell_words = loaded,
        Err(err) => warn!("[Data] {}. Using built-in spell words.", err),
    }
    info!("[Data] Spell words loaded: {}", spell_words.words.len());

    next_state.set(GameState::Playing);
}
