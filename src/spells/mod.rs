//! Spells domain — weather spells cast by saying a word out loud.
//!
//! Picking a spell (`CastSpellEvent`) draws a spell word the player has not
//! just seen and holds the weather in `PendingSpell`. The weather only
//! changes once a `WordRecognisedEvent` for that word arrives. Listening to
//! the microphone is the host's job.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    #[error("the spell word list is empty")]
    NoWords,
}

/// Words a spell may ask for, read from `assets/data/spells.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellWords {
    pub words: Vec<String>,
}

impl Default for SpellWords {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

const DEFAULT_WORDS: [&str; 12] = [
    "cat", "dog", "sun", "hat", "pig", "bed", "fish", "ship", "chip", "frog", "moon", "tree",
];

impl SpellWords {
    /// Draw a random word that differs from `previous`. With a single word
    /// (or only copies of `previous`) a repeat is unavoidable.
    pub fn pick(&self, previous: Option<&str>, rng: &mut impl Rng) -> Result<String, SpellError> {
        let fresh: Vec<&String> = self
            .words
            .iter()
            .filter(|word| Some(word.as_str()) != previous)
            .collect();

        let word = if fresh.is_empty() {
            self.words.first()
        } else {
            Some(fresh[rng.gen_range(0..fresh.len())])
        };
        word.cloned().ok_or(SpellError::NoWords)
    }
}

/// The spell waiting for its word, plus the last word shown so the next
/// spell asks for something else.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSpell {
    pub weather: Option<WeatherType>,
    pub word: Option<String>,
    pub last_word: Option<String>,
}

impl PendingSpell {
    pub fn is_waiting(&self) -> bool {
        self.weather.is_some()
    }

    /// Does `heard` match the word this spell is waiting for?
    pub fn accepts(&self, heard: &str) -> bool {
        self.word
            .as_deref()
            .is_some_and(|word| word.eq_ignore_ascii_case(heard.trim()))
    }
}

pub struct SpellsPlugin;

impl Plugin for SpellsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpellWords>()
            .init_resource::<PendingSpell>()
            .add_systems(
                Update,
                (begin_spell, complete_spell)
                    .chain()
                    .in_set(GardenSet::Input)
                    .before(crate::weather::apply_weather_changes)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Hold the requested weather and choose the word the player must say.
/// Picking another spell before finishing replaces the pending one.
pub fn begin_spell(
    mut casts: EventReader<CastSpellEvent>,
    words: Res<SpellWords>,
    mut pending: ResMut<PendingSpell>,
) {
    let Some(weather) = casts.read().last().map(|ev| ev.weather) else {
        return;
    };

    let mut rng = rand::thread_rng();
    match words.pick(pending.last_word.as_deref(), &mut rng) {
        Ok(word) => {
            info!("[Spells] Say \"{}\" to cast {:?}", word, weather);
            pending.weather = Some(weather);
            pending.last_word = Some(word.clone());
            pending.word = Some(word);
        }
        Err(err) => {
            error!("[Spells] Cannot cast {:?}: {}", weather, err);
            pending.weather = None;
            pending.word = None;
        }
    }
}

/// Release the pending weather once its word is heard.
pub fn complete_spell(
    mut heard: EventReader<WordRecognisedEvent>,
    mut pending: ResMut<PendingSpell>,
    mut weather_writer: EventWriter<WeatherChangeEvent>,
) {
    for ev in heard.read() {
        if !pending.accepts(&ev.word) {
            debug!("[Spells] Heard \"{}\", still waiting for {:?}", ev.word, pending.word);
            continue;
        }
        let Some(weather) = pending.weather.take() else {
            continue;
        };
        pending.word = None;
        info!("[Spells] Spell complete: {:?}", weather);
        weather_writer.send(WeatherChangeEvent { weather });
    }
}
