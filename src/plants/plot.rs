//! Plot slots — the patch of soil that holds at most one plant.

use std::sync::Arc;

use bevy::prelude::*;

use crate::shared::*;
use super::profile::PlantProfile;
use super::simulation::PlantSimulation;

/// A plantable location. Owns its occupant outright; removing or replacing
/// the plant drops all of its state.
#[derive(Component, Debug, Clone, Default)]
pub struct PlotSlot {
    plant: Option<PlantSimulation>,
    evaporation: EvaporationRates,
    with_indicator: bool,
}

impl PlotSlot {
    pub fn new(evaporation: EvaporationRates) -> Self {
        Self {
            plant: None,
            evaporation,
            with_indicator: false,
        }
    }

    /// Plants sown here get an element indicator.
    pub fn with_indicator(mut self) -> Self {
        self.with_indicator = true;
        self
    }

    pub fn has_plant(&self) -> bool {
        self.plant.is_some()
    }

    pub fn plant(&self) -> Option<&PlantSimulation> {
        self.plant.as_ref()
    }

    /// Sow a fresh plant, paying the profile's planting cost from `ledger`.
    ///
    /// Refused when the plot is occupied, the profile is invalid, or the
    /// ledger cannot cover the cost. A refusal leaves both plot and ledger
    /// untouched.
    pub fn sow(&mut self, profile: Arc<PlantProfile>, ledger: &mut impl CurrencyLedger) -> bool {
        if let Some(existing) = &self.plant {
            warn!(
                "[Garden] Cannot sow {}: plot already holds {}",
                profile.name,
                existing.profile().name
            );
            return false;
        }

        if let Err(err) = profile.validate() {
            warn!("[Garden] Refusing to sow {}: {}", profile.name, err);
            return false;
        }

        if !ledger.try_debit(profile.planting_cost) {
            info!(
                "[Garden] Cannot afford {} (costs {})",
                profile.name, profile.planting_cost
            );
            return false;
        }

        let mut plant = PlantSimulation::initialize(profile).with_evaporation(self.evaporation);
        if self.with_indicator {
            plant = plant.with_indicator();
        }
        info!("[Garden] Sowed {}", plant.profile().name);
        self.plant = Some(plant);
        true
    }

    /// Dig up the current plant, whatever its state.
    pub fn remove(&mut self) -> bool {
        match self.plant.take() {
            Some(plant) => {
                info!("[Garden] Removed {}", plant.profile().name);
                true
            }
            None => {
                warn!("[Garden] No plant to remove in this plot");
                false
            }
        }
    }

    /// Sell the occupant's fruit. False when empty or the plant isn't blooming.
    pub fn sell(&mut self, ledger: &mut impl CurrencyLedger) -> bool {
        let Some(plant) = self.plant.as_mut() else {
            warn!("[Garden] No plant to sell from in this plot");
            return false;
        };

        if !plant.sell(ledger) {
            info!(
                "[Garden] {} is not ready to sell ({:?}, {:?})",
                plant.profile().name,
                plant.age_tier(),
                plant.life_state()
            );
            return false;
        }
        true
    }

    pub fn advance(&mut self, weather: WeatherType, dt: f32) {
        if let Some(plant) = self.plant.as_mut() {
            plant.advance(weather, dt);
        }
    }
}
