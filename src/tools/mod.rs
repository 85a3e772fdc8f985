//! Garden tools — route plot clicks to sow / dig up / sell, depending on the
//! tool the player has in hand.

use bevy::prelude::*;
use crate::shared::*;
use crate::economy::Wallet;
use crate::plants::{PlotSlot, ProfileRegistry};

/// The tool currently in hand.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveTool(pub GardenTool);

impl ActiveTool {
    pub fn set(&mut self, tool: GardenTool) {
        if self.0 != tool {
            debug!("[Tools] {:?} -> {:?}", self.0, tool);
        }
        self.0 = tool;
    }

    /// Pick `tool`, or put it away if it is already in hand.
    pub fn toggle(&mut self, tool: GardenTool) {
        if self.0 == tool {
            self.set(GardenTool::None);
        } else {
            self.set(tool);
        }
    }
}

/// Species the plant tool will sow. `None` until the player (or the data
/// loader) picks one.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSeed(pub Option<String>);

pub struct ToolsPlugin;

impl Plugin for ToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveTool>()
            .init_resource::<SelectedSeed>()
            .add_systems(OnExit(GameState::Loading), select_default_seed)
            .add_systems(
                Update,
                handle_plot_clicks
                    .in_set(GardenSet::Input)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Default the plant tool to the first registered species.
pub fn select_default_seed(registry: Res<ProfileRegistry>, mut seed: ResMut<SelectedSeed>) {
    if seed.0.is_none() {
        seed.0 = registry.first().map(|profile| profile.name.clone());
    }
}

pub fn handle_plot_clicks(
    mut clicks: EventReader<PlotClickedEvent>,
    tool: Res<ActiveTool>,
    seed: Res<SelectedSeed>,
    registry: Res<ProfileRegistry>,
    mut wallet: ResMut<Wallet>,
    mut plots: Query<&mut PlotSlot>,
    mut gold_events: EventWriter<GoldChangeEvent>,
) {
    for click in clicks.read() {
        let Ok(mut plot) = plots.get_mut(click.plot) else {
            warn!("[Tools] Clicked entity {:?} is not a plot", click.plot);
            continue;
        };

        match tool.0 {
            GardenTool::Plant => {
                if plot.has_plant() {
                    continue;
                }
                let Some(name) = seed.0.as_deref() else {
                    error!("[Tools] No plant selected for the plant tool");
                    continue;
                };
                let Some(profile) = registry.get(name) else {
                    error!("[Tools] Unknown plant '{}'", name);
                    continue;
                };
                let cost = profile.planting_cost;
                if plot.sow(profile, &mut *wallet) && cost > 0 {
                    gold_events.send(GoldChangeEvent {
                        amount: -(cost as i64),
                        reason: format!("Planted {}", name),
                    });
                }
            }
            GardenTool::Shovel => {
                plot.remove();
            }
            GardenTool::Sell => {
                let Some(plant) = plot.plant() else {
                    info!("[Tools] No plant to sell from in this plot");
                    continue;
                };
                let value = plant.profile().sell_value;
                let name = plant.profile().name.clone();
                if plot.sell(&mut *wallet) {
                    gold_events.send(GoldChangeEvent {
                        amount: value as i64,
                        reason: format!("Sold {}", name),
                    });
                }
            }
            GardenTool::None => {
                debug!("[Tools] Clicked plot {:?} with no tool", click.plot);
            }
        }
    }
}
