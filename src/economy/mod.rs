//! Economy domain — the player's wallet and daily interest.

use bevy::prelude::*;
use crate::shared::*;

pub mod gold;

pub use gold::{format_change, format_money, Wallet};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Wallet>()
            .add_systems(OnExit(GameState::Loading), gold::open_wallet)
            .add_systems(
                Update,
                (gold::apply_daily_interest, gold::report_gold_changes)
                    .chain()
                    .after(GardenSet::Simulate)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
