use bevy::prelude::*;
use crate::shared::*;

/// The player's purse. Plots debit planting costs from it and credit sale
/// proceeds to it through the `CurrencyLedger` trait.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    balance: u32,
    pub total_earned: u64,
    pub total_spent: u64,
    pub total_transactions: u64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(GardenConfig::default().starting_balance)
    }
}

impl Wallet {
    pub fn new(balance: u32) -> Self {
        Self {
            balance,
            total_earned: 0,
            total_spent: 0,
            total_transactions: 0,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.balance >= amount
    }
}

impl CurrencyLedger for Wallet {
    fn try_debit(&mut self, amount: u32) -> bool {
        if amount == 0 {
            return true;
        }
        if !self.can_afford(amount) {
            info!(
                "[Economy] Cannot spend {}: only {} available",
                format_money(amount),
                format_money(self.balance)
            );
            return false;
        }
        self.balance -= amount;
        self.total_spent = self.total_spent.saturating_add(amount as u64);
        self.total_transactions += 1;
        debug!("[Economy] Balance now {}", format_money(self.balance));
        true
    }

    fn credit(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.balance = self.balance.saturating_add(amount);
        self.total_earned = self.total_earned.saturating_add(amount as u64);
        self.total_transactions += 1;
        debug!("[Economy] Balance now {}", format_money(self.balance));
    }
}

/// Start every garden with the configured balance.
pub fn open_wallet(mut commands: Commands, config: Res<GardenConfig>) {
    commands.insert_resource(Wallet::new(config.starting_balance));
}

/// Credit the configured interest at the end of every day.
pub fn apply_daily_interest(
    mut day_end_events: EventReader<DayEndEvent>,
    config: Res<GardenConfig>,
    mut wallet: ResMut<Wallet>,
    mut gold_events: EventWriter<GoldChangeEvent>,
) {
    for ev in day_end_events.read() {
        if config.daily_interest == 0 {
            continue;
        }
        wallet.credit(config.daily_interest);
        gold_events.send(GoldChangeEvent {
            amount: config.daily_interest as i64,
            reason: format!("Daily interest, day {}", ev.day),
        });
    }
}

/// One log line per balance change, in the same form the HUD floats.
pub fn report_gold_changes(
    mut gold_events: EventReader<GoldChangeEvent>,
    wallet: Res<Wallet>,
) {
    for ev in gold_events.read() {
        info!(
            "[Economy] {} {}. Balance: {}",
            format_change(ev.amount),
            ev.reason,
            format_money(wallet.balance())
        );
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$1,250`.
pub fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let groups: Vec<&str> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect();
    format!("${}", groups.join(","))
}

/// Signed change for feedback text: `+$30`, `-$10`.
pub fn format_change(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    let magnitude = u32::try_from(amount.unsigned_abs()).unwrap_or(u32::MAX);
    format!("{}{}", sign, format_money(magnitude))
}
