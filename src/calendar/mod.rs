//! Calendar domain — the garden's day timer.
//!
//! Responsible for:
//! - Accumulating real delta-seconds into in-game days
//! - Sending DayEndEvent when a day rolls over
//! - Pausing / unpausing time based on GameState
//! - Switching between Playing and Paused on `TogglePauseEvent`

use bevy::prelude::*;

use crate::shared::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameClock {
    pub day: u32,
    pub seconds_per_day: f32,
    /// Real seconds elapsed in the current day.
    pub elapsed: f32,
    pub paused: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(GardenConfig::default().seconds_per_day)
    }
}

impl GameClock {
    pub fn new(seconds_per_day: f32) -> Self {
        Self {
            day: 1,
            seconds_per_day,
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Fraction of the current day that has passed, 0..1.
    pub fn day_progress(&self) -> f32 {
        if self.seconds_per_day > 0.0 {
            (self.elapsed / self.seconds_per_day).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn time_remaining(&self) -> f32 {
        (self.seconds_per_day - self.elapsed).max(0.0)
    }

    /// Add `dt` seconds and return the numbers of the days that ended.
    pub fn advance(&mut self, dt: f32) -> Vec<u32> {
        let mut ended = Vec::new();
        if self.paused || !dt.is_finite() || dt <= 0.0 || self.seconds_per_day <= 0.0 {
            return ended;
        }

        self.elapsed += dt;
        while self.elapsed >= self.seconds_per_day {
            self.elapsed -= self.seconds_per_day;
            ended.push(self.day);
            self.day += 1;
        }
        ended
    }
}

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .add_systems(OnExit(GameState::Loading), start_clock)
            .add_systems(OnEnter(GameState::Playing), resume_time)
            .add_systems(OnExit(GameState::Playing), pause_time)
            .add_systems(Update, toggle_pause)
            .add_systems(
                Update,
                tick_clock
                    .in_set(GardenSet::Input)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn start_clock(mut commands: Commands, config: Res<GardenConfig>) {
    commands.insert_resource(GameClock::new(config.seconds_per_day));
}

// ─── State transition hooks ───────────────────────────────────────────────────

fn resume_time(mut clock: ResMut<GameClock>) {
    clock.paused = false;
    info!("[Calendar] Time resumed — Day {}", clock.day);
}

fn pause_time(mut clock: ResMut<GameClock>) {
    clock.paused = true;
    info!("[Calendar] Time paused");
}

/// Flip between Playing and Paused. An even number of requests in one frame
/// cancels out.
pub fn toggle_pause(
    mut requests: EventReader<TogglePauseEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if requests.read().count() % 2 == 0 {
        return;
    }
    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
        GameState::Loading => debug!("[Calendar] Ignoring pause request while loading"),
    }
}

// ─── Main time-tick system ────────────────────────────────────────────────────

pub fn tick_clock(
    time: Res<Time>,
    mut clock: ResMut<GameClock>,
    mut day_end_writer: EventWriter<DayEndEvent>,
) {
    for day in clock.advance(time.delta_secs()) {
        info!("[Calendar] Day {} ended", day);
        day_end_writer.send(DayEndEvent { day });
    }
}
