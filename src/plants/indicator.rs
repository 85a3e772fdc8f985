//! Element indicator — the little icon above a plant telling the player which
//! gauge needs attention and in which direction.

use super::profile::PlantProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndicatorContent {
    #[default]
    Sun,
    Water,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndicatorSignal {
    /// Nothing to report; the indicator is hidden.
    #[default]
    None,
    Increase,
    HeavyIncrease,
    Decrease,
    HeavyDecrease,
    /// Icon shown without arrows (dead plants).
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicator {
    pub content: IndicatorContent,
    pub signal: IndicatorSignal,
}

impl Indicator {
    pub fn is_visible(&self) -> bool {
        self.signal != IndicatorSignal::None
    }

    pub fn shows_arrow(&self) -> bool {
        !matches!(self.signal, IndicatorSignal::None | IndicatorSignal::Neutral)
    }
}

/// Ratios of the requirement below which a gauge asks for more.
struct LowSide {
    heavy: f32,
    light: f32,
}

const WATER_LOW: LowSide = LowSide { heavy: 0.3, light: 0.6 };
const SUN_LOW: LowSide = LowSide { heavy: 0.5, light: 0.6 };

const HEAVY_HIGH_RATIO: f32 = 1.8;
const LIGHT_HIGH_RATIO: f32 = 1.5;

/// Distance beyond which a gauge is worth pointing out even though the other
/// one was further off but still in band.
const SWITCH_DISTANCE: f32 = 0.1;

fn gauge_signal(level: f32, requirement: f32, low: &LowSide) -> IndicatorSignal {
    if level < requirement * low.heavy {
        IndicatorSignal::HeavyIncrease
    } else if level < requirement * low.light {
        IndicatorSignal::Increase
    } else if level > (requirement * HEAVY_HIGH_RATIO).min(1.0) {
        IndicatorSignal::HeavyDecrease
    } else if level > (requirement * LIGHT_HIGH_RATIO).min(1.0) {
        IndicatorSignal::Decrease
    } else {
        IndicatorSignal::None
    }
}

/// Recompute `indicator` from the current gauges.
///
/// When both gauges are in band only the signal is cleared; the content keeps
/// whatever it last pointed at.
pub fn update_indicator(
    indicator: &mut Indicator,
    profile: &PlantProfile,
    water_level: f32,
    sunlight_level: f32,
    dead: bool,
) {
    if dead {
        indicator.content = IndicatorContent::Dead;
        indicator.signal = IndicatorSignal::Neutral;
        return;
    }

    let water_distance = (water_level - profile.water_requirement).abs();
    let sunlight_distance = (sunlight_level - profile.sunlight_requirement).abs();

    let water = gauge_signal(water_level, profile.water_requirement, &WATER_LOW);
    let sun = gauge_signal(sunlight_level, profile.sunlight_requirement, &SUN_LOW);

    // Ties go to water. When the further gauge is in band, the other one is
    // shown instead if it is noticeably off.
    let (first, second) = if water_distance >= sunlight_distance {
        ((IndicatorContent::Water, water), (IndicatorContent::Sun, sun, sunlight_distance))
    } else {
        ((IndicatorContent::Sun, sun), (IndicatorContent::Water, water, water_distance))
    };

    if first.1 != IndicatorSignal::None {
        indicator.content = first.0;
        indicator.signal = first.1;
    } else if second.2 > SWITCH_DISTANCE && second.1 != IndicatorSignal::None {
        indicator.content = second.0;
        indicator.signal = second.1;
    } else {
        indicator.signal = IndicatorSignal::None;
    }
}
