//! Visual synchronisation — keep plot, plant and indicator sprites in sync
//! with the simulation. Only the windowed binary adds this plugin.

use bevy::asset::LoadState;
use bevy::prelude::*;
use crate::shared::*;
use super::indicator::{Indicator, IndicatorContent, IndicatorSignal};
use super::PlotSlot;

const SOIL_COLOR: Color = Color::srgb(0.42, 0.30, 0.20);
const INDICATOR_OFFSET: f32 = TILE_SIZE * 0.6;

pub struct GardenViewPlugin;

impl Plugin for GardenViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (attach_plot_views, sync_plant_sprites, sync_indicators)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// The plant sprite drawn on top of a plot.
#[derive(Component, Debug, Clone)]
pub struct PlantView {
    pub plot: Entity,
    /// Sprite key currently loaded, to avoid reloading every frame.
    shown: Option<String>,
    /// The shown key failed to load; draw the placeholder tint instead.
    missing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorPart {
    Icon,
    Arrow,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct IndicatorView {
    pub plot: Entity,
    pub part: IndicatorPart,
    /// Image path that failed to load, drawn as a tint from then on.
    failed: Option<&'static str>,
}

impl IndicatorView {
    fn new(plot: Entity, part: IndicatorPart) -> Self {
        Self { plot, part, failed: None }
    }
}

/// Placeholder tint used while a plant has no sprite key.
pub fn placeholder_color(age: AgeTier, state: LifeState) -> Color {
    match state {
        LifeState::Dead => Color::srgb(0.35, 0.28, 0.20), // dried-out brown
        LifeState::Wilted => Color::srgb(0.65, 0.62, 0.25),
        LifeState::Blooming => Color::srgb(0.85, 0.35, 0.65),
        LifeState::Healthy => {
            let progress = age as u8 as f32 / AgeTier::Mature as u8 as f32;
            // Lerp from pale yellow-green (seeded) to vivid green (mature)
            let r = 0.5 * (1.0 - progress) + 0.2 * progress;
            let g = 0.65 + 0.15 * progress;
            let b = 0.2 * (1.0 - progress);
            Color::srgb(r, g, b)
        }
    }
}

/// Tint for an indicator part whose image could not be loaded.
pub fn indicator_placeholder_color(part: IndicatorPart, indicator: Indicator) -> Color {
    match part {
        IndicatorPart::Icon => match indicator.content {
            IndicatorContent::Sun => Color::srgb(0.98, 0.82, 0.20),
            IndicatorContent::Water => Color::srgb(0.25, 0.55, 0.95),
            IndicatorContent::Dead => Color::srgb(0.45, 0.45, 0.45),
        },
        IndicatorPart::Arrow => match indicator.signal {
            IndicatorSignal::HeavyIncrease | IndicatorSignal::HeavyDecrease => Color::srgb(0.90, 0.20, 0.15),
            _ => Color::srgb(0.95, 0.60, 0.15),
        },
    }
}

fn load_failed(asset_server: &AssetServer, image: &Handle<Image>) -> bool {
    matches!(asset_server.get_load_state(image.id()), Some(LoadState::Failed(_)))
}

pub fn indicator_icon_path(content: IndicatorContent) -> &'static str {
    match content {
        IndicatorContent::Sun => "sprites/indicators/sun.png",
        IndicatorContent::Water => "sprites/indicators/water.png",
        IndicatorContent::Dead => "sprites/indicators/dead.png",
    }
}

pub fn indicator_arrow_path(signal: IndicatorSignal) -> Option<&'static str> {
    match signal {
        IndicatorSignal::Increase => Some("sprites/indicators/arrow_up.png"),
        IndicatorSignal::HeavyIncrease => Some("sprites/indicators/arrow_up_heavy.png"),
        IndicatorSignal::Decrease => Some("sprites/indicators/arrow_down.png"),
        IndicatorSignal::HeavyDecrease => Some("sprites/indicators/arrow_down_heavy.png"),
        IndicatorSignal::None | IndicatorSignal::Neutral => None,
    }
}

/// Give newly spawned plots a soil sprite, a plant sprite and an indicator.
fn attach_plot_views(
    mut commands: Commands,
    new_plots: Query<(Entity, &Transform), Added<PlotSlot>>,
) {
    for (plot, transform) in new_plots.iter() {
        let base = transform.translation;

        commands.entity(plot).insert(Sprite {
            color: SOIL_COLOR,
            custom_size: Some(Vec2::splat(TILE_SIZE)),
            ..default()
        });

        commands.spawn((
            Sprite {
                custom_size: Some(Vec2::splat(TILE_SIZE * 0.8)),
                ..default()
            },
            Transform::from_translation(base.with_z(2.0)),
            Visibility::Hidden,
            PlantView { plot, shown: None, missing: false },
        ));

        let icon_pos = base + Vec3::new(0.0, INDICATOR_OFFSET, 0.0);
        commands.spawn((
            Sprite {
                custom_size: Some(Vec2::splat(TILE_SIZE * 0.3)),
                ..default()
            },
            Transform::from_translation(icon_pos.with_z(3.0)),
            Visibility::Hidden,
            IndicatorView::new(plot, IndicatorPart::Icon),
        ));
        commands.spawn((
            Sprite {
                custom_size: Some(Vec2::splat(TILE_SIZE * 0.2)),
                ..default()
            },
            Transform::from_translation((icon_pos + Vec3::new(TILE_SIZE * 0.25, 0.0, 0.0)).with_z(3.0)),
            Visibility::Hidden,
            IndicatorView::new(plot, IndicatorPart::Arrow),
        ));
    }
}

/// Swap the plant image when the sprite key changes; tint by state when the
/// species has no artwork for the current stage or the image failed to load.
fn sync_plant_sprites(
    asset_server: Res<AssetServer>,
    plots: Query<&PlotSlot>,
    mut views: Query<(&mut PlantView, &mut Sprite, &mut Visibility), Without<IndicatorView>>,
) {
    for (mut view, mut sprite, mut visibility) in views.iter_mut() {
        let Some(plant) = plots.get(view.plot).ok().and_then(|slot| slot.plant()) else {
            *visibility = Visibility::Hidden;
            view.shown = None;
            continue;
        };
        *visibility = Visibility::Visible;

        match plant.sprite() {
            Some(key) => {
                if view.shown.as_deref() != Some(key) {
                    sprite.image = asset_server.load(key.to_string());
                    view.shown = Some(key.to_string());
                    view.missing = false;
                }
                if !view.missing && load_failed(&asset_server, &sprite.image) {
                    warn!("[Garden] Could not load {}, drawing a placeholder", key);
                    sprite.image = Handle::default();
                    view.missing = true;
                }
            }
            None => {
                sprite.image = Handle::default();
                view.shown = None;
                view.missing = true;
            }
        }

        sprite.color = if view.missing {
            placeholder_color(plant.age_tier(), plant.life_state())
        } else {
            Color::WHITE
        };
    }
}

fn sync_indicators(
    asset_server: Res<AssetServer>,
    plots: Query<&PlotSlot>,
    mut views: Query<(&mut IndicatorView, &mut Sprite, &mut Visibility), Without<PlantView>>,
) {
    for (mut view, mut sprite, mut visibility) in views.iter_mut() {
        let indicator: Option<Indicator> = plots
            .get(view.plot)
            .ok()
            .and_then(|slot| slot.plant())
            .and_then(|plant| plant.indicator());

        let Some(indicator) = indicator.filter(Indicator::is_visible) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let path = match view.part {
            IndicatorPart::Icon => Some(indicator_icon_path(indicator.content)),
            IndicatorPart::Arrow => indicator_arrow_path(indicator.signal),
        };
        let Some(path) = path else {
            *visibility = Visibility::Hidden;
            continue;
        };
        *visibility = Visibility::Visible;

        if view.failed == Some(path) {
            sprite.color = indicator_placeholder_color(view.part, indicator);
            continue;
        }
        let image: Handle<Image> = asset_server.load(path);
        if load_failed(&asset_server, &image) {
            warn!("[Garden] Could not load {}, drawing a placeholder", path);
            view.failed = Some(path);
            sprite.image = Handle::default();
            sprite.color = indicator_placeholder_color(view.part, indicator);
        } else if sprite.image != image {
            sprite.image = image;
            sprite.color = Color::WHITE;
        }
    }
}
