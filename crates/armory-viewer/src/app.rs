//! Bevy application setup

use anyhow::Result;
use armory_core::{Catalog, Loadout, TerrainLayout};
use armory_scene::{
    ArmoryScenePlugin, CameraSettings, EquipmentCatalog, EquippedItems, WorldLayout,
};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::DefaultPickingPlugins;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::ui::UiPlugin;

/// Run the Bevy application
pub fn run(config: Config) -> Result<()> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_file(Path::new(path))?,
        None => Catalog::builtin(),
    };
    let loadout = Loadout::new(&catalog);

    let seed = config.terrain.seed.unwrap_or_else(rand::random);
    info!(seed, "Generating terrain layout");
    let layout = TerrainLayout::generate(&config.terrain.params(), seed);

    let camera = CameraSettings {
        distance: config.camera.distance,
        target_distance: config.camera.distance,
        azimuth: config.camera.azimuth,
        elevation: config.camera.elevation,
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92))) // Sky blue background
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: (config.window.width as u32, config.window.height as u32).into(),
                ..default()
            }),
            ..default()
        }))
        // Core picking must be added BEFORE EguiPlugin so it can detect
        // PickingPlugin (bevy_egui picking feature)
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(EguiPlugin::default())
        .insert_resource(EquipmentCatalog(catalog))
        .insert_resource(EquippedItems(loadout))
        .insert_resource(WorldLayout(layout))
        .insert_resource(camera)
        .add_plugins(ArmoryScenePlugin)
        .add_plugins(UiPlugin)
        .run();

    Ok(())
}
