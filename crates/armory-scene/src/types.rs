//! Shared resources for scene composition

use armory_core::{parse_hex_color, Catalog, Loadout, TerrainLayout};
use bevy::prelude::*;

/// The fixed equipment slot table, loaded once at startup
#[derive(Debug, Clone, Resource)]
pub struct EquipmentCatalog(pub Catalog);

/// Current worn/not-worn state, mutated only by the UI checkboxes
#[derive(Debug, Clone, Resource, Default)]
pub struct EquippedItems(pub Loadout);

/// Fixed terrain placements for the session
#[derive(Debug, Clone, Resource)]
pub struct WorldLayout(pub TerrainLayout);

/// Bevy color from a "#RRGGBB" string; neutral gray on bad input
pub(crate) fn srgb(hex: &str) -> Color {
    let [r, g, b] = parse_hex_color(hex).unwrap_or([0.5, 0.5, 0.5]);
    Color::srgb(r, g, b)
}
