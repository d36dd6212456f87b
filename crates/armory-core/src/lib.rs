//! Armory Core - equipment catalog, loadout state, and terrain layout
//!
//! This crate provides the foundational types for the Armory viewer:
//! - Equipment catalog: the fixed table of wearable item definitions
//! - Loadout: worn/not-worn toggle state, resolved against the catalog
//! - Terrain layout: one-shot seeded placement generation
//! - Character part table: the fixed avatar geometry

pub mod catalog;
pub mod character;
pub mod layout;
pub mod loadout;

pub use catalog::{parse_hex_color, Catalog, CatalogError, EquipmentSpec};
pub use character::{turntable_yaw, BodyPart, BODY_PARTS, CHARACTER_BASE, TURNTABLE_SPEED};
pub use layout::{TerrainLayout, TerrainParams};
pub use loadout::Loadout;
