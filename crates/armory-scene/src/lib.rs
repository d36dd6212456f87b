//! Armory Scene - 3D scene plugins for the character viewer
//!
//! This crate provides the scene composition used by the viewer binary:
//! - Orbit camera pinned to the character's focus point
//! - World geometry (ground plane, scattered blocks, trees, lighting)
//! - The character group with its optional equipment attachments

pub mod camera;
pub mod character;
pub mod types;
pub mod world;

use bevy::prelude::*;

/// Plugin that sets up the full 3D scene
pub struct ArmoryScenePlugin;

impl Plugin for ArmoryScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(camera::CameraPlugin)
            .add_plugins(world::WorldPlugin)
            .add_plugins(character::CharacterPlugin);
    }
}

// Re-export commonly used types
pub use camera::{CameraSettings, MainCamera};
pub use character::{CharacterRoot, EquipmentEntity, Turntable};
pub use types::{EquipmentCatalog, EquippedItems, WorldLayout};
