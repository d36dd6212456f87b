//! Character entities - avatar body, equipment attachments, turntable
//!
//! The character group spawns once: the fixed body parts plus one
//! hidden mesh per catalog slot. A sync system copies loadout state
//! into equipment visibility whenever the loadout changes; the body
//! parts are never touched by it.

use armory_core::{turntable_yaw, BODY_PARTS, CHARACTER_BASE, TURNTABLE_SPEED};
use bevy::prelude::*;
use tracing::info;

use crate::types::{srgb, EquipmentCatalog, EquippedItems};

/// Turntable angular speed in radians per second
#[derive(Debug, Clone, Resource)]
pub struct Turntable {
    pub speed: f32,
}

impl Default for Turntable {
    fn default() -> Self {
        Self {
            speed: TURNTABLE_SPEED,
        }
    }
}

/// Marker component for the character group root
#[derive(Component)]
pub struct CharacterRoot;

/// Marker component for one optional equipment mesh
#[derive(Component)]
pub struct EquipmentEntity {
    pub slot_id: String,
}

/// Plugin for the character and its equipment
pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Turntable>()
            .add_systems(Startup, setup_character)
            .add_systems(Update, (rotate_character, update_equipment_visibility));
    }
}

fn setup_character(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<EquipmentCatalog>,
) {
    let root = commands
        .spawn((
            Transform::from_translation(Vec3::from_array(CHARACTER_BASE)),
            Visibility::default(),
            CharacterRoot,
        ))
        .id();

    // Fixed body parts
    for part in BODY_PARTS {
        let child = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(part.size[0], part.size[1], part.size[2]))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: srgb(part.color),
                    ..default()
                })),
                Transform::from_translation(Vec3::from_array(part.offset)),
            ))
            .id();
        commands.entity(root).add_child(child);
    }

    // One hidden mesh per catalog slot, shown while the slot is worn
    for slot in catalog.0.slots() {
        let [r, g, b] = slot.rgb();
        let child = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(slot.size[0], slot.size[1], slot.size[2]))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, b),
                    ..default()
                })),
                Transform::from_translation(Vec3::from_array(slot.offset)),
                Visibility::Hidden,
                EquipmentEntity {
                    slot_id: slot.id.clone(),
                },
            ))
            .id();
        commands.entity(root).add_child(child);
    }

    info!(
        parts = BODY_PARTS.len(),
        slots = catalog.0.len(),
        "Spawned character"
    );
}

/// Spin the character group; yaw is a pure function of elapsed time
fn rotate_character(
    time: Res<Time>,
    turntable: Res<Turntable>,
    mut query: Query<&mut Transform, With<CharacterRoot>>,
) {
    if let Ok(mut transform) = query.single_mut() {
        transform.rotation =
            Quat::from_rotation_y(turntable_yaw(time.elapsed_secs(), turntable.speed));
    }
}

/// Copy loadout state into equipment visibility when it changes
fn update_equipment_visibility(
    equipped: Res<EquippedItems>,
    mut equipment: Query<(&EquipmentEntity, &mut Visibility)>,
) {
    if !equipped.is_changed() {
        return;
    }
    for (entity, mut visibility) in equipment.iter_mut() {
        *visibility = if equipped.0.is_equipped(&entity.slot_id) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_matches_rotation_quat() {
        let yaw = turntable_yaw(12.5, TURNTABLE_SPEED);
        let quat = Quat::from_rotation_y(yaw);
        let (axis, angle) = quat.to_axis_angle();

        assert!((angle - yaw.rem_euclid(std::f32::consts::TAU)).abs() < 1e-3);
        assert!((axis.y.abs() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_turntable_default_speed() {
        assert_eq!(Turntable::default().speed, TURNTABLE_SPEED);
    }
}
