//! World setup - lighting, ground plane, terrain blocks, and trees
//!
//! All world geometry is spawned once at startup from the injected
//! `WorldLayout` and never regenerated.

use bevy::prelude::*;
use tracing::info;

use crate::types::{srgb, WorldLayout};

/// Marker component for the ground plane
#[derive(Component)]
pub struct GroundPlane;

/// Marker component for a scattered dirt block
#[derive(Component)]
pub struct GroundBlock;

/// Marker component for a tree root (trunk + canopy children)
#[derive(Component)]
pub struct Tree;

const GROUND_COLOR: &str = "#5C832F";
const DIRT_COLOR: &str = "#8B4513";
const GRASS_COLOR: &str = "#7CFC00";
const CANOPY_COLOR: &str = "#228B22";

/// Plugin for world setup
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_world);
    }
}

fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<WorldLayout>,
) {
    // Ambient fill plus one high point light off to the side
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    // Ground plane, top face at half a block below the scatter height
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(100.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(GROUND_COLOR),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.5, 0.0),
        GroundPlane,
    ));

    // Dirt blocks, each with a thin grass cap child
    let block_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let cap_mesh = meshes.add(Cuboid::new(1.01, 0.1, 1.01));
    let dirt_material = materials.add(StandardMaterial {
        base_color: srgb(DIRT_COLOR),
        ..default()
    });
    let grass_material = materials.add(StandardMaterial {
        base_color: srgb(GRASS_COLOR),
        ..default()
    });

    for pos in &layout.0.ground_blocks {
        let block = commands
            .spawn((
                Mesh3d(block_mesh.clone()),
                MeshMaterial3d(dirt_material.clone()),
                Transform::from_translation(Vec3::from_array(*pos)),
                GroundBlock,
            ))
            .id();
        let cap = commands
            .spawn((
                Mesh3d(cap_mesh.clone()),
                MeshMaterial3d(grass_material.clone()),
                Transform::from_xyz(0.0, 0.5, 0.0),
            ))
            .id();
        commands.entity(block).add_child(cap);
    }

    // Trees: trunk and canopy under a shared root
    let trunk_mesh = meshes.add(Cuboid::new(1.0, 4.0, 1.0));
    let canopy_mesh = meshes.add(Cuboid::new(3.0, 3.0, 3.0));
    let canopy_material = materials.add(StandardMaterial {
        base_color: srgb(CANOPY_COLOR),
        ..default()
    });

    for pos in &layout.0.trees {
        let tree = commands
            .spawn((
                Transform::from_translation(Vec3::from_array(*pos)),
                Visibility::default(),
                Tree,
            ))
            .id();
        let trunk = commands
            .spawn((
                Mesh3d(trunk_mesh.clone()),
                MeshMaterial3d(dirt_material.clone()),
                Transform::from_xyz(0.0, 2.0, 0.0),
            ))
            .id();
        let canopy = commands
            .spawn((
                Mesh3d(canopy_mesh.clone()),
                MeshMaterial3d(canopy_material.clone()),
                Transform::from_xyz(0.0, 4.5, 0.0),
            ))
            .id();
        commands.entity(tree).add_child(trunk);
        commands.entity(tree).add_child(canopy);
    }

    info!(
        blocks = layout.0.ground_blocks.len(),
        trees = layout.0.trees.len(),
        "Spawned terrain"
    );
}
