//! Camera controls and orbit navigation
//!
//! The camera orbits a fixed focus point at the character's chest
//! height. User input changes distance and orbit angles only; the
//! look-at target never moves, and the elevation clamp keeps the camera
//! from passing below the ground plane.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Camera controller settings
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    /// Fixed look-at point; orbit and zoom never move it
    pub target: Vec3,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 10.5,
            target_distance: 10.5,
            azimuth: 0.0,
            elevation: 0.31, // Slightly elevated view
            target: Vec3::new(0.0, 1.8, 0.0),
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }
}

/// Elevation stays between level with the focus point and just short of
/// the pole, so the camera never drops below the ground plane
const ELEVATION_RANGE: (f32, f32) = (0.0, 1.5);
const DISTANCE_RANGE: (f32, f32) = (2.0, 40.0);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for camera controls
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_camera);
    }
}

fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(orbit_translation(&settings))
            .looking_at(settings.target, Vec3::Y),
        MainCamera,
    ));
}

/// Camera position on the orbit sphere around the fixed target (Y up)
fn orbit_translation(settings: &CameraSettings) -> Vec3 {
    let x = settings.distance * settings.elevation.cos() * settings.azimuth.sin();
    let y = settings.distance * settings.elevation.sin();
    let z = settings.distance * settings.elevation.cos() * settings.azimuth.cos();
    settings.target + Vec3::new(x, y, z)
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut contexts: bevy_egui::EguiContexts,
) {
    // Check if egui wants the mouse - if so, don't process camera controls
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    // Collect mouse motion delta
    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    // Orbit with left mouse drag (only when UI doesn't want pointer)
    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        settings.azimuth -= total_motion.x * settings.sensitivity;
        settings.elevation = (settings.elevation - total_motion.y * settings.sensitivity)
            .clamp(ELEVATION_RANGE.0, ELEVATION_RANGE.1);
    }

    // Zoom with scroll - smooth zoom using target_distance
    if !egui_wants_pointer {
        for scroll in mouse_wheel.read() {
            let zoom_factor = 1.0 - scroll.y * settings.zoom_speed * 0.3;
            settings.target_distance = (settings.target_distance * zoom_factor)
                .clamp(DISTANCE_RANGE.0, DISTANCE_RANGE.1);
        }
    } else {
        // Drain the scroll events even if we're not using them
        for _ in mouse_wheel.read() {}
    }

    // Smooth interpolation for zoom
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance += (settings.target_distance - settings.distance) * lerp_factor;

    // Re-aim every frame: input moves the camera, never the target
    if let Ok(mut transform) = camera_query.single_mut() {
        transform.translation = orbit_translation(&settings);
        transform.look_at(settings.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_translation_at_zero_azimuth() {
        let settings = CameraSettings {
            distance: 10.0,
            azimuth: 0.0,
            elevation: 0.0,
            ..default()
        };
        let pos = orbit_translation(&settings);

        assert!((pos.x - settings.target.x).abs() < 1e-5);
        assert!((pos.y - settings.target.y).abs() < 1e-5);
        assert!((pos.z - (settings.target.z + 10.0)).abs() < 1e-5);
    }

    #[test]
    fn test_clamped_elevation_keeps_camera_above_target_plane() {
        for raw in [-2.0_f32, -0.1, 0.0, 0.5, 1.5, 3.0] {
            let settings = CameraSettings {
                elevation: raw.clamp(ELEVATION_RANGE.0, ELEVATION_RANGE.1),
                ..default()
            };
            let pos = orbit_translation(&settings);
            assert!(pos.y >= settings.target.y - 1e-5);
        }
    }

    #[test]
    fn test_default_matches_initial_view() {
        let settings = CameraSettings::default();
        let pos = orbit_translation(&settings);

        // The stock view: in front of the character, slightly above,
        // roughly ten and a half units out
        assert_eq!(settings.azimuth, 0.0);
        assert!(pos.z > 9.0);
        assert!(pos.y > settings.target.y);
    }
}
