//! Character part table - the fixed avatar geometry
//!
//! Part offsets are relative to the character group origin, which sits
//! at `CHARACTER_BASE` in world space. The table is constant: the
//! loadout only ever adds meshes on top of it.

/// One fixed body part of the avatar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub name: &'static str,
    /// Color as "#RRGGBB"
    pub color: &'static str,
    /// Position offset from the character group origin
    pub offset: [f32; 3],
    /// Box dimensions in world units
    pub size: [f32; 3],
}

/// World-space position of the character group origin
pub const CHARACTER_BASE: [f32; 3] = [0.0, 1.8, 0.0];

/// Turntable angular speed in radians per second
pub const TURNTABLE_SPEED: f32 = 0.2;

/// The always-present avatar parts, independent of the loadout
pub static BODY_PARTS: &[BodyPart] = &[
    BodyPart {
        name: "body",
        color: "#4C97EA",
        offset: [0.0, 0.0, 0.0],
        size: [0.8, 1.2, 0.4],
    },
    BodyPart {
        name: "head",
        color: "#FFC89D",
        offset: [0.0, 1.0, 0.0],
        size: [1.0, 1.0, 1.0],
    },
    BodyPart {
        name: "left_arm",
        color: "#4C97EA",
        offset: [-0.5, 0.0, 0.0],
        size: [0.4, 1.2, 0.4],
    },
    BodyPart {
        name: "right_arm",
        color: "#4C97EA",
        offset: [0.5, 0.0, 0.0],
        size: [0.4, 1.2, 0.4],
    },
    BodyPart {
        name: "left_leg",
        color: "#1D4999",
        offset: [-0.2, -1.2, 0.0],
        size: [0.4, 1.2, 0.4],
    },
    BodyPart {
        name: "right_leg",
        color: "#1D4999",
        offset: [0.2, -1.2, 0.0],
        size: [0.4, 1.2, 0.4],
    },
    BodyPart {
        name: "hair",
        color: "#4F3824",
        offset: [0.0, 1.5, 0.0],
        size: [1.02, 0.1, 1.02],
    },
    BodyPart {
        name: "left_eye",
        color: "#FFFFFF",
        offset: [-0.2, 1.15, 0.51],
        size: [0.2, 0.2, 0.01],
    },
    BodyPart {
        name: "right_eye",
        color: "#FFFFFF",
        offset: [0.2, 1.15, 0.51],
        size: [0.2, 0.2, 0.01],
    },
    BodyPart {
        name: "left_pupil",
        color: "#3A3A3A",
        offset: [-0.2, 1.15, 0.52],
        size: [0.1, 0.1, 0.01],
    },
    BodyPart {
        name: "right_pupil",
        color: "#3A3A3A",
        offset: [0.2, 1.15, 0.52],
        size: [0.1, 0.1, 0.01],
    },
    BodyPart {
        name: "mouth",
        color: "#3A3A3A",
        offset: [0.0, 0.8, 0.51],
        size: [0.3, 0.05, 0.01],
    },
];

/// Turntable yaw at `elapsed` seconds - a pure function of time, not an
/// accumulator, so the pose is fully determined by the clock
pub fn turntable_yaw(elapsed: f32, speed: f32) -> f32 {
    elapsed * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_hex_color;

    #[test]
    fn test_part_table_is_well_formed() {
        assert_eq!(BODY_PARTS.len(), 12);

        let mut names = std::collections::HashSet::new();
        for part in BODY_PARTS {
            assert!(names.insert(part.name), "duplicate part {}", part.name);
            assert!(parse_hex_color(part.color).is_some(), "bad color on {}", part.name);
            assert!(part.size.iter().all(|&d| d > 0.0));
        }
    }

    #[test]
    fn test_face_parts_sit_on_head_front() {
        for part in BODY_PARTS {
            if matches!(part.name, "left_eye" | "right_eye" | "left_pupil" | "right_pupil" | "mouth") {
                assert!(part.offset[2] > 0.5);
            }
        }
    }

    #[test]
    fn test_turntable_yaw_is_linear_in_time() {
        assert_eq!(turntable_yaw(0.0, TURNTABLE_SPEED), 0.0);
        assert_eq!(turntable_yaw(10.0, TURNTABLE_SPEED), 2.0);

        // Equal as an angle regardless of how many turns have elapsed
        let tau = std::f32::consts::TAU;
        let wrapped = turntable_yaw(10.0 + 5.0 * tau / TURNTABLE_SPEED, TURNTABLE_SPEED);
        assert!((wrapped.rem_euclid(tau) - 2.0).abs() < 1e-3);
    }
}
