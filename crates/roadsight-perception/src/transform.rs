//! World-frame poses.
//!
//! A [`Transform`] is the pose of an entity in the shared world coordinate
//! frame: translation in metres plus a unit-quaternion rotation.  The
//! simulator reports poses as Euler angles in degrees
//! ([`SimTransform`][roadsight_sim::SimTransform]); [`Transform::from_sim`]
//! is the one conversion point between the two conventions.
//!
//! # Example
//!
//! ```rust
//! use roadsight_perception::transform::Transform;
//! use roadsight_sim::SimTransform;
//!
//! let sim = SimTransform { x: 1.0, y: 2.0, z: 0.5, pitch: 0.0, yaw: 90.0, roll: 0.0 };
//! let world = Transform::from_sim(&sim);
//! assert!((world.translation.x - 1.0).abs() < 1e-5);
//! ```

use roadsight_sim::SimTransform;

// ────────────────────────────────────────────────────────────────────────────
// Primitive types
// ────────────────────────────────────────────────────────────────────────────

/// A 3-D translation vector (metres).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, rhs: Self) -> f32 {
        let dx = self.x - rhs.x;
        let dy = self.y - rhs.y;
        let dz = self.z - rhs.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A unit quaternion representing a 3-D rotation (w, x, y, z convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    /// Create a quaternion.  The caller is responsible for providing a unit
    /// quaternion (|q| = 1).
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation (no rotation).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Build a rotation from intrinsic Z-Y-X Euler angles in radians
    /// (yaw around Z, then pitch around Y, then roll around X).
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();
        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Hamilton product: compose two rotations.
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }

    /// Conjugate (== inverse for a unit quaternion).
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotate a vector by this quaternion: p' = q * p * q*.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let p = Self::new(0.0, v.x, v.y, v.z);
        let rotated = self.mul(p).mul(self.conjugate());
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Transform
// ────────────────────────────────────────────────────────────────────────────

/// The pose of an entity in the world frame: translation then rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quaternion,
}

impl Transform {
    /// Create a transform from a translation and rotation.
    pub fn new(translation: Vec3, rotation: Quaternion) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// The identity transform (world origin, no rotation).
    pub fn identity() -> Self {
        Self::new(Vec3::zero(), Quaternion::identity())
    }

    /// Convert a simulator-native pose (degrees) into the world
    /// representation.  Pure; the simulator side is never mutated.
    pub fn from_sim(sim: &SimTransform) -> Self {
        Self::new(
            Vec3::new(sim.x, sim.y, sim.z),
            Quaternion::from_euler(
                sim.roll.to_radians(),
                sim.pitch.to_radians(),
                sim.yaw.to_radians(),
            ),
        )
    }

    /// Straight-line distance to another pose, in metres.
    pub fn distance_to(&self, other: &Transform) -> f32 {
        self.translation.distance(other.translation)
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transform(location: ({}, {}, {}), rotation: (w: {}, x: {}, y: {}, z: {}))",
            self.translation.x,
            self.translation.y,
            self.translation.z,
            self.rotation.w,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_1_SQRT_2;

    #[test]
    fn from_sim_keeps_location() {
        let sim = SimTransform::at(3.0, -1.0, 0.25);
        let t = Transform::from_sim(&sim);
        assert!((t.translation.x - 3.0).abs() < 1e-5);
        assert!((t.translation.y + 1.0).abs() < 1e-5);
        assert!((t.translation.z - 0.25).abs() < 1e-5);
        assert_eq!(t.rotation, Quaternion::identity());
    }

    #[test]
    fn from_sim_90deg_yaw_rotates_x_to_y() {
        let sim = SimTransform {
            yaw: 90.0,
            ..SimTransform::default()
        };
        let t = Transform::from_sim(&sim);
        // A pure 90° yaw is (cos45°, 0, 0, sin45°).
        assert!((t.rotation.w - FRAC_1_SQRT_2).abs() < 1e-5);
        assert!((t.rotation.z - FRAC_1_SQRT_2).abs() < 1e-5);
        let r = t.rotation.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert!(r.x.abs() < 1e-5, "x should be ~0, got {}", r.x);
        assert!((r.y - 1.0).abs() < 1e-5, "y should be ~1, got {}", r.y);
    }

    #[test]
    fn distance_between_poses() {
        let a = Transform::new(Vec3::new(0.0, 0.0, 0.0), Quaternion::identity());
        let b = Transform::new(Vec3::new(3.0, 4.0, 0.0), Quaternion::identity());
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-5);
    }
}
