//! Quaternion math for bond strand orientation
//!
//! Provides the rotation that maps the canonical +Y cylinder axis onto a
//! bond direction, and application of that rotation to vectors.

use lin_alg::f32::Vec3;

/// A unit quaternion representing a rotation.
///
/// Stored as (w, x, y, z) where w is the scalar part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    /// Create a new quaternion
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation)
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotation that maps the unit vector `from` onto the unit vector `to`.
    ///
    /// Both inputs must be normalized. The antiparallel case (dot ≈ -1) has
    /// no unique axis; an arbitrary perpendicular to `from` is used.
    pub fn from_unit_vectors(from: Vec3, to: Vec3) -> Self {
        let d = from.dot(to);

        if d >= 1.0 - 1e-6 {
            return Self::identity();
        }

        if d <= -1.0 + 1e-6 {
            // 180 degrees about any axis perpendicular to `from`
            let mut axis = Vec3::new(1.0, 0.0, 0.0).cross(from);
            if axis.magnitude_squared() < 1e-6 {
                axis = Vec3::new(0.0, 1.0, 0.0).cross(from);
            }
            let axis = axis.to_normalized();
            return Self::new(0.0, axis.x, axis.y, axis.z).normalized();
        }

        let axis = from.cross(to);
        Self::new(1.0 + d, axis.x, axis.y, axis.z).normalized()
    }

    /// Normalize to unit length
    pub fn normalized(&self) -> Self {
        let len = (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        Self {
            w: self.w / len,
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    /// Rotate a vector by this quaternion.
    ///
    /// Uses the expanded form v' = v + 2w(q × v) + 2(q × (q × v)).
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v) * 2.0;
        v + t * self.w + q.cross(t)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}
