//! Pose and rotation types

/// World-space position vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    /// X coordinate in world units
    pub x: f32,
    /// Y coordinate in world units
    pub y: f32,
    /// Z coordinate in world units
    pub z: f32,
}

impl Vector3 {
    /// Create a new vector
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Rotation quaternion with imaginary parts `i`, `j`, `k` and real part `r`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub i: f32,
    pub j: f32,
    pub k: f32,
    pub r: f32,
}

impl Quaternion {
    /// Create a new quaternion
    pub fn new(i: f32, j: f32, k: f32, r: f32) -> Self {
        Self { i, j, k, r }
    }

    /// No rotation
    pub fn identity() -> Self {
        Self {
            i: 0.0,
            j: 0.0,
            k: 0.0,
            r: 1.0,
        }
    }

    /// Rotation of `theta` radians about the vertical (k) axis
    pub fn from_yaw(theta: f32) -> Self {
        let half = theta / 2.0;
        Self {
            i: 0.0,
            j: 0.0,
            k: half.sin(),
            r: half.cos(),
        }
    }

    /// Euclidean norm of the four components
    pub fn norm(&self) -> f32 {
        (self.i * self.i + self.j * self.j + self.k * self.k + self.r * self.r).sqrt()
    }
}

/// An entity's position and rotation at an instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position
    pub position: Vector3,
    /// World-space orientation
    pub orientation: Quaternion,
}

impl Pose {
    /// Create a new pose
    pub fn new(position: Vector3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_unit() {
        let q = Quaternion::identity();
        assert_eq!(q.norm(), 1.0);
        assert_eq!(q.r, 1.0);
    }

    #[test]
    fn test_yaw_rotation_is_unit() {
        for step in 0..16 {
            let theta = step as f32 * std::f32::consts::TAU / 16.0;
            let q = Quaternion::from_yaw(theta);
            assert!((q.norm() - 1.0).abs() < 1e-6);
            assert_eq!(q.i, 0.0);
            assert_eq!(q.j, 0.0);
        }
    }

    #[test]
    fn test_zero_yaw_is_identity() {
        let q = Quaternion::from_yaw(0.0);
        assert_eq!(q.k, 0.0);
        assert_eq!(q.r, 1.0);
    }
}
