//! Pose providers
//!
//! The beacon does not own a scene graph. Hosts expose their tracked
//! entity through [`PoseProvider`], and the beacon queries it once per
//! frame. [`OrbitPoseProvider`] is the hardware-free stand-in used by
//! the fake source binary and the tests.

use crate::error::Result;
use crate::types::{Pose, Quaternion, Vector3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Source of the tracked entity's current pose
pub trait PoseProvider {
    /// Resolve the entity's world pose for this frame.
    ///
    /// An `Err` means the entity cannot be resolved right now (loading
    /// screen, despawned, menu). Callers treat that as a skipped frame,
    /// not a fault.
    fn current_pose(&mut self) -> Result<Pose>;
}

/// Synthetic provider tracing a circle on the ground plane
///
/// Advances one angular step per query and faces along the direction of
/// travel, so a map client shows a smooth loop with a plausible heading.
pub struct OrbitPoseProvider {
    center: Vector3,
    radius: f32,
    angular_step: f32,
    angle: f32,
    jitter: f32,
    rng: SmallRng,
}

impl OrbitPoseProvider {
    /// Create a provider orbiting `center` at `radius` world units,
    /// advancing `angular_step` radians per query.
    ///
    /// If `seed` is 0, uses random entropy for non-deterministic
    /// behavior. Otherwise, uses the provided seed for reproducible
    /// paths.
    pub fn new(center: Vector3, radius: f32, angular_step: f32, seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self {
            center,
            radius,
            angular_step,
            angle: 0.0,
            jitter: 0.0,
            rng,
        }
    }

    /// Add Gaussian position jitter with the given standard deviation,
    /// in world units
    pub fn with_jitter(mut self, stddev: f32) -> Self {
        self.jitter = stddev;
        self
    }

    fn gaussian(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f32 = self.rng.sample(StandardNormal);
        n * stddev
    }
}

impl PoseProvider for OrbitPoseProvider {
    fn current_pose(&mut self) -> Result<Pose> {
        let jitter = self.jitter;
        let position = Vector3::new(
            self.center.x + self.radius * self.angle.cos() + self.gaussian(jitter),
            self.center.y + self.radius * self.angle.sin() + self.gaussian(jitter),
            self.center.z + self.gaussian(jitter),
        );
        // Tangent to the circle, counter-clockwise travel.
        let heading = self.angle + FRAC_PI_2;

        self.angle = (self.angle + self.angular_step).rem_euclid(TAU);

        Ok(Pose::new(position, Quaternion::from_yaw(heading)))
    }
}
