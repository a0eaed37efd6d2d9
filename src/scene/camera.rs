use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Tuning for the damped camera approach and time-travel stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRigConfig {
    /// Fraction of the remaining distance covered per animation frame.
    pub damping: f32,
    /// World-units moved along the time axis per key press.
    pub travel_step: f32,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            damping: 0.08,
            travel_step: 10.0,
        }
    }
}

impl CameraRigConfig {
    fn validate(self) -> TimelineResult<Self> {
        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(TimelineError::InvalidData(
                "camera damping must be in (0, 1]".to_owned(),
            ));
        }
        if !self.travel_step.is_finite() || self.travel_step <= 0.0 {
            return Err(TimelineError::InvalidData(
                "camera travel step must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Camera state for the 3D scene timeline.
///
/// Key input moves only the target; the rendered position converges on it by
/// exponential approach each frame and never snaps. The approach is
/// asymptotic by design: the rig keeps stepping for as long as the view is
/// mounted and simply settles once the residual is subpixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    config: CameraRigConfig,
    initial_position: Vec3,
    position: Vec3,
    target: Vec3,
}

impl CameraRig {
    pub fn new(initial_position: Vec3, config: CameraRigConfig) -> TimelineResult<Self> {
        if !initial_position.is_finite() {
            return Err(TimelineError::InvalidData(
                "camera position must be finite".to_owned(),
            ));
        }
        Ok(Self {
            config: config.validate()?,
            initial_position,
            position: initial_position,
            target: initial_position,
        })
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Steps the travel target along the time axis by whole key presses.
    ///
    /// Positive steps travel toward later times, negative toward earlier.
    pub fn travel(&mut self, steps: i32) {
        self.target.x += self.config.travel_step * steps as f32;
    }

    /// Advances one animation frame of the exponential approach.
    pub fn step_frame(&mut self) {
        self.position += (self.target - self.position) * self.config.damping;
    }

    /// Whether the position has converged onto the target within `epsilon`.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.position).length() <= epsilon
    }

    /// Returns the camera to its mount-time pose and cancels pending travel.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.target = self.initial_position;
    }
}
