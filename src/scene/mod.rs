//! 3D scene variant of the timeline: a damped camera rig travelling a
//! linear time axis, plus ray picking against interactive markers.

mod camera;
mod pick;

pub use camera::{CameraRig, CameraRigConfig};
pub use pick::{HoverChange, HoverTracker, Ray, SceneMarker, pick_nearest};

use crate::core::domain::MILLIS_PER_YEAR;

/// Linear years-to-world-units mapping for the 3D scene.
///
/// The 3D view has no adaptive tick granularity; points and year markers sit
/// on a straight axis where one year is a fixed number of world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis3d {
    origin_millis: f64,
    units_per_year: f32,
}

impl TimeAxis3d {
    #[must_use]
    pub fn new(origin_millis: f64, units_per_year: f32) -> Self {
        Self {
            origin_millis,
            units_per_year,
        }
    }

    #[must_use]
    pub fn time_to_world_x(self, time_millis: f64) -> f32 {
        let years = (time_millis - self.origin_millis) / MILLIS_PER_YEAR;
        years as f32 * self.units_per_year
    }

    #[must_use]
    pub fn world_x_to_time(self, world_x: f32) -> f64 {
        self.origin_millis + f64::from(world_x / self.units_per_year) * MILLIS_PER_YEAR
    }
}
