use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// A cluster marker to draw on the timeline midline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub member_count: usize,
    /// Ids of the clustered entities, for tooltips and debugging overlays.
    pub member_ids: Vec<String>,
}

impl MarkerPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "marker position must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if self.member_count == 0 {
            return Err(TimelineError::InvalidData(
                "marker must represent at least one member".to_owned(),
            ));
        }
        Ok(())
    }
}

/// A labeled axis tick to draw below the midline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPrimitive {
    pub x: f64,
    pub label: String,
}

impl TickPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.x.is_finite() {
            return Err(TimelineError::InvalidData(
                "tick position must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
