use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::temporal::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Vertical midline used as the baseline the timeline is drawn along.
    #[must_use]
    pub fn midline_y(self) -> f64 {
        f64::from(self.height) / 2.0
    }
}

/// Pan/zoom state for the 2D timeline view.
///
/// `pan_offset` is an additive screen-space offset in pixels and is
/// deliberately unconstrained: panning far outside the data extent is a
/// supported interaction. `scale` is a multiplicative zoom factor and is
/// kept within configured bounds by the viewport controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub pan_offset: f64,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan_offset: 0.0,
            scale: 1.0,
        }
    }
}

/// A timestamp-resolved entity placed on the timeline.
///
/// Points are derived fresh from submissions on every data change and are
/// immutable for the duration of a render pass. The originating submission
/// is carried verbatim so hit-test results can hand it back to the host
/// application for detail rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    pub id: String,
    pub timestamp_millis: i64,
    pub title: String,
    pub description: String,
    pub source: Arc<Submission>,
}

impl TimelinePoint {
    #[must_use]
    pub fn new(timestamp_millis: i64, source: Arc<Submission>) -> Self {
        Self {
            id: source.id.clone(),
            timestamp_millis,
            title: source.title.clone(),
            description: source.description.clone(),
            source,
        }
    }
}
