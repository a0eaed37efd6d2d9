use serde::{Deserialize, Serialize};

use crate::core::mapper::CoordinateMapper;
use crate::core::types::ViewTransform;
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanMode {
    Idle,
    Dragging,
}

/// Tuning for wheel zoom and scale clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportControllerConfig {
    pub scale_min: f64,
    pub scale_max: f64,
    /// Fractional scale change per wheel tick: 0.1 means x1.1 in, x0.9 out.
    pub zoom_step_ratio: f64,
}

impl Default for ViewportControllerConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.1,
            scale_max: 200.0,
            zoom_step_ratio: 0.1,
        }
    }
}

impl ViewportControllerConfig {
    fn validate(self) -> TimelineResult<Self> {
        if !self.scale_min.is_finite() || self.scale_min <= 0.0 {
            return Err(TimelineError::InvalidData(
                "scale_min must be finite and > 0".to_owned(),
            ));
        }
        if !self.scale_max.is_finite() || self.scale_max < self.scale_min {
            return Err(TimelineError::InvalidData(
                "scale_max must be finite and >= scale_min".to_owned(),
            ));
        }
        if !self.zoom_step_ratio.is_finite()
            || self.zoom_step_ratio <= 0.0
            || self.zoom_step_ratio >= 1.0
        {
            return Err(TimelineError::InvalidData(
                "zoom_step_ratio must be in (0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start_pointer_x: f64,
    pan_at_start: f64,
}

/// Owns the 2D view transform and interprets raw input events.
///
/// This is the only mutable state in the pipeline; every other component
/// reads the transform as a snapshot for one render pass. Event handlers
/// complete their read-modify-write within the call, so the anchor solve in
/// [`Self::on_wheel`] never observes a stale pan value.
///
/// `start`/`stop` bracket the mounted lifetime of the view: events arriving
/// while stopped are ignored, and both calls are idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    config: ViewportControllerConfig,
    transform: ViewTransform,
    drag: Option<DragSession>,
    started: bool,
}

impl ViewportController {
    pub fn new(config: ViewportControllerConfig) -> TimelineResult<Self> {
        Ok(Self {
            config: config.validate()?,
            transform: ViewTransform::default(),
            drag: None,
            started: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> ViewportControllerConfig {
        self.config
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn mode(&self) -> PanMode {
        if self.drag.is_some() {
            PanMode::Dragging
        } else {
            PanMode::Idle
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    /// Detaches the controller from input; safe to call repeatedly.
    pub fn stop(&mut self) {
        self.started = false;
        self.drag = None;
    }

    /// Applies one wheel tick zooming about the pointer.
    ///
    /// The time under `pointer_x` is read with the pre-zoom transform, the
    /// scale is stepped and clamped, then the pan offset is solved in closed
    /// form so that same time stays under the same pixel. Repeated steps at
    /// one pointer position therefore never drift.
    pub fn on_wheel(&mut self, delta: f64, pointer_x: f64, mapper: &CoordinateMapper) {
        if !self.started || !delta.is_finite() || delta == 0.0 || !pointer_x.is_finite() {
            return;
        }

        let factor = if delta < 0.0 {
            1.0 + self.zoom_step_ratio()
        } else {
            1.0 - self.zoom_step_ratio()
        };
        let new_scale = (self.transform.scale * factor)
            .clamp(self.config.scale_min, self.config.scale_max);
        if new_scale == self.transform.scale {
            return;
        }

        let anchor_time = mapper.position_to_time(pointer_x, self.transform);
        self.transform.scale = new_scale;
        self.transform.pan_offset =
            mapper.pan_for_time_at_position(anchor_time, pointer_x, new_scale);
    }

    /// Begins an exclusive drag session; a second pointer-down while
    /// dragging is ignored.
    pub fn on_pointer_down(&mut self, pointer_x: f64) {
        if !self.started || self.drag.is_some() || !pointer_x.is_finite() {
            return;
        }
        self.drag = Some(DragSession {
            start_pointer_x: pointer_x,
            pan_at_start: self.transform.pan_offset,
        });
    }

    /// Pans while a drag session is live; a no-op otherwise.
    pub fn on_pointer_move(&mut self, pointer_x: f64) {
        if !self.started || !pointer_x.is_finite() {
            return;
        }
        if let Some(drag) = self.drag {
            self.transform.pan_offset = drag.pan_at_start + (pointer_x - drag.start_pointer_x);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    /// Restores the identity view: scale 1, pan 0.
    pub fn reset(&mut self) {
        self.transform = ViewTransform::default();
    }

    fn zoom_step_ratio(&self) -> f64 {
        self.config.zoom_step_ratio
    }
}
