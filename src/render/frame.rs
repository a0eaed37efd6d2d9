use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{MarkerPrimitive, TickPrimitive};

/// Backend-agnostic scene for one timeline draw pass.
///
/// Positions are view-space pixels computed from one consistent snapshot of
/// pan, scale and viewport; the frame carries no domain state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub markers: Vec<MarkerPrimitive>,
    pub ticks: Vec<TickPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            markers: Vec::new(),
            ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: TickPrimitive) -> Self {
        self.ticks.push(tick);
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for marker in &self.markers {
            marker.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.ticks.is_empty()
    }
}
