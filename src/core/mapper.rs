use crate::core::domain::TimeDomain;
use crate::core::types::{ViewTransform, Viewport};
use crate::error::{TimelineError, TimelineResult};

/// Bidirectional transform between domain time and view-space position.
///
/// The base density `base_millis_per_pixel` is fixed once per domain as
/// `span / target_base_pixel_width`, so scale 1 fits the whole domain into a
/// constant pixel width regardless of the actual window size. Zoom is then a
/// pure multiplicative factor on density and pan a pure additive screen
/// offset, which is what makes anchor-preserving zoom a closed-form pan
/// adjustment rather than a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    domain: TimeDomain,
    base_millis_per_pixel: f64,
    viewport_width: f64,
}

impl CoordinateMapper {
    pub fn new(
        domain: TimeDomain,
        viewport: Viewport,
        target_base_pixel_width: f64,
    ) -> TimelineResult<Self> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !target_base_pixel_width.is_finite() || target_base_pixel_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "target base pixel width must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            base_millis_per_pixel: domain.span() / target_base_pixel_width,
            viewport_width: f64::from(viewport.width),
        })
    }

    #[must_use]
    pub fn domain(self) -> TimeDomain {
        self.domain
    }

    /// Time density at the given zoom scale, in milliseconds per pixel.
    #[must_use]
    pub fn millis_per_pixel(self, scale: f64) -> f64 {
        debug_assert!(scale > 0.0, "scale must be positive, got {scale}");
        self.base_millis_per_pixel / scale
    }

    /// Maps a domain time to a view-space x position.
    ///
    /// The domain midpoint sits at the viewport's horizontal center at
    /// `pan_offset == 0`. Out-of-domain times map off-screen without error.
    #[must_use]
    pub fn time_to_position(self, time_millis: f64, transform: ViewTransform) -> f64 {
        let center = self.viewport_width / 2.0;
        let offset = (time_millis - self.domain.midpoint()) / self.millis_per_pixel(transform.scale);
        center + offset + transform.pan_offset
    }

    /// Exact algebraic inverse of [`Self::time_to_position`].
    #[must_use]
    pub fn position_to_time(self, x: f64, transform: ViewTransform) -> f64 {
        let center = self.viewport_width / 2.0;
        let offset = x - center - transform.pan_offset;
        self.domain.midpoint() + offset * self.millis_per_pixel(transform.scale)
    }

    /// Solves the pan offset that places `time_millis` at view position `x`
    /// under the given scale.
    ///
    /// Used by the viewport controller to keep the time under the pointer
    /// fixed across a zoom step.
    #[must_use]
    pub fn pan_for_time_at_position(self, time_millis: f64, x: f64, scale: f64) -> f64 {
        let center = self.viewport_width / 2.0;
        x - center - (time_millis - self.domain.midpoint()) / self.millis_per_pixel(scale)
    }
}
