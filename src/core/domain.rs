use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::types::TimelinePoint;

pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;
pub(crate) const MILLIS_PER_YEAR: f64 = 365.0 * MILLIS_PER_DAY;

/// Fraction of the raw span added as padding on each side.
const PADDING_RATIO: f64 = 0.10;
/// Floor that keeps a single-timestamp domain from collapsing to zero width.
const MIN_PADDING_MILLIS: f64 = 1.0;

/// The min/max time range the timeline considers "in view" for fitting.
///
/// Bounds are epoch milliseconds, fractional after padding. The invariant
/// `min < max` holds for every constructor, including the zero-point and
/// single-timestamp fallbacks, so downstream span divisions are always safe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    min: f64,
    max: f64,
}

impl TimeDomain {
    /// Fits a padded domain from resolved points, using the current time for
    /// the empty-set fallback.
    #[must_use]
    pub fn from_points(points: &[TimelinePoint]) -> Self {
        Self::from_points_at(points, Utc::now().timestamp_millis())
    }

    /// Fits a padded domain from resolved points around an explicit "now".
    ///
    /// Zero points yield a default domain of `now` ± 1 year so an empty
    /// timeline still renders a navigable range.
    #[must_use]
    pub fn from_points_at(points: &[TimelinePoint], now_millis: i64) -> Self {
        let Some(first) = points.first() else {
            let now = now_millis as f64;
            return Self {
                min: now - MILLIS_PER_YEAR,
                max: now + MILLIS_PER_YEAR,
            };
        };

        let mut min = first.timestamp_millis;
        let mut max = first.timestamp_millis;
        for point in &points[1..] {
            min = min.min(point.timestamp_millis);
            max = max.max(point.timestamp_millis);
        }

        let span = (max - min) as f64;
        let padding = (span * PADDING_RATIO).max(MIN_PADDING_MILLIS);
        let fitted = Self {
            min: min as f64 - padding,
            max: max as f64 + padding,
        };
        tracing::trace!(min = fitted.min, max = fitted.max, points = points.len(), "fitted time domain");
        fitted
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn contains(self, time_millis: f64) -> bool {
        time_millis >= self.min && time_millis <= self.max
    }
}
