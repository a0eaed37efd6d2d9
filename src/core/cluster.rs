use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::types::TimelinePoint;

/// Default view-space bucket width used to group nearby points.
pub const DEFAULT_BUCKET_WIDTH_PX: f64 = 12.0;

/// Extra pixels of slack accepted around a cluster during hit testing.
pub const HIT_TOLERANCE_PX: f64 = 4.0;

const MIN_DIAMETER_PX: f64 = 10.0;
const MAX_DIAMETER_PX: f64 = 28.0;
const DIAMETER_PER_MEMBER_PX: f64 = 2.0;

/// A group of points sharing one view-space bucket.
///
/// The display position is the x of the first point mapped into the bucket,
/// not a centroid, so the marker stays put as later arrivals join the
/// cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub view_position: f64,
    pub members: SmallVec<[TimelinePoint; 4]>,
}

impl Cluster {
    /// Marker radius in pixels, grown with membership up to a cap.
    #[must_use]
    pub fn radius_px(&self) -> f64 {
        let diameter = MIN_DIAMETER_PX + DIAMETER_PER_MEMBER_PX * self.members.len() as f64;
        diameter.min(MAX_DIAMETER_PX) / 2.0
    }

    /// Radius used for pointer hit testing.
    #[must_use]
    pub fn hit_radius_px(&self) -> f64 {
        self.radius_px() + HIT_TOLERANCE_PX
    }
}

/// Groups positioned points into clusters by fixed-width view-space buckets.
///
/// Bucket index is `round(x / bucket_width_px)`. Every input point lands in
/// exactly one cluster, and cluster order follows first-arrival order of
/// their buckets; downstream hit testing relies on that order being stable.
/// Clusters are rebuilt from scratch every pass, never patched.
#[must_use]
pub fn cluster_points(
    positioned: &[(TimelinePoint, f64)],
    bucket_width_px: f64,
) -> Vec<Cluster> {
    debug_assert!(
        bucket_width_px.is_finite() && bucket_width_px > 0.0,
        "bucket width must be finite and positive, got {bucket_width_px}"
    );

    let mut buckets: IndexMap<i64, Cluster> = IndexMap::new();
    for (point, x) in positioned {
        if !x.is_finite() {
            continue;
        }
        let index = (x / bucket_width_px).round() as i64;
        buckets
            .entry(index)
            .or_insert_with(|| Cluster {
                view_position: *x,
                members: SmallVec::new(),
            })
            .members
            .push(point.clone());
    }

    buckets.into_values().collect()
}
