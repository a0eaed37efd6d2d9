use crate::core::cluster::Cluster;

/// Returns the first cluster whose tolerance circle contains the pointer.
///
/// Clusters sit on a fixed midline, so the test is a squared-distance check
/// against `(cluster.view_position, midline_y)`. Iteration follows cluster
/// order and the first geometric match wins rather than the closest; callers
/// wanting nearest-match semantics can scan the cluster list themselves.
/// An empty cluster set is a plain "no hit".
#[must_use]
pub fn hit_test_clusters<'a>(
    clusters: &'a [Cluster],
    pointer_x: f64,
    pointer_y: f64,
    midline_y: f64,
) -> Option<&'a Cluster> {
    if !pointer_x.is_finite() || !pointer_y.is_finite() {
        return None;
    }

    clusters.iter().find(|cluster| {
        let dx = pointer_x - cluster.view_position;
        let dy = pointer_y - midline_y;
        let radius = cluster.hit_radius_px();
        dx * dx + dy * dy <= radius * radius
    })
}
