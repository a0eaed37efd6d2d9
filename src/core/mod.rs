pub mod cluster;
pub mod domain;
pub mod hit;
pub mod lod;
pub mod mapper;
pub mod temporal;
pub mod types;

pub use cluster::{Cluster, DEFAULT_BUCKET_WIDTH_PX, HIT_TOLERANCE_PX, cluster_points};
pub use domain::TimeDomain;
pub use hit::hit_test_clusters;
pub use lod::{Tick, TickSpec, TickUnit, select_tick_spec};
pub use mapper::CoordinateMapper;
pub use temporal::{
    ContentRecord, ResolvedTimestamp, Submission, points_from_submissions, resolve_timestamp,
};
pub use types::{TimelinePoint, ViewTransform, Viewport};
