//! timeline-rs: headless timeline coordinate-mapping and clustering engine.
//!
//! The crate turns loosely-typed content entities into timestamped points,
//! fits a padded time domain, maps times to view-space under pan/zoom,
//! selects adaptive tick granularity, clusters nearby points, and resolves
//! pointer/ray interactions back to the originating entities. All output is
//! numeric layout data; drawing lives behind the [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
