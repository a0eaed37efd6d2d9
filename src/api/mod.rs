use std::sync::Arc;

use crate::core::{
    Cluster, CoordinateMapper, DEFAULT_BUCKET_WIDTH_PX, Submission, Tick, TickSpec, TimeDomain,
    TimelinePoint, ViewTransform, Viewport, cluster_points, hit_test_clusters,
    points_from_submissions, select_tick_spec,
};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{PanMode, ViewportController, ViewportControllerConfig};
use crate::render::{MarkerPrimitive, RenderFrame, Renderer, TickPrimitive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    pub bucket_width_px: f64,
    pub target_base_pixel_width: f64,
    pub controller: ViewportControllerConfig,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bucket_width_px: DEFAULT_BUCKET_WIDTH_PX,
            target_base_pixel_width: 1200.0,
            controller: ViewportControllerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_bucket_width(mut self, bucket_width_px: f64) -> Self {
        self.bucket_width_px = bucket_width_px;
        self
    }

    #[must_use]
    pub fn with_target_base_pixel_width(mut self, width_px: f64) -> Self {
        self.target_base_pixel_width = width_px;
        self
    }

    #[must_use]
    pub fn with_scale_bounds(mut self, scale_min: f64, scale_max: f64) -> Self {
        self.controller.scale_min = scale_min;
        self.controller.scale_max = scale_max;
        self
    }

    #[must_use]
    pub fn with_zoom_step_ratio(mut self, ratio: f64) -> Self {
        self.controller.zoom_step_ratio = ratio;
        self
    }

    fn validate(self) -> TimelineResult<Self> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.bucket_width_px.is_finite() || self.bucket_width_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "bucket width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Numeric layout for one render pass, computed from a single consistent
/// snapshot of pan, scale and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub transform: ViewTransform,
    pub millis_per_pixel: f64,
    pub tick_spec: TickSpec,
    pub ticks: Vec<Tick>,
    pub clusters: Vec<Cluster>,
}

/// Facade tying extraction, domain fitting, mapping, clustering and
/// interaction together for one mounted timeline view.
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    config: TimelineEngineConfig,
    points: Vec<TimelinePoint>,
    domain: TimeDomain,
    mapper: CoordinateMapper,
    controller: ViewportController,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let domain = TimeDomain::from_points(&[]);
        let mapper =
            CoordinateMapper::new(domain, config.viewport, config.target_base_pixel_width)?;
        let controller = ViewportController::new(config.controller)?;

        Ok(Self {
            renderer,
            config,
            points: Vec::new(),
            domain,
            mapper,
            controller,
        })
    }

    /// Attaches input handling; part of the view's mount lifecycle.
    pub fn start(&mut self) {
        self.controller.start();
    }

    /// Detaches input handling; idempotent, part of unmount.
    pub fn stop(&mut self) {
        self.controller.stop();
    }

    /// Replaces the data set from raw submissions and refits the domain.
    ///
    /// Submissions without a resolvable timestamp are excluded, not errors.
    pub fn set_submissions(&mut self, submissions: Vec<Submission>) -> TimelineResult<()> {
        self.set_points(points_from_submissions(submissions))
    }

    /// Replaces the point set and refits domain and mapper from scratch.
    pub fn set_points(&mut self, points: Vec<TimelinePoint>) -> TimelineResult<()> {
        self.points = points;
        self.domain = TimeDomain::from_points(&self.points);
        self.rebuild_mapper()
    }

    /// Applies a new viewport size; triggers a full mapper rebuild so the
    /// next layout pass sees a consistent width.
    pub fn resize(&mut self, viewport: Viewport) -> TimelineResult<()> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        self.rebuild_mapper()
    }

    fn rebuild_mapper(&mut self) -> TimelineResult<()> {
        self.mapper = CoordinateMapper::new(
            self.domain,
            self.config.viewport,
            self.config.target_base_pixel_width,
        )?;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn domain(&self) -> TimeDomain {
        self.domain
    }

    #[must_use]
    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.controller.transform()
    }

    #[must_use]
    pub fn pan_mode(&self) -> PanMode {
        self.controller.mode()
    }

    /// The coordinate contract other layers may call directly.
    #[must_use]
    pub fn time_to_position(&self, time_millis: f64) -> f64 {
        self.mapper.time_to_position(time_millis, self.controller.transform())
    }

    #[must_use]
    pub fn position_to_time(&self, x: f64) -> f64 {
        self.mapper.position_to_time(x, self.controller.transform())
    }

    pub fn wheel_zoom(&mut self, delta: f64, pointer_x: f64) {
        self.controller.on_wheel(delta, pointer_x, &self.mapper);
    }

    pub fn pointer_down(&mut self, pointer_x: f64) {
        self.controller.on_pointer_down(pointer_x);
    }

    pub fn pointer_move(&mut self, pointer_x: f64) {
        self.controller.on_pointer_move(pointer_x);
    }

    pub fn pointer_up(&mut self) {
        self.controller.on_pointer_up();
    }

    pub fn reset_view(&mut self) {
        self.controller.reset();
    }

    /// Computes the full numeric layout for the current frame.
    ///
    /// Domain, mapper parameters and clustering are derived in order from
    /// one snapshot of the transform and viewport; nothing here re-reads
    /// live state mid-pass.
    #[must_use]
    pub fn layout(&self) -> TimelineLayout {
        let transform = self.controller.transform();
        let millis_per_pixel = self.mapper.millis_per_pixel(transform.scale);
        let tick_spec = select_tick_spec(millis_per_pixel);

        let visible_start = self.mapper.position_to_time(0.0, transform);
        let visible_end = self
            .mapper
            .position_to_time(f64::from(self.config.viewport.width), transform);
        let ticks = tick_spec.ticks_between(visible_start, visible_end);

        let positioned: Vec<(TimelinePoint, f64)> = self
            .points
            .iter()
            .map(|point| {
                let x = self
                    .mapper
                    .time_to_position(point.timestamp_millis as f64, transform);
                (point.clone(), x)
            })
            .collect();
        let clusters = cluster_points(&positioned, self.config.bucket_width_px);

        TimelineLayout {
            transform,
            millis_per_pixel,
            tick_spec,
            ticks,
            clusters,
        }
    }

    /// Resolves a pointer position to the hit cluster's source entities.
    ///
    /// Entities are handed back verbatim for the host to open a detail
    /// view; an empty timeline or a miss is a plain `None`.
    #[must_use]
    pub fn hit_test(&self, pointer_x: f64, pointer_y: f64) -> Option<Vec<Arc<Submission>>> {
        let layout = self.layout();
        let midline_y = self.config.viewport.midline_y();
        hit_test_clusters(&layout.clusters, pointer_x, pointer_y, midline_y).map(|cluster| {
            cluster
                .members
                .iter()
                .map(|point| Arc::clone(&point.source))
                .collect()
        })
    }

    /// Materializes and submits one draw pass to the renderer.
    ///
    /// Markers and ticks outside the viewport (with marker-radius slack)
    /// are clipped here rather than handed to the backend.
    pub fn render(&mut self) -> TimelineResult<()> {
        let layout = self.layout();
        let width = f64::from(self.config.viewport.width);
        let midline_y = self.config.viewport.midline_y();

        let mut frame = RenderFrame::new(self.config.viewport);
        for cluster in &layout.clusters {
            let radius = cluster.radius_px();
            if cluster.view_position < -radius || cluster.view_position > width + radius {
                continue;
            }
            frame = frame.with_marker(MarkerPrimitive {
                x: cluster.view_position,
                y: midline_y,
                radius,
                member_count: cluster.members.len(),
                member_ids: cluster.members.iter().map(|point| point.id.clone()).collect(),
            });
        }
        for tick in &layout.ticks {
            let x = self.mapper.time_to_position(tick.time_millis, layout.transform);
            if x < 0.0 || x > width {
                continue;
            }
            frame = frame.with_tick(TickPrimitive {
                x,
                label: tick.label.clone(),
            });
        }

        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
