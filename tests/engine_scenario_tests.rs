use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{ContentRecord, Submission, Viewport};
use timeline_rs::render::NullRenderer;

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};

const MILLIS_PER_YEAR: f64 = 365.0 * 86_400_000.0;

fn submission(id: &str, timeframe: &str) -> Submission {
    Submission {
        id: id.to_owned(),
        title: format!("prophecy {id}"),
        description: String::new(),
        created_at: None,
        records: vec![ContentRecord::new("timeframe", timeframe)],
    }
}

fn engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.start();
    engine
}

#[test]
fn mixed_year_and_date_payloads_fit_a_padded_domain() {
    let mut engine = engine();
    engine
        .set_submissions(vec![
            submission("a", "2024"),
            submission("b", "2025-06-15"),
            submission("c", "2026"),
        ])
        .expect("set submissions");

    assert_eq!(engine.points().len(), 3);

    let jan_2024 = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis() as f64;
    let jan_2026 = Utc
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis() as f64;

    let domain = engine.domain();
    assert!(domain.min() < jan_2024);
    assert!(domain.max() > jan_2026);
}

#[test]
fn empty_timeline_still_spans_two_navigable_years() {
    let mut engine = engine();
    engine.set_submissions(Vec::new()).expect("set submissions");

    assert!(engine.points().is_empty());
    assert_relative_eq!(engine.domain().span(), 2.0 * MILLIS_PER_YEAR, max_relative = 1e-9);

    // The empty timeline still lays out and renders.
    let layout = engine.layout();
    assert!(layout.clusters.is_empty());
    assert!(!layout.ticks.is_empty());
    engine.render().expect("render");
}

#[test]
fn adjacent_points_cluster_and_distant_points_stay_isolated() {
    let mut engine = engine();
    // With the default 1200 px base width the padded domain spans
    // 1_200_000 ms, so one pixel is 1_000 ms at scale 1.
    engine
        .set_submissions(vec![
            submission("a", "1970-01-01T00:00:00Z"),
            submission("b", "1970-01-01T00:00:01Z"),
            submission("c", "1970-01-01T00:16:40Z"),
        ])
        .expect("set submissions");

    let layout = engine.layout();
    assert_eq!(layout.clusters.len(), 2);

    let sizes: Vec<usize> = layout
        .clusters
        .iter()
        .map(|cluster| cluster.members.len())
        .collect();
    assert!(sizes.contains(&2));
    assert!(sizes.contains(&1));

    let lone = layout
        .clusters
        .iter()
        .find(|cluster| cluster.members.len() == 1)
        .expect("isolated cluster");
    assert_eq!(lone.members[0].id, "c");
}

#[test]
fn five_zoom_steps_at_one_pixel_preserve_the_time_under_it() {
    let mut engine = engine();
    engine
        .set_submissions(vec![submission("a", "2024"), submission("b", "2026")])
        .expect("set submissions");

    let pointer_x = 420.0;
    let before = engine.position_to_time(pointer_x);

    for _ in 0..5 {
        engine.wheel_zoom(-120.0, pointer_x);
    }

    let after = engine.position_to_time(pointer_x);
    assert_relative_eq!(after, before, max_relative = 1e-9);
    assert_relative_eq!(engine.transform().scale, 1.1_f64.powi(5), max_relative = 1e-12);
}

#[test]
fn hit_test_returns_the_source_entities_verbatim() {
    let mut engine = engine();
    engine
        .set_submissions(vec![
            submission("a", "1970-01-01T00:00:00Z"),
            submission("b", "1970-01-01T00:00:01Z"),
            submission("c", "1970-01-01T00:16:40Z"),
        ])
        .expect("set submissions");

    let layout = engine.layout();
    let pair = layout
        .clusters
        .iter()
        .find(|cluster| cluster.members.len() == 2)
        .expect("paired cluster");

    let midline_y = 250.0;
    let hits = engine
        .hit_test(pair.view_position, midline_y)
        .expect("hit");
    let ids: Vec<&str> = hits.iter().map(|entity| entity.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(hits[0].records[0].payload, "1970-01-01T00:00:00Z");
}

#[test]
fn missing_the_midline_entirely_hits_nothing() {
    let mut engine = engine();
    engine
        .set_submissions(vec![submission("a", "2024")])
        .expect("set submissions");

    assert!(engine.hit_test(500.0, 10.0).is_none());
}

#[test]
fn render_submits_clipped_markers_and_ticks() {
    let mut engine = engine();
    engine
        .set_submissions(vec![
            submission("a", "2024"),
            submission("b", "2025-06-15"),
            submission("c", "2026"),
        ])
        .expect("set submissions");

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert!(renderer.last_marker_count >= 1);
    assert!(renderer.last_tick_count >= 1);
}

#[test]
fn unresolvable_submissions_never_fail_the_pipeline() {
    let mut engine = engine();
    let mut opaque = submission("x", "whenever the stars align");
    opaque.title = "untitled".to_owned();

    engine
        .set_submissions(vec![opaque, submission("a", "2024")])
        .expect("set submissions");

    assert_eq!(engine.points().len(), 1);
    engine.render().expect("render");
}

#[test]
fn resize_triggers_a_consistent_refit() {
    let mut engine = engine();
    engine
        .set_submissions(vec![submission("a", "2024"), submission("b", "2026")])
        .expect("set submissions");

    engine.resize(Viewport::new(1600, 900)).expect("resize");

    let t = engine.domain().midpoint();
    assert_relative_eq!(engine.time_to_position(t), 800.0);

    let back = engine.position_to_time(engine.time_to_position(123_456_789.0));
    assert_relative_eq!(back, 123_456_789.0, max_relative = 1e-9);
}

#[test]
fn reset_view_restores_the_initial_framing() {
    let mut engine = engine();
    engine
        .set_submissions(vec![submission("a", "2024"), submission("b", "2026")])
        .expect("set submissions");

    let home = engine.position_to_time(500.0);
    engine.wheel_zoom(-120.0, 100.0);
    engine.pointer_down(0.0);
    engine.pointer_move(250.0);
    engine.pointer_up();

    engine.reset_view();
    assert_relative_eq!(engine.position_to_time(500.0), home);
}
