//! Integration test: render whole frames and check the dial's observable
//! properties across times of day and viewport sizes.

use clockface_core::geometry::face_point;
use clockface_core::{
    ClockState, DialTime, FaceRenderer, GeometryError, MonospaceMetrics, RenderError,
    compute_metrics, render_face,
};
use clockface_protocol::{Point, RenderCommand, ThemeToken};

const EPS: f64 = 1e-6;

fn hand_tips(commands: &[RenderCommand]) -> Vec<Point> {
    commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawLine {
                to,
                color: ThemeToken::Hand,
                ..
            } => Some(*to),
            _ => None,
        })
        .collect()
}

fn labels(commands: &[RenderCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn frame(width: u32, height: u32, time: DialTime) -> Vec<RenderCommand> {
    render_face(
        &compute_metrics(width, height),
        time,
        &MonospaceMetrics::default(),
    )
    .expect("frame should render")
}

#[test]
fn identical_inputs_give_identical_frames() {
    for s in [0.0, 1.5, 43_210.25, 86_399.999] {
        let a = frame(640, 480, DialTime::from_seconds_of_day(s));
        let b = frame(640, 480, DialTime::from_seconds_of_day(s));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a).expect("serialize"),
            serde_json::to_vec(&b).expect("serialize")
        );
    }
}

#[test]
fn hour_hand_repeats_every_twelve_hours() {
    for s in [0.0, 3_725.0, 20_000.5, 43_199.0] {
        let am = hand_tips(&frame(500, 500, DialTime::from_seconds_of_day(s)));
        let pm = hand_tips(&frame(500, 500, DialTime::from_seconds_of_day(s + 43_200.0)));
        let (a, p) = (am[2], pm[2]);
        assert!((a.x - p.x).abs() < EPS && (a.y - p.y).abs() < EPS, "s={s}");
    }
}

#[test]
fn all_hands_point_up_at_midnight() {
    let metrics = compute_metrics(400, 400);
    let tips = hand_tips(&frame(400, 400, DialTime::from_hms(0, 0, 0)));
    assert_eq!(tips.len(), 3);
    for tip in tips {
        assert!((tip.x - metrics.center.x).abs() < EPS);
        assert!(tip.y < metrics.center.y);
    }
}

#[test]
fn second_hand_points_down_at_half_minute() {
    let metrics = compute_metrics(400, 400);
    let tips = hand_tips(&frame(400, 400, DialTime::from_hms(0, 0, 30)));
    assert!((tips[0].x - metrics.center.x).abs() < EPS);
    assert!((tips[0].y - (metrics.center.y + 0.9 * metrics.clock_radius)).abs() < EPS);
}

#[test]
fn noon_hour_hand_points_up() {
    let metrics = compute_metrics(400, 400);
    let tips = hand_tips(&frame(400, 400, DialTime::from_hms(12, 0, 0)));
    assert!((tips[2].x - metrics.center.x).abs() < EPS);
    assert!((tips[2].y - (metrics.center.y - 0.5 * metrics.clock_radius)).abs() < EPS);
}

#[test]
fn minute_hand_just_before_the_hour() {
    let metrics = compute_metrics(400, 400);
    let tips = hand_tips(&frame(400, 400, DialTime::from_seconds_of_day(3_599.999)));
    // A hair counter-clockwise of 12: left of center, above it.
    assert!(tips[1].x < metrics.center.x);
    assert!(metrics.center.x - tips[1].x < 0.01);
    assert!(tips[1].y < metrics.center.y);
}

#[test]
fn resize_recomputes_layout() {
    let mut state = ClockState::new(400, 300, DialTime::from_hms(9, 0, 0));
    assert!(state.resize(800, 800));
    let m = state.metrics();
    assert_eq!(m.min_side, 800);
    assert!((m.clock_radius - 360.0).abs() < EPS);
    assert_eq!(m.center, Point::new(400.0, 400.0));

    let cmds = state
        .render(&FaceRenderer::default(), &MonospaceMetrics::default())
        .expect("frame should render");
    assert!(matches!(
        cmds[0],
        RenderCommand::DrawEllipse { radius_x, radius_y, .. }
            if (radius_x - 360.0).abs() < EPS && (radius_y - 360.0).abs() < EPS
    ));
}

#[test]
fn point_mapping_rejects_bad_input() {
    let c = Point::new(0.0, 0.0);
    assert_eq!(face_point(c, -1.0, 0.0), Err(GeometryError::NegativeRadius(-1.0)));
    assert_eq!(face_point(c, 1.0, 7.0), Err(GeometryError::AngleOutOfRange(7.0)));
}

#[test]
fn twelve_labels_at_any_size() {
    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    for (w, h) in [(0, 0), (1, 1), (37, 900), (1920, 1080)] {
        let cmds = frame(w, h, DialTime::from_hms(5, 55, 5));
        assert_eq!(labels(&cmds), expected, "{w}x{h}");
        let ticks = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { color: ThemeToken::Tick, .. }))
            .count();
        assert_eq!(ticks, 12);
    }
}

#[test]
fn corrupt_time_surfaces_as_error() {
    let result = render_face(
        &compute_metrics(100, 100),
        DialTime::from_seconds_of_day(f64::INFINITY),
        &MonospaceMetrics::default(),
    );
    assert!(matches!(result, Err(RenderError::Time(_))));
}

#[test]
fn ticks_span_outer_rim_with_fixed_styling() {
    let metrics = compute_metrics(600, 500);
    let cmds = frame(600, 500, DialTime::from_hms(8, 20, 40));
    let r = metrics.clock_radius;

    let mut ticks = 0;
    for cmd in &cmds {
        match cmd {
            RenderCommand::DrawLine {
                from,
                to,
                color: ThemeToken::Tick,
                width,
            } => {
                ticks += 1;
                assert!((from.distance(metrics.center) - 0.9 * r).abs() < EPS);
                assert!((to.distance(metrics.center) - 0.98 * r).abs() < EPS);
                assert_eq!(*width, 4.0);
            }
            RenderCommand::DrawText { font_size, .. } => assert_eq!(*font_size, 18.0),
            _ => {}
        }
    }
    assert_eq!(ticks, 12);
}

#[test]
fn second_hand_just_before_the_hour() {
    let metrics = compute_metrics(400, 400);
    let tips = hand_tips(&frame(400, 400, DialTime::from_seconds_of_day(3_599.999)));
    let expected = face_point(
        metrics.center,
        0.9 * metrics.clock_radius,
        std::f64::consts::TAU * 59.0 / 60.0,
    )
    .expect("angle within range");
    assert!((tips[0].x - expected.x).abs() < EPS && (tips[0].y - expected.y).abs() < EPS);
}
