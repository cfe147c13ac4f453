use super::*;
use crate::curve::spline::SplineOptions;

fn pts() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 15.0, 0.0),
        Vec3::new(7.5, -25.0, 0.0),
        Vec3::new(-15.0, -70.0, 0.0),
        Vec3::new(30.0, -125.0, 0.0),
    ]
}

#[test]
fn continuous_window_clamps_overshoot() {
    assert_eq!(RevealWindow::continuous(-0.1, None).end, 0.0);
    assert_eq!(RevealWindow::continuous(1.2, None).end, 1.0);
    let w = RevealWindow::continuous(0.5, Some(0.2));
    assert!((w.start - 0.3).abs() < 1e-6);
    assert_eq!(w.end, 0.5);
    assert_eq!(RevealWindow::continuous(0.1, Some(0.2)).start, 0.0);
    assert_eq!(RevealWindow::continuous(0.5, Some(-1.0)).start, 0.0);
}

#[test]
fn cursor_splits_segments() {
    let c = SegmentCursor::locate(0.5, 5).unwrap();
    assert_eq!(c.index, 2);
    assert!(c.local_t.abs() < 1e-6);

    let c = SegmentCursor::locate(0.6, 3).unwrap();
    assert_eq!(c.index, 1);
    assert!((c.local_t - 0.2).abs() < 1e-5);

    assert!(SegmentCursor::locate(1.0, 4).unwrap().is_complete(4));
    assert!(SegmentCursor::locate(0.5, 1).is_none());
}

#[test]
fn discrete_points_interpolate_tip() {
    let p = pts();
    let cursor = SegmentCursor::locate(0.5, p.len()).unwrap();
    let out = discrete_points(&p, cursor);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], p[0]);
    assert_eq!(out[1], p[1]);
    assert!(out[2].distance(p[1].lerp(p[2], 0.5)) < 1e-4);
}

#[test]
fn discrete_full_reveal_returns_points_unmodified() {
    let p = pts();
    let cursor = SegmentCursor::locate(1.3, p.len()).unwrap();
    assert_eq!(discrete_points(&p, cursor), p);
}

#[test]
fn discrete_start_collapses_to_one_point() {
    let p = pts();
    let cursor = SegmentCursor::locate(0.0, p.len()).unwrap();
    assert_eq!(discrete_points(&p, cursor), vec![p[0]]);
}

#[test]
fn continuous_reveal_at_zero_is_a_single_point() {
    let path = SplinePath::build(&pts(), SplineOptions::default()).unwrap();
    let mapper = ProgressMapper::default();
    let state = mapper.map(0.0, path.control_points().len());
    assert_eq!(mapper.revealed_points(&path, &state).len(), 1);
}

#[test]
fn continuous_full_reveal_spans_the_path() {
    let p = pts();
    let path = SplinePath::build(&p, SplineOptions::default()).unwrap();
    let mapper = ProgressMapper::default();
    let state = mapper.map(1.0, p.len());
    let out = mapper.revealed_points(&path, &state);
    assert_eq!(out.len(), mapper.samples);
    assert!(out[0].distance(p[0]) < 1e-3);
    assert!(out[out.len() - 1].distance(p[3]) < 1e-2);
}

#[test]
fn tail_window_drops_the_start() {
    let p = pts();
    let path = SplinePath::build(&p, SplineOptions::default()).unwrap();
    let mapper = ProgressMapper {
        tail_fraction: Some(0.25),
        ..ProgressMapper::default()
    };
    let state = mapper.map(0.8, p.len());
    let out = mapper.revealed_points(&path, &state);
    assert!(out[0].distance(path.point_at_length(0.55)) < 1e-3);
}

#[test]
fn discrete_mode_uses_cursor() {
    let p = pts();
    let path = SplinePath::build(&p, SplineOptions::default()).unwrap();
    let mapper = ProgressMapper {
        mode: RevealMode::Discrete,
        ..ProgressMapper::default()
    };
    let state = mapper.map(2.0, p.len());
    assert_eq!(state.progress, 1.0);
    assert_eq!(mapper.revealed_points(&path, &state), p);
}

#[test]
fn tip_follows_the_active_pacing() {
    let path = SplinePath::build(&pts(), SplineOptions::default()).unwrap();
    let discrete = ProgressMapper {
        mode: RevealMode::Discrete,
        ..ProgressMapper::default()
    };
    let state = discrete.map(0.5, 4);
    let tip = discrete.tip_point(&path, &state);
    assert!(tip.distance(pts()[1].lerp(pts()[2], 0.5)) < 1e-5);
    let revealed = discrete.revealed_points(&path, &state);
    assert_eq!(revealed.last().copied(), Some(tip));
    assert_eq!(discrete.tip_point(&path, &discrete.map(1.0, 4)), pts()[3]);

    let continuous = ProgressMapper::default();
    let state = continuous.map(0.5, 4);
    assert!(continuous.tip_point(&path, &state).distance(path.point_at_length(0.5)) < 1e-6);
}

#[test]
fn control_point_progress_matches_mode() {
    let path = SplinePath::build(&pts(), SplineOptions::default()).unwrap();
    let discrete = ProgressMapper {
        mode: RevealMode::Discrete,
        ..ProgressMapper::default()
    };
    assert_eq!(discrete.control_point_progress(&path, 0), 0.0);
    assert_eq!(discrete.control_point_progress(&path, 2), 2.0 / 3.0);
    assert_eq!(discrete.control_point_progress(&path, 9), 1.0);

    let continuous = ProgressMapper::default();
    assert_eq!(
        continuous.control_point_progress(&path, 1),
        path.control_point_fraction(1)
    );
}
