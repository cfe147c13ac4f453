use super::*;

fn s_curve() -> Vec<Point> {
    vec![
        Point::new(0.5, 1.0),
        Point::new(0.7, 0.8),
        Point::new(0.9, 0.6),
        Point::new(0.7, 0.4),
        Point::new(0.3, 0.2),
        Point::new(0.5, 0.0),
    ]
}

#[test]
fn default_line_is_vertical_and_centred() {
    let brush = ScreenBrush::new(&[], ScreenBrushSettings::default());
    assert!((brush.distance(Point::new(0.5, 0.5)) + 0.025).abs() < 1e-6);
    assert!((brush.distance(Point::new(0.6, 0.5)) - 0.075).abs() < 1e-6);
}

#[test]
fn revealed_body_is_painted() {
    let brush = ScreenBrush::new(&[], ScreenBrushSettings::default());
    let a = brush.coverage(Point::new(0.5, 0.9), 1.0, 0.0);
    assert!(a >= 0.55, "{a}");
    assert_eq!(brush.coverage(Point::new(0.1, 0.9), 1.0, 0.0), 0.0);
}

#[test]
fn unrevealed_part_is_clipped() {
    let brush = ScreenBrush::new(&s_curve(), ScreenBrushSettings::default());
    assert_eq!(brush.coverage(Point::new(0.3, 0.2), 0.5, 0.0), 0.0);
    assert!(brush.coverage(Point::new(0.3, 0.2), 1.0, 0.0) > 0.0);
}

#[test]
fn leading_edge_fades_out() {
    let brush = ScreenBrush::new(&[], ScreenBrushSettings::default());
    // reveal == progress sits at the very tip.
    assert!(brush.coverage(Point::new(0.5, 0.5), 0.5, 0.0) < 1e-6);
    assert!(brush.coverage(Point::new(0.5, 0.7), 0.5, 0.0) > 0.5);
}

#[test]
fn points_are_capped() {
    let many: Vec<Point> = (0..40).map(|i| Point::new(0.5, 1.0 - i as f64 / 40.0)).collect();
    let brush = ScreenBrush::new(&many, ScreenBrushSettings::default());
    assert_eq!(brush.segments.len(), MAX_POINTS - 1);
}

#[test]
fn raster_grows_with_progress() {
    let brush = ScreenBrush::new(&s_curve(), ScreenBrushSettings::default());
    let early = brush.rasterize(48, 96, 0.3, 0.0);
    let late = brush.rasterize(48, 96, 0.9, 0.0);
    assert_eq!(early.data.len(), 48 * 96);
    assert!(late.coverage() > early.coverage());
    assert_eq!(brush.rasterize(48, 96, 0.0, 0.0).coverage(), 0.0);
}

#[test]
fn hash_noise_is_unit_range() {
    for i in 0..100 {
        let v = hash_noise(Vec2::new(i as f32 * 0.7, i as f32 * 1.3));
        assert!((0.0..1.0).contains(&v) || v == 1.0);
    }
}
