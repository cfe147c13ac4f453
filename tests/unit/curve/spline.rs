use super::*;

fn scroll_path() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 15.0, 0.0),
        Vec3::new(7.5, -25.0, 0.0),
        Vec3::new(-15.0, -70.0, 0.0),
        Vec3::new(30.0, -125.0, 0.0),
    ]
}

fn uneven_path() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 0.0),
    ]
}

#[test]
fn fewer_than_two_points_is_absent() {
    assert!(SplinePath::build(&[], SplineOptions::default()).is_none());
    assert!(SplinePath::build(&[Vec3::ONE], SplineOptions::default()).is_none());
    assert!(
        SplinePath::build(
            &[Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)],
            SplineOptions::default()
        )
        .is_none()
    );
}

#[test]
fn passes_through_every_control_point() {
    for curve_type in [CurveType::Centripetal, CurveType::Chordal, CurveType::Uniform] {
        let opts = SplineOptions {
            curve_type,
            ..SplineOptions::default()
        };
        let pts = scroll_path();
        let path = SplinePath::build(&pts, opts).unwrap();
        for (i, p) in pts.iter().enumerate() {
            let t = i as f32 / (pts.len() - 1) as f32;
            assert!(path.point_at(t).distance(*p) < 1e-3, "{curve_type:?} at {i}");
        }
    }
}

#[test]
fn parameter_is_clamped() {
    let path = SplinePath::build(&scroll_path(), SplineOptions::default()).unwrap();
    assert_eq!(path.point_at(-0.5), path.point_at(0.0));
    assert_eq!(path.point_at(1.5), path.point_at(1.0));
}

#[test]
fn length_is_at_least_the_polyline_chord() {
    let pts = scroll_path();
    let path = SplinePath::build(&pts, SplineOptions::default()).unwrap();
    let chord: f32 = pts.windows(2).map(|w| w[0].distance(w[1])).sum();
    assert!(path.length() >= chord * 0.999);
    assert!(path.length() < chord * 1.5);
}

#[test]
fn tangent_is_unit_and_follows_direction() {
    let path = SplinePath::build(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)], SplineOptions::default())
        .unwrap();
    let tan = path.tangent_at(0.5);
    assert!((tan.length() - 1.0).abs() < 1e-5);
    assert!(tan.distance(Vec3::X) < 1e-4);
    let perp = path.perpendicular_at(0.5);
    assert!(perp.distance(Vec3::Y) < 1e-4);
}

#[test]
fn arc_length_mapping_is_monotone_and_invertible() {
    let path = SplinePath::build(&uneven_path(), SplineOptions::default()).unwrap();
    let mut prev = -1.0;
    for k in 0..=100 {
        let u = k as f32 / 100.0;
        let t = path.parameter_at_length(u);
        assert!(t >= prev);
        prev = t;
        assert!((path.length_fraction_at(t) - u).abs() < 0.01, "u={u}");
    }
    assert_eq!(path.parameter_at_length(0.0), 0.0);
    assert_eq!(path.parameter_at_length(1.0), 1.0);
}

#[test]
fn arc_length_mapping_corrects_uneven_spacing() {
    let path = SplinePath::build(&uneven_path(), SplineOptions::default()).unwrap();
    // Halfway along the length sits inside the long last segment.
    let mid = path.point_at_length(0.5);
    assert!(mid.x > 5.0, "{mid:?}");
    // Halfway along the parameter sits near the short segments.
    assert!(path.point_at(0.5).x < 2.0);
}

#[test]
fn control_point_fractions_are_ordered() {
    let path = SplinePath::build(&scroll_path(), SplineOptions::default()).unwrap();
    let fr: Vec<f32> = (0..4).map(|i| path.control_point_fraction(i)).collect();
    assert_eq!(fr[0], 0.0);
    assert!((fr[3] - 1.0).abs() < 1e-5);
    assert!(fr.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(path.control_point_fraction(99), fr[3]);
}

#[test]
fn sampled_points_cover_endpoints() {
    let pts = scroll_path();
    let path = SplinePath::build(&pts, SplineOptions::default()).unwrap();
    let samples = path.sampled_points(150);
    assert_eq!(samples.len(), 150);
    assert!(samples[0].distance(pts[0]) < 1e-4);
    assert!(samples[149].distance(pts[3]) < 1e-3);
    assert!(path.sampled_points(0).is_empty());
    assert_eq!(path.sampled_points(1).len(), 1);
}

#[test]
fn spaced_points_are_evenly_spaced() {
    let path = SplinePath::build(&uneven_path(), SplineOptions::default()).unwrap();
    let pts = path.spaced_points(21);
    let gaps: Vec<f32> = pts.windows(2).map(|w| w[0].distance(w[1])).collect();
    let mean = gaps.iter().sum::<f32>() / gaps.len() as f32;
    for g in gaps {
        assert!((g - mean).abs() < mean * 0.1, "gap {g} vs {mean}");
    }
}

#[test]
fn coincident_points_do_not_produce_nan() {
    let pts = [Vec3::ZERO, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
    let path = SplinePath::build(&pts, SplineOptions::default()).unwrap();
    for k in 0..=20 {
        let t = k as f32 / 20.0;
        assert!(path.point_at(t).is_finite());
        assert!(path.tangent_at(t).is_finite());
    }
    let flat = SplinePath::build(&[Vec3::ONE, Vec3::ONE], SplineOptions::default()).unwrap();
    assert_eq!(flat.length(), 0.0);
    assert_eq!(flat.parameter_at_length(0.3), 0.3);
}
