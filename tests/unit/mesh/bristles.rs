use super::*;
use crate::{
    curve::spline::SplineOptions,
    mesh::tube::{Taper, TubeShape},
};

fn settings(count: usize) -> BristleSettings {
    BristleSettings {
        count,
        width: 1.0,
        ..BristleSettings::default()
    }
}

fn builder() -> TubeBuilder<'static> {
    TubeBuilder::new(
        TubeShape {
            radius: 0.1,
            tubular_segments: 24,
            radial_segments: 6,
        },
        SplineOptions::default(),
    )
    .with_taper(Taper::default())
}

fn vertical() -> Vec<Vec3> {
    vec![Vec3::ZERO, Vec3::new(0.0, -4.0, 0.0), Vec3::new(0.0, -8.0, 0.0)]
}

#[test]
fn generation_is_seeded_and_in_band() {
    let a = BristleSet::generate(&settings(5));
    let b = BristleSet::generate(&settings(5));
    assert_eq!(a, b);
    for br in a.bristles() {
        assert!((0.015..0.03).contains(&br.radius));
        assert!((0.4..1.0).contains(&br.opacity));
    }
    let c = BristleSet::generate(&BristleSettings {
        seed: 99,
        ..settings(5)
    });
    assert_ne!(a, c);
}

#[test]
fn offsets_spread_evenly_across_width() {
    let set = BristleSet::generate(&settings(5));
    let offsets: Vec<f32> = set.bristles().iter().map(|b| b.lateral_offset).collect();
    let expected = [-0.5, -0.25, 0.0, 0.25, 0.5];
    for (o, e) in offsets.iter().zip(expected) {
        assert!((o - e).abs() < 1e-6);
    }
    let single = BristleSet::generate(&settings(1));
    assert_eq!(single.bristles()[0].lateral_offset, 0.0);
    assert!(BristleSet::generate(&settings(0)).is_empty());
}

#[test]
fn each_strand_is_shifted_along_the_perpendicular() {
    let set = BristleSet::generate(&settings(3));
    let strands = set.build(&vertical(), &builder(), 0.0);
    assert_eq!(strands.len(), 3);
    for strand in &strands {
        assert!(!strand.geometry.is_empty());
        // Path runs down -Y, so the perpendicular is +X.
        let mid = strand.geometry.ring_count() / 2;
        let center = strand.geometry.ring_center(mid).unwrap();
        assert!((center.x - strand.bristle.lateral_offset).abs() < 1e-3);
    }
}

#[test]
fn strands_use_their_own_radius() {
    let set = BristleSet::generate(&settings(2));
    let strands = set.build(&vertical(), &builder(), 0.0);
    for strand in strands {
        let mid = strand.geometry.ring_count() / 2;
        let center = strand.geometry.ring_center(mid).unwrap();
        let r = strand.geometry.ring(mid)[0].distance(center);
        assert!((r - strand.bristle.radius).abs() < 1e-3);
    }
}

#[test]
fn degenerate_reveal_builds_no_strands() {
    let set = BristleSet::generate(&settings(4));
    assert!(set.build(&[Vec3::ZERO], &builder(), 0.0).is_empty());
    assert!(set.build(&[Vec3::ZERO, Vec3::ZERO], &builder(), 0.0).is_empty());
}

#[test]
fn offset_points_keep_distance_on_straight_paths() {
    let path = SplinePath::build(&vertical(), SplineOptions::default()).unwrap();
    let pts = offset_points(&path, 10, 0.25);
    assert_eq!(pts.len(), 10);
    for (i, p) in pts.iter().enumerate() {
        let base = path.point_at(i as f32 / 9.0);
        assert!((p.distance(base) - 0.25).abs() < 1e-5);
    }
}
