use crate::{
    curve::spline::{CurveType, SplineOptions, SplinePath},
    foundation::core::Vec3,
    foundation::math::{Fnv1a64, fingerprint_points},
};

/// Memoizes the [`SplinePath`] for one control-point list.
///
/// Handing the same coordinates back (even in a fresh `Vec`) reuses the path,
/// while any change rebuilds it. A fingerprint of the points and options is
/// checked first; equal fingerprints are confirmed against the stored input.
#[derive(Debug, Default)]
pub struct SplineCache {
    key: Option<u64>,
    points: Vec<Vec3>,
    options: SplineOptions,
    path: Option<SplinePath>,
    builds: u64,
}

impl SplineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached path and whether it was (re)built by this call.
    pub fn get_or_build(
        &mut self,
        points: &[Vec3],
        options: SplineOptions,
    ) -> (Option<&SplinePath>, bool) {
        let key = cache_key(points, options);
        let rebuilt =
            self.key != Some(key) || self.options != options || self.points.as_slice() != points;
        if rebuilt {
            self.path = SplinePath::build(points, options);
            self.key = Some(key);
            self.points = points.to_vec();
            self.options = options;
            self.builds += 1;
        }
        (self.path.as_ref(), rebuilt)
    }

    pub fn path(&self) -> Option<&SplinePath> {
        self.path.as_ref()
    }

    /// Number of times a path has been built.
    pub fn builds(&self) -> u64 {
        self.builds
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.points.clear();
        self.path = None;
    }
}

fn cache_key(points: &[Vec3], options: SplineOptions) -> u64 {
    let mut h = Fnv1a64::new(fingerprint_points(points));
    h.write_u64(match options.curve_type {
        CurveType::Centripetal => 0,
        CurveType::Chordal => 1,
        CurveType::Uniform => 2,
    });
    h.write_f32(options.tension);
    h.write_u64(options.arc_divisions as u64);
    h.finish()
}
