use crate::{
    curve::spline::SplinePath,
    foundation::core::Vec3,
    mesh::geometry::TubeGeometry,
    mesh::tube::TubeBuilder,
    noise::rng::Rng64,
    reveal::progress::MIN_REVEAL_LENGTH,
};

/// Per-strand configuration, drawn once and kept for the brush's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bristle {
    pub radius: f32,
    /// Signed distance from the centre curve along its in-plane perpendicular.
    pub lateral_offset: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BristleSettings {
    /// Zero disables the multi-strand variant.
    pub count: usize,
    /// Total lateral spread of all strands.
    pub width: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Apply the brush taper to every strand.
    pub taper: bool,
    /// Apply noise displacement to every strand.
    pub noise: bool,
    pub seed: u64,
}

impl Default for BristleSettings {
    fn default() -> Self {
        Self {
            count: 0,
            width: 0.3,
            radius_min: 0.015,
            radius_max: 0.03,
            opacity_min: 0.4,
            opacity_max: 1.0,
            taper: true,
            noise: true,
            seed: 0x5EED_B215,
        }
    }
}

/// One strand's geometry for the current frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Strand {
    pub bristle: Bristle,
    pub geometry: TubeGeometry,
}

/// Immutable set of bristle configurations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BristleSet {
    bristles: Vec<Bristle>,
    taper: bool,
    noise: bool,
}

impl BristleSet {
    pub fn generate(settings: &BristleSettings) -> Self {
        let mut rng = Rng64::new(settings.seed);
        let count = settings.count;
        let bristles = (0..count)
            .map(|k| {
                let lateral_offset = if count > 1 {
                    -settings.width * 0.5 + settings.width * k as f32 / (count - 1) as f32
                } else {
                    0.0
                };
                Bristle {
                    radius: rng.range_f32(settings.radius_min, settings.radius_max),
                    lateral_offset,
                    opacity: rng.range_f32(settings.opacity_min, settings.opacity_max),
                }
            })
            .collect();

        Self {
            bristles,
            taper: settings.taper,
            noise: settings.noise,
        }
    }

    pub fn bristles(&self) -> &[Bristle] {
        &self.bristles
    }

    pub fn is_empty(&self) -> bool {
        self.bristles.is_empty()
    }

    /// Regenerates every strand around the shared revealed sub-curve.
    ///
    /// Returns no strands when the points describe no curve with extent.
    pub fn build(&self, points: &[Vec3], builder: &TubeBuilder<'_>, time: f32) -> Vec<Strand> {
        if self.bristles.is_empty() || points.len() < 2 {
            return Vec::new();
        }
        let Some(center) = SplinePath::build(points, builder.spline) else {
            return Vec::new();
        };
        if center.length() < MIN_REVEAL_LENGTH {
            return Vec::new();
        }

        let samples = (builder.shape.tubular_segments + 1).max(2);
        self.bristles
            .iter()
            .map(|&bristle| {
                let mut strand_builder = *builder;
                strand_builder.shape.radius = bristle.radius;
                if !self.taper {
                    strand_builder.taper = None;
                }
                if !self.noise {
                    strand_builder.displacement = None;
                }
                let shifted = offset_points(&center, samples, bristle.lateral_offset);
                Strand {
                    bristle,
                    geometry: strand_builder.build(&shifted, time),
                }
            })
            .collect()
    }
}

/// `samples` points of `path`, each pushed along the local perpendicular.
pub fn offset_points(path: &SplinePath, samples: usize, offset: f32) -> Vec<Vec3> {
    let samples = samples.max(2);
    (0..samples)
        .map(|i| {
            let t = i as f32 / (samples - 1) as f32;
            path.point_at(t) + path.perpendicular_at(t) * offset
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/bristles.rs"]
mod tests;
