use std::f32::consts::{FRAC_PI_2, TAU};

use crate::{
    curve::frames::sweep_frames,
    curve::spline::{SplineOptions, SplinePath},
    foundation::core::{Vec2, Vec3},
    mesh::geometry::TubeGeometry,
    noise::simplex::Noise2D,
    reveal::progress::MIN_REVEAL_LENGTH,
};

/// Cross-section and resolution of a swept tube.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TubeShape {
    pub radius: f32,
    pub tubular_segments: usize,
    pub radial_segments: usize,
}

impl Default for TubeShape {
    fn default() -> Self {
        Self {
            radius: 0.1,
            tubular_segments: 64,
            radial_segments: 8,
        }
    }
}

/// Radius falloff at the head and tail of the tube.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Taper {
    /// Fraction of the length over which the start eases in.
    pub head: f32,
    /// Fraction of the length over which the end eases out.
    pub tail: f32,
}

impl Default for Taper {
    fn default() -> Self {
        Self {
            head: 0.2,
            tail: 0.15,
        }
    }
}

impl Taper {
    pub const NONE: Self = Self {
        head: 0.0,
        tail: 0.0,
    };

    /// Radius multiplier at longitudinal parameter `t`, in `[0, 1]`.
    pub fn factor(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let mut f = 1.0f32;
        if self.head > 0.0 && t < self.head {
            f = f.min((t / self.head * FRAC_PI_2).sin());
        }
        if self.tail > 0.0 && t > 1.0 - self.tail {
            f = f.min(((1.0 - t) / self.tail * FRAC_PI_2).sin());
        }
        f.clamp(0.0, 1.0)
    }
}

/// Noise jitter applied along vertex normals.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NoiseDisplacement {
    pub amplitude: f32,
    /// Noise frequency along the tube (`u`).
    pub frequency_u: f32,
    /// Noise frequency around the tube (`v`).
    pub frequency_v: f32,
    /// Scroll speed of the noise field over elapsed time.
    pub time_scale: f32,
}

impl Default for NoiseDisplacement {
    fn default() -> Self {
        Self {
            amplitude: 0.02,
            frequency_u: 4.0,
            frequency_v: 3.0,
            time_scale: 0.5,
        }
    }
}

impl NoiseDisplacement {
    pub fn offset(&self, noise: &Noise2D, uv: Vec2, time: f32) -> f32 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        let x = uv.x * self.frequency_u + time * self.time_scale;
        let y = uv.y * self.frequency_v;
        noise.sample(x, y) * self.amplitude
    }
}

/// Sweeps tapered, noise-displaced tubes through revealed point sequences.
#[derive(Clone, Copy, Debug)]
pub struct TubeBuilder<'a> {
    pub shape: TubeShape,
    pub spline: SplineOptions,
    pub taper: Option<Taper>,
    pub displacement: Option<(&'a Noise2D, NoiseDisplacement)>,
}

impl<'a> TubeBuilder<'a> {
    pub fn new(shape: TubeShape, spline: SplineOptions) -> Self {
        Self {
            shape,
            spline,
            taper: None,
            displacement: None,
        }
    }

    pub fn with_taper(mut self, taper: Taper) -> Self {
        self.taper = Some(taper);
        self
    }

    pub fn with_displacement(mut self, noise: &'a Noise2D, displacement: NoiseDisplacement) -> Self {
        self.displacement = Some((noise, displacement));
        self
    }

    /// Radius profile `r(t)`.
    pub fn effective_radius(&self, t: f32) -> f32 {
        self.shape.radius * self.taper.map_or(1.0, |taper| taper.factor(t))
    }

    /// Builds the tube, or an empty geometry when the points describe no
    /// curve with extent.
    pub fn build(&self, points: &[Vec3], time: f32) -> TubeGeometry {
        if points.len() < 2 {
            return TubeGeometry::empty();
        }
        match SplinePath::build(points, self.spline) {
            Some(path) => self.build_along(&path, time),
            None => TubeGeometry::empty(),
        }
    }

    /// Builds the tube directly along an existing path.
    pub fn build_along(&self, path: &SplinePath, time: f32) -> TubeGeometry {
        if path.length() < MIN_REVEAL_LENGTH {
            return TubeGeometry::empty();
        }

        let tubular = self.shape.tubular_segments.max(1);
        let radial = self.shape.radial_segments.max(3);
        let base = self.shape.radius;
        let frames = sweep_frames(path, tubular);

        let count = TubeGeometry::expected_vertex_count(tubular, radial);
        let mut positions = Vec::with_capacity(count);
        let mut normals = Vec::with_capacity(count);
        let mut uvs = Vec::with_capacity(count);

        for (i, frame) in frames.iter().enumerate() {
            let u = i as f32 / tubular as f32;
            let radius_delta = self.effective_radius(u) - base;

            for j in 0..=radial {
                let v = j as f32 / radial as f32;
                let angle = v * TAU;
                let normal = (frame.normal * -angle.cos() + frame.binormal * angle.sin())
                    .normalize_or_zero();
                let uv = Vec2::new(u, v);

                let jitter = self
                    .displacement
                    .map_or(0.0, |(noise, d)| d.offset(noise, uv, time));

                positions.push(frame.position + normal * (base + jitter + radius_delta));
                normals.push(normal);
                uvs.push(uv);
            }
        }

        let mut indices = Vec::with_capacity(tubular * radial * 6);
        let stride = (radial + 1) as u32;
        for i in 1..=tubular as u32 {
            for j in 1..=radial as u32 {
                let a = stride * (i - 1) + (j - 1);
                let b = stride * i + (j - 1);
                let c = stride * i + j;
                let d = stride * (i - 1) + j;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        TubeGeometry {
            positions,
            normals,
            uvs,
            indices,
            tubular_segments: tubular,
            radial_segments: radial,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/tube.rs"]
mod tests;
