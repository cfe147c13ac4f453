use crate::foundation::core::Vec3;

/// Knot parameterisation of the Catmull-Rom curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    /// Alpha 0.5; no cusps or self-intersections within a segment.
    #[default]
    Centripetal,
    /// Alpha 1.0.
    Chordal,
    /// Uniform knots, tangents scaled by `tension`.
    Uniform,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SplineOptions {
    pub curve_type: CurveType,
    /// Only used by [`CurveType::Uniform`].
    pub tension: f32,
    /// Resolution of the arc-length lookup table.
    pub arc_divisions: usize,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            curve_type: CurveType::Centripetal,
            tension: 0.5,
            arc_divisions: 200,
        }
    }
}

/// Smooth interpolating curve through an ordered list of control points.
///
/// The global parameter `t` runs from the first control point (`t = 0`) to
/// the last (`t = 1`), each segment taking an equal share. Arc-length queries
/// go through a cumulative length table built once at construction.
#[derive(Clone, Debug)]
pub struct SplinePath {
    points: Vec<Vec3>,
    options: SplineOptions,
    lengths: Vec<f32>,
}

#[derive(Clone, Copy, Debug)]
struct Cubic {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl Cubic {
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn nonuniform(x0: Vec3, x1: Vec3, x2: Vec3, x3: Vec3, dt0: f32, dt1: f32, dt2: f32) -> Self {
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, w: f32) -> Vec3 {
        let w2 = w * w;
        self.c0 + self.c1 * w + self.c2 * w2 + self.c3 * w2 * w
    }

    fn derivative(&self, w: f32) -> Vec3 {
        self.c1 + self.c2 * (2.0 * w) + self.c3 * (3.0 * w * w)
    }
}

impl SplinePath {
    /// Builds the path, or `None` when fewer than two finite points exist.
    pub fn build(points: &[Vec3], options: SplineOptions) -> Option<Self> {
        if points.len() < 2 || points.iter().any(|p| !p.is_finite()) {
            return None;
        }

        let mut path = Self {
            points: points.to_vec(),
            options: SplineOptions {
                arc_divisions: options.arc_divisions.max(1),
                ..options
            },
            lengths: Vec::new(),
        };
        path.lengths = path.build_lengths();
        Some(path)
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn options(&self) -> SplineOptions {
        self.options
    }

    /// Total arc length.
    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        let (cubic, w) = self.segment(t);
        cubic.eval(w)
    }

    /// Unit tangent; never zero for a path with any extent.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let (cubic, w) = self.segment(t);
        let d = cubic.derivative(w).normalize_or_zero();
        if d != Vec3::ZERO {
            return d;
        }

        const DELTA: f32 = 1e-4;
        let t = t.clamp(0.0, 1.0);
        let a = self.point_at((t - DELTA).max(0.0));
        let b = self.point_at((t + DELTA).min(1.0));
        let fd = (b - a).normalize_or_zero();
        if fd != Vec3::ZERO {
            return fd;
        }

        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        let chord = (last - first).normalize_or_zero();
        if chord == Vec3::ZERO { Vec3::X } else { chord }
    }

    /// In-plane (XY) unit perpendicular to the tangent.
    pub fn perpendicular_at(&self, t: f32) -> Vec3 {
        let tan = self.tangent_at(t);
        let perp = Vec3::new(-tan.y, tan.x, 0.0).normalize_or_zero();
        if perp == Vec3::ZERO { Vec3::X } else { perp }
    }

    /// Maps a fraction of total arc length to the curve parameter.
    pub fn parameter_at_length(&self, fraction: f32) -> f32 {
        let fraction = crate::foundation::math::clamp01(fraction);
        let total = self.length();
        if total <= f32::EPSILON {
            return fraction;
        }

        let target = fraction * total;
        let divisions = self.lengths.len() - 1;
        // first index whose cumulative length exceeds the target
        let hi = self.lengths.partition_point(|&l| l <= target);
        if hi > divisions {
            return 1.0;
        }
        let lo = hi.saturating_sub(1);
        let before = self.lengths[lo];
        let after = self.lengths[hi];
        let span = after - before;
        let frac = if span > 0.0 { (target - before) / span } else { 0.0 };
        ((lo as f32 + frac) / divisions as f32).clamp(0.0, 1.0)
    }

    /// Inverse of [`Self::parameter_at_length`]: arc-length fraction at `t`.
    pub fn length_fraction_at(&self, t: f32) -> f32 {
        let total = self.length();
        if total <= f32::EPSILON {
            return crate::foundation::math::clamp01(t);
        }
        let divisions = self.lengths.len() - 1;
        let x = crate::foundation::math::clamp01(t) * divisions as f32;
        let lo = (x.floor() as usize).min(divisions - 1);
        let w = x - lo as f32;
        let len = crate::foundation::math::lerp(self.lengths[lo], self.lengths[lo + 1], w);
        (len / total).clamp(0.0, 1.0)
    }

    /// Arc-length fraction at which the curve passes control point `index`.
    pub fn control_point_fraction(&self, index: usize) -> f32 {
        let last = self.points.len() - 1;
        let t = index.min(last) as f32 / last as f32;
        self.length_fraction_at(t)
    }

    pub fn point_at_length(&self, fraction: f32) -> Vec3 {
        self.point_at(self.parameter_at_length(fraction))
    }

    /// `n` points at uniform parameter spacing, endpoints included.
    pub fn sampled_points(&self, n: usize) -> Vec<Vec3> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..n)
                .map(|i| self.point_at(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }

    /// `n` points at uniform arc-length spacing, endpoints included.
    pub fn spaced_points(&self, n: usize) -> Vec<Vec3> {
        self.spaced_points_between(0.0, 1.0, n)
    }

    /// `n` points at uniform arc-length spacing between two length fractions.
    pub fn spaced_points_between(&self, start: f32, end: f32, n: usize) -> Vec<Vec3> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at_length(start)],
            _ => (0..n)
                .map(|i| {
                    let w = i as f32 / (n - 1) as f32;
                    self.point_at_length(crate::foundation::math::lerp(start, end, w))
                })
                .collect(),
        }
    }

    fn segment(&self, t: f32) -> (Cubic, f32) {
        let n = self.points.len();
        let p = crate::foundation::math::clamp01(t) * (n - 1) as f32;
        let seg = (p.floor() as usize).min(n - 2);
        let w = p - seg as f32;

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        // Reflect neighbours past the ends.
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            2.0 * p2 - p1
        };

        let cubic = match self.options.curve_type {
            CurveType::Uniform => {
                let k = self.options.tension;
                Cubic::hermite(p1, p2, k * (p2 - p0), k * (p3 - p1))
            }
            CurveType::Centripetal | CurveType::Chordal => {
                let pow = if self.options.curve_type == CurveType::Centripetal {
                    0.25
                } else {
                    0.5
                };
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);
                // Coincident points would divide by zero.
                if dt1 < 1e-4 {
                    dt1 = 1.0;
                }
                if dt0 < 1e-4 {
                    dt0 = dt1;
                }
                if dt2 < 1e-4 {
                    dt2 = dt1;
                }
                Cubic::nonuniform(p0, p1, p2, p3, dt0, dt1, dt2)
            }
        };
        (cubic, w)
    }

    fn build_lengths(&self) -> Vec<f32> {
        let divisions = self.options.arc_divisions;
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut sum = 0.0f32;
        let mut prev = self.point_at(0.0);
        lengths.push(0.0);
        for i in 1..=divisions {
            let cur = self.point_at(i as f32 / divisions as f32);
            sum += cur.distance(prev);
            lengths.push(sum);
            prev = cur;
        }
        lengths
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spline.rs"]
mod tests;
