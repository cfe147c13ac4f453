use std::path::Path;

use anyhow::Context as _;

use crate::{
    curve::spline::SplineOptions,
    foundation::core::Vec3,
    foundation::error::{StrokeError, StrokeResult},
    mesh::bristles::BristleSettings,
    mesh::tube::{NoiseDisplacement, Taper, TubeShape},
    particles::lifecycle::ParticleSettings,
    reveal::progress::ProgressMapper,
    style::sections::ColorSections,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Surface noise settings.
pub struct NoiseConfig {
    /// Seed of the shared noise field.
    pub seed: u64,
    /// Displacement applied along vertex normals.
    #[serde(flatten)]
    pub displacement: NoiseDisplacement,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            displacement: NoiseDisplacement::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Every knob of the stroke renderer.
///
/// All fields have defaults, so `{}` is a valid config. Build one in code,
/// or load it from JSON with [`BrushConfig::from_json_str`] /
/// [`BrushConfig::from_path`].
pub struct BrushConfig {
    /// Tube radius and resolution.
    pub tube: TubeShape,
    /// Head/tail radius falloff.
    pub taper: Taper,
    /// Surface noise.
    pub noise: NoiseConfig,
    /// Curve fitting.
    pub spline: SplineOptions,
    /// Progress-to-path mapping.
    pub reveal: ProgressMapper,
    /// Multi-strand variant; `count = 0` draws a single tube.
    pub bristles: BristleSettings,
    /// Decorative particles.
    pub particles: ParticleSettings,
    /// Progress-keyed stroke colour.
    pub sections: ColorSections,
}

impl BrushConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> StrokeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> StrokeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read brush config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check every knob for values the renderer cannot honour.
    pub fn validate(&self) -> StrokeResult<()> {
        let tube = &self.tube;
        if !tube.radius.is_finite() || tube.radius <= 0.0 {
            return Err(StrokeError::validation("tube radius must be finite and > 0"));
        }
        if tube.tubular_segments == 0 {
            return Err(StrokeError::validation("tube tubular_segments must be > 0"));
        }
        if tube.radial_segments < 3 {
            return Err(StrokeError::validation("tube radial_segments must be >= 3"));
        }

        for (name, value) in [("head", self.taper.head), ("tail", self.taper.tail)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StrokeError::validation(format!(
                    "taper {name} must be within [0, 1]"
                )));
            }
        }

        let d = &self.noise.displacement;
        if !d.amplitude.is_finite() || d.amplitude < 0.0 {
            return Err(StrokeError::validation(
                "noise amplitude must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("frequency_u", d.frequency_u),
            ("frequency_v", d.frequency_v),
            ("time_scale", d.time_scale),
        ] {
            if !value.is_finite() {
                return Err(StrokeError::validation(format!(
                    "noise {name} must be finite"
                )));
            }
        }

        if !self.spline.tension.is_finite() {
            return Err(StrokeError::validation("spline tension must be finite"));
        }
        if self.spline.arc_divisions == 0 {
            return Err(StrokeError::validation("spline arc_divisions must be > 0"));
        }

        if self.reveal.samples < 2 {
            return Err(StrokeError::validation("reveal samples must be >= 2"));
        }
        if let Some(tail) = self.reveal.tail_fraction
            && !(tail > 0.0 && tail <= 1.0)
        {
            return Err(StrokeError::validation(
                "reveal tail_fraction must be within (0, 1]",
            ));
        }

        self.validate_bristles()?;
        self.validate_particles()?;
        self.sections.validate()
    }

    fn validate_bristles(&self) -> StrokeResult<()> {
        let b = &self.bristles;
        if !b.width.is_finite() || b.width < 0.0 {
            return Err(StrokeError::validation(
                "bristles width must be finite and >= 0",
            ));
        }
        if !(b.radius_min.is_finite() && b.radius_max.is_finite())
            || b.radius_min <= 0.0
            || b.radius_min > b.radius_max
        {
            return Err(StrokeError::validation(
                "bristles radius band must satisfy 0 < radius_min <= radius_max",
            ));
        }
        if !(0.0..=1.0).contains(&b.opacity_min)
            || !(0.0..=1.0).contains(&b.opacity_max)
            || b.opacity_min > b.opacity_max
        {
            return Err(StrokeError::validation(
                "bristles opacity band must satisfy 0 <= opacity_min <= opacity_max <= 1",
            ));
        }
        Ok(())
    }

    fn validate_particles(&self) -> StrokeResult<()> {
        let p = &self.particles;
        if p.start_point >= p.end_point {
            return Err(StrokeError::validation(
                "particles start_point must be < end_point",
            ));
        }
        if !p.min_spacing.is_finite() || p.min_spacing <= 0.0 {
            return Err(StrokeError::validation(
                "particles min_spacing must be finite and > 0",
            ));
        }
        for (name, value) in [
            ("jitter", p.jitter),
            ("base_scale", p.base_scale),
            ("pulse_speed", p.pulse_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StrokeError::validation(format!(
                    "particles {name} must be finite and >= 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&p.pulse_amplitude) {
            return Err(StrokeError::validation(
                "particles pulse_amplitude must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Parse control points from a JSON array of `[x, y, z]` (or `[x, y]`) arrays.
pub fn parse_control_points(s: &str) -> StrokeResult<Vec<Vec3>> {
    let raw: Vec<Vec<f32>> = serde_json::from_str(s)?;
    raw.into_iter()
        .enumerate()
        .map(|(i, c)| {
            let p = match c.as_slice() {
                [x, y] => Vec3::new(*x, *y, 0.0),
                [x, y, z] => Vec3::new(*x, *y, *z),
                _ => {
                    return Err(StrokeError::validation(format!(
                        "control point {i} must have 2 or 3 coordinates"
                    )));
                }
            };
            if !p.is_finite() {
                return Err(StrokeError::validation(format!(
                    "control point {i} must be finite"
                )));
            }
            Ok(p)
        })
        .collect()
}

/// Read control points from a JSON file; see [`parse_control_points`].
pub fn load_control_points(path: &Path) -> StrokeResult<Vec<Vec3>> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read control points '{}'", path.display()))?;
    parse_control_points(&s)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
