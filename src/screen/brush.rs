use kurbo::ParamCurveNearest as _;

use crate::{
    foundation::core::{Line, Point, Vec2},
    foundation::math::{fract, smoothstep},
    style::mask::AlphaMask,
};

/// Most polyline points a screen brush evaluates.
pub const MAX_POINTS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScreenBrushSettings {
    pub brush_width: f32,
    pub noise_scale: f32,
    /// Length (in reveal units) of the soft leading edge.
    pub tip_fade: f32,
}

impl Default for ScreenBrushSettings {
    fn default() -> Self {
        Self {
            brush_width: 0.05,
            noise_scale: 0.02,
            tip_fade: 0.05,
        }
    }
}

/// Flat, screen-space brush evaluated per texel.
///
/// Points live in UV space (`x` left to right, `y` from 1 at the top to 0 at
/// the bottom); the stroke is revealed top-down as progress grows.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenBrush {
    segments: Vec<Line>,
    settings: ScreenBrushSettings,
}

impl ScreenBrush {
    /// Uses at most [`MAX_POINTS`] points; no points means a centred
    /// vertical line.
    pub fn new(points: &[Point], settings: ScreenBrushSettings) -> Self {
        let points: Vec<Point> = if points.is_empty() {
            vec![Point::new(0.5, 1.0), Point::new(0.5, 0.0)]
        } else {
            points.iter().copied().take(MAX_POINTS).collect()
        };
        let segments = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
        Self { segments, settings }
    }

    pub fn settings(&self) -> ScreenBrushSettings {
        self.settings
    }

    /// Signed distance from `p` to the stroke outline (negative inside).
    pub fn distance(&self, p: Point) -> f32 {
        let radius = f64::from(self.settings.brush_width) * 0.5;
        self.segments
            .iter()
            .map(|line| {
                let d = if line.p0 == line.p1 {
                    p.distance(line.p0)
                } else {
                    line.nearest(p, 1e-9).distance_sq.sqrt()
                };
                d - radius
            })
            .fold(f64::INFINITY, f64::min) as f32
    }

    /// Brush alpha at `uv` for the given progress and time, in `[0, 1]`.
    pub fn coverage(&self, uv: Point, progress: f32, time: f32) -> f32 {
        let s = self.settings;
        let v = uv.y as f32;
        let reveal = 1.0 - v;
        if reveal > progress {
            return 0.0;
        }

        let st = Vec2::new(uv.x as f32, v) * 20.0 + Vec2::splat(time * 0.5);
        let dist = self.distance(uv) + (hash_noise(st) - 0.5) * s.noise_scale;
        let brush = 1.0 - smoothstep(-0.01, 0.01, dist);

        let tip = 1.0 - smoothstep(progress - s.tip_fade, progress, reveal);
        let pulse = 0.8 + 0.2 * (time * 0.5 + v * 5.0).sin();
        (brush * tip * pulse).clamp(0.0, 1.0)
    }

    /// Evaluates the brush over a `width x height` grid; row 0 is the top.
    pub fn rasterize(&self, width: u32, height: u32, progress: f32, time: f32) -> AlphaMask {
        let mut mask = AlphaMask::new(width, height);
        let du = f64::from(width.saturating_sub(1).max(1));
        let dv = f64::from(height.saturating_sub(1).max(1));
        for row in 0..height {
            for col in 0..width {
                let uv = Point::new(f64::from(col) / du, 1.0 - f64::from(row) / dv);
                let a = self.coverage(uv, progress, time);
                mask.data[(row * width + col) as usize] = (a * 255.0).round() as u8;
            }
        }
        mask
    }
}

/// Classic shader hash in `[0, 1)`.
pub fn hash_noise(st: Vec2) -> f32 {
    fract((st.dot(Vec2::new(12.9898, 78.233))).sin() * 43_758.547)
}

#[cfg(test)]
#[path = "../../tests/unit/screen/brush.rs"]
mod tests;
