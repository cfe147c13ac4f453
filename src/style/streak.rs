use crate::{
    foundation::math::{lerp, smoothstep},
    noise::simplex::Noise2D,
    style::mask::AlphaMask,
};

/// Fragments with less alpha than this are discarded.
pub const DISCARD_THRESHOLD: f32 = 0.1;

/// Dry-brush streak texture: noise bands across the stroke, fading toward
/// both edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StreakMask {
    pub size: u32,
    /// Noise frequency across the stroke.
    pub frequency_u: f32,
    /// Noise frequency along the stroke.
    pub frequency_v: f32,
    /// Normalised noise above this becomes a gap.
    pub threshold: f32,
}

impl Default for StreakMask {
    fn default() -> Self {
        Self {
            size: 256,
            frequency_u: 20.0,
            frequency_v: 60.0,
            threshold: 0.6,
        }
    }
}

impl StreakMask {
    pub fn alpha_at(&self, noise: &Noise2D, u: f32, v: f32) -> f32 {
        let center_bias = 1.0 - (u - 0.5).abs() * 2.0;
        let gradient = smoothstep(0.0, 1.0, center_bias);
        let streaks = (noise.sample(u * self.frequency_u, v * self.frequency_v) + 1.0) * 0.5;
        let alpha = if streaks > self.threshold { 0.0 } else { 1.0 };
        alpha * gradient
    }

    pub fn generate(&self, noise: &Noise2D) -> AlphaMask {
        let size = self.size.max(2);
        let mut mask = AlphaMask::new(size, size);
        let denom = (size - 1) as f32;
        for y in 0..size {
            for x in 0..size {
                let a = self.alpha_at(noise, x as f32 / denom, y as f32 / denom);
                mask.data[(y * size + x) as usize] = (a * 255.0) as u8;
            }
        }
        mask
    }
}

/// Final stroke alpha: solid body, with the streak texture showing through
/// over the last tenth of `v`.
pub fn tip_alpha(streak: f32, v: f32) -> f32 {
    let tip_taper = smoothstep(0.9, 1.0, v);
    lerp(streak, 1.0, 1.0 - tip_taper)
}

pub fn is_discarded(alpha: f32) -> bool {
    alpha < DISCARD_THRESHOLD
}

#[cfg(test)]
#[path = "../../tests/unit/style/streak.rs"]
mod tests;
