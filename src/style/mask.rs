/// Single-channel 8-bit alpha image, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AlphaMask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl AlphaMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Nearest-texel lookup with `u, v` in `[0, 1]`, as a float alpha.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 0.0;
        }
        let x = (u.clamp(0.0, 1.0) * (self.width - 1) as f32).round() as u32;
        let y = (v.clamp(0.0, 1.0) * (self.height - 1) as f32).round() as u32;
        self.get(x, y).map_or(0.0, |a| f32::from(a) / 255.0)
    }

    /// Fraction of texels with non-zero alpha.
    pub fn coverage(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let lit = self.data.iter().filter(|&&a| a > 0).count();
        lit as f32 / self.data.len() as f32
    }
}
