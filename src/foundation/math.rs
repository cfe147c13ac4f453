use crate::foundation::core::Vec3;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_f32(&mut self, v: f32) {
        // -0.0 and 0.0 describe the same point.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Structural fingerprint of a control-point list, used to memoize the spline.
pub(crate) fn fingerprint_points(points: &[Vec3]) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(points.len() as u64);
    for p in points {
        h.write_f32(p.x);
        h.write_f32(p.y);
        h.write_f32(p.z);
    }
    h.finish()
}

pub(crate) fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// GLSL-style smoothstep.
pub(crate) fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub(crate) fn fract(v: f32) -> f32 {
    v - v.floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
