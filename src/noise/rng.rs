/// Small deterministic random source (SplitMix64).
///
/// Every random choice in the crate (bristle layout, particle jitter, noise
/// permutation) flows through a seeded `Rng64` so that identical configs
/// produce identical strokes.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f32_01(&mut self) -> f32 {
        // 24 bits of precision.
        let v = self.next_u64() >> 40;
        (v as f32) * (1.0 / ((1u64 << 24) as f32))
    }

    /// Uniform value in `[lo, hi)`; returns `lo` when the range is empty.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_f32_01()
    }

    /// Uniform value in `[-1, 1)`.
    pub fn signed_f32(&mut self) -> f32 {
        self.next_f32_01() * 2.0 - 1.0
    }

    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u64() % n as u64) as usize
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/rng.rs"]
mod tests;
