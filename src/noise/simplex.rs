use crate::noise::rng::Rng64;

const F2: f32 = 0.366_025_42; // (sqrt(3) - 1) / 2
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

const GRADIENTS: [[f32; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Seeded 2D simplex noise.
///
/// Output lies in `[-1, 1]` and is continuous in both inputs. The only state is
/// the permutation table fixed at construction, so a `Noise2D` can be shared
/// freely and sampled thousands of times per frame.
#[derive(Clone)]
pub struct Noise2D {
    seed: u64,
    perm: [u8; 512],
}

impl std::fmt::Debug for Noise2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Noise2D").field("seed", &self.seed).finish()
    }
}

impl Noise2D {
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        Rng64::new(seed).shuffle(&mut table);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { seed, perm }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let g0 = self.gradient(ii, jj);
        let g1 = self.gradient(ii + i1, jj + j1);
        let g2 = self.gradient(ii + 1, jj + 1);

        let n = corner(g0, x0, y0) + corner(g1, x1, y1) + corner(g2, x2, y2);
        (70.0 * n).clamp(-1.0, 1.0)
    }

    fn gradient(&self, i: usize, j: usize) -> [f32; 2] {
        let idx = self.perm[i + usize::from(self.perm[j])] as usize % GRADIENTS.len();
        GRADIENTS[idx]
    }
}

fn corner(g: [f32; 2], x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (g[0] * x + g[1] * y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/simplex.rs"]
mod tests;
