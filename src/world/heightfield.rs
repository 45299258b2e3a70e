use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Continuous height function over the ground plane, returning values in
/// [0, 1]. Defined everywhere, not just at grid points, so terrain builders
/// can sample arbitrarily close neighbors for normal estimation.
pub trait HeightSampler {
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Any plain closure works as a sampler; handy for synthetic terrains.
impl<F> HeightSampler for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Classic 2D Perlin gradient noise over a permutation table shuffled from an
/// integer seed. Deterministic: the same seed and coordinates always produce
/// the same height.
pub struct PerlinHeightField {
    perm: [usize; 512],
}

impl PerlinHeightField {
    pub fn new(seed: u64) -> Self {
        let mut table: [usize; 256] = core::array::from_fn(|i| i);
        let mut rng = StdRng::seed_from_u64(seed);
        table.shuffle(&mut rng);

        // doubled so lookups never wrap mid-expression
        let mut perm = [0usize; 512];
        for (i, entry) in perm.iter_mut().enumerate() {
            *entry = table[i & 255];
        }
        Self { perm }
    }

    fn fade(t: f32) -> f32 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    fn gradient(hash: usize, x: f32, y: f32) -> f32 {
        match hash & 3 {
            0 => x + y,
            1 => -x + y,
            2 => x - y,
            _ => -x - y,
        }
    }

    /// Raw noise in roughly [-1, 1].
    fn noise(&self, x: f32, y: f32) -> f32 {
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let xf = x - x.floor();
        let yf = y - y.floor();

        let aa = self.perm[self.perm[xi] + yi];
        let ab = self.perm[self.perm[xi] + yi + 1];
        let ba = self.perm[self.perm[xi + 1] + yi];
        let bb = self.perm[self.perm[xi + 1] + yi + 1];

        let u = Self::fade(xf);
        let v = Self::fade(yf);

        let bottom = Self::lerp(
            Self::gradient(aa, xf, yf),
            Self::gradient(ba, xf - 1.0, yf),
            u,
        );
        let top = Self::lerp(
            Self::gradient(ab, xf, yf - 1.0),
            Self::gradient(bb, xf - 1.0, yf - 1.0),
            u,
        );
        Self::lerp(bottom, top, v)
    }
}

impl HeightSampler for PerlinHeightField {
    fn sample(&self, x: f32, y: f32) -> f32 {
        ((self.noise(x, y) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
