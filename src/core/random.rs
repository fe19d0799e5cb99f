use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seed used when no seed is configured and no host entropy exists.
pub const FALLBACK_SEED: u64 = 12345;

/// Random source for spawn parameters (sizes, colors, positions, spin).
pub struct DemoRng {
    inner: SmallRng,
}

impl DemoRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Use `seed` when given; otherwise `Math.random()` on wasm and a fixed
    /// seed natively so tests stay reproducible.
    pub fn from_seed_or_host(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::seeded(host_seed()),
        }
    }

    /// Integer in `[min, max)`; `min` when the range is empty.
    pub fn box_size(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..max)
    }

    /// Color channel in `[0, 255)`.
    pub fn channel(&mut self) -> u8 {
        self.inner.gen_range(0..255u8)
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Uniform in `[lo, hi)`; `lo` when the range is empty.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            lo + (hi - lo) * self.unit()
        } else {
            lo
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn host_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn host_seed() -> u64 {
    FALLBACK_SEED
}
