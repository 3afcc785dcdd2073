/// Stochastic mechanics: seeding and Gaussian draws.
/// Note: callers own the generator and pass `&mut` to every draw, so a
/// run's randomness is fully determined by its seed.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Deterministic generator for a run.
pub fn rng_from_seed(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Gaussian(0,1) via Box–Muller.
#[inline]
pub fn gaussian01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    // u1 in (0, 1] keeps ln finite.
    let u1 = 1.0 - uniform01(rng);
    let u2 = uniform01(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let t = 2.0 * std::f64::consts::PI * u2;
    r * t.cos()
}

/// Normal(mean, std_dev).
#[inline]
pub fn normal<R: RngCore + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    mean + std_dev * gaussian01(rng)
}
