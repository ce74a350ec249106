//! Seeded 2D simplex noise field.
//!
//! A field is built from a stream, not from a raw integer seed, so it shares
//! the stream's determinism: the same scoped seed always yields the same field.

use noise::{NoiseFn, Simplex};
use rand::Rng;

/// Continuous scalar field over the horizontal plane, values in `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct NoiseField {
    noise: Simplex,
}

impl NoiseField {
    /// Creates a field, consuming one `u32` from `rng` as the simplex seed.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            noise: Simplex::new(rng.random::<u32>()),
        }
    }

    /// Raw sample at `(x, z)`, clamped to `[-1, 1]`.
    #[inline]
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        self.noise.get([x, z]).clamp(-1.0, 1.0)
    }

    /// Sample at `(x / scale, z / scale)` mapped to `[0, amplitude]`.
    #[inline]
    pub fn normalized(&self, x: f64, z: f64, scale: f64, amplitude: f64) -> f64 {
        (self.sample(x / scale, z / scale) + 1.0) / 2.0 * amplitude
    }

    /// Shorthand for [`NoiseField::normalized`] with unit amplitude.
    #[inline]
    pub fn unit(&self, x: f64, z: f64, scale: f64) -> f64 {
        self.normalized(x, z, scale, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive_stream;

    const EPSILON: f64 = 1e-12;

    fn field(seed: &str) -> NoiseField {
        NoiseField::from_rng(&mut derive_stream(seed, ""))
    }

    #[test]
    fn test_determinism_same_seed_same_coord() {
        let a = field("beach_42");
        let b = field("beach_42");
        for i in 0..50 {
            let (x, z) = (i as f64 * 0.37, i as f64 * 1.13);
            assert!((a.sample(x, z) - b.sample(x, z)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_different_seeds_produce_different_fields() {
        let a = field("beach_1");
        let b = field("beach_999");
        let differs = (0..64).any(|i| {
            let x = i as f64 * 0.31 + 0.5;
            (a.sample(x, 0.7) - b.sample(x, 0.7)).abs() > EPSILON
        });
        assert!(differs);
    }

    #[test]
    fn test_normalized_within_amplitude() {
        let f = field("range");
        for x in 0..64 {
            for z in 0..64 {
                let v = f.normalized(x as f64, z as f64, 30.0, 5.0);
                assert!((0.0..=5.0).contains(&v), "{v} at ({x}, {z})");
                let u = f.unit(x as f64, z as f64, 20.0);
                assert!((0.0..=1.0).contains(&u));
            }
        }
    }

    #[test]
    fn test_smooth_at_unit_steps_after_scaling() {
        let f = field("smooth");
        let amplitude = 10.0;
        for x in 0..200 {
            let a = f.normalized(x as f64, 3.0, 40.0, amplitude);
            let b = f.normalized(x as f64 + 1.0, 3.0, 40.0, amplitude);
            assert!(
                (a - b).abs() < amplitude * 0.25,
                "jump of {} between x={x} and x={}",
                (a - b).abs(),
                x + 1
            );
        }
    }

    #[test]
    fn test_zero_amplitude_returns_zero() {
        let f = field("flat");
        assert!(f.normalized(12.0, 34.0, 10.0, 0.0).abs() < EPSILON);
    }
}
