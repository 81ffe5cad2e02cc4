use crate::error::PicogradError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};

/// Source of initial values for weights and biases.
///
/// Any `FnMut() -> f64` closure is an initializer, so callers can inject their
/// own generator. Implementations must not touch any graph.
pub trait Initializer {
    fn sample(&mut self) -> f64;
}

impl<F> Initializer for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Uniform samples in `[low, high)` from an owned, seeded generator.
#[derive(Debug, Clone)]
pub struct UniformInit {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl UniformInit {
    /// Uniform in `[-1, 1)`, the default range for weights and biases.
    pub fn new(seed: u64) -> Self {
        UniformInit {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(-1.0, 1.0),
        }
    }

    /// Uniform in `[low, high)`.
    ///
    /// # Errors
    /// `InvalidInitializer` if the bounds are not finite or `low >= high`.
    pub fn with_range(low: f64, high: f64, seed: u64) -> Result<Self, PicogradError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(PicogradError::InvalidInitializer(format!(
                "uniform range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        Ok(UniformInit {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(low, high),
        })
    }
}

impl Initializer for UniformInit {
    fn sample(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

/// Gaussian samples from an owned, seeded generator.
#[derive(Debug, Clone)]
pub struct NormalInit {
    rng: StdRng,
    dist: Normal<f64>,
}

impl NormalInit {
    /// # Errors
    /// `InvalidInitializer` if `std` is negative or not finite.
    pub fn new(mean: f64, std: f64, seed: u64) -> Result<Self, PicogradError> {
        // Normal::new accepts a negative std.
        if !std.is_finite() || std < 0.0 {
            return Err(PicogradError::InvalidInitializer(format!(
                "normal std must be finite and non-negative, got {}",
                std
            )));
        }
        let dist = Normal::new(mean, std)
            .map_err(|e| PicogradError::InvalidInitializer(format!("normal({}, {}): {}", mean, std, e)))?;
        Ok(NormalInit {
            rng: StdRng::seed_from_u64(seed),
            dist,
        })
    }
}

impl Initializer for NormalInit {
    fn sample(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantInit(pub f64);

impl Initializer for ConstantInit {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
