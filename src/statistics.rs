//! Fill buffers with synthetic Gaussian noise
use rand::distributions::{Distribution, Normal};
use rand::rngs::StdRng;
use rand::{FromEntropy, Rng, SeedableRng};

use crate::buffer::{Length, SampleBuffer};
use crate::error::{DspError, Result};
use crate::sample::Sample;


/// Parameters for a [`NormalSampler`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Distribution mean (default: 0.0)
    pub mean: f64,

    /// Standard deviation (default: 1.0). Zero makes every draw equal `mean`.
    pub std_dev: f64,

    /// Fixed PRNG seed. `None` seeds from OS entropy, so fills differ from
    /// run to run.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            mean: 0.0,
            std_dev: 1.0,
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}


/// Gaussian noise source owning its own PRNG.
#[derive(Clone, Debug)]
pub struct NormalSampler {
    rng: StdRng,
    distribution: Normal,
    config: SamplerConfig,
}

impl NormalSampler {

    /// Entropy-seeded sampler drawing from `Normal(mean, std_dev)`.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        Self::from_config(&SamplerConfig::default().with_mean(mean).with_std_dev(std_dev))
    }

    /// Sampler whose output is fully determined by `seed`.
    pub fn seeded(mean: f64, std_dev: f64, seed: u64) -> Result<Self> {
        Self::from_config(&SamplerConfig { mean, std_dev, seed: Some(seed) })
    }

    pub fn from_config(config: &SamplerConfig) -> Result<Self> {
        let distribution = normal(config.mean, config.std_dev)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(NormalSampler { rng, distribution, config: *config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draws one value.
    pub fn draw<T: Sample>(&mut self) -> T {
        to_sample(self.distribution.sample(&mut self.rng))
    }

    /// Overwrites every element of `buffer` with an independent draw.
    pub fn fill<T, N>(&mut self, buffer: &mut SampleBuffer<T, N>) -> Result<()>
    where
        T: Sample,
        N: Length<T>,
    {
        log::debug!(
            "Filling {} samples from N({}, {})",
            buffer.len(),
            self.config.mean,
            self.config.std_dev
        );
        fill_from(buffer, &self.distribution, &mut self.rng)
    }
}


/// Overwrites every element of `buffer` with a draw from
/// `Normal(mean, std_dev)`, using the entropy-seeded thread-local PRNG.
///
/// Writes go through [`SampleBuffer::set`], so the buffer's statistics
/// follow. A non-finite mean or a negative or non-finite `std_dev` is
/// rejected before anything is written.
pub fn populate_normal<T, N>(buffer: &mut SampleBuffer<T, N>, mean: f64, std_dev: f64) -> Result<()>
where
    T: Sample,
    N: Length<T>,
{
    let distribution = normal(mean, std_dev)?;
    log::debug!("Populating {} samples from N({}, {})", buffer.len(), mean, std_dev);
    fill_from(buffer, &distribution, &mut rand::thread_rng())
}

/// Zero-mean form of [`populate_normal`].
pub fn populate_standard<T, N>(buffer: &mut SampleBuffer<T, N>, std_dev: f64) -> Result<()>
where
    T: Sample,
    N: Length<T>,
{
    populate_normal(buffer, 0.0, std_dev)
}


fn normal(mean: f64, std_dev: f64) -> Result<Normal> {
    if !mean.is_finite() {
        return Err(DspError::InvalidParameter(format!("mean must be finite, got {}", mean)));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(DspError::InvalidParameter(format!(
            "standard deviation must be finite and non-negative, got {}",
            std_dev
        )));
    }
    Ok(Normal::new(mean, std_dev))
}

/// Both `f32` and `f64` accept every `f64`; anything else reads as NaN.
fn to_sample<T: Sample>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::nan)
}

fn fill_from<T, N, R>(buffer: &mut SampleBuffer<T, N>, distribution: &Normal, rng: &mut R) -> Result<()>
where
    T: Sample,
    N: Length<T>,
    R: Rng + ?Sized,
{
    for i in 0..buffer.len() {
        buffer.set(i, to_sample(distribution.sample(rng)))?;
    }
    Ok(())
}


/// ------------------------------------------------------------------------------------------------
/// Module unit tests
/// ------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use generic_array::typenum::{U16, U16384};

    fn moments(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        (mean, var.sqrt())
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut buf: SampleBuffer<f64, U16384> = SampleBuffer::new();
        let mut sampler = NormalSampler::seeded(0.0, 1.0, 42).unwrap();
        sampler.fill(&mut buf).unwrap();

        let (mean, std_dev) = moments(buf.as_slice());
        assert_approx_eq!(mean, 0.0, 0.05);
        assert_approx_eq!(std_dev, 1.0, 0.05);
    }

    #[test]
    fn test_shifted_moments_from_thread_rng() {
        let mut buf: SampleBuffer<f64, U16384> = SampleBuffer::new();
        populate_normal(&mut buf, -3.0, 0.5).unwrap();

        let (mean, std_dev) = moments(buf.as_slice());
        assert_approx_eq!(mean, -3.0, 0.05);
        assert_approx_eq!(std_dev, 0.5, 0.05);
    }

    #[test]
    fn test_zero_std_dev_is_constant() {
        let mut buf: SampleBuffer<f64, U16> = SampleBuffer::new();
        populate_normal(&mut buf, 5.0, 0.0).unwrap();
        assert!(buf.iter().all(|&v| v == 5.0));

        let mut buf: SampleBuffer<f32, U16> = SampleBuffer::new();
        populate_standard(&mut buf, 0.0).unwrap();
        assert!(buf.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_fill_updates_statistics() {
        let mut buf: SampleBuffer<f64, U16> = SampleBuffer::new();
        let mut sampler = NormalSampler::from_config(&SamplerConfig::default().with_mean(100.0).with_seed(3)).unwrap();
        sampler.fill(&mut buf).unwrap();

        // Historical extremes keep the zero fill the buffer started with
        assert_eq!(buf.min(), 0.0);
        let largest = buf.iter().cloned().fold(std::f64::MIN, f64::max);
        assert_eq!(buf.max(), largest);
    }

    #[test]
    fn test_seeded_samplers_repeat() {
        let mut a: SampleBuffer<f64, U16> = SampleBuffer::new();
        let mut b: SampleBuffer<f64, U16> = SampleBuffer::new();
        NormalSampler::seeded(1.0, 2.0, 99).unwrap().fill(&mut a).unwrap();
        NormalSampler::seeded(1.0, 2.0, 99).unwrap().fill(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters_leave_buffer_untouched() {
        let mut buf: SampleBuffer<f64, U16> = SampleBuffer::new();
        assert!(populate_normal(&mut buf, 0.0, -1.0).is_err());
        assert!(populate_normal(&mut buf, std::f64::NAN, 1.0).is_err());
        assert!(NormalSampler::new(0.0, std::f64::INFINITY).is_err());
        assert!(buf.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_default_config() {
        let config = SamplerConfig::default();
        assert_eq!(config.mean, 0.0);
        assert_eq!(config.std_dev, 1.0);
        assert_eq!(config.seed, None);

        let mut sampler = NormalSampler::from_config(&config).unwrap();
        let v: f32 = sampler.draw();
        assert!(v.is_finite());
    }
}
