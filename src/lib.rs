//! Fixed-length sample buffers and the basic signal transforms built on them.
//!
//! Buffer lengths live in the type system (`generic_array::typenum`), so a
//! 12-sample signal convolved with a 4-tap impulse response is statically a
//! 15-sample buffer:
//!
//! ```
//! use libdsp::typenum::{U4, U12};
//! use libdsp::{convolve1d, SampleBuffer};
//!
//! let mut x: SampleBuffer<f64, U12> = SampleBuffer::new();
//! for i in 4..8 {
//!     x.set(i, 1.0)?;
//! }
//! let h = SampleBuffer::<f64, U4>::from_slice(&[0.0, 0.5, -0.2, -0.1])?;
//!
//! let y = convolve1d(&x, &h);
//! assert_eq!(y.len(), 15);
//! assert_eq!(x.max(), 1.0);
//! # Ok::<(), libdsp::DspError>(())
//! ```
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod buffer;
pub mod error;
pub mod filter;
pub mod sample;
pub mod signals;
pub mod statistics;

pub use generic_array::typenum;

pub use buffer::{Extremes, Length, SampleBuffer, StatsPolicy};
pub use error::{DspError, Result};
pub use filter::fir::FirFilter;
pub use filter::Filter;
pub use sample::Sample;
pub use signals::{convolve1d, decompose_even_odd, decompose_interlaced, ConvolutionLength, Decomposition};
pub use statistics::{populate_normal, populate_standard, NormalSampler, SamplerConfig};

/// Buffer of double-precision samples, the type every demo plots.
pub type RealBuffer<N> = SampleBuffer<f64, N>;
