//! Convolution and signal decomposition over fixed-length buffers
//!
//! Every transform borrows its inputs and returns freshly allocated buffers.
//! Output lengths are computed at the type level, so a convolution of a
//! 12-sample signal with a 4-tap impulse response is statically a
//! 15-sample buffer.
use std::ops::{Add, Sub};

use generic_array::typenum::{Sub1, Sum, B1};
use generic_array::GenericArray;
use itertools::izip;

use crate::buffer::{Length, SampleBuffer};
use crate::sample::Sample;


/// Length of a full convolution of `N` samples with `M` taps: `N + M - 1`.
pub type ConvolutionLength<N, M> = Sub1<Sum<N, M>>;

/// Full linear convolution of the input signal `x` with the impulse
/// response `h`, computed output-side:
///
/// `y[i] = sum_{j=0}^{M-1} h[j] * x[i - j]`
///
/// Terms with `i - j` outside `0..N` contribute nothing, which is the same
/// as zero-padding `x` on both sides.
pub fn convolve1d<T, N, M>(x: &SampleBuffer<T, N>, h: &SampleBuffer<T, M>) -> SampleBuffer<T, ConvolutionLength<N, M>>
where
    T: Sample,
    N: Length<T> + Add<M>,
    M: Length<T>,
    Sum<N, M>: Sub<B1>,
    ConvolutionLength<N, M>: Length<T>,
{
    log::debug!("Convolving {} samples with a {}-tap impulse response", x.len(), h.len());
    let mut y: GenericArray<T, ConvolutionLength<N, M>> = GenericArray::default();
    convolve_into(x.as_slice(), h.as_slice(), &mut y);
    SampleBuffer::from_array(y)
}

fn convolve_into<T: Sample>(x: &[T], h: &[T], y: &mut [T]) {
    for (i, out) in y.iter_mut().enumerate() {
        // Only taps whose input index i - j lands inside x contribute
        let lo = (i + 1).saturating_sub(x.len());
        let hi = std::cmp::min(i + 1, h.len());
        if lo >= hi {
            *out = T::zero();
            continue;
        }

        let mut sum = T::zero();
        for (hj, xk) in izip!(h[lo..hi].iter(), x[i + 1 - hi..i + 1 - lo].iter().rev()) {
            sum += *hj * *xk;
        }
        *out = sum;
    }
}


/// A signal split into two components of the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition<T: Sample, N: Length<T>> {
    pub even: SampleBuffer<T, N>,
    pub odd: SampleBuffer<T, N>,
}

impl<T: Sample, N: Length<T>> Decomposition<T, N> {
    fn from_arrays(even: GenericArray<T, N>, odd: GenericArray<T, N>) -> Self {
        Decomposition {
            even: SampleBuffer::from_array(even),
            odd: SampleBuffer::from_array(odd),
        }
    }

    pub fn into_pair(self) -> (SampleBuffer<T, N>, SampleBuffer<T, N>) {
        (self.even, self.odd)
    }

    /// Adds the components back together sample by sample.
    pub fn synthesize(&self) -> SampleBuffer<T, N> {
        let mut sum: GenericArray<T, N> = GenericArray::default();
        for (s, e, o) in izip!(sum.iter_mut(), self.even.iter(), self.odd.iter()) {
            *s = *e + *o;
        }
        SampleBuffer::from_array(sum)
    }
}


/// Splits a signal into parts symmetric and antisymmetric about its
/// midpoint `N / 2`:
///
/// `even[i] = (x[i] + x[N - i]) / 2`, `odd[i] = (x[i] - x[N - i]) / 2`
///
/// for `i` in `1..N`. Sample 0 has no mirror in that range and stays zero
/// in both outputs, so `synthesize()` reproduces every sample except the
/// first.
pub fn decompose_even_odd<T, N>(buffer: &SampleBuffer<T, N>) -> Decomposition<T, N>
where
    T: Sample,
    N: Length<T>,
{
    let x = buffer.as_slice();
    let n = x.len();
    let mut even: GenericArray<T, N> = GenericArray::default();
    let mut odd: GenericArray<T, N> = GenericArray::default();

    let two = T::one() + T::one();

    for i in 1..n {
        let mirror = x[n - i];
        even[i] = (x[i] + mirror) / two;
        odd[i] = (x[i] - mirror) / two;
    }

    Decomposition::from_arrays(even, odd)
}

/// Splits a signal into its even-indexed and odd-indexed samples. Both
/// outputs keep the full length, with zeros where the other component has
/// its samples.
pub fn decompose_interlaced<T, N>(buffer: &SampleBuffer<T, N>) -> Decomposition<T, N>
where
    T: Sample,
    N: Length<T>,
{
    let mut even: GenericArray<T, N> = GenericArray::default();
    let mut odd: GenericArray<T, N> = GenericArray::default();

    for (i, (x, e, o)) in izip!(buffer.iter(), even.iter_mut(), odd.iter_mut()).enumerate() {
        if i % 2 == 0 {
            *e = *x;
        } else {
            *o = *x;
        }
    }

    Decomposition::from_arrays(even, odd)
}
