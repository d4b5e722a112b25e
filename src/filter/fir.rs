//! Streaming convolution via FIR filter
use arraydeque::{ArrayDeque, Wrapping};
use generic_array::GenericArray;
use itertools::izip;

use crate::buffer::{Length, SampleBuffer};
use crate::filter::Filter;
use crate::sample::Sample;


/// A Finite Impulse Response (FIR) filter.
///
/// Computes the same output-side sum as [`crate::signals::convolve1d`], one
/// sample at a time, keeping the last `M` inputs as history.
#[derive(Clone, Debug)]
pub struct FirFilter<T: Sample, M: Length<T>> {
    x: ArrayDeque<GenericArray<T, M>, Wrapping>,
    h: GenericArray<T, M>,
}


impl<T: Sample, M: Length<T>> FirFilter<T, M> {

    /// Returns a new FirFilter whose taps are the impulse response `h`
    pub fn new(h: &SampleBuffer<T, M>) -> FirFilter<T, M> {
        let mut filter = FirFilter {
            x: ArrayDeque::new(),
            h: h.clone().into_array(),
        };
        filter.reset();
        filter
    }

    /// Forgets all past input, as if only zeros had been seen.
    pub fn reset(&mut self) {
        self.x.clear();
        for _ in 0..self.x.capacity() {
            self.x.push_front(T::zero());
        }
    }

    pub fn taps(&self) -> &[T] {
        &self.h
    }
}

impl<T: Sample, M: Length<T>> Filter<T> for FirFilter<T, M> {

    /// Process one sample of the input signal and returns one sample of the
    /// output signal.
    fn process_one(&mut self, in_samp: T) -> T {

        // Shift in the newest value
        self.x.pop_back();
        self.x.push_front(in_samp);

        // Newest input pairs with h[0]
        let mut sum = T::zero();
        for (xi, hi) in izip!(self.x.iter(), self.h.iter()) {
            sum += *xi * *hi;
        }
        sum
    }
}
