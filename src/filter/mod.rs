//! Sample-at-a-time filtering
use generic_array::GenericArray;
use itertools::izip;

use crate::buffer::{Length, SampleBuffer};
use crate::sample::Sample;

pub mod fir;

/// Defines shared behavior for all filter implementations.
pub trait Filter<T: Sample> {
    /// Process a single sample.
    fn process_one(&mut self, in_samp: T) -> T;

    /// Processes a whole buffer, returning one output sample per input sample.
    /// The default implementation simply calls process_one for each input sample,
    /// which is sufficient for most implementations.
    fn process<N: Length<T>>(&mut self, input: &SampleBuffer<T, N>) -> SampleBuffer<T, N> {
        let mut output: GenericArray<T, N> = GenericArray::default();
        for (in_samp, out_samp) in izip!(input.iter(), output.iter_mut()) {
            *out_samp = self.process_one(*in_samp);
        }
        SampleBuffer::from_array(output)
    }
}
