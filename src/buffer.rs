//! Fixed-length sample storage with optional min/max bookkeeping
use std::cell::Cell;
use std::ops::Index;

use generic_array::typenum::NonZero;
use generic_array::{ArrayLength, GenericArray};
use num_traits::Float;

use crate::error::{DspError, Result};
use crate::sample::Sample;


/// How a buffer keeps its min/max statistics up to date as samples are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsPolicy {
    /// Running extremes over every value the buffer has ever held. Overwriting
    /// the current maximum with a smaller value does not lower the maximum.
    Historical,
    /// Extremes of the current contents. Overwriting an element that holds an
    /// extreme drops the cache and the next read rescans.
    Current,
    /// No bookkeeping at all. Every read is a full scan.
    Disabled,
}

impl Default for StatsPolicy {
    fn default() -> Self {
        StatsPolicy::Historical
    }
}

/// Type-level buffer length. Any non-zero `typenum` unsigned qualifies;
/// `U0` is rejected at compile time.
pub trait Length<T>: ArrayLength<T> + NonZero {}

impl<T, N> Length<T> for N where N: ArrayLength<T> + NonZero {}


/// Smallest and largest sample seen by a buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes<T> {
    pub min: T,
    pub max: T,
}

impl<T: Sample> Extremes<T> {
    fn of(value: T) -> Self {
        Extremes { min: value, max: value }
    }

    fn widen(self, value: T) -> Self {
        Extremes {
            min: Float::min(self.min, value),
            max: Float::max(self.max, value),
        }
    }

    /// `samples` is never empty: buffer lengths are non-zero.
    fn scan(samples: &[T]) -> Self {
        samples[1..].iter().fold(Extremes::of(samples[0]), |acc, &v| acc.widen(v))
    }
}


/// A buffer of exactly `N` samples, `N > 0`.
///
/// The length is part of the type, so two buffers of different lengths can
/// never be mixed up. Writes go through [`SampleBuffer::set`] so the cached
/// extremes can follow them; there is no `IndexMut`.
///
/// Statistics are cached in a `Cell`, which makes the buffer `!Sync`. Callers
/// sharing a buffer across threads must synchronise it themselves.
#[derive(Clone, Debug)]
pub struct SampleBuffer<T: Sample, N: Length<T>> {
    data: GenericArray<T, N>,
    policy: StatsPolicy,
    stats: Cell<Option<Extremes<T>>>,
}

impl<T: Sample, N: Length<T>> SampleBuffer<T, N> {

    /// Returns a zero-filled buffer tracking historical extremes.
    pub fn new() -> Self {
        Self::from_array(GenericArray::default())
    }

    /// Returns a zero-filled buffer using the given statistics policy.
    pub fn with_policy(policy: StatsPolicy) -> Self {
        Self::new().tracking(policy)
    }

    /// Wraps existing samples. Statistics are left unset and computed on the
    /// first read.
    pub fn from_array(data: GenericArray<T, N>) -> Self {
        SampleBuffer {
            data,
            policy: StatsPolicy::default(),
            stats: Cell::new(None),
        }
    }

    /// Copies `samples` into a new buffer. Fails unless `samples` holds
    /// exactly `N` values.
    pub fn from_slice(samples: &[T]) -> Result<Self> {
        let expected = N::to_usize();
        if samples.len() != expected {
            return Err(DspError::LengthMismatch { expected, actual: samples.len() });
        }
        Ok(Self::from_array(GenericArray::clone_from_slice(samples)))
    }

    /// Switches the statistics policy, discarding anything cached so far.
    pub fn tracking(mut self, policy: StatsPolicy) -> Self {
        self.policy = policy;
        self.stats = Cell::new(None);
        self
    }

    pub fn policy(&self) -> StatsPolicy {
        self.policy
    }

    /// Number of samples. Always `N`.
    #[inline]
    pub fn len(&self) -> usize {
        N::to_usize()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(DspError::IndexOutOfRange { index, len: self.len() })
    }

    /// Writes one sample and updates the statistics according to the policy.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(DspError::IndexOutOfRange { index, len });
        }

        match self.policy {
            StatsPolicy::Disabled => {}
            StatsPolicy::Historical => {
                // Fold in the contents as they were before this write.
                let seen = self.stats.get().unwrap_or_else(|| Extremes::scan(&self.data));
                self.stats.set(Some(seen.widen(value)));
            }
            StatsPolicy::Current => {
                if let Some(e) = self.stats.get() {
                    let previous = self.data[index];
                    if previous == e.min || previous == e.max {
                        log::trace!("extreme overwritten at index {}, dropping cached stats", index);
                        self.stats.set(None);
                    } else {
                        self.stats.set(Some(e.widen(value)));
                    }
                }
            }
        }

        self.data[index] = value;
        Ok(())
    }

    /// Smallest sample.
    pub fn min(&self) -> T {
        self.extremes().min
    }

    /// Largest sample.
    pub fn max(&self) -> T {
        self.extremes().max
    }

    /// Both extremes. The first read after construction (or after the cache
    /// was dropped) scans every sample; later reads are O(1) unless the
    /// policy is [`StatsPolicy::Disabled`].
    pub fn extremes(&self) -> Extremes<T> {
        if self.policy == StatsPolicy::Disabled {
            return Extremes::scan(&self.data);
        }
        if let Some(e) = self.stats.get() {
            return e;
        }
        let scanned = Extremes::scan(&self.data);
        self.stats.set(Some(scanned));
        scanned
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_array(self) -> GenericArray<T, N> {
        self.data
    }
}

impl<T: Sample, N: Length<T>> Default for SampleBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, N: Length<T>> From<GenericArray<T, N>> for SampleBuffer<T, N> {
    fn from(data: GenericArray<T, N>) -> Self {
        Self::from_array(data)
    }
}

/// Equality compares samples only; policy and cached stats are ignored.
impl<T: Sample, N: Length<T>> PartialEq for SampleBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Sample, N: Length<T>> Index<usize> for SampleBuffer<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T: Sample, N: Length<T>> IntoIterator for &'a SampleBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
