//! Numeric element types a buffer can hold
use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::{Float, FromPrimitive};


/// Scalar sample type: any float that can be built from an `f64` draw.
/// In practice `f32` and `f64`.
pub trait Sample: Float + FromPrimitive + AddAssign + Default + Debug {}

impl<T> Sample for T where T: Float + FromPrimitive + AddAssign + Default + Debug {}


/// ------------------------------------------------------------------------------------------------
/// Module unit tests
/// ------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn halve<T: Sample>(v: T) -> T {
        v / (T::one() + T::one())
    }

    #[test]
    fn test_float_types_are_samples() {
        assert_eq!(halve(3.0f64), 1.5);
        assert_eq!(halve(3.0f32), 1.5);
        assert_eq!(f32::from_f64(0.25), Some(0.25f32));
        // NaN never wins a min/max comparison
        assert_eq!(Float::max(std::f64::NAN, 2.0), 2.0);
    }
}
