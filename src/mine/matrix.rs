use na::RealField;
use nalgebra as na;

/**
 * Checks a value is not exactly zero.
 * IEC 559 NaN values are never equal and therefore pass.
 */
pub fn check_non_zero<'a, N: RealField>(value: N, message: &'a str) -> Result<N, &'a str> {
    if value != N::zero() {
        Result::Ok(value)
    } else {
        Result::Err(message)
    }
}

/**
 * Checks a value is strictly positive.
 * IEC 559 NaN values are never true and therefore fail.
 */
pub fn check_positive<'a, N: RealField>(value: N, message: &'a str) -> Result<N, &'a str> {
    if value > N::zero() {
        Result::Ok(value)
    } else {
        Result::Err(message)
    }
}

/// Checks two dimension sizes agree.
pub fn check_same_dim(a: usize, b: usize, message: &'static str) -> Result<(), &'static str> {
    if a == b {
        Result::Ok(())
    } else {
        Result::Err(message)
    }
}
