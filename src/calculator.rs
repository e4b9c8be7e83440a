//! Pure arithmetic over f64
//!
//! Total operations return `f64` directly; the two partial operations
//! (`divide`, `square_root`) return a `CalcResult` carrying the domain error.

use crate::errors::{CalcError, CalcResult};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails with [`CalcError::DivideByZero`] when the divisor is zero
/// (negative zero included); defined for every other pair of inputs.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// Non-negative real root. A negative input is a domain error, not a NaN.
pub fn square_root(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        return Err(CalcError::InvalidInput(
            "Cannot calculate square root of a negative number".to_string(),
        ));
    }
    Ok(x.sqrt())
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
