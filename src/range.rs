//! Numeric range generation over a closed integer-or-real domain.
//!
//! [`range_by`] generates the arithmetic sequence `start, start + step,
//! start + 2 * step, ...` in one of two modes:
//!
//! - **integer mode**, when start, end, and step are all integers: the
//!   upper bound is exclusive, as in `0..n`;
//! - **real mode**, when any argument is real: the upper bound is
//!   inclusive.
//!
//! Degenerate inputs are not errors. A step running against the
//! interval's direction yields an empty sequence; a step larger than the
//! interval yields the singleton `[start]`. The only error is a step of
//! zero.
//!
//! # Examples
//!
//! ```rust
//! use seqmap::{Numeric, range, range_by, range_to};
//!
//! assert_eq!(range_to(5), vec![0.into(), 1.into(), 2.into(), 3.into(), 4.into()]);
//! assert_eq!(range(5, 8), vec![5.into(), 6.into(), 7.into()]);
//! assert_eq!(range_by(10, 5, -3).unwrap(), vec![10.into(), 7.into()]);
//! assert_eq!(range_by(5, 10, -1).unwrap(), Vec::<Numeric>::new());
//! assert_eq!(
//!     range_by(0.0, 1.0, 0.5).unwrap(),
//!     vec![Numeric::Real(0.0), Numeric::Real(0.5), Numeric::Real(1.0)],
//! );
//! ```

use crate::error::ZeroStepError;

/// A number drawn from the closed integer-or-real union.
///
/// Integer-mode ranges yield [`Numeric::Int`] elements, real-mode ranges
/// yield [`Numeric::Real`]. Equality is strict: `Int(1)` and `Real(1.0)`
/// are distinct values, just as the corresponding keys would be.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Numeric {
    /// An integer.
    Int(i64),
    /// A real number.
    Real(f64),
}

impl Numeric {
    /// The value as an `f64`, converting integers.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// The integer value, if this is an integer.
    #[inline]
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Real(_) => None,
        }
    }

    const fn is_zero(self) -> bool {
        match self {
            Self::Int(value) => value == 0,
            Self::Real(value) => value == 0.0,
        }
    }
}

impl From<i64> for Numeric {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Numeric {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Numeric {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Real(value) => write!(formatter, "{value}"),
        }
    }
}

/// Generates the sequence `0, 1, ..., end - 1`.
///
/// Equivalent to `range(0, end)`. With a real `end` the bound is
/// inclusive, following the mode rules of [`range_by`].
///
/// # Examples
///
/// ```rust
/// use seqmap::{Numeric, range_to};
///
/// assert_eq!(range_to(3), vec![0.into(), 1.into(), 2.into()]);
/// assert!(range_to(0).is_empty());
/// ```
#[must_use]
pub fn range_to(end: impl Into<Numeric>) -> Vec<Numeric> {
    range(Numeric::Int(0), end)
}

/// Generates the sequence from `start` toward `end` with a step of one.
///
/// Integer mode (both arguments integers) excludes `end`; real mode
/// includes it.
///
/// # Examples
///
/// ```rust
/// use seqmap::{Numeric, range};
///
/// assert_eq!(range(-2, 1), vec![(-2).into(), (-1).into(), 0.into()]);
/// assert!(range(10, 5).is_empty());
/// ```
#[must_use]
pub fn range(start: impl Into<Numeric>, end: impl Into<Numeric>) -> Vec<Numeric> {
    // A unit step is never zero, so the zero-step check does not apply.
    generate(start.into(), end.into(), Numeric::Int(1))
}

/// Generates the arithmetic sequence from `start` toward `end` stepping
/// by `step`.
///
/// Integer mode applies when all three arguments are integers and makes
/// the upper bound exclusive; otherwise real mode applies and the bound
/// is inclusive. A step whose sign disagrees with the direction of
/// `end - start` yields an empty sequence; a step whose magnitude exceeds
/// the interval yields `[start]`.
///
/// # Errors
///
/// Returns [`ZeroStepError`] when `step` is numerically zero.
///
/// # Examples
///
/// ```rust
/// use seqmap::{Numeric, range_by};
///
/// assert_eq!(range_by(0, 6, 2).unwrap(), vec![0.into(), 2.into(), 4.into()]);
/// assert_eq!(range_by(5, 0, -1).unwrap().len(), 5);
/// assert_eq!(range_by(10, 5, -10).unwrap(), vec![10.into()]);
/// assert!(range_by(10, 5, 10).unwrap().is_empty());
/// assert!(range_by(1, 2, 0).is_err());
/// ```
pub fn range_by(
    start: impl Into<Numeric>,
    end: impl Into<Numeric>,
    step: impl Into<Numeric>,
) -> Result<Vec<Numeric>, ZeroStepError> {
    let start = start.into();
    let end = end.into();
    let step = step.into();
    if step.is_zero() {
        return Err(ZeroStepError);
    }
    Ok(generate(start, end, step))
}

/// Dispatches a nonzero-step range to integer or real mode.
fn generate(start: Numeric, end: Numeric, step: Numeric) -> Vec<Numeric> {
    match (start, end, step) {
        (Numeric::Int(start), Numeric::Int(end), Numeric::Int(step)) => {
            integer_range(start, end, step)
        }
        _ => real_range(start.as_f64(), end.as_f64(), step.as_f64()),
    }
}

/// Integer mode: the exclusive `end` is first pulled one unit toward
/// `start`'s side, turning the problem into inclusive stepping.
fn integer_range(start: i64, end: i64, step: i64) -> Vec<Numeric> {
    let bound = if step < 0 {
        end.saturating_add(1)
    } else {
        end.saturating_sub(1)
    };
    if (start > bound) != (step < 0) {
        return Vec::new();
    }
    if step.unsigned_abs() > start.abs_diff(bound) {
        return vec![Numeric::Int(start)];
    }
    let mut result = Vec::new();
    let mut current = start;
    while if step < 0 {
        current >= bound
    } else {
        current <= bound
    } {
        result.push(Numeric::Int(current));
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    result
}

/// Real mode: the bound is inclusive as given.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn real_range(start: f64, end: f64, step: f64) -> Vec<Numeric> {
    if (start > end) != (step < 0.0) {
        return Vec::new();
    }
    if step.abs() > (end - start).abs() {
        return vec![Numeric::Real(start)];
    }
    let steps = ((end - start) / step).floor();
    if !steps.is_finite() || steps < 0.0 {
        return vec![Numeric::Real(start)];
    }
    let steps = steps as u64;
    let mut result = Vec::with_capacity(steps as usize + 1);
    for count in 0..=steps {
        result.push(Numeric::Real(step.mul_add(count as f64, start)));
    }
    result
}

// =============================================================================
// Tests
// =============================================================================
