//! Witness type for confidence values bounded to [0.0, 1.0].
//!
//! Extraction confidence and completeness are both unit-interval scores.
//! They come from different formulas (a weighted slot sum vs. a filled-slot
//! ratio) and are not interchangeable, but both carry the same bounds
//! guarantee: once you hold a `Confidence`, you never re-check the range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A score guaranteed to be in the range [0.0, 1.0].
///
/// This is a "witness type" - its existence proves the value is valid.
///
/// # Construction
///
/// - [`Confidence::new`]: Returns `None` if out of range (strict)
/// - [`Confidence::saturating`]: Clamps to [0, 1] (lenient, never fails)
///
/// `Confidence` is `#[repr(transparent)]` over `f64`; there is no runtime
/// overhead.
///
/// # Example
///
/// ```rust
/// use vex::Confidence;
///
/// assert!(Confidence::new(0.5).is_some());
/// assert!(Confidence::new(1.5).is_none());
///
/// let conf = Confidence::saturating(1.5);
/// assert_eq!(conf.get(), 1.0);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// The minimum valid value.
    pub const MIN: Self = Self(0.0);

    /// The maximum valid value.
    pub const MAX: Self = Self(1.0);

    /// Create a score, returning `None` if out of range or NaN.
    #[must_use]
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) && !value.is_nan() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a score, clamping to [0.0, 1.0]. NaN is treated as 0.0.
    #[must_use]
    #[inline]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the inner value (guaranteed to be in [0.0, 1.0]).
    #[must_use]
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Round to two decimal places, staying in range.
    #[must_use]
    #[inline]
    pub fn rounded2(self) -> Self {
        Self::saturating((self.0 * 100.0).round() / 100.0)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Debug for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Confidence({:.4})", self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Confidence> for f64 {
    #[inline]
    fn from(conf: Confidence) -> Self {
        conf.0
    }
}

impl PartialEq<f64> for Confidence {
    fn eq(&self, other: &f64) -> bool {
        (self.0 - other).abs() < f64::EPSILON
    }
}

impl PartialOrd<f64> for Confidence {
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}
