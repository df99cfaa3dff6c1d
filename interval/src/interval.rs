//! Generic closed interval type

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::IntervalError;
use crate::ratio::Ratio;

/// Numbers an [`Interval`] can be built over
pub trait Scalar:
    Copy
    + Ord
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    fn zero() -> Self;
}

impl Scalar for i64 {
    fn zero() -> Self {
        0
    }
}

impl Scalar for Ratio {
    fn zero() -> Self {
        Ratio::from_integer(0)
    }
}

/// Closed interval `[min, max]`
///
/// Intervals returned from public constructors and operations are always
/// straight (`min <= max`). [`Interval::from_raw`] exists for intervals under
/// construction; such a value must go through [`Interval::validated`] or
/// [`Interval::straighten`] before it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Scalar> Interval<T> {
    /// Create a straight interval, failing if `min > max`
    pub fn new(min: T, max: T) -> Result<Self, IntervalError> {
        Self::from_raw(min, max).validated()
    }

    /// Degenerate interval holding one exact value
    pub const fn exact(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Interval between two values given in any order
    pub fn spanning(a: T, b: T) -> Self {
        Self::from_raw(a, b).straighten()
    }

    /// Interval with unchecked endpoints, possibly reversed
    pub const fn from_raw(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn is_straight(&self) -> bool {
        self.min <= self.max
    }

    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    /// Swap the endpoints if the interval is reversed
    pub fn straighten(self) -> Self {
        if self.is_straight() {
            self
        } else {
            Self {
                min: self.max,
                max: self.min,
            }
        }
    }

    /// Return the interval unchanged if straight, `Reversed` otherwise
    pub fn validated(self) -> Result<Self, IntervalError> {
        if self.is_straight() {
            Ok(self)
        } else {
            Err(IntervalError::reversed(self.min, self.max))
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn is_non_negative(&self) -> bool {
        self.min >= T::zero()
    }

    /// Narrow in place to the overlap with `bounds`
    ///
    /// Fails with [`IntervalError::Disjoint`] when the two do not overlap, in
    /// which case `self` is left untouched.
    pub fn clamp(&mut self, bounds: &Interval<T>) -> Result<&mut Self, IntervalError> {
        self.validated()?;
        bounds.validated()?;
        if !self.overlaps(bounds) {
            return Err(IntervalError::Disjoint {
                interval: self.to_string(),
                bounds: bounds.to_string(),
            });
        }
        self.min = self.min.max(bounds.min);
        self.max = self.max.min(bounds.max);
        Ok(self)
    }

    /// By-value form of [`Interval::clamp`]
    pub fn clamped(mut self, bounds: &Interval<T>) -> Result<Self, IntervalError> {
        self.clamp(bounds)?;
        Ok(self)
    }

    pub fn intersection(&self, other: &Interval<T>) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self {
                min: self.min.max(other.min),
                max: self.max.min(other.max),
            })
        } else {
            None
        }
    }

    /// Widen in place to the bounding interval of `self` and `other`
    pub fn merge(&mut self, other: &Interval<T>) -> &mut Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    /// Bounding interval of two intervals
    pub fn merged(a: &Interval<T>, b: &Interval<T>) -> Self {
        let mut out = *a;
        out.merge(b);
        out
    }

    /// Endpoint product `[min * min, max * max]`
    ///
    /// Only valid when both operands are non-negative, which is checked.
    pub fn checked_mul(&self, other: &Interval<T>) -> Result<Self, IntervalError> {
        for operand in [self, other] {
            if !operand.is_non_negative() {
                return Err(IntervalError::NegativeOperand {
                    operand: operand.to_string(),
                });
            }
        }
        Self::new(self.min * other.min, self.max * other.max)
    }

    /// Multiply both endpoints by a non-negative scalar
    pub fn scale(&self, factor: T) -> Result<Self, IntervalError> {
        if factor < T::zero() {
            return Err(IntervalError::NegativeOperand {
                operand: factor.to_string(),
            });
        }
        Self::new(self.min * factor, self.max * factor)
    }
}

impl<T: Scalar> Add for Interval<T> {
    type Output = Interval<T>;

    fn add(self, rhs: Interval<T>) -> Interval<T> {
        Interval::from_raw(self.min + rhs.min, self.max + rhs.max)
    }
}

impl<T: Scalar> Add<T> for Interval<T> {
    type Output = Interval<T>;

    fn add(self, rhs: T) -> Interval<T> {
        Interval::from_raw(self.min + rhs, self.max + rhs)
    }
}

impl<T: Scalar> Sub for Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: Interval<T>) -> Interval<T> {
        Interval::from_raw(self.min - rhs.max, self.max - rhs.min)
    }
}

impl<T: Scalar> Sub<T> for Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: T) -> Interval<T> {
        Interval::from_raw(self.min - rhs, self.max - rhs)
    }
}

impl<T: Scalar> AddAssign for Interval<T> {
    fn add_assign(&mut self, rhs: Interval<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> AddAssign<T> for Interval<T> {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Interval<T> {
    fn sub_assign(&mut self, rhs: Interval<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> SubAssign<T> for Interval<T> {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(min: i64, max: i64) -> Interval<i64> {
        Interval::new(min, max).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed() {
        let err = Interval::<i64>::new(5, 3).unwrap_err();
        assert_eq!(err, IntervalError::reversed(5, 3));
        assert!(Interval::<i64>::new(3, 3).unwrap().is_exact());
    }

    #[test]
    fn test_from_raw_then_straighten() {
        let raw = Interval::<i64>::from_raw(9, 2);
        assert!(!raw.is_straight());
        assert!(raw.validated().is_err());
        assert_eq!(raw.straighten(), iv(2, 9));
        assert_eq!(Interval::<i64>::spanning(9, 2), iv(2, 9));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(iv(1, 3) + iv(10, 20), iv(11, 23));
        assert_eq!(iv(10, 20) - iv(1, 3), iv(7, 19));
        assert_eq!(iv(10, 20) - 5_i64, iv(5, 15));

        let mut x = iv(0, 4);
        x += 2_i64;
        x -= iv(1, 1);
        assert_eq!(x, iv(1, 5));
    }

    #[test]
    fn test_checked_mul_requires_non_negative() {
        assert_eq!(iv(2, 3).checked_mul(&iv(4, 5)).unwrap(), iv(8, 15));
        assert!(matches!(
            iv(-1, 3).checked_mul(&iv(4, 5)),
            Err(IntervalError::NegativeOperand { .. })
        ));
        assert!(iv(1, 2).scale(-3).is_err());
        assert_eq!(iv(-1, 2).scale(3).unwrap(), iv(-3, 6));
    }

    #[test]
    fn test_clamp_narrows() {
        let mut x = iv(-24, 40);
        x.clamp(&iv(0, 31)).unwrap();
        assert_eq!(x, iv(0, 31));

        let x = iv(5, 10).clamped(&iv(7, 100)).unwrap();
        assert_eq!(x, iv(7, 10));
    }

    #[test]
    fn test_clamp_disjoint_leaves_interval_untouched() {
        let mut x = iv(-24, -24);
        let err = x.clamp(&iv(0, 31)).unwrap_err();
        assert!(matches!(err, IntervalError::Disjoint { .. }));
        assert_eq!(x, iv(-24, -24));
    }

    #[test]
    fn test_merge_and_intersection() {
        let mut a = iv(1, 4);
        a.merge(&iv(8, 9));
        assert_eq!(a, iv(1, 9));
        assert_eq!(Interval::merged(&iv(3, 3), &iv(3, 3)), iv(3, 3));

        assert_eq!(iv(1, 5).intersection(&iv(4, 9)), Some(iv(4, 5)));
        assert_eq!(iv(1, 5).intersection(&iv(6, 9)), None);
    }

    #[test]
    fn test_containment() {
        assert!(iv(0, 31).contains(0));
        assert!(iv(0, 31).contains(31));
        assert!(!iv(0, 31).contains(32));
        assert!(iv(0, 31).contains_interval(&iv(4, 7)));
        assert!(!iv(0, 31).contains_interval(&iv(30, 32)));
    }

    #[test]
    fn test_ratio_interval() {
        let low = Ratio::new(9, 10);
        let high = Ratio::new(11, 10);
        let range = Interval::new(low, high).unwrap();
        assert!(range.contains(Ratio::from_integer(1)));
        assert_eq!(range.to_string(), "[9/10, 11/10]");
        assert!(Interval::new(high, low).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(4, 7).to_string(), "[4, 7]");
        assert_eq!(iv(26, 26).to_string(), "26");
    }
}
