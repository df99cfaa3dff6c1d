//! Integer-only interval operations: floor division and its inverse

use std::ops::RangeInclusive;

use num_integer::Integer;

use crate::error::IntervalError;
use crate::interval::Interval;
use crate::ratio::{Ratio, is_positive};

fn positive_ratio(ratio: Ratio) -> Result<Ratio, IntervalError> {
    if is_positive(&ratio) {
        Ok(ratio)
    } else {
        Err(IntervalError::NonPositiveDivisor {
            divisor: ratio.to_string(),
        })
    }
}

impl Interval<i64> {
    /// Floor division of both endpoints by a positive integer
    pub fn div_floor(&self, divisor: i64) -> Result<Self, IntervalError> {
        if divisor <= 0 {
            return Err(IntervalError::NonPositiveDivisor {
                divisor: divisor.to_string(),
            });
        }
        Self::new(
            Integer::div_floor(&self.min(), &divisor),
            Integer::div_floor(&self.max(), &divisor),
        )
    }

    /// Floor division by an interval of positive divisors
    ///
    /// The dividend must be non-negative so the bound is
    /// `[min / divisor.max, max / divisor.min]`.
    pub fn div_floor_interval(&self, divisor: &Interval<i64>) -> Result<Self, IntervalError> {
        if divisor.min() <= 0 {
            return Err(IntervalError::NonPositiveDivisor {
                divisor: divisor.to_string(),
            });
        }
        if !self.is_non_negative() {
            return Err(IntervalError::NegativeOperand {
                operand: self.to_string(),
            });
        }
        Self::new(
            Integer::div_floor(&self.min(), &divisor.max()),
            Integer::div_floor(&self.max(), &divisor.min()),
        )
    }

    /// Forward `floor(x * n / d)` applied to both endpoints
    pub fn floor_mul(&self, ratio: Ratio) -> Result<Self, IntervalError> {
        let ratio = positive_ratio(ratio)?;
        Self::new(
            Integer::div_floor(&(self.min() * ratio.numer()), ratio.denom()),
            Integer::div_floor(&(self.max() * ratio.numer()), ratio.denom()),
        )
    }

    /// Forward `floor(x * m)` where `m` ranges over a positive ratio interval
    pub fn floor_mul_range(&self, ratios: &Interval<Ratio>) -> Result<Self, IntervalError> {
        if !self.is_non_negative() {
            return Err(IntervalError::NegativeOperand {
                operand: self.to_string(),
            });
        }
        let low = positive_ratio(ratios.min())?;
        let high = ratios.max();
        Self::new(
            Integer::div_floor(&(self.min() * low.numer()), low.denom()),
            Integer::div_floor(&(self.max() * high.numer()), high.denom()),
        )
    }

    /// Tightest interval of integers `x` with `floor(x * n / d)` inside `self`
    ///
    /// Two stages: the numerator `x * n` lies in `[min * d, (max + 1) * d - 1]`,
    /// then `x` lies in `[ceil(num_min / n), floor(num_max / n)]`. The result
    /// is `Reversed` when no integer maps into the product range, which
    /// happens for multipliers above one that skip values.
    pub fn invert_floor_mul(&self, ratio: Ratio) -> Result<Self, IntervalError> {
        let ratio = positive_ratio(ratio)?;
        let product = self.validated()?;
        let (n, d) = (*ratio.numer(), *ratio.denom());

        let numerator = Interval::new(product.min() * d, (product.max() + 1) * d - 1)?;
        let x = Interval::from_raw(
            Integer::div_ceil(&numerator.min(), &n),
            Integer::div_floor(&numerator.max(), &n),
        );
        x.validated()
    }

    /// Number of integers in the interval
    pub fn len(&self) -> u64 {
        if self.is_straight() {
            (self.max() - self.min()) as u64 + 1
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.is_straight()
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.min()..=self.max()
    }
}

impl IntoIterator for Interval<i64> {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
