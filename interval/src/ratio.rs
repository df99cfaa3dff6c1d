//! Exact rational multipliers

use crate::error::IntervalError;

/// Exact rational number, kept in lowest terms with a positive denominator
pub type Ratio = num_rational::Ratio<i64>;

/// Build a reduced ratio `numer / denom`
///
/// Fails on a zero denominator, and on `i64::MIN` in either position since
/// moving the sign onto the numerator could overflow.
pub fn ratio(numer: i64, denom: i64) -> Result<Ratio, IntervalError> {
    if denom == 0 {
        return Err(IntervalError::ZeroDenominator);
    }
    if numer == i64::MIN || denom == i64::MIN {
        return Err(IntervalError::RatioOutOfRange { numer, denom });
    }
    Ok(Ratio::new(numer, denom))
}

/// Whether `r` is strictly positive, assuming a reduced value
pub(crate) fn is_positive(r: &Ratio) -> bool {
    *r.numer() > 0 && *r.denom() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_reduces_to_lowest_terms() {
        let r = ratio(25, 100).unwrap();
        assert_eq!((*r.numer(), *r.denom()), (1, 4));

        let r = ratio(3, -6).unwrap();
        assert_eq!((*r.numer(), *r.denom()), (-1, 2));
        assert!(!is_positive(&r));
    }

    #[test]
    fn test_ratio_rejects_bad_input() {
        assert_eq!(ratio(1, 0), Err(IntervalError::ZeroDenominator));
        assert_eq!(
            ratio(i64::MIN, -1),
            Err(IntervalError::RatioOutOfRange {
                numer: i64::MIN,
                denom: -1
            })
        );
    }

    #[test]
    fn test_constant_matches_reduced() {
        const NINE_TENTHS: Ratio = Ratio::new_raw(9, 10);
        assert_eq!(NINE_TENTHS, ratio(90, 100).unwrap());
        assert!(NINE_TENTHS < Ratio::from_integer(1));
        assert_eq!(NINE_TENTHS.to_string(), "9/10");
        assert_eq!(Ratio::from_integer(4).to_string(), "4");
    }
}
