use proptest::prelude::*;

use ivfind_interval::{Interval, IntervalError, Ratio, ratio};

fn ratio_strategy() -> impl Strategy<Value = Ratio> {
    (1i64..=200, 1i64..=200).prop_map(|(n, d)| ratio(n, d).unwrap())
}

proptest! {
    #[test]
    fn test_invert_floor_mul_is_exact_preimage(x in 0i64..5000, ratio in ratio_strategy()) {
        let product = Interval::exact(x).floor_mul(ratio).unwrap();
        let inverted = product.invert_floor_mul(ratio).unwrap();
        prop_assert!(inverted.contains(x));

        let maps_to_product = |y: i64| Interval::exact(y).floor_mul(ratio).unwrap() == product;
        for y in inverted.iter() {
            prop_assert!(maps_to_product(y));
        }
        prop_assert!(!maps_to_product(inverted.min() - 1));
        prop_assert!(!maps_to_product(inverted.max() + 1));
    }

    #[test]
    fn test_invert_floor_mul_range_covers_members(lo in 0i64..2000, width in 0i64..50, ratio in ratio_strategy()) {
        let products = Interval::new(lo, lo + width).unwrap();
        let Ok(inverted) = products.invert_floor_mul(ratio) else {
            return Ok(());
        };
        for y in inverted.iter() {
            let p = Interval::exact(y).floor_mul(ratio).unwrap();
            prop_assert!(products.contains_interval(&p));
        }
    }

    #[test]
    fn test_non_positive_ratio_rejected(x in -100i64..100, n in -200i64..=0, d in 1i64..=200) {
        let m = ratio(n, d).unwrap();
        prop_assert!(matches!(
            Interval::exact(x).invert_floor_mul(m),
            Err(IntervalError::NonPositiveDivisor { .. })
        ), "expected NonPositiveDivisor error");
    }
}
