//! Property-based tests for numeral string arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quickcheck::{quickcheck, TestResult};

    use crate::domain::{NumeralConfig, DEFAULT_SYMBOLS};
    use crate::numeric::{
        dec_int, inc_int, is_num_str, rectify, round_int, to_sci, Precision,
    };

    // Strategy for generating (base, integer numeral in that base).
    // Letter digits come in either case.
    fn int_numeral() -> impl Strategy<Value = (u32, String)> {
        (2u32..=36).prop_flat_map(|base| {
            let digit = (0..base, any::<bool>()).prop_map(|(v, upper)| {
                let c = DEFAULT_SYMBOLS.as_bytes()[v as usize] as char;
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            });
            (
                Just(base),
                any::<bool>(),
                prop::collection::vec(digit, 1..40),
            )
                .prop_map(|(base, negative, digits)| {
                    let body: String = digits.into_iter().collect();
                    let s = if negative { format!("-{}", body) } else { body };
                    (base, s)
                })
        })
    }

    // Strategy for generating fractional base-10 numerals with stray zeros
    fn decimal_numeral() -> impl Strategy<Value = String> {
        "-?0{0,3}[0-9]{1,12}(\\.[0-9]{1,8}0{0,3})?"
    }

    proptest! {
        #[test]
        fn rectify_idempotent(s in decimal_numeral()) {
            let config = NumeralConfig::default();
            let once = rectify(&config, &s);
            prop_assert_eq!(rectify(&config, &once), once);
        }

        #[test]
        fn rectify_preserves_validity(s in decimal_numeral()) {
            let config = NumeralConfig::default();
            prop_assert_eq!(
                is_num_str(&config, &rectify(&config, &s), 10, true).unwrap(),
                is_num_str(&config, &s, 10, true).unwrap()
            );
        }

        #[test]
        fn inc_then_dec_round_trips((base, s) in int_numeral()) {
            let config = NumeralConfig::default();
            let up = inc_int(&config, &s, base).unwrap();
            let back = dec_int(&config, &up, base).unwrap();
            prop_assert_eq!(back.to_ascii_lowercase(), rectify(&config, &s).to_ascii_lowercase());
        }

        #[test]
        fn dec_then_inc_round_trips((base, s) in int_numeral()) {
            let config = NumeralConfig::default();
            let down = dec_int(&config, &s, base).unwrap();
            let back = inc_int(&config, &down, base).unwrap();
            prop_assert_eq!(back.to_ascii_lowercase(), rectify(&config, &s).to_ascii_lowercase());
        }

        #[test]
        fn step_ignores_letter_case((base, s) in int_numeral()) {
            let config = NumeralConfig::default();
            let lower = s.to_ascii_lowercase();
            prop_assert_eq!(
                inc_int(&config, &s, base).unwrap().to_ascii_lowercase(),
                inc_int(&config, &lower, base).unwrap()
            );
            prop_assert_eq!(
                dec_int(&config, &s, base).unwrap().to_ascii_lowercase(),
                dec_int(&config, &lower, base).unwrap()
            );
        }

        #[test]
        fn step_never_yields_negative_zero((base, s) in int_numeral()) {
            let config = NumeralConfig::default();
            prop_assert_ne!(inc_int(&config, &s, base).unwrap(), "-0");
            prop_assert_ne!(dec_int(&config, &s, base).unwrap(), "-0");
            prop_assert_ne!(rectify(&config, &s), "-0");
        }

        #[test]
        fn step_results_are_rectified((base, s) in int_numeral()) {
            let config = NumeralConfig::default();
            let up = inc_int(&config, &s, base).unwrap();
            let down = dec_int(&config, &s, base).unwrap();
            prop_assert_eq!(rectify(&config, &up), up);
            prop_assert_eq!(rectify(&config, &down), down);
        }

        #[test]
        fn inc_matches_native_arithmetic(n in -1_000_000i64..1_000_000) {
            let config = NumeralConfig::default();
            prop_assert_eq!(inc_int(&config, &n.to_string(), 10).unwrap(), (n + 1).to_string());
            prop_assert_eq!(dec_int(&config, &n.to_string(), 10).unwrap(), (n - 1).to_string());
        }

        #[test]
        fn round_matches_banker_oracle(n in any::<i64>(), digits in 1u32..=19) {
            use rust_decimal::{Decimal, RoundingStrategy};

            let config = NumeralConfig::default();
            let ours: Decimal = round_int(&config, &n.to_string(), Precision::Digits(digits as usize))
                .unwrap()
                .parse()
                .unwrap();
            let expected = Decimal::from(n)
                .round_sf_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
                .unwrap();
            prop_assert_eq!(ours, expected);
        }

        #[test]
        fn sci_mantissa_has_one_leading_digit(n in 1u64..u64::MAX) {
            let config = NumeralConfig::default();
            let sci = to_sci(&config, &n.to_string(), 0, Precision::Unlimited).unwrap();
            let (mantissa, exponent) = sci.split_once("e+").unwrap();
            prop_assert_eq!(exponent.parse::<usize>().unwrap(), n.to_string().len() - 1);
            prop_assert!(mantissa.split('.').next().unwrap().len() == 1);
        }
    }

    #[test]
    fn quickcheck_rectify_idempotent() {
        fn prop(s: String) -> TestResult {
            let config = NumeralConfig::default();
            if !is_num_str(&config, &s, 36, true).unwrap() {
                return TestResult::discard();
            }
            let once = rectify(&config, &s);
            TestResult::from_bool(rectify(&config, &once) == once)
        }
        quickcheck(prop as fn(String) -> TestResult);
    }

    #[test]
    fn quickcheck_native_integers_are_numerals() {
        fn prop(n: i64) -> bool {
            let config = NumeralConfig::default();
            is_num_str(&config, &n.to_string(), 10, false).unwrap()
                && rectify(&config, &n.to_string()) == n.to_string()
        }
        quickcheck(prop as fn(i64) -> bool);
    }
}
