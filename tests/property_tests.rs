//! Property-based tests for the validation rules.
//!
//! These use proptest to verify the normalization invariants across a wide
//! range of inputs, helping to catch edge cases unit tests might miss.

use oficina_api::validation::{
    check_price, normalize_cpf, normalize_zip_code, MAX_PRICE, MIN_PRICE,
};
use proptest::prelude::*;

// Strategies for generating test data

fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn separator_insertions() -> impl Strategy<Value = Vec<(usize, char)>> {
    proptest::collection::vec((0usize..=20, prop_oneof![Just('.'), Just('-')]), 0..6)
}

fn decorate(digits: &str, insertions: Vec<(usize, char)>) -> String {
    let mut decorated = digits.to_string();
    for (pos, sep) in insertions {
        let pos = pos.min(decorated.len());
        decorated.insert(pos, sep);
    }
    decorated
}

fn wrong_length_digits(expected: usize) -> impl Strategy<Value = String> {
    (0usize..=24)
        .prop_filter("digit count must differ", move |len| *len != expected)
        .prop_flat_map(digit_string)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn cpf_normalization_strips_arbitrary_separators(
        digits in digit_string(11),
        insertions in separator_insertions(),
    ) {
        let decorated = decorate(&digits, insertions);
        prop_assert_eq!(normalize_cpf(&decorated).unwrap(), digits);
    }

    #[test]
    fn cpf_with_wrong_digit_count_fails(
        digits in wrong_length_digits(11),
        insertions in separator_insertions(),
    ) {
        let decorated = decorate(&digits, insertions);
        prop_assert!(normalize_cpf(&decorated).is_err());
    }

    #[test]
    fn zip_code_normalization_strips_arbitrary_separators(
        digits in digit_string(8),
        insertions in separator_insertions(),
    ) {
        let decorated = decorate(&digits, insertions);
        prop_assert_eq!(normalize_zip_code(&decorated).unwrap(), digits);
    }

    #[test]
    fn zip_code_with_wrong_digit_count_fails(
        digits in wrong_length_digits(8),
        insertions in separator_insertions(),
    ) {
        let decorated = decorate(&digits, insertions);
        prop_assert!(normalize_zip_code(&decorated).is_err());
    }

    #[test]
    fn cpf_normalization_is_idempotent(digits in digit_string(11)) {
        let once = normalize_cpf(&digits).unwrap();
        prop_assert_eq!(normalize_cpf(&once).unwrap(), once);
    }
}

proptest! {
    #[test]
    fn prices_inside_the_window_pass(price in MIN_PRICE..=MAX_PRICE) {
        prop_assert!(check_price(price).is_ok());
    }

    #[test]
    fn non_positive_prices_fail(price in -1.0e6..=0.0) {
        prop_assert!(check_price(price).is_err());
    }

    #[test]
    fn prices_above_the_window_fail(price in (MAX_PRICE + 1.0)..1.0e9) {
        prop_assert!(check_price(price).is_err());
    }
}
