//! Pure field-validation rules shared by the request pipeline.
//!
//! Every rule is deterministic and side-effect free; normalizers return the
//! canonical form in which the value is stored.

use thiserror::Error;

/// Price window enforced for products on create and update.
pub const MIN_PRICE: f64 = 0.01;
pub const MAX_PRICE: f64 = 999_999.0;

/// A violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    #[error("{field} {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != '.' && *c != '-').collect()
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Normalizes a CPF to its canonical 11-digit form.
///
/// Dots and dashes are stripped; anything other than exactly 11 decimal
/// digits is rejected.
pub fn normalize_cpf(raw: &str) -> Result<String, FieldViolation> {
    let clean = strip_separators(raw);
    if clean.len() != 11 || !is_digits(&clean) {
        return Err(FieldViolation::InvalidFormat {
            field: "cpf",
            reason: "must contain exactly 11 digits".to_string(),
        });
    }
    Ok(clean)
}

/// Normalizes a zip code to its canonical 8-digit form.
pub fn normalize_zip_code(raw: &str) -> Result<String, FieldViolation> {
    let clean = strip_separators(raw);
    if clean.len() != 8 || !is_digits(&clean) {
        return Err(FieldViolation::InvalidFormat {
            field: "zip_code",
            reason: "must contain exactly 8 digits".to_string(),
        });
    }
    Ok(clean)
}

/// `OutOfRange` unless the price lies within the configured window.
pub fn check_price(value: f64) -> Result<(), FieldViolation> {
    if value < MIN_PRICE || value > MAX_PRICE {
        return Err(FieldViolation::OutOfRange {
            field: "price",
            reason: format!("must be between {} and {}", MIN_PRICE, MAX_PRICE),
        });
    }
    Ok(())
}

/// `MissingField` when a required field is absent or blank.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), FieldViolation> {
    if value.trim().is_empty() {
        return Err(FieldViolation::MissingField(field));
    }
    Ok(())
}

/// `OutOfRange` when the character count falls outside `min..=max`.
pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldViolation> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(FieldViolation::OutOfRange {
            field,
            reason: format!("must be between {} and {} characters", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("111.222.333-44", "11122233344")]
    #[case("11122233344", "11122233344")]
    #[case("111-222.333.44", "11122233344")]
    #[case("...11122233344---", "11122233344")]
    fn valid_cpfs_normalize_to_digits(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_cpf(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("1112223334")]
    #[case("111222333445")]
    #[case("111222333a4")]
    #[case("111.222.333")]
    #[case("")]
    #[case("...---")]
    fn malformed_cpfs_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            normalize_cpf(raw),
            Err(FieldViolation::InvalidFormat { field: "cpf", .. })
        ));
    }

    #[rstest]
    #[case("01310-100", "01310100")]
    #[case("01310100", "01310100")]
    #[case("01.310-100", "01310100")]
    fn valid_zip_codes_normalize_to_digits(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_zip_code(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("0131010")]
    #[case("013101000")]
    #[case("01310-10a")]
    #[case("")]
    fn malformed_zip_codes_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            normalize_zip_code(raw),
            Err(FieldViolation::InvalidFormat { field: "zip_code", .. })
        ));
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_cpf("111.222.333-44").unwrap();
        assert_eq!(normalize_cpf(&once).unwrap(), once);

        let once = normalize_zip_code("01310-100").unwrap();
        assert_eq!(normalize_zip_code(&once).unwrap(), once);
    }

    #[rstest]
    #[case(0.01)]
    #[case(49.9)]
    #[case(999_999.0)]
    fn prices_inside_the_window_pass(#[case] price: f64) {
        assert!(check_price(price).is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.009)]
    #[case(-5.0)]
    #[case(999_999.01)]
    fn prices_outside_the_window_fail(#[case] price: f64) {
        assert!(matches!(
            check_price(price),
            Err(FieldViolation::OutOfRange { field: "price", .. })
        ));
    }

    #[test]
    fn blank_required_fields_are_missing() {
        assert!(matches!(
            require_non_empty("name", "   "),
            Err(FieldViolation::MissingField("name"))
        ));
        assert!(require_non_empty("name", "Ana").is_ok());
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_length("state", "SP", 2, 2).is_ok());
        assert!(check_length("state", "S", 2, 2).is_err());
        assert!(check_length("state", "SPX", 2, 2).is_err());
        assert!(check_length("name", "Ana", 3, 255).is_ok());
        assert!(check_length("name", "An", 3, 255).is_err());
    }
}
