//! Decimal codec for the comma-separated number convention used by map files.
//!
//! Map files write every value with `,` as the decimal separator (`5,2`).
//! Decoding swaps the first comma for a period before parsing; encoding uses
//! the shortest round-trip representation of the value and swaps the period
//! back.

/// Error returned when a token is not a finite decimal number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a finite decimal number: {token:?}")]
pub struct NumericParseError {
    /// The offending token, as found in the input
    pub token: String,
}

/// Parse a single decimal token written with a comma decimal separator.
///
/// Surrounding whitespace is ignored. A period separator is accepted as well,
/// since only the first comma is rewritten. Infinities and NaN are rejected,
/// and so are trailing characters after the number (`12,5x` is an error).
///
/// ```
/// use fuelmap::numeric::parse_decimal;
///
/// assert_eq!(parse_decimal("5,2").unwrap(), 5.2);
/// assert_eq!(parse_decimal("100").unwrap(), 100.0);
/// assert!(parse_decimal("abc").is_err());
/// assert!(parse_decimal("12,5x").is_err());
/// ```
pub fn parse_decimal(token: &str) -> Result<f64, NumericParseError> {
    let normalized = token.trim().replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NumericParseError {
            token: token.to_string(),
        }),
    }
}

/// Format a value in the canonical map-file form (`5.2` becomes `5,2`).
///
/// No fixed number of decimals is imposed; integral values carry no
/// fractional part (`100.0` becomes `100`).
pub fn format_decimal(value: f64) -> String {
    // -0 would not survive a round trip through most editors of these files
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string().replacen('.', ",", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_decimal("5,2").unwrap(), 5.2);
        assert_eq!(parse_decimal("90,5").unwrap(), 90.5);
        assert_eq!(parse_decimal("-0,75").unwrap(), -0.75);
        assert_eq!(parse_decimal("100,0").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_period() {
        assert_eq!(parse_decimal("  12,5\t").unwrap(), 12.5);
        assert_eq!(parse_decimal("12.5").unwrap(), 12.5);
        assert_eq!(parse_decimal("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for token in ["", "   ", "abc", "1,2,3", "12,5x", "NaN", "inf", "-inf"] {
            let err = parse_decimal(token).unwrap_err();
            assert_eq!(err.token, token);
        }
    }

    #[test]
    fn test_format_uses_comma() {
        assert_eq!(format_decimal(5.2), "5,2");
        assert_eq!(format_decimal(-0.75), "-0,75");
        assert_eq!(format_decimal(100.0), "100");
        assert_eq!(format_decimal(-0.0), "0");
    }

    #[test]
    fn test_format_then_parse_is_exact() {
        for value in [0.1, 1.0 / 3.0, 1234.5678, 1e-7, 42.0] {
            assert_eq!(parse_decimal(&format_decimal(value)).unwrap(), value);
        }
    }
}
