use crate::quantity::energy::KilowattHours;

/// Parse typed-in consumption the lenient way a text field does: take the leading integer and
/// ignore the rest.
///
/// Leading whitespace and a single sign are accepted. Anything without leading digits is zero,
/// so the result is always usable and never an error.
pub fn parse_units(input: &str) -> KilowattHours {
    let input = input.trim_start();
    let (sign, digits) = match input.as_bytes().first() {
        Some(b'-') => (-1.0, &input[1..]),
        Some(b'+') => (1.0, &input[1..]),
        _ => (1.0, input),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<f64>().map_or(KilowattHours::ZERO, |units| KilowattHours(sign * units))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("120"), KilowattHours(120.0));
        assert_eq!(parse_units("  42"), KilowattHours(42.0));
        assert_eq!(parse_units("+7"), KilowattHours(7.0));
        assert_eq!(parse_units("3.9"), KilowattHours(3.0));
        assert_eq!(parse_units("12abc"), KilowattHours(12.0));
        assert_eq!(parse_units("-5"), KilowattHours(-5.0));
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_units(""), KilowattHours::ZERO);
        assert_eq!(parse_units("abc"), KilowattHours::ZERO);
        assert_eq!(parse_units("-"), KilowattHours::ZERO);
        assert_eq!(parse_units(".5"), KilowattHours::ZERO);
    }
}
