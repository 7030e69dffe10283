// ============================================================================
// Picture Decimals
// Fixed-width digit strings with an implied decimal point
// ============================================================================

use super::digits::parse_unsigned;
use rust_decimal::Decimal;
use std::fmt;

/// A numeric picture in the COBOL sense: `PIC 9(integral)V9(fractional)`.
///
/// The field carries `integral + fractional` digits and no separator; the
/// last `fractional` digits are the fraction. The integral count only fixes
/// the declared width, the split point is always counted from the right.
///
/// # Example
/// ```
/// use cotahist::numeric::PIC_11V99;
/// use rust_decimal::Decimal;
///
/// assert_eq!(PIC_11V99.decode(b"0000000001050"), Some(Decimal::new(1050, 2)));
/// assert_eq!(PIC_11V99.decode(b"             "), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Picture {
    integral: u8,
    fractional: u8,
}

/// Prices: 13 digits, 2 of them fractional
pub const PIC_11V99: Picture = Picture::new(11, 2);

/// Traded volume: 18 digits, 2 of them fractional
pub const PIC_16V99: Picture = Picture::new(16, 2);

/// Strike price in points: 13 digits, 6 of them fractional
pub const PIC_7V06: Picture = Picture::new(7, 6);

impl Picture {
    pub const fn new(integral: u8, fractional: u8) -> Self {
        Self {
            integral,
            fractional,
        }
    }

    /// Declared field width in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        self.integral as usize + self.fractional as usize
    }

    /// Number of implied fractional digits.
    #[inline]
    pub const fn scale(self) -> u32 {
        self.fractional as u32
    }

    /// Decode a raw field into an exact decimal.
    ///
    /// Returns `None` for blank or non-numeric content. A corrupt field is
    /// reported as "no value" so the caller can decide whether the absence is
    /// acceptable; it is never mapped to zero.
    pub fn decode(self, raw: &[u8]) -> Option<Decimal> {
        let mantissa = parse_unsigned(raw).ok()?;
        let mut value = Decimal::from(mantissa);
        value.set_scale(self.scale()).ok()?;
        Some(value)
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "9({})V9({})", self.integral, self.fractional)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_widths() {
        assert_eq!(PIC_11V99.width(), 13);
        assert_eq!(PIC_16V99.width(), 18);
        assert_eq!(PIC_7V06.width(), 13);
    }

    #[test]
    fn test_price_is_exact() {
        let open = PIC_11V99.decode(b"0000000001050").unwrap();
        assert_eq!(open, Decimal::new(1050, 2));
        assert_eq!(open.to_string(), "10.50");
    }

    #[test]
    fn test_volume() {
        let volume = PIC_16V99.decode(b"000000001234567891").unwrap();
        assert_eq!(volume, Decimal::new(1_234_567_891, 2));
        assert_eq!(volume.to_string(), "12345678.91");
    }

    #[test]
    fn test_points_use_six_fractional_digits() {
        let points = PIC_7V06.decode(b"0000012500000").unwrap();
        assert_eq!(points, Decimal::new(12_500_000, 6));
        assert_eq!(points.to_string(), "12.500000");
    }

    #[test]
    fn test_zero_is_not_absence() {
        assert_eq!(PIC_11V99.decode(b"0000000000000"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(PIC_11V99.decode(b"             "), None);
        assert_eq!(PIC_11V99.decode(b""), None);
        assert_eq!(PIC_11V99.decode(b"00000000010,5"), None);
        assert_eq!(PIC_11V99.decode(b"-000000001050"), None);
    }

    #[test]
    fn test_short_digit_run_keeps_fraction_on_the_right() {
        assert_eq!(PIC_11V99.decode(b"   1050"), Some(Decimal::new(1050, 2)));
        assert_eq!(PIC_7V06.decode(b"5"), Some(Decimal::new(5, 6)));
    }

    #[test]
    fn test_display() {
        assert_eq!(PIC_11V99.to_string(), "9(11)V9(2)");
    }

    proptest! {
        #[test]
        fn prop_price_round_trip(value in 0u64..10_000_000_000_000u64) {
            let raw = format!("{:013}", value);
            let decoded = PIC_11V99.decode(raw.as_bytes()).unwrap();

            let expected = format!("{}.{:02}", value / 100, value % 100);
            prop_assert_eq!(decoded.to_string(), expected);
            prop_assert_eq!(decoded.mantissa(), i128::from(value));
        }
    }
}
