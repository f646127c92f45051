//! The number being displayed, and its decimal place-value decomposition.
//!
//! A [`Number`] is always in `0..=9999`. Raw user input (signed or floating
//! point) goes through [`Number::from_i64`] / [`Number::from_f64`] or
//! [`whole_from_f64`], which reject negative and fractional values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumberError, NumberResult};

/// A validated number in the four-digit decimal domain `0..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Number(u16);

impl Number {
    /// Largest representable number.
    pub const MAX: u16 = 9999;

    /// Create a number, rejecting anything above [`Number::MAX`].
    pub fn new(value: u64) -> NumberResult<Self> {
        if value > u64::from(Self::MAX) {
            return Err(NumberError::NumberOutOfRange {
                value,
                max: Self::MAX,
            });
        }
        // Fits: checked against MAX above.
        Ok(Self(value as u16))
    }

    /// Create a number from a signed integer.
    pub fn from_i64(value: i64) -> NumberResult<Self> {
        let whole = u64::try_from(value).map_err(|_| NumberError::InvalidNumber {
            value: value.to_string(),
        })?;
        Self::new(whole)
    }

    /// Create a number from a float, rejecting fractional and non-finite input.
    pub fn from_f64(value: f64) -> NumberResult<Self> {
        Self::new(whole_from_f64(value)?)
    }

    /// The raw value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Decompose into thousands, hundreds, tens and ones.
    pub fn place_values(self) -> PlaceValues {
        PlaceValues::from(self)
    }

    /// Number of decimal digits (`0` has one digit).
    pub fn digit_count(self) -> usize {
        match self.0 {
            0..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            _ => 4,
        }
    }
}

impl TryFrom<u64> for Number {
    type Error = NumberError;

    fn try_from(value: u64) -> NumberResult<Self> {
        Self::new(value)
    }
}

impl From<Number> for u64 {
    fn from(n: Number) -> Self {
        u64::from(n.0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a float as a non-negative whole number, without an upper cap.
///
/// Used by the base-20 and binary encoders, which accept magnitudes beyond
/// the four-digit domain.
pub fn whole_from_f64(value: f64) -> NumberResult<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(NumberError::InvalidNumber {
            value: value.to_string(),
        });
    }
    Ok(value as u64)
}

/// A decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Ones,
    Tens,
    Hundreds,
    Thousands,
}

impl Place {
    /// All places, least significant first.
    pub const ASCENDING: [Place; 4] = [Place::Ones, Place::Tens, Place::Hundreds, Place::Thousands];

    /// All places, most significant first.
    pub const DESCENDING: [Place; 4] = [Place::Thousands, Place::Hundreds, Place::Tens, Place::Ones];

    /// Power of ten this place stands for.
    pub fn multiplier(self) -> u16 {
        match self {
            Place::Ones => 1,
            Place::Tens => 10,
            Place::Hundreds => 100,
            Place::Thousands => 1000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Place::Ones => "ones",
            Place::Tens => "tens",
            Place::Hundreds => "hundreds",
            Place::Thousands => "thousands",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digit counts per decimal place. Each count is `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceValues {
    pub thousands: u8,
    pub hundreds: u8,
    pub tens: u8,
    pub ones: u8,
}

impl PlaceValues {
    /// Digit in the given place.
    pub fn get(&self, place: Place) -> u8 {
        match place {
            Place::Ones => self.ones,
            Place::Tens => self.tens,
            Place::Hundreds => self.hundreds,
            Place::Thousands => self.thousands,
        }
    }

    /// Reassemble the decimal value.
    pub fn value(&self) -> u16 {
        Place::ASCENDING
            .iter()
            .map(|&p| u16::from(self.get(p)) * p.multiplier())
            .sum()
    }

    /// Places with a non-zero digit, most significant first.
    pub fn non_zero(&self) -> impl Iterator<Item = (Place, u8)> + '_ {
        Place::DESCENDING
            .into_iter()
            .map(move |p| (p, self.get(p)))
            .filter(|&(_, d)| d > 0)
    }
}

impl From<Number> for PlaceValues {
    fn from(n: Number) -> Self {
        let n = n.get();
        // Each quotient is a single decimal digit.
        Self {
            thousands: (n / 1000) as u8,
            hundreds: ((n % 1000) / 100) as u8,
            tens: ((n % 100) / 10) as u8,
            ones: (n % 10) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_domain() {
        assert_eq!(Number::new(0).unwrap().get(), 0);
        assert_eq!(Number::new(9999).unwrap().get(), 9999);
    }

    #[test]
    fn rejects_above_domain() {
        assert_eq!(
            Number::new(10_000),
            Err(NumberError::NumberOutOfRange {
                value: 10_000,
                max: 9999
            })
        );
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            Number::from_i64(-1),
            Err(NumberError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn rejects_fractional_and_non_finite() {
        assert!(matches!(
            Number::from_f64(12.5),
            Err(NumberError::InvalidNumber { .. })
        ));
        assert!(whole_from_f64(f64::NAN).is_err());
        assert!(whole_from_f64(f64::INFINITY).is_err());
        assert_eq!(Number::from_f64(42.0).unwrap().get(), 42);
    }

    #[test]
    fn whole_from_f64_has_no_upper_cap() {
        assert_eq!(whole_from_f64(123_456.0).unwrap(), 123_456);
    }

    #[test]
    fn place_values_reassemble() {
        for n in 0..=Number::MAX {
            let pv = Number::new(u64::from(n)).unwrap().place_values();
            assert_eq!(pv.value(), n, "decomposition of {n} does not reassemble");
            assert!(pv.ones <= 9 && pv.tens <= 9 && pv.hundreds <= 9 && pv.thousands <= 9);
        }
    }

    #[test]
    fn place_values_of_4239() {
        let pv = Number::new(4239).unwrap().place_values();
        assert_eq!(
            pv,
            PlaceValues {
                thousands: 4,
                hundreds: 2,
                tens: 3,
                ones: 9
            }
        );
    }

    #[test]
    fn non_zero_skips_empty_places() {
        let pv = Number::new(3005).unwrap().place_values();
        let places: Vec<_> = pv.non_zero().collect();
        assert_eq!(places, vec![(Place::Thousands, 3), (Place::Ones, 5)]);
    }

    #[test]
    fn digit_count() {
        assert_eq!(Number::new(0).unwrap().digit_count(), 1);
        assert_eq!(Number::new(10).unwrap().digit_count(), 2);
        assert_eq!(Number::new(999).unwrap().digit_count(), 3);
        assert_eq!(Number::new(1000).unwrap().digit_count(), 4);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let parsed: Result<Number, _> = serde_json::from_str("10000");
        assert!(parsed.is_err());
        let parsed: Number = serde_json::from_str("77").unwrap();
        assert_eq!(parsed.get(), 77);
    }
}
