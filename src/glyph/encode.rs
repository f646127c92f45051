//! Encoders: number → symbol sequence, one per numeral system.
//!
//! Encoders over the four-digit domain take a validated [`Number`]. The
//! base-20 and binary encoders take any `u64`; use
//! [`whole_from_f64`](crate::number::whole_from_f64) to validate raw input
//! for them.
//!
//! The decoders invert each encoding and return `None` for sequences an
//! encoder could not have produced.

use crate::glyph::{BinaryIcon, GlyphSequence, NumeralSystem, Symbol};
use crate::number::{Number, Place, PlaceValues};

/// Encode as a positional compound glyph.
///
/// Strokes are emitted ones → tens → hundreds → thousands; the font overlays
/// them positionally and only this order composes a correct glyph. The ones
/// stroke is always present (even for a zero digit); zero digits in higher
/// places are omitted. `0` itself is the dedicated zero glyph.
pub fn encode_positional_compound(n: Number) -> GlyphSequence {
    if n.get() == 0 {
        return GlyphSequence::new(NumeralSystem::Cistercian, vec![Symbol::CistercianZero]);
    }

    let pv = n.place_values();
    let symbols = Place::ASCENDING
        .into_iter()
        .filter_map(|place| {
            let digit = pv.get(place);
            (place == Place::Ones || digit > 0).then_some(Symbol::Cistercian { place, digit })
        })
        .collect();
    GlyphSequence::new(NumeralSystem::Cistercian, symbols)
}

/// Encode as base-20 digits, most significant first. `0` is a single zero digit.
pub fn encode_base20(n: u64) -> GlyphSequence {
    let symbols = digits_msb_first(n, 20)
        .into_iter()
        .map(|digit| Symbol::Kaktovik { digit })
        .collect();
    GlyphSequence::new(NumeralSystem::Kaktovik, symbols)
}

/// Encode as binary icons, most significant bit first. `0` is a single zero icon.
pub fn encode_binary_icons(n: u64) -> GlyphSequence {
    let symbols = digits_msb_first(n, 2)
        .into_iter()
        .map(|bit| Symbol::Bit {
            icon: BinaryIcon::from_bit(bit == 1),
        })
        .collect();
    GlyphSequence::new(NumeralSystem::Binary, symbols)
}

/// Encode as expanded decimal form: one term per non-zero place, highest
/// place first. `0` is the single term `(ones, 0)`.
pub fn encode_place_values(n: Number) -> GlyphSequence {
    let pv = n.place_values();
    let mut symbols: Vec<Symbol> = pv
        .non_zero()
        .map(|(place, digit)| Symbol::PlaceDigit { place, digit })
        .collect();
    if symbols.is_empty() {
        symbols.push(Symbol::PlaceDigit {
            place: Place::Ones,
            digit: 0,
        });
    }
    GlyphSequence::new(NumeralSystem::PlaceValue, symbols)
}

/// Decompose a number into its place-value digits.
pub fn decompose_place_values(n: Number) -> PlaceValues {
    n.place_values()
}

/// Decode a base-20 sequence. Overflowing or foreign sequences yield `None`.
pub fn decode_base20(seq: &GlyphSequence) -> Option<u64> {
    if seq.system() != NumeralSystem::Kaktovik || seq.is_empty() {
        return None;
    }
    seq.symbols().iter().try_fold(0u64, |acc, s| match *s {
        Symbol::Kaktovik { digit } if digit < 20 => {
            acc.checked_mul(20)?.checked_add(u64::from(digit))
        }
        _ => None,
    })
}

/// Decode a binary icon sequence.
pub fn decode_binary_icons(seq: &GlyphSequence) -> Option<u64> {
    if seq.system() != NumeralSystem::Binary || seq.is_empty() {
        return None;
    }
    seq.symbols().iter().try_fold(0u64, |acc, s| match *s {
        Symbol::Bit { icon } => acc.checked_mul(2)?.checked_add(u64::from(icon.bit())),
        _ => None,
    })
}

/// Decode a compound-glyph sequence, checking stroke order and omission rules.
pub fn decode_positional_compound(seq: &GlyphSequence) -> Option<u16> {
    if seq.system() != NumeralSystem::Cistercian {
        return None;
    }
    if seq.symbols() == [Symbol::CistercianZero] {
        return Some(0);
    }

    let mut value = 0u16;
    let mut last_place: Option<Place> = None;
    for (i, s) in seq.symbols().iter().enumerate() {
        let Symbol::Cistercian { place, digit } = *s else {
            return None;
        };
        let valid_digit = if place == Place::Ones {
            i == 0 && digit <= 9
        } else {
            (1..=9).contains(&digit)
        };
        if !valid_digit || last_place.is_some_and(|p| p >= place) {
            return None;
        }
        last_place = Some(place);
        value += u16::from(digit) * place.multiplier();
    }
    // The ones stroke leads every non-zero sequence.
    (last_place.is_some() && matches!(seq.symbols()[0], Symbol::Cistercian { place: Place::Ones, .. }))
        .then_some(value)
}

/// Positional digits of `n` in `radix`, most significant first.
fn digits_msb_first(mut n: u64, radix: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        // Remainder is below radix (at most 20).
        digits.push((n % radix) as u8);
        n /= radix;
    }
    digits.reverse();
    digits
}
