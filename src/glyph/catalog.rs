//! Symbol tables: one explicit digit → codepoint table per notation and position.
//!
//! Compound glyphs live in the Private Use Area (U+E200–U+E225) and are drawn
//! by the numeral font. Base-20 digits use the Kaktovik numerals block
//! (U+1D2C0–U+1D2D3). Every symbol also has a plain-text fallback for
//! backends without the font.

use std::sync::OnceLock;

use serde::Serialize;

use crate::glyph::{BinaryIcon, NumeralSystem, Symbol};
use crate::number::Place;

/// The whole-glyph zero of the compound system.
pub const CISTERCIAN_ZERO: char = '\u{E200}';

/// Ones strokes, indexed by digit `0..=9`. The ones digit is always drawn,
/// so zero has its own (bare stave) glyph.
pub const CISTERCIAN_ONES: [char; 10] = [
    '\u{E201}', '\u{E202}', '\u{E203}', '\u{E204}', '\u{E205}',
    '\u{E206}', '\u{E207}', '\u{E208}', '\u{E209}', '\u{E20A}',
];

/// Tens strokes, indexed by `digit - 1`.
pub const CISTERCIAN_TENS: [char; 9] = [
    '\u{E20B}', '\u{E20C}', '\u{E20D}', '\u{E20E}', '\u{E20F}',
    '\u{E210}', '\u{E211}', '\u{E212}', '\u{E213}',
];

/// Hundreds strokes, indexed by `digit - 1`.
pub const CISTERCIAN_HUNDREDS: [char; 9] = [
    '\u{E214}', '\u{E215}', '\u{E216}', '\u{E217}', '\u{E218}',
    '\u{E219}', '\u{E21A}', '\u{E21B}', '\u{E21C}',
];

/// Thousands strokes, indexed by `digit - 1`.
pub const CISTERCIAN_THOUSANDS: [char; 9] = [
    '\u{E21D}', '\u{E21E}', '\u{E21F}', '\u{E220}', '\u{E221}',
    '\u{E222}', '\u{E223}', '\u{E224}', '\u{E225}',
];

/// Base-20 digits, indexed by digit `0..=19`.
pub const KAKTOVIK_DIGITS: [char; 20] = [
    '\u{1D2C0}', '\u{1D2C1}', '\u{1D2C2}', '\u{1D2C3}', '\u{1D2C4}',
    '\u{1D2C5}', '\u{1D2C6}', '\u{1D2C7}', '\u{1D2C8}', '\u{1D2C9}',
    '\u{1D2CA}', '\u{1D2CB}', '\u{1D2CC}', '\u{1D2CD}', '\u{1D2CE}',
    '\u{1D2CF}', '\u{1D2D0}', '\u{1D2D1}', '\u{1D2D2}', '\u{1D2D3}',
];

pub const BIT_ONE: char = '\u{25CF}'; // ●
pub const BIT_ZERO: char = '\u{25CB}'; // ○

/// A catalog entry: a symbol with its display forms.
#[derive(Debug, Clone, Serialize)]
pub struct NumeralGlyph {
    pub symbol: Symbol,
    /// Machine name, e.g. `cistercian:tens:3` or `kaktovik:19`.
    pub name: String,
    /// Font codepoint, `None` for symbols always written as plain text.
    pub codepoint: Option<char>,
    /// Plain-text rendering.
    pub fallback: String,
    pub system: NumeralSystem,
}

static CATALOG: OnceLock<Vec<NumeralGlyph>> = OnceLock::new();

fn build_catalog() -> Vec<NumeralGlyph> {
    let mut symbols = vec![Symbol::CistercianZero];
    for place in Place::ASCENDING {
        let first = if place == Place::Ones { 0 } else { 1 };
        symbols.extend((first..=9).map(|digit| Symbol::Cistercian { place, digit }));
    }
    symbols.extend((0..20).map(|digit| Symbol::Kaktovik { digit }));
    symbols.push(Symbol::Bit {
        icon: BinaryIcon::Zero,
    });
    symbols.push(Symbol::Bit {
        icon: BinaryIcon::One,
    });
    for place in Place::ASCENDING {
        symbols.extend((0..=9).map(|digit| Symbol::PlaceDigit { place, digit }));
    }

    symbols
        .into_iter()
        .map(|symbol| NumeralGlyph {
            symbol,
            name: symbol_name(symbol),
            codepoint: codepoint(symbol),
            fallback: fallback(symbol),
            system: symbol.system(),
        })
        .collect()
}

/// Get every symbol known to the catalog.
pub fn all_glyphs() -> &'static [NumeralGlyph] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a catalog entry by machine name (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static NumeralGlyph> {
    let lower = name.to_lowercase();
    all_glyphs().iter().find(|g| g.name == lower)
}

/// Whether a symbol's digit is inside its table.
pub fn is_valid(symbol: Symbol) -> bool {
    match symbol {
        Symbol::CistercianZero | Symbol::Bit { .. } => true,
        Symbol::Cistercian {
            place: Place::Ones,
            digit,
        } => digit <= 9,
        Symbol::Cistercian { digit, .. } => (1..=9).contains(&digit),
        Symbol::Kaktovik { digit } => digit < 20,
        Symbol::PlaceDigit { digit, .. } => digit <= 9,
    }
}

/// Font codepoint for a symbol, `None` if the symbol has no font glyph or
/// its digit is outside the table.
pub fn codepoint(symbol: Symbol) -> Option<char> {
    if !is_valid(symbol) {
        return None;
    }
    match symbol {
        Symbol::CistercianZero => Some(CISTERCIAN_ZERO),
        Symbol::Cistercian { place, digit } => {
            let d = usize::from(digit);
            Some(match place {
                Place::Ones => CISTERCIAN_ONES[d],
                Place::Tens => CISTERCIAN_TENS[d - 1],
                Place::Hundreds => CISTERCIAN_HUNDREDS[d - 1],
                Place::Thousands => CISTERCIAN_THOUSANDS[d - 1],
            })
        }
        Symbol::Kaktovik { digit } => Some(KAKTOVIK_DIGITS[usize::from(digit)]),
        Symbol::Bit { icon } => Some(match icon {
            BinaryIcon::One => BIT_ONE,
            BinaryIcon::Zero => BIT_ZERO,
        }),
        Symbol::PlaceDigit { .. } => None,
    }
}

/// Plain-text rendering of a symbol.
///
/// Compound strokes and place-value terms render as the decimal value they
/// contribute (`(tens, 3)` → `30`); base-20 digits render as their decimal
/// value; bits as `0`/`1`.
pub fn fallback(symbol: Symbol) -> String {
    match symbol {
        Symbol::CistercianZero => "0".to_string(),
        Symbol::Cistercian { place, digit } | Symbol::PlaceDigit { place, digit } => {
            (u32::from(digit) * u32::from(place.multiplier())).to_string()
        }
        Symbol::Kaktovik { digit } => digit.to_string(),
        Symbol::Bit { icon } => (if icon.bit() { "1" } else { "0" }).to_string(),
    }
}

/// Machine name of a symbol, as used by [`lookup`].
pub fn symbol_name(symbol: Symbol) -> String {
    match symbol {
        Symbol::CistercianZero => "cistercian:zero".to_string(),
        Symbol::Cistercian { place, digit } => format!("cistercian:{place}:{digit}"),
        Symbol::Kaktovik { digit } => format!("kaktovik:{digit}"),
        Symbol::Bit { icon } => format!("binary:{}", if icon.bit() { "one" } else { "zero" }),
        Symbol::PlaceDigit { place, digit } => format!("place-value:{place}:{digit}"),
    }
}
