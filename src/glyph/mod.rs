//! Numeral notations: symbol tables, encoders and footprint estimation.
//!
//! A number is turned into a [`GlyphSequence`]: an ordered list of
//! [`Symbol`] ids for one numeral system. Symbols carry no font or keyboard
//! mapping; the [`catalog`] resolves each id to a codepoint (rendered by a
//! numeral font) and a plain-text fallback.
//!
//! ## Components
//!
//! - [`catalog`]: per-position symbol tables with codepoints and fallbacks
//! - [`encode`]: number → symbol sequence for every notation, plus decoders
//! - [`footprint`]: estimated on-screen size of a sequence, for layout

pub mod catalog;
pub mod encode;
pub mod footprint;

pub use catalog::NumeralGlyph;
pub use encode::{
    decode_base20, decode_binary_icons, decode_positional_compound, decompose_place_values,
    encode_base20, encode_binary_icons, encode_place_values, encode_positional_compound,
};
pub use footprint::GlyphMetrics;

use serde::{Deserialize, Serialize};

use crate::number::{Number, Place};

/// A numeral system that produces a symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumeralSystem {
    /// Positional compound glyph: strokes per decimal position overlaid on one frame.
    Cistercian,
    /// Base-20 digits.
    Kaktovik,
    /// One icon per binary digit.
    Binary,
    /// Expanded decimal form, one term per non-zero place.
    PlaceValue,
}

impl NumeralSystem {
    pub fn name(self) -> &'static str {
        match self {
            NumeralSystem::Cistercian => "cistercian",
            NumeralSystem::Kaktovik => "kaktovik",
            NumeralSystem::Binary => "binary",
            NumeralSystem::PlaceValue => "place-value",
        }
    }

    /// Whether the numeral font has a glyph for each symbol of this system.
    /// The expanded decimal form is always written with plain digits.
    pub fn has_font_glyphs(self) -> bool {
        !matches!(self, NumeralSystem::PlaceValue)
    }

    /// Encode `n` in this notation.
    pub fn encode(self, n: Number) -> GlyphSequence {
        match self {
            NumeralSystem::Cistercian => encode_positional_compound(n),
            NumeralSystem::Kaktovik => encode_base20(u64::from(n.get())),
            NumeralSystem::Binary => encode_binary_icons(u64::from(n.get())),
            NumeralSystem::PlaceValue => encode_place_values(n),
        }
    }

    /// Separator placed between fallback strings when rendering without the font.
    fn fallback_separator(self) -> &'static str {
        match self {
            NumeralSystem::Binary => "",
            NumeralSystem::Cistercian | NumeralSystem::Kaktovik => " ",
            NumeralSystem::PlaceValue => " + ",
        }
    }
}

/// The two icons of the binary notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryIcon {
    One,
    Zero,
}

impl BinaryIcon {
    pub fn from_bit(bit: bool) -> Self {
        if bit { BinaryIcon::One } else { BinaryIcon::Zero }
    }

    pub fn bit(self) -> bool {
        matches!(self, BinaryIcon::One)
    }
}

/// A single symbol id, independent of any font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Symbol {
    /// The dedicated compound glyph for zero.
    CistercianZero,
    /// Compound-glyph stroke for `digit` in `place`. Ones allow `0..=9`, other
    /// places `1..=9`.
    Cistercian { place: Place, digit: u8 },
    /// Base-20 digit `0..=19`.
    Kaktovik { digit: u8 },
    /// One binary digit.
    Bit { icon: BinaryIcon },
    /// One term of the expanded decimal form, e.g. `(hundreds, 2)` → 200.
    PlaceDigit { place: Place, digit: u8 },
}

impl Symbol {
    /// The notation this symbol belongs to.
    pub fn system(self) -> NumeralSystem {
        match self {
            Symbol::CistercianZero | Symbol::Cistercian { .. } => NumeralSystem::Cistercian,
            Symbol::Kaktovik { .. } => NumeralSystem::Kaktovik,
            Symbol::Bit { .. } => NumeralSystem::Binary,
            Symbol::PlaceDigit { .. } => NumeralSystem::PlaceValue,
        }
    }
}

/// An immutable, position-free symbol sequence for one numeral system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSequence {
    system: NumeralSystem,
    symbols: Vec<Symbol>,
}

impl GlyphSequence {
    pub(crate) fn new(system: NumeralSystem, symbols: Vec<Symbol>) -> Self {
        debug_assert!(symbols.iter().all(|s| s.system() == system));
        Self { system, symbols }
    }

    pub fn system(&self) -> NumeralSystem {
        self.system
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Render as text: font codepoints when `use_font` is set, otherwise the
    /// plain-text fallbacks joined with the system's separator.
    pub fn render(&self, use_font: bool) -> String {
        if use_font && self.system.has_font_glyphs() {
            return self
                .symbols
                .iter()
                .filter_map(|&s| catalog::codepoint(s))
                .collect();
        }
        self.symbols
            .iter()
            .map(|&s| catalog::fallback(s))
            .collect::<Vec<_>>()
            .join(self.system.fallback_separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_fallback_is_bit_string() {
        let seq = encode_binary_icons(10);
        assert_eq!(seq.render(false), "1010");
    }

    #[test]
    fn place_value_fallback_is_expanded_form() {
        let seq = encode_place_values(Number::new(4239).unwrap());
        assert_eq!(seq.render(false), "4000 + 200 + 30 + 9");
    }

    #[test]
    fn kaktovik_renders_real_codepoints() {
        let seq = encode_base20(21);
        assert_eq!(seq.render(true), "\u{1D2C1}\u{1D2C1}");
    }

    #[test]
    fn system_encode_dispatches() {
        let n = Number::new(4239).unwrap();
        for system in [
            NumeralSystem::Cistercian,
            NumeralSystem::Kaktovik,
            NumeralSystem::Binary,
            NumeralSystem::PlaceValue,
        ] {
            assert_eq!(system.encode(n).system(), system);
        }
        assert_eq!(NumeralSystem::Binary.encode(n).len(), 13);
    }

    #[test]
    fn symbols_report_their_system() {
        assert_eq!(Symbol::CistercianZero.system(), NumeralSystem::Cistercian);
        assert_eq!(
            Symbol::Bit {
                icon: BinaryIcon::Zero
            }
            .system(),
            NumeralSystem::Binary
        );
    }
}
