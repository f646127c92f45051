//! Footprint estimation: how much screen space a symbol sequence will take.
//!
//! Estimates are used only for collision sizing before anything is drawn;
//! the drawing backend may measure differently.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::glyph::{GlyphSequence, NumeralSystem};
use crate::number::Number;

/// Nominal glyph and icon sizes, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphMetrics {
    /// One digit of the main decimal numeral (the anchor).
    pub main_digit: Size,
    /// The fixed frame every compound glyph is drawn in.
    pub compound_box: Size,
    /// One base-20 digit.
    pub base20_glyph: Size,
    /// One binary icon.
    pub bit_icon: Size,
    /// One character of the expanded decimal form.
    pub place_value_char: Size,
    /// One object icon of the quantity visualization.
    pub object_icon: Size,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            main_digit: Size::new(72.0, 120.0),
            compound_box: Size::new(48.0, 72.0),
            base20_glyph: Size::new(36.0, 48.0),
            bit_icon: Size::new(24.0, 24.0),
            place_value_char: Size::new(14.0, 28.0),
            object_icon: Size::new(28.0, 28.0),
        }
    }
}

impl GlyphMetrics {
    /// Footprint of the main decimal numeral.
    pub fn main_numeral(&self, n: Number) -> Size {
        Size::new(
            self.main_digit.width * n.digit_count() as f64,
            self.main_digit.height,
        )
    }

    /// Footprint of an encoded sequence.
    pub fn sequence(&self, seq: &GlyphSequence) -> Size {
        let count = seq.len() as f64;
        match seq.system() {
            // All strokes share one frame.
            NumeralSystem::Cistercian => self.compound_box,
            NumeralSystem::Kaktovik => {
                Size::new(count * self.base20_glyph.width, self.base20_glyph.height)
            }
            NumeralSystem::Binary => Size::new(count * self.bit_icon.width, self.bit_icon.height),
            NumeralSystem::PlaceValue => {
                let chars = seq.render(false).chars().count() as f64;
                Size::new(chars * self.place_value_char.width, self.place_value_char.height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{encode_base20, encode_binary_icons, encode_place_values, encode_positional_compound};

    #[test]
    fn binary_width_scales_with_bits() {
        let m = GlyphMetrics::default();
        let size = m.sequence(&encode_binary_icons(4239)); // 13 bits
        assert_eq!(size.width, 13.0 * m.bit_icon.width);
        assert_eq!(size.height, m.bit_icon.height);
    }

    #[test]
    fn base20_width_scales_with_digits() {
        let m = GlyphMetrics::default();
        let size = m.sequence(&encode_base20(4239)); // 3 digits
        assert_eq!(size.width, 3.0 * m.base20_glyph.width);
    }

    #[test]
    fn compound_footprint_is_fixed() {
        let m = GlyphMetrics::default();
        let small = m.sequence(&encode_positional_compound(Number::new(1).unwrap()));
        let large = m.sequence(&encode_positional_compound(Number::new(9999).unwrap()));
        assert_eq!(small, large);
        assert_eq!(small, m.compound_box);
    }

    #[test]
    fn place_value_width_counts_rendered_chars() {
        let m = GlyphMetrics::default();
        let size = m.sequence(&encode_place_values(Number::new(4239).unwrap()));
        // "4000 + 200 + 30 + 9"
        assert_eq!(size.width, 19.0 * m.place_value_char.width);
    }

    #[test]
    fn main_numeral_scales_with_digits() {
        let m = GlyphMetrics::default();
        assert_eq!(
            m.main_numeral(Number::new(42).unwrap()).width,
            2.0 * m.main_digit.width
        );
    }
}
