//! Display modes shown around the main numeral.
//!
//! Declaration order is the default stacking order, nearest the anchor
//! first; a mode's layout priority is its 1-based slot, so modes further out
//! are the ones moved when two collide.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::glyph::NumeralSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumeralMode {
    Binary,
    Kaktovik,
    PlaceValue,
    Cistercian,
    /// Quantity visualization (icons per place value).
    Objects,
}

impl NumeralMode {
    /// All modes in stacking order.
    pub const ALL: [NumeralMode; 5] = [
        NumeralMode::Binary,
        NumeralMode::Kaktovik,
        NumeralMode::PlaceValue,
        NumeralMode::Cistercian,
        NumeralMode::Objects,
    ];

    /// 1-based stacking slot; 1 sits closest to the anchor.
    pub fn slot(self) -> u8 {
        match self {
            NumeralMode::Binary => 1,
            NumeralMode::Kaktovik => 2,
            NumeralMode::PlaceValue => 3,
            NumeralMode::Cistercian => 4,
            NumeralMode::Objects => 5,
        }
    }

    /// Layout priority. Never 0, which is reserved for the anchor.
    pub fn priority(self) -> u8 {
        self.slot()
    }

    /// The numeral system behind a mode; `None` for the quantity visualization.
    pub fn system(self) -> Option<NumeralSystem> {
        match self {
            NumeralMode::Binary => Some(NumeralSystem::Binary),
            NumeralMode::Kaktovik => Some(NumeralSystem::Kaktovik),
            NumeralMode::PlaceValue => Some(NumeralSystem::PlaceValue),
            NumeralMode::Cistercian => Some(NumeralSystem::Cistercian),
            NumeralMode::Objects => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumeralMode::Binary => "binary",
            NumeralMode::Kaktovik => "kaktovik",
            NumeralMode::PlaceValue => "place-value",
            NumeralMode::Cistercian => "cistercian",
            NumeralMode::Objects => "objects",
        }
    }
}

impl fmt::Display for NumeralMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumeralMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        NumeralMode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| {
                let known: Vec<_> = NumeralMode::ALL.iter().map(|m| m.name()).collect();
                format!("unknown mode '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// The set of enabled modes. Iterates in stacking order.
pub type ModeSet = BTreeSet<NumeralMode>;

/// Every mode enabled.
pub fn all_modes() -> ModeSet {
    NumeralMode::ALL.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacking_order_matches_priority() {
        let slots: Vec<u8> = all_modes().into_iter().map(NumeralMode::slot).collect();
        assert_eq!(slots, vec![1, 2, 3, 4, 5]);
        assert!(NumeralMode::ALL.iter().all(|m| m.priority() > 0));
    }

    #[test]
    fn binary_nearest_objects_farthest() {
        let modes = all_modes();
        assert_eq!(modes.first(), Some(&NumeralMode::Binary));
        assert_eq!(modes.last(), Some(&NumeralMode::Objects));
    }

    #[test]
    fn parse_names() {
        assert_eq!("Binary".parse::<NumeralMode>(), Ok(NumeralMode::Binary));
        assert_eq!("place-value".parse::<NumeralMode>(), Ok(NumeralMode::PlaceValue));
        assert!("roman".parse::<NumeralMode>().is_err());
    }

    #[test]
    fn only_objects_lacks_a_numeral_system() {
        let without: Vec<_> = NumeralMode::ALL
            .into_iter()
            .filter(|m| m.system().is_none())
            .collect();
        assert_eq!(without, vec![NumeralMode::Objects]);
    }
}
