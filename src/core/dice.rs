//! Die values and the die-source seam.
//!
//! The engine never generates randomness. Every roll arrives as a
//! `DieValue`, which can only hold 1-6, from some `DieSource`.

use serde::{Deserialize, Serialize};

use crate::error::LudoError;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// A rolled die value in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    /// The value that releases a piece from the yard and grants another roll.
    pub const SIX: DieValue = DieValue(6);

    /// Create a die value.
    ///
    /// Panics outside `1..=6`. Use `DieValue::try_from` for untrusted input.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= DIE_FACES, "Die value must be 1-6");
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == DIE_FACES
    }

    /// All six faces in ascending order.
    pub fn all() -> impl Iterator<Item = DieValue> {
        (1..=DIE_FACES).map(DieValue)
    }
}

impl TryFrom<u8> for DieValue {
    type Error = LudoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=DIE_FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LudoError::InvalidDieValue(value))
        }
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of die rolls.
///
/// Implementations must produce values uniformly in `1..=6` for fair play;
/// scripted sources are free to do otherwise.
pub trait DieSource {
    /// Roll the die once.
    fn roll_die(&mut self) -> DieValue;
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll_die(&mut self) -> DieValue {
        (**self).roll_die()
    }
}
