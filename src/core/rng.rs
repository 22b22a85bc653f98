//! Die sources: a seeded random die and a scripted one.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed rolls the same sequence
//! - **Uniform**: every face in `1..=6` is equally likely
//! - **Scriptable**: `ScriptedDice` replays fixed values for hosts that
//!   receive rolls from elsewhere, and for tests
//!
//! ```
//! use ludo_engine::core::{DiceRng, DieSource};
//!
//! let mut a = DiceRng::new(42);
//! let mut b = DiceRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::{DieSource, DieValue, DIE_FACES};
use crate::error::LudoError;

/// Seeded uniform die.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a die seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll once.
    pub fn roll(&mut self) -> DieValue {
        DieValue::new(self.inner.gen_range(1..=DIE_FACES))
    }
}

impl DieSource for DiceRng {
    fn roll_die(&mut self) -> DieValue {
        self.roll()
    }
}

/// Die that replays a fixed sequence of values, cycling when exhausted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScriptedDice")]
pub struct ScriptedDice {
    values: Vec<DieValue>,
    cursor: usize,
}

/// Unchecked wire form of `ScriptedDice`.
#[derive(Deserialize)]
struct RawScriptedDice {
    values: Vec<DieValue>,
    cursor: usize,
}

impl TryFrom<RawScriptedDice> for ScriptedDice {
    type Error = LudoError;

    fn try_from(raw: RawScriptedDice) -> Result<Self, Self::Error> {
        if raw.values.is_empty() {
            return Err(LudoError::EmptyDiceScript);
        }
        Ok(Self {
            values: raw.values,
            cursor: raw.cursor,
        })
    }
}

impl ScriptedDice {
    /// Create a scripted die.
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<DieValue>) -> Self {
        assert!(!values.is_empty(), "Scripted dice need at least one value");
        Self { values, cursor: 0 }
    }

    /// Create a scripted die from raw values, rejecting any outside 1-6.
    pub fn from_raw(values: &[u8]) -> Result<Self, LudoError> {
        let values = values
            .iter()
            .map(|&v| DieValue::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(LudoError::EmptyDiceScript);
        }
        Ok(Self::new(values))
    }

    /// Number of values rolled so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> DieValue {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
