//! Game configuration.
//!
//! Only presentation data and the dice seed are configurable. The board,
//! the player count and the rules are fixed.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

const DEFAULT_NAMES: [&str; 4] = ["Red", "Blue", "Green", "Yellow"];
const DEFAULT_COLORS: [&str; 4] = ["#EF4444", "#3B82F6", "#10B981", "#F59E0B"];

/// Configuration used to create a game.
///
/// ```
/// use ludo_engine::core::{GameConfig, PlayerId};
///
/// let config = GameConfig::default()
///     .with_player_name(PlayerId::new(0), "Alice")
///     .with_seed(7);
///
/// assert_eq!(config.player_name(PlayerId::new(0)), "Alice");
/// assert_eq!(config.player_name(PlayerId::new(1)), "Blue");
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name per seat.
    pub names: PlayerMap<String>,

    /// Display color per seat. Opaque to the engine.
    pub colors: PlayerMap<String>,

    /// Dice seed for `LudoGame::new`. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            names: PlayerMap::new(|p| DEFAULT_NAMES[p.index()].to_string()),
            colors: PlayerMap::new(|p| DEFAULT_COLORS[p.index()].to_string()),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set a player's display name.
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.names[player] = name.into();
        self
    }

    /// Set a player's display color.
    #[must_use]
    pub fn with_player_color(mut self, player: PlayerId, color: impl Into<String>) -> Self {
        self.colors[player] = color.into();
        self
    }

    /// Fix the dice seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    #[must_use]
    pub fn player_color(&self, player: PlayerId) -> &str {
        &self.colors[player]
    }
}
