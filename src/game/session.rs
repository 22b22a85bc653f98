//! A running game: current state plus a die source.

use crate::core::{DiceRng, DieSource, DieValue, GameConfig, GameState, Phase, PieceId, PlayerId};
use crate::error::{LudoError, LudoResult};
use crate::rules::{self, Action};

/// Owns the current snapshot and the dice, and refuses invalid input with a
/// typed error instead of a silent no-op.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{PieceId, PlayerId, ScriptedDice};
/// use ludo_engine::game::LudoGame;
/// use ludo_engine::GameConfig;
///
/// let dice = ScriptedDice::from_raw(&[6]).unwrap();
/// let mut game = LudoGame::with_dice(GameConfig::default(), dice);
///
/// game.roll().unwrap();
/// game.select_piece(PieceId::new(PlayerId::new(0), 0)).unwrap();
/// assert_eq!(game.state().piece(PieceId::new(PlayerId::new(0), 0)).position(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct LudoGame<D: DieSource = DiceRng> {
    config: GameConfig,
    state: GameState,
    dice: D,
}

impl LudoGame<DiceRng> {
    /// Start a game with a random die, seeded from `config.seed` when set.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        };
        Self::with_dice(config, dice)
    }
}

impl<D: DieSource> LudoGame<D> {
    /// Start a game with the given die source.
    #[must_use]
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        let state = GameState::new(&config);
        log::info!("New game: {}", player_names(&config));
        Self { config, state, dice }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        rules::is_terminal(&self.state)
    }

    /// Roll for the acting player.
    ///
    /// Returns the value rolled. The turn may pass as a result when no
    /// piece can move.
    pub fn roll(&mut self) -> LudoResult<DieValue> {
        if self.state.phase() == Phase::Finished {
            return Err(LudoError::GameFinished);
        }
        if !rules::can_roll(&self.state) {
            return Err(LudoError::RollNotAllowed(self.state.phase()));
        }

        let die = self.dice.roll_die();
        self.state = rules::roll(&self.state, die);
        Ok(die)
    }

    /// Move one of the eligible pieces.
    pub fn select_piece(&mut self, id: PieceId) -> LudoResult<()> {
        if self.state.phase() == Phase::Finished {
            return Err(LudoError::GameFinished);
        }
        if self.state.phase() != Phase::Moving || !self.state.is_eligible(id) {
            return Err(LudoError::PieceNotEligible(id));
        }

        self.state = rules::apply_move(&self.state, id);
        Ok(())
    }

    /// Perform an `Action`.
    pub fn step(&mut self, action: &Action) -> LudoResult<()> {
        match *action {
            Action::Roll => self.roll().map(|_| ()),
            Action::Move(id) => self.select_piece(id),
        }
    }

    /// Discard the current game and start over with the same config and dice.
    pub fn new_game(&mut self) {
        log::info!("New game: {}", player_names(&self.config));
        self.state = GameState::new(&self.config);
    }
}

fn player_names(config: &GameConfig) -> String {
    PlayerId::all()
        .map(|p| config.player_name(p))
        .collect::<Vec<_>>()
        .join(", ")
}
