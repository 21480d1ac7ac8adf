//! Tournament driver: plays a fixed number of turns for one player.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::game::{Game, TurnRecord};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::{Player, PlayerId, PlayerIdAllocator};
use crate::core::rng::{GameRng, PinSource};

/// Final result of a tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub player_id: PlayerId,
    pub player: String,
    /// Seed of the RNG that drove the run, when known.
    pub seed: Option<u64>,
    pub turns: Vec<TurnRecord>,
    pub total_score: u32,
}

/// Runs `config.turns` turns of a single-player game.
pub struct Tournament<S = GameRng> {
    config: GameConfig,
    seed: Option<u64>,
    game: Game<S>,
}

impl Tournament<GameRng> {
    /// Create a tournament for a named player with a random pin source.
    ///
    /// Uses `config.seed` when set, otherwise seeds from entropy; either way
    /// the seed is reported in the summary. The player's id comes from `ids`.
    pub fn new(
        config: GameConfig,
        ids: &mut PlayerIdAllocator,
        player_name: impl Into<String>,
    ) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let player = Player::new(ids.allocate(), player_name, rng);
        Self::with_player(config, player)
    }
}

impl<S: PinSource> Tournament<S> {
    /// Create a tournament around an existing player.
    ///
    /// The summary reports the seed of the player's pin source, if it has one.
    pub fn with_player(config: GameConfig, player: Player<S>) -> Result<Self> {
        config.validate()?;
        let seed = player.pins().seed();
        let game = Game::with_total_pins(player, config.total_pins);
        Ok(Self { config, seed, game })
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play every turn.
    pub fn run(&mut self) -> Result<TournamentSummary> {
        self.run_with(|_| {})
    }

    /// Play every turn, calling `on_turn` with the game after each one.
    pub fn run_with(&mut self, mut on_turn: impl FnMut(&Game<S>)) -> Result<TournamentSummary> {
        info!(player = %self.game.player(), turns = self.config.turns, seed = ?self.seed, "tournament started");

        for round in 1..=self.config.turns {
            let record = self.game.play()?;
            info!(round, turn = %record.turn, score = record.score, outcome = %record.outcome, "turn played");
            on_turn(&self.game);
        }

        let summary = TournamentSummary {
            player_id: self.game.player().id(),
            player: self.game.player().name().to_string(),
            seed: self.seed,
            turns: self.game.turns().to_vec(),
            total_score: self.game.total_score(),
        };
        info!(player = %summary.player, total_score = summary.total_score, "tournament finished");
        Ok(summary)
    }
}
