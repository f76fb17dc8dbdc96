use std::cmp::Reverse;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{deal, Card, GameError, Player, RoundEngine, RoundOutcome, TieRule};

/// Rounds allowed per card in the deck when no explicit limit is configured.
pub const DEFAULT_ROUNDS_PER_CARD: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub tie_rule: TieRule,
    /// Defaults to [`DEFAULT_ROUNDS_PER_CARD`] times the deck size.
    pub max_rounds: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// Fewer than two players hold cards, so no round can be played.
    OpponentsExhausted,
    RoundLimitReached,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    /// Several players share the largest hand.
    Draw { player_idxs: Vec<usize> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player_idx: usize,
    pub name: String,
    pub cards: usize,
}

/// The final (or current) ranking of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standings {
    /// Sorted by number of cards, largest first. Equal hands keep table order.
    pub ranking: Vec<Standing>,
    pub result: GameResult,
    pub rounds_played: usize,
    pub end_reason: Option<EndReason>,
    /// Cards lost to ties that no player holds.
    pub cards_out_of_play: usize,
}

/// Drives rounds at a table until the game is over.
pub struct Game {
    players: Vec<Player>,
    engine: RoundEngine,
    deck_size: usize,
    max_rounds: usize,
}

impl Game {
    /// Checks the table, then shuffles and deals `deck`.
    pub fn new<R: Rng + ?Sized>(
        mut players: Vec<Player>,
        deck: Vec<Card>,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        match players.len() {
            0 => return Err(GameError::NoPlayers),
            1 => return Err(GameError::TooFewPlayers { found: 1 }),
            _ => {}
        }
        if deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let deck_size = deck.len();
        deal(deck, &mut players, rng)?;
        let max_rounds = config
            .max_rounds
            .unwrap_or(DEFAULT_ROUNDS_PER_CARD * deck_size);
        info!(
            players = players.len(),
            deck_size,
            max_rounds,
            tie_rule = ?config.tie_rule,
            "New game"
        );

        Ok(Self {
            players,
            engine: RoundEngine::new(config.tie_rule),
            deck_size,
            max_rounds,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand().len()).sum()
    }

    /// Always equal to the deck size.
    pub fn total_cards(&self) -> usize {
        self.cards_in_hands() + self.engine.cards_out_of_play()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        let holders = self
            .players
            .iter()
            .filter(|p| !p.hand().is_empty())
            .count();
        if holders < 2 {
            Some(EndReason::OpponentsExhausted)
        } else if self.engine.rounds_played() >= self.max_rounds {
            Some(EndReason::RoundLimitReached)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.end_reason().is_some()
    }

    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.engine.play_round(&mut self.players)
    }

    /// Plays rounds until the game is over, calling `on_round` after each one.
    pub fn play_to_end(
        &mut self,
        mut on_round: impl FnMut(&RoundOutcome),
    ) -> Result<Standings, GameError> {
        while !self.is_over() {
            let outcome = self.play_round()?;
            on_round(&outcome);
        }
        let standings = self.standings();
        debug!(
            rounds_played = standings.rounds_played,
            end_reason = ?standings.end_reason,
            result = ?standings.result,
            "Game over"
        );
        Ok(standings)
    }

    pub fn standings(&self) -> Standings {
        let mut ranking: Vec<Standing> = self
            .players
            .iter()
            .enumerate()
            .map(|(player_idx, player)| Standing {
                player_idx,
                name: player.name.clone(),
                cards: player.hand().len(),
            })
            .collect();
        // Stable, so equal hands stay in table order
        ranking.sort_by_key(|standing| Reverse(standing.cards));

        let most_cards = ranking[0].cards;
        let leaders: Vec<usize> = ranking
            .iter()
            .take_while(|standing| standing.cards == most_cards)
            .map(|standing| standing.player_idx)
            .collect();
        let result = if leaders.len() == 1 {
            GameResult::WonByPlayer {
                player_idx: leaders[0],
            }
        } else {
            GameResult::Draw {
                player_idxs: leaders,
            }
        };

        Standings {
            ranking,
            result,
            rounds_played: self.engine.rounds_played(),
            end_reason: self.end_reason(),
            cards_out_of_play: self.engine.cards_out_of_play(),
        }
    }
}
