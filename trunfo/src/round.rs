use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{compare_values, Card, GameError, HandError, Player};

/// What happens to the cards of players who lost a tied round without being
/// part of the tie.
///
/// Tied players always get back only their own card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieRule {
    /// The cards leave the game for good.
    #[default]
    Discard,
    /// The cards wait in a pot that goes to the next outright winner.
    CarryOver,
}

/// Where the engine is within the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    AwaitingPlays,
    AttributeChosen,
    Resolved,
}

/// One card put on the table in a round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Play {
    pub player_idx: usize,
    pub player: String,
    pub card: String,
    /// The card's value for the chosen attribute.
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Resolution {
    /// A single winner took every played card (and the pot, if any).
    Won { player_idx: usize, cards_won: usize },
    /// Tied players took back their own card. The other played cards were
    /// set aside according to the [`TieRule`].
    Tie { set_aside: Vec<String> },
}

/// Summarizes a resolved round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundOutcome {
    /// 1-based.
    pub round_number: usize,
    pub chooser_idx: usize,
    pub attribute: String,
    /// In table order. Players without cards are absent.
    pub plays: Vec<Play>,
    /// Everyone who played the maximum value, in table order. Never empty.
    pub winners: Vec<usize>,
    pub resolution: Resolution,
}

impl RoundOutcome {
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Resolves rounds and keeps the state that lives between them: whose turn
/// it is to choose, how many rounds were played and the cards that are out
/// of the players' hands.
#[derive(Debug)]
pub struct RoundEngine {
    chooser_idx: usize,
    rounds_played: usize,
    phase: Phase,
    tie_rule: TieRule,
    discard_pile: Vec<Card>,
    pot: Vec<Card>,
}

impl RoundEngine {
    pub fn new(tie_rule: TieRule) -> Self {
        Self {
            chooser_idx: 0,
            rounds_played: 0,
            phase: Phase::AwaitingPlays,
            tie_rule,
            discard_pile: Vec::new(),
            pot: Vec::new(),
        }
    }

    /// The seat whose turn it is to choose the attribute next round.
    ///
    /// Advances by exactly one seat per round. If that seat has no cards, the
    /// next seat with cards chooses in its place.
    pub fn chooser_idx(&self) -> usize {
        self.chooser_idx
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tie_rule(&self) -> TieRule {
        self.tie_rule
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn pot(&self) -> &[Card] {
        &self.pot
    }

    /// Cards that are in neither player's hand.
    pub fn cards_out_of_play(&self) -> usize {
        self.discard_pile.len() + self.pot.len()
    }

    /// Plays one round at `players`.
    ///
    /// Every player with cards plays one. All choices are made and checked
    /// before any card moves, so on error the hands are left exactly as they
    /// were after the previous round.
    pub fn play_round(&mut self, players: &mut [Player]) -> Result<RoundOutcome, GameError> {
        self.phase = Phase::AwaitingPlays;
        let num_players = players.len();
        if num_players == 0 {
            return Err(GameError::NoPlayers);
        }
        let round_number = self.rounds_played + 1;

        let mut selections: Vec<(usize, usize)> = Vec::with_capacity(num_players);
        for (player_idx, player) in players.iter_mut().enumerate() {
            if player.hand().is_empty() {
                trace!(round_number, player = player.name, "Sitting out, no cards");
                continue;
            }
            selections.push((player_idx, player.select_card()?));
        }
        if selections.len() < 2 {
            return Err(GameError::GameOver);
        }

        // The chooser is the seat at the rotation index, or the next one holding cards.
        let chooser_idx = (0..num_players)
            .map(|offset| (self.chooser_idx + offset) % num_players)
            .find(|&idx| !players[idx].hand().is_empty())
            .ok_or(GameError::GameOver)?;
        let chooser_card_idx = selections
            .iter()
            .find(|(player_idx, _)| *player_idx == chooser_idx)
            .map(|&(_, card_idx)| card_idx)
            .ok_or(GameError::GameOver)?;
        let attribute = players[chooser_idx].choose_attribute(chooser_card_idx)?;

        let mut plays = Vec::with_capacity(selections.len());
        for &(player_idx, card_idx) in &selections {
            let player = &players[player_idx];
            let card = player.hand().get(card_idx).ok_or_else(|| {
                player.illegal_play(HandError::IndexOutOfRange {
                    index: card_idx,
                    len: player.hand().len(),
                })
            })?;
            let value = card
                .attribute(&attribute)
                .ok_or_else(|| GameError::MissingAttribute {
                    card: String::from(card.name()),
                    attribute: attribute.clone(),
                })?;
            plays.push(Play {
                player_idx,
                player: player.name.clone(),
                card: String::from(card.name()),
                value,
            });
        }
        self.phase = Phase::AttributeChosen;
        debug!(
            round_number,
            chooser = players[chooser_idx].name,
            attribute,
            "Attribute chosen"
        );

        let mut max_value = plays[0].value;
        for play in &plays[1..] {
            if compare_values(play.value, max_value) == Ordering::Greater {
                max_value = play.value;
            }
        }
        let winners: Vec<usize> = plays
            .iter()
            .filter(|play| compare_values(play.value, max_value) == Ordering::Equal)
            .map(|play| play.player_idx)
            .collect();

        // Nothing can fail from here on: every card index was checked above.
        let mut played_cards: Vec<(usize, Card)> = Vec::with_capacity(selections.len());
        for &(player_idx, card_idx) in &selections {
            let player = &mut players[player_idx];
            let played = match card_idx {
                0 => player.hand_mut().play_front(),
                _ => player.hand_mut().play_at(card_idx),
            };
            let card = played.map_err(|err| player.illegal_play(err))?;
            trace!(round_number, player = player.name, card = card.name(), "Played");
            played_cards.push((player_idx, card));
        }

        let resolution = if let [winner_idx] = winners[..] {
            let winner_hand = players[winner_idx].hand_mut();
            let mut cards_won = played_cards.len();
            winner_hand.add_cards(played_cards.into_iter().map(|(_, card)| card));
            if !self.pot.is_empty() {
                cards_won += self.pot.len();
                winner_hand.add_cards(self.pot.drain(..));
            }
            debug!(round_number, winner = players[winner_idx].name, cards_won, "Round won");
            Resolution::Won {
                player_idx: winner_idx,
                cards_won,
            }
        } else {
            let mut set_aside = Vec::new();
            for (player_idx, card) in played_cards {
                if winners.contains(&player_idx) {
                    players[player_idx].hand_mut().add_cards([card]);
                } else {
                    set_aside.push(String::from(card.name()));
                    match self.tie_rule {
                        TieRule::Discard => self.discard_pile.push(card),
                        TieRule::CarryOver => self.pot.push(card),
                    }
                }
            }
            debug!(
                round_number,
                tied = winners.len(),
                set_aside = set_aside.len(),
                tie_rule = ?self.tie_rule,
                "Round tied"
            );
            Resolution::Tie { set_aside }
        };

        self.chooser_idx = (self.chooser_idx + 1) % num_players;
        self.rounds_played = round_number;
        self.phase = Phase::Resolved;

        Ok(RoundOutcome {
            round_number,
            chooser_idx,
            attribute,
            plays,
            winners,
            resolution,
        })
    }
}
