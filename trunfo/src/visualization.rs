use crate::{GameResult, Hand, Resolution, RoundOutcome, Standings};

/// Lists a hand with 1-based numbers, as used for picking a card.
pub fn render_hand(hand: &Hand) -> String {
    let mut result = String::from("Your cards:");
    for (idx, card) in hand.iter().enumerate() {
        result += &format!("\n{}. {}", idx + 1, card);
    }
    result
}

pub fn render_round(outcome: &RoundOutcome) -> String {
    let name_of = |player_idx: usize| {
        outcome
            .plays
            .iter()
            .find(|play| play.player_idx == player_idx)
            .map(|play| play.player.as_str())
            .unwrap_or("?")
    };

    let mut result = format!("Round {}:", outcome.round_number);
    result += &format!(
        "\n{} chose the attribute: {}",
        name_of(outcome.chooser_idx),
        outcome.attribute
    );
    for play in &outcome.plays {
        result += &format!(
            "\n  {} played {} ({} = {})",
            play.player, play.card, outcome.attribute, play.value
        );
    }
    match &outcome.resolution {
        Resolution::Won {
            player_idx,
            cards_won,
        } => {
            result += &format!(
                "\n{} won the round and takes {} cards!",
                name_of(*player_idx),
                cards_won
            );
        }
        Resolution::Tie { set_aside } => {
            let tied: Vec<&str> = outcome.winners.iter().map(|&idx| name_of(idx)).collect();
            result += &format!("\nThe round was a tie between {}!", tied.join(", "));
            if !set_aside.is_empty() {
                result += &format!("\nSet aside: {}", set_aside.join(", "));
            }
        }
    }
    result
}

/// The one-line verdict shown when a game ends.
pub fn render_summary(standings: &Standings) -> String {
    let name_of = |player_idx: usize| {
        standings
            .ranking
            .iter()
            .find(|standing| standing.player_idx == player_idx)
            .map(|standing| (standing.name.as_str(), standing.cards))
            .unwrap_or(("?", 0))
    };
    match &standings.result {
        GameResult::WonByPlayer { player_idx } => {
            let (name, cards) = name_of(*player_idx);
            format!("Game over! {} won the game with {} cards!", name, cards)
        }
        GameResult::Draw { player_idxs } => {
            let names: Vec<&str> = player_idxs.iter().map(|&idx| name_of(idx).0).collect();
            let cards = name_of(player_idxs[0]).1;
            format!(
                "Game over! It's a draw between {} with {} cards each!",
                names.join(", "),
                cards
            )
        }
    }
}
