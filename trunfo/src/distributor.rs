use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::{Card, GameError, Player};

/// Shuffles `deck` and deals it round-robin: the card at shuffled position `i`
/// goes to player `i % players.len()`.
///
/// Hand sizes end up differing by at most one card.
pub fn deal<R: Rng + ?Sized>(
    mut deck: Vec<Card>,
    players: &mut [Player],
    rng: &mut R,
) -> Result<(), GameError> {
    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    deck.shuffle(rng);
    let num_players = players.len();
    for (i, card) in deck.into_iter().enumerate() {
        let player = &mut players[i % num_players];
        trace!(player = player.name, card = card.name(), "Dealt");
        player.hand_mut().add_cards([card]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::Deck;
    use crate::card;

    fn table(num_players: usize) -> Vec<Player> {
        (0..num_players)
            .map(|i| Player::greedy(&format!("IA {}", i)))
            .collect()
    }

    quickcheck! {
        fn hand_sizes_are_fair(deck: Deck, num_players: u8, seed: u64) -> bool {
            let num_players = usize::from(num_players % 8) + 1;
            let num_cards = deck.0.len();
            let mut players = table(num_players);
            deal(deck.0, &mut players, &mut StdRng::seed_from_u64(seed)).unwrap();

            let floor = num_cards / num_players;
            let ceil = num_cards.div_ceil(num_players);
            let total: usize = players.iter().map(|p| p.hand().len()).sum();
            total == num_cards
                && players.iter().all(|p| p.hand().len() == floor || p.hand().len() == ceil)
        }
    }

    #[test]
    fn every_card_is_dealt_once() {
        let deck: Vec<Card> = (0..10).map(|i| card!(format!("C{}", i), x: i)).collect();
        let mut players = table(3);
        deal(deck, &mut players, &mut StdRng::seed_from_u64(7)).unwrap();

        let names: BTreeSet<&str> = players
            .iter()
            .flat_map(|p| p.hand().iter().map(Card::name))
            .collect();
        assert_eq!(names.len(), 10);
        let sizes: Vec<usize> = players.iter().map(|p| p.hand().len()).collect();
        assert_eq!(sizes, [4, 3, 3]);
    }

    #[test]
    fn same_seed_same_deal() {
        let deal_names = |seed| {
            let deck: Vec<Card> = (0..8).map(|i| card!(format!("C{}", i), x: i)).collect();
            let mut players = table(2);
            deal(deck, &mut players, &mut StdRng::seed_from_u64(seed)).unwrap();
            players[0]
                .hand()
                .iter()
                .map(|c| String::from(c.name()))
                .collect::<Vec<_>>()
        };
        assert_eq!(deal_names(42), deal_names(42));
    }

    #[test]
    fn zero_players_is_an_error() {
        let deck = vec![card!("A", x: 1)];
        assert!(matches!(
            deal(deck, &mut [], &mut StdRng::seed_from_u64(0)),
            Err(GameError::NoPlayers)
        ));
    }
}
