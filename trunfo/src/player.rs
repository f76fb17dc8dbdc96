use crate::{compare_values, Card, GameError, Hand, HandError};

/// How a seat decides what to play and which attribute to compare.
///
/// Implementations must only ever return an attribute that exists on the
/// given card; invalid input is their problem to retry, not the engine's.
pub trait Strategy {
    /// The 0-based position in `hand` of the card to play this round.
    ///
    /// Only called for non-empty hands. Automated seats play the front card.
    fn select_card(&mut self, _hand: &Hand) -> Result<usize, GameError> {
        Ok(0)
    }

    fn choose_attribute(&mut self, card: &Card) -> Result<String, GameError>;

    /// True for seats driven by a person.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Always picks the attribute with the highest value.
///
/// If several attributes share the maximum, the one whose name sorts first
/// is chosen, so the result never depends on the order the attributes were
/// listed in.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMax;

impl GreedyMax {
    pub fn best_attribute(card: &Card) -> Option<&str> {
        let mut best: Option<(&String, f64)> = None;
        for (name, &value) in card.attributes() {
            match best {
                Some((_, best_value)) if compare_values(value, best_value).is_le() => {}
                _ => best = Some((name, value)),
            }
        }
        best.map(|(name, _)| name.as_str())
    }
}

impl Strategy for GreedyMax {
    fn choose_attribute(&mut self, card: &Card) -> Result<String, GameError> {
        GreedyMax::best_attribute(card)
            .map(String::from)
            .ok_or_else(|| GameError::CardWithoutAttributes {
                card: String::from(card.name()),
            })
    }
}

/// A seat at the table.
pub struct Player {
    pub name: String,
    hand: Hand,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: &str, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: String::from(name),
            hand: Hand::new(),
            strategy: Box::new(strategy),
        }
    }

    pub fn greedy(name: &str) -> Self {
        Self::new(name, GreedyMax)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn is_interactive(&self) -> bool {
        self.strategy.is_interactive()
    }

    /// Asks the strategy which card to play, without removing it yet.
    pub(crate) fn select_card(&mut self) -> Result<usize, GameError> {
        if self.hand.is_empty() {
            return Err(self.illegal_play(HandError::Empty));
        }
        let index = self.strategy.select_card(&self.hand)?;
        if index >= self.hand.len() {
            return Err(self.illegal_play(HandError::IndexOutOfRange {
                index,
                len: self.hand.len(),
            }));
        }
        Ok(index)
    }

    /// Asks the strategy for the attribute to compare, given the card at `index`.
    pub(crate) fn choose_attribute(&mut self, index: usize) -> Result<String, GameError> {
        let card = match self.hand.get(index) {
            Some(card) => card,
            None => {
                return Err(self.illegal_play(HandError::IndexOutOfRange {
                    index,
                    len: self.hand.len(),
                }))
            }
        };
        let attribute = self.strategy.choose_attribute(card)?;
        if card.attribute(&attribute).is_none() {
            return Err(GameError::MissingAttribute {
                card: String::from(card.name()),
                attribute,
            });
        }
        Ok(attribute)
    }

    pub(crate) fn illegal_play(&self, err: HandError) -> GameError {
        GameError::IllegalPlay {
            player: self.name.clone(),
            err,
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("interactive", &self.is_interactive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn greedy_picks_largest_value() {
        let card = card!("Carro A", velocidade: 220, potencia: 150, peso: 1200, consumo: 12);
        assert_eq!(GreedyMax.choose_attribute(&card).unwrap(), "peso");
    }

    #[test]
    fn greedy_ignores_listing_order() {
        let forward = card!("X", a: 5, b: 9, c: 9);
        let backward = card!("X", c: 9, b: 9, a: 5);
        assert_eq!(GreedyMax::best_attribute(&forward), Some("b"));
        assert_eq!(GreedyMax::best_attribute(&backward), Some("b"));
    }

    #[test]
    fn greedy_handles_negative_values() {
        let card = card!("X", cold: -40, colder: -50);
        assert_eq!(GreedyMax::best_attribute(&card), Some("cold"));
    }

    #[test]
    fn greedy_fails_on_card_without_attributes() {
        let card = Card::new("Blank", Vec::<(String, f64)>::new());
        assert!(matches!(
            GreedyMax.choose_attribute(&card),
            Err(GameError::CardWithoutAttributes { .. })
        ));
    }

    #[test]
    fn greedy_seat_plays_front_card() {
        let mut player = Player::greedy("IA 1");
        player
            .hand_mut()
            .add_cards([card!("A", x: 1), card!("B", x: 2)]);
        assert_eq!(player.select_card().unwrap(), 0);
        assert_eq!(player.choose_attribute(0).unwrap(), "x");
    }

    struct Stubborn;

    impl Strategy for Stubborn {
        fn select_card(&mut self, hand: &Hand) -> Result<usize, GameError> {
            Ok(hand.len())
        }

        fn choose_attribute(&mut self, _card: &Card) -> Result<String, GameError> {
            Ok(String::from("wings"))
        }
    }

    #[test]
    fn misbehaving_strategy_is_caught() {
        let mut player = Player::new("Broken", Stubborn);
        assert!(matches!(
            player.select_card(),
            Err(GameError::IllegalPlay {
                err: HandError::Empty,
                ..
            })
        ));
        player.hand_mut().add_cards([card!("A", x: 1)]);
        assert!(matches!(
            player.select_card(),
            Err(GameError::IllegalPlay {
                err: HandError::IndexOutOfRange { index: 1, len: 1 },
                ..
            })
        ));
        assert!(matches!(
            player.choose_attribute(0),
            Err(GameError::MissingAttribute { .. })
        ));
    }
}
