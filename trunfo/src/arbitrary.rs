use quickcheck::Arbitrary;

use crate::Card;

const ATTRIBUTES: [&str; 4] = ["consumo", "peso", "potencia", "velocidade"];

/// A deck where every card has the same attribute names.
///
/// Values are kept small so that ties come up often.
#[derive(Debug)]
pub struct Deck(pub Vec<Card>);

impl Clone for Deck {
    fn clone(&self) -> Self {
        Deck(
            self.0
                .iter()
                .map(|card| Card::new(card.name(), card.attributes().clone()))
                .collect(),
        )
    }
}

impl Arbitrary for Deck {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_cards = usize::arbitrary(g) % 40;
        Deck(
            (0..num_cards)
                .map(|idx| {
                    Card::new(
                        format!("Card {}", idx),
                        ATTRIBUTES
                            .iter()
                            .map(|&name| (name, f64::from(u8::arbitrary(g) % 8))),
                    )
                })
                .collect(),
        )
    }
}
