use std::collections::VecDeque;

use crate::{Card, HandError};

/// The ordered cards held by one player.
///
/// The front of the hand is the next card to be played; won cards go to the back.
#[derive(Debug, Default)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn play_front(&mut self) -> Result<Card, HandError> {
        self.cards.pop_front().ok_or(HandError::Empty)
    }

    /// Removes the card at the 0-based `index`.
    pub fn play_at(&mut self, index: usize) -> Result<Card, HandError> {
        if self.cards.is_empty() {
            return Err(HandError::Empty);
        }
        self.cards
            .remove(index)
            .ok_or(HandError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Appends cards to the back, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
