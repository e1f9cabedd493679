use crate::{Card, Error, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A standard 52-card deck. Draws come off the end of the current order,
/// like popping a stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Build all 52 rank/suit combinations and shuffle them.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Re-randomize the remaining cards in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw_card(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
