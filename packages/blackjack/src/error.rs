use thiserror::Error;

/// Violated game invariants. Neither variant occurs in normal play: a round
/// draws at most ~20 of the 52 cards, and the bust rule stops a hand before
/// the capacity bound matters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Empty deck: no cards remaining to draw")]
    EmptyDeck,
    #[error("Hand full: cannot hold more than {capacity} cards")]
    HandFull { capacity: usize },
}
