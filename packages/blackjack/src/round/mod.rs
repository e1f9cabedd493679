use crate::{Deck, Error, Hand};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Table rules for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Dealer stands at or above this score.
    pub dealer_stand_min: u8,
    /// Maximum cards per hand.
    pub hand_capacity: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            dealer_stand_min: 17,
            hand_capacity: 5,
        }
    }
}

/// How the player phase of a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerOutcome {
    /// Reached exactly 21; the round ends immediately in the player's favor.
    Blackjack,
    /// Went over 21; the round ends immediately against the player.
    Bust,
    /// Chose to stand; the dealer plays next.
    Stood,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Blackjack,
    PlayerWin,
    Push,
    DealerWin,
    PlayerBust,
}

/// Compare final scores.
///
/// The interactive flow never reaches the 21 branch here (the player phase
/// intercepts exactly 21 before the dealer plays); it is kept so the
/// resolver stays total over all score pairs.
pub fn resolve_outcome(player_score: u8, dealer_score: u8) -> RoundOutcome {
    if player_score == 21 {
        RoundOutcome::Blackjack
    } else if player_score <= 21 {
        if dealer_score > 21 || player_score > dealer_score {
            RoundOutcome::PlayerWin
        } else if player_score == dealer_score {
            RoundOutcome::Push
        } else {
            RoundOutcome::DealerWin
        }
    } else {
        RoundOutcome::PlayerBust
    }
}

/// One round of play: a fresh deck and one hand per party. Rounds are
/// created at the deal and discarded once resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub rules: Rules,
}

impl Round {
    /// Start a round: shuffle a new deck and deal two cards each, player
    /// first (player, player, dealer, dealer).
    pub fn deal<R: Rng>(rng: &mut R, rules: Rules) -> Result<Self, Error> {
        let mut deck = Deck::new(rng);
        let mut player = Hand::with_capacity(rules.hand_capacity);
        let mut dealer = Hand::with_capacity(rules.hand_capacity);

        player.add_card(deck.draw_card()?)?;
        player.add_card(deck.draw_card()?)?;
        dealer.add_card(deck.draw_card()?)?;
        dealer.add_card(deck.draw_card()?)?;

        Ok(Self {
            deck,
            player,
            dealer,
            rules,
        })
    }

    /// Draw one card into the player's hand.
    pub fn player_hit(&mut self) -> Result<(), Error> {
        let card = self.deck.draw_card()?;
        self.player.add_card(card)
    }

    pub fn dealer_should_hit(&self) -> bool {
        self.dealer.score() < self.rules.dealer_stand_min
    }

    /// Dealer draws until reaching the stand threshold.
    pub fn dealer_play(&mut self) -> Result<(), Error> {
        while self.dealer_should_hit() {
            let card = self.deck.draw_card()?;
            self.dealer.add_card(card)?;
        }
        Ok(())
    }

    pub fn outcome(&self) -> RoundOutcome {
        resolve_outcome(self.player.score(), self.dealer.score())
    }
}
