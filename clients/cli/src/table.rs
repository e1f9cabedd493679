//! Interactive blackjack table: prompts, hand rendering and the round flow.

use std::io::{BufRead, Write};

use blackjack::{Hand, PlayerOutcome, Round, RoundOutcome, Rules};
use rand::Rng;

pub type BoxErr = Box<dyn std::error::Error + Send + Sync>;

/// A terminal blackjack table. Generic over input, output and RNG so the
/// full interactive flow can run against in-memory buffers in tests.
pub struct Table<R, W, G> {
    input: R,
    output: W,
    rng: G,
    rules: Rules,
}

impl<R: BufRead, W: Write, G: Rng> Table<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self {
            input,
            output,
            rng,
            rules: Rules::default(),
        }
    }

    /// Play rounds until one ends the session: a player blackjack or bust,
    /// a declined replay, or exhausted input.
    pub fn run(&mut self) -> Result<(), BoxErr> {
        loop {
            let mut round = Round::deal(&mut self.rng, self.rules)?;
            log::debug!("round dealt, {} cards left in deck", round.deck.len());
            if !self.play_round(&mut round)? {
                return Ok(());
            }
        }
    }

    /// Play one round to completion. Returns whether another round should
    /// be dealt. A terminal player phase (blackjack or bust) skips both the
    /// dealer turn and the replay prompt.
    fn play_round(&mut self, round: &mut Round) -> Result<bool, BoxErr> {
        match self.player_turn(round)? {
            None => Ok(false),
            Some(PlayerOutcome::Blackjack) | Some(PlayerOutcome::Bust) => {
                self.show_game_stats(round)?;
                Ok(false)
            }
            Some(PlayerOutcome::Stood) => {
                self.dealer_turn(round)?;
                self.announce(round.outcome())?;
                self.show_game_stats(round)?;
                self.prompt_replay()
            }
        }
    }

    /// Player phase: show the hand, intercept 21 and busts, otherwise ask
    /// for hit or stand (case-insensitive). Unrecognized input re-enters the
    /// loop with the hand displayed again. `None` means input ended.
    fn player_turn(&mut self, round: &mut Round) -> Result<Option<PlayerOutcome>, BoxErr> {
        loop {
            writeln!(self.output, "\n--------Player's Hand--------\n")?;
            self.print_hand(&round.player)?;

            let score = round.player.score();
            if score == 21 {
                writeln!(self.output, "Blackjack! You win!")?;
                return Ok(Some(PlayerOutcome::Blackjack));
            }
            if score > 21 {
                writeln!(self.output, "Player busted! You lose!")?;
                return Ok(Some(PlayerOutcome::Bust));
            }

            write!(
                self.output,
                "Do you want to hit or stand? (Enter 'hit' or 'stand'): "
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().to_lowercase().as_str() {
                "hit" => {
                    round.player_hit()?;
                    log::debug!("player hit, score now {}", round.player.score());
                }
                "stand" => return Ok(Some(PlayerOutcome::Stood)),
                _ => writeln!(self.output, "Invalid input. Please enter 'hit' or 'stand'.")?,
            }
        }
    }

    /// Dealer phase: reveal the hand, draw to the stand threshold, show the
    /// final hand.
    fn dealer_turn(&mut self, round: &mut Round) -> Result<(), BoxErr> {
        writeln!(self.output, "\n------Dealer's Hand------\n")?;
        self.print_hand(&round.dealer)?;

        round.dealer_play()?;
        log::debug!("dealer stands at {}", round.dealer.score());

        writeln!(self.output, "\n------Dealer's Hand------\n")?;
        self.print_hand(&round.dealer)?;
        Ok(())
    }

    fn announce(&mut self, outcome: RoundOutcome) -> Result<(), BoxErr> {
        let line = match outcome {
            RoundOutcome::Blackjack => "Blackjack! You win!",
            RoundOutcome::PlayerWin => "Congratulations! You win!",
            RoundOutcome::Push => "It's a tie!",
            RoundOutcome::DealerWin => "Dealer wins! You lose!",
            RoundOutcome::PlayerBust => "Player busted! You lose!",
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Final display of both hands at the end of a round.
    fn show_game_stats(&mut self, round: &Round) -> Result<(), BoxErr> {
        writeln!(self.output, "\n----------Player's Hand-----------\n")?;
        self.print_hand(&round.player)?;
        writeln!(self.output, "\n----------Dealer's Hand-----------\n")?;
        self.print_hand(&round.dealer)?;
        Ok(())
    }

    /// One line per card, then the live score.
    fn print_hand(&mut self, hand: &Hand) -> Result<(), BoxErr> {
        for card in &hand.cards {
            writeln!(self.output, "{card}")?;
        }
        writeln!(self.output, "Score: {}\n", hand.score())?;
        Ok(())
    }

    /// Replay prompt: only an explicit "yes" deals another round.
    fn prompt_replay(&mut self) -> Result<bool, BoxErr> {
        write!(
            self.output,
            "Do you want to play again? (Enter 'yes' or 'no'): "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        Ok(line.trim().to_lowercase() == "yes")
    }

    /// Next input line, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, BoxErr> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
