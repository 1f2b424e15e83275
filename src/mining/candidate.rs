use log::trace;
use rand::Rng;

use crate::blockchain::Header;

/// An independent guesser with a fixed identity and a running reward total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    reward: u64,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reward: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reward(&self) -> u64 {
        self.reward
    }

    // Only the mining session credits rewards.
    pub(super) fn credit(&mut self, amount: u64) {
        self.reward = self.reward.saturating_add(amount);
    }
}

/// Produces a candidate's guess for the current round.
pub trait Guesser {
    fn guess(&mut self, candidate: &Candidate, header_length: usize) -> Header;
}

/// Guesses every digit independently and uniformly in `0..=9`.
#[derive(Debug)]
pub struct RandomGuesser<R> {
    rng: R,
}

impl<R: Rng> RandomGuesser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Guesser for RandomGuesser<R> {
    fn guess(&mut self, candidate: &Candidate, header_length: usize) -> Header {
        let digits: Vec<u8> = (0..header_length)
            .map(|_| self.rng.gen_range(0..=9u8))
            .collect();
        trace!("{} guessed {:?}", candidate.name(), digits);
        Header::from_digits(digits)
    }
}
