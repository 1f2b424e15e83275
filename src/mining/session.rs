use chrono::Utc;
use log::{debug, info};
use rand::Rng;
use uuid::Uuid;

use super::{Candidate, Guesser, MiningReport, NameSource, rank};
use crate::blockchain::Blockchain;
use crate::error::ChainResult;

/// Drives mining cycles over a fixed population of candidates.
pub struct MiningSession<G> {
    candidates: Vec<Candidate>,
    guesser: G,
    cycles: u64,
}

impl<G: Guesser> MiningSession<G> {
    pub fn new(candidates: Vec<Candidate>, guesser: G, cycles: u64) -> Self {
        Self {
            candidates,
            guesser,
            cycles,
        }
    }

    /// Create `count` candidates named by `names`.
    pub fn with_names<N: NameSource>(names: &mut N, count: usize, guesser: G, cycles: u64) -> Self {
        let candidates = (0..count).map(|_| Candidate::new(names.next_name())).collect();
        Self::new(candidates, guesser, cycles)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Give every candidate one guess, in order. Returns the number of blocks won.
    pub fn run_cycle<R: Rng>(&mut self, chain: &mut Blockchain<R>) -> ChainResult<usize> {
        let header_length = chain.header_length();
        let mut won = 0;
        for candidate in &mut self.candidates {
            let guess = self.guesser.guess(candidate, header_length);
            match chain.submit(candidate.name(), &guess)? {
                Some(block) => {
                    candidate.credit(block.reward);
                    info!("Candidate {} win a reward", candidate.name());
                    won += 1;
                }
                None => debug!("Candidate {} did not win", candidate.name()),
            }
        }
        Ok(won)
    }

    /// Run every configured cycle and rank the candidates.
    ///
    /// Misses are normal; only a failure to publish the next target aborts.
    pub fn run<R: Rng>(&mut self, chain: &mut Blockchain<R>) -> ChainResult<MiningReport> {
        let started = Utc::now();
        info!(
            "Running {} mining cycles over {} candidates",
            self.cycles,
            self.candidates.len()
        );

        for cycle in 0..self.cycles {
            debug!("Starting mining cycle {cycle}");
            self.run_cycle(chain)?;
        }

        let finished = Utc::now();
        Ok(MiningReport {
            run_id: Uuid::new_v4().to_string(),
            started_at: started.timestamp(),
            finished_at: finished.timestamp(),
            elapsed_ms: (finished - started).num_milliseconds(),
            cycles: self.cycles,
            candidates: self.candidates.len(),
            height: chain.len(),
            final_shift: chain.shift(),
            standings: rank(&self.candidates),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MiningSession;
    use crate::blockchain::{Blockchain, HEADER_LENGTH, Header};
    use crate::mining::{Candidate, Guesser, NameSource, RandomGuesser};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, VecDeque};

    /// Replays fixed guesses per candidate; anyone unscripted guesses all nines.
    struct Scripted(HashMap<String, Header>);

    impl Guesser for Scripted {
        fn guess(&mut self, candidate: &Candidate, header_length: usize) -> Header {
            self.0
                .get(candidate.name())
                .cloned()
                .unwrap_or_else(|| Header::from_digits(vec![9; header_length]))
        }
    }

    struct Fixed(VecDeque<&'static str>);

    impl NameSource for Fixed {
        fn next_name(&mut self) -> String {
            self.0.pop_front().unwrap_or("anonymous").to_string()
        }
    }

    fn ledger() -> Blockchain {
        Blockchain::new(HEADER_LENGTH, StdRng::seed_from_u64(2024)).unwrap()
    }

    #[test]
    fn first_matching_candidate_wins_the_cycle() {
        let mut chain = ledger();
        let target = chain.target().clone();
        let script = HashMap::from([
            ("alpha".to_string(), target.clone()),
            ("beta".to_string(), target),
        ]);

        let mut names = Fixed(VecDeque::from(["alpha", "beta"]));
        let mut session = MiningSession::with_names(&mut names, 2, Scripted(script), 1);
        let report = session.run(&mut chain).unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.blocks()[1].winner, "alpha");
        assert_eq!(report.height, 2);
        assert_eq!(report.standings.len(), 2);
        assert_eq!(report.standings[0].name, "alpha");
        assert_eq!(report.standings[0].reward, 1);
        assert_eq!(report.standings[1].name, "beta");
        let winners: Vec<&str> = report.winners().map(|s| s.name.as_str()).collect();
        if chain.target() != &chain.blocks()[1].header {
            assert_eq!(report.standings[1].reward, 0);
            assert_eq!(winners, vec!["alpha"]);
        }
    }

    #[test]
    fn no_match_no_blocks() {
        let mut chain = ledger();
        let target = chain.target().clone();
        let miss = Header::from_digits(target.digits().iter().map(|d| (d + 1) % 10));
        let script = HashMap::from([("alpha".to_string(), miss)]);

        let mut session = MiningSession::new(vec![Candidate::new("alpha")], Scripted(script), 5);
        let report = session.run(&mut chain).unwrap();

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.target(), &target);
        assert_eq!(report.winners().count(), 0);
        assert_eq!(session.candidates()[0].reward(), 0);
    }

    #[test]
    fn rewards_match_chain_height() {
        let mut chain = ledger();
        let guesser = RandomGuesser::new(StdRng::seed_from_u64(77));
        let candidates = (0..20).map(|i| Candidate::new(format!("c{i}"))).collect();
        let mut session = MiningSession::new(candidates, guesser, 500);
        let report = session.run(&mut chain).unwrap();

        let total: u64 = report.standings.iter().map(|s| s.reward).sum();
        assert_eq!(total as usize, chain.len() - 1);
        assert!(chain.is_valid_chain());
        assert!(report.standings.windows(2).all(|w| w[0].reward >= w[1].reward));
    }
}
