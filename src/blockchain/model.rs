use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use super::phi::digit_at;
use super::{BLOCK_REWARD, Block, Header, MAX_SHIFT_STEP, MIN_SHIFT_STEP};
use crate::error::{ChainError, ChainResult};

/// In-memory ledger publishing golden-ratio targets and accepting the
/// first matching guess.
#[derive(Debug)]
pub struct Blockchain<R = StdRng> {
    chain: Vec<Block>,
    shift: u32,
    target: Header,
    header_length: usize,
    rng: R,
}

impl<R: Rng> Blockchain<R> {
    /// Initialize a new ledger with a genesis block and publish the first target.
    pub fn new(header_length: usize, rng: R) -> ChainResult<Self> {
        if header_length == 0 {
            return Err(ChainError::InvalidConfig("header length must be positive".into()));
        }
        let shift = u32::try_from(header_length).map_err(|_| {
            ChainError::InvalidConfig(format!("header length {header_length} too large"))
        })?;

        let genesis = Block::genesis(header_length);
        info!("Created initial block {:016x}", genesis.fingerprint());

        let mut bc = Self {
            chain: vec![genesis],
            shift,
            target: Header::zeroed(header_length),
            header_length,
            rng,
        };
        bc.republish_target()?;
        Ok(bc)
    }

    /// Advance the shift by a random step and recompute the whole target.
    fn republish_target(&mut self) -> ChainResult<()> {
        let step = self.rng.gen_range(MIN_SHIFT_STEP..=MAX_SHIFT_STEP);
        self.shift = self
            .shift
            .checked_add(step)
            .ok_or_else(|| ChainError::oracle(self.shift, "shift overflows"))?;
        debug!("Next shift is {}", self.shift);

        let mut digits = Vec::with_capacity(self.header_length);
        for i in 0..self.header_length {
            let n = u32::try_from(i)
                .ok()
                .and_then(|i| self.shift.checked_add(i))
                .ok_or_else(|| ChainError::oracle(self.shift, "position overflows"))?;
            digits.push(digit_at(n)?);
        }
        self.target = Header::from_digits(digits);
        debug!("Next header is {}", self.target);
        Ok(())
    }

    /// Check a candidate's guess against the current target.
    ///
    /// On a match the target is snapshotted into a new block, the block is
    /// appended and a fresh target is published. A miss (including a guess
    /// of the wrong length) returns `None` and leaves the ledger untouched.
    /// Errors only when the next target cannot be computed.
    pub fn submit(&mut self, candidate: &str, guess: &Header) -> ChainResult<Option<Block>> {
        debug!("Candidate {candidate} wants to check block header {guess}");
        if guess.len() != self.header_length {
            debug!(
                "Candidate {candidate} sent {} digits, expected {}",
                guess.len(),
                self.header_length
            );
            return Ok(None);
        }
        if *guess != self.target {
            debug!("Candidate {candidate} was wrong: {guess} != {}", self.target);
            return Ok(None);
        }

        let block = Block::new(self.target.clone(), self.last_block().fingerprint(), candidate);
        info!(
            "Candidate {candidate} is a winner, block #{} {:016x}",
            self.chain.len(),
            block.fingerprint()
        );
        self.chain.push(block.clone());
        self.republish_target()?;
        Ok(Some(block))
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        // The chain always holds at least the genesis block.
        &self.chain[self.chain.len() - 1]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn target(&self) -> &Header {
        &self.target
    }

    pub fn header_length(&self) -> usize {
        self.header_length
    }

    /// Validate the entire chain: genesis shape, fingerprint linkage and rewards.
    pub fn is_valid_chain(&self) -> bool {
        let Some(genesis) = self.chain.first() else {
            return false;
        };
        if !genesis.is_genesis() || genesis.header.len() != self.header_length {
            return false;
        }

        self.chain.windows(2).all(|pair| {
            let (prev, current) = (&pair[0], &pair[1]);
            current.previous_fingerprint == prev.fingerprint()
                && current.reward == BLOCK_REWARD
                && current.header.len() == self.header_length
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Blockchain;
    use crate::blockchain::phi::digit_at;
    use crate::blockchain::{GENESIS_WINNER, HEADER_LENGTH, Header, MAX_SHIFT_STEP};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ledger(seed: u64) -> Blockchain {
        Blockchain::new(HEADER_LENGTH, StdRng::seed_from_u64(seed)).unwrap()
    }

    fn expected_target(shift: u32) -> Vec<u8> {
        (0..HEADER_LENGTH as u32)
            .map(|i| digit_at(shift + i).unwrap())
            .collect()
    }

    fn miss_for(target: &Header) -> Header {
        Header::from_digits(target.digits().iter().map(|d| (d + 1) % 10))
    }

    #[test]
    fn initialize_publishes_first_target() {
        let bc = ledger(1);
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.last_block().winner, GENESIS_WINNER);
        assert!(bc.shift() > HEADER_LENGTH as u32);
        assert!(bc.shift() <= HEADER_LENGTH as u32 + MAX_SHIFT_STEP);
        assert_eq!(bc.target().len(), HEADER_LENGTH);
        assert_eq!(bc.target().digits(), expected_target(bc.shift()).as_slice());
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn zero_header_length_rejected() {
        assert!(Blockchain::new(0, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn matching_guess_appends_and_republishes() {
        let mut bc = ledger(7);
        let target = bc.target().clone();
        let shift = bc.shift();
        let genesis_fp = bc.last_block().fingerprint();

        let block = bc.submit("alpha", &target).unwrap().expect("accepted");
        assert_eq!(block.reward, 1);
        assert_eq!(block.winner, "alpha");
        assert_eq!(block.header, target);
        assert_eq!(block.previous_fingerprint, genesis_fp);

        assert_eq!(bc.len(), 2);
        assert!(bc.shift() > shift);
        assert_eq!(bc.target().digits(), expected_target(bc.shift()).as_slice());
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn stored_block_keeps_its_header_after_republish() {
        let mut bc = ledger(3);
        let target = bc.target().clone();
        bc.submit("alpha", &target).unwrap().unwrap();
        let next = bc.target().clone();
        bc.submit("beta", &next).unwrap().unwrap();
        assert_eq!(bc.blocks()[1].header, target);
        assert_eq!(bc.blocks()[2].header, next);
    }

    #[test]
    fn miss_leaves_ledger_untouched() {
        let mut bc = ledger(11);
        let target = bc.target().clone();
        let shift = bc.shift();
        let guess = miss_for(&target);

        assert!(bc.submit("beta", &guess).unwrap().is_none());
        assert!(bc.submit("beta", &guess).unwrap().is_none());
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.shift(), shift);
        assert_eq!(bc.target(), &target);
    }

    #[test]
    fn wrong_length_is_a_miss() {
        let mut bc = ledger(5);
        let mut digits = bc.target().digits().to_vec();
        digits.push(0);
        assert!(bc.submit("gamma", &Header::from_digits(digits)).unwrap().is_none());
        let short = Header::from_digits(bc.target().digits()[..3].to_vec());
        assert!(bc.submit("gamma", &short).unwrap().is_none());
        assert_eq!(bc.len(), 1);
    }

    #[test]
    fn first_match_wins() {
        let mut bc = ledger(21);
        let target = bc.target().clone();
        assert!(bc.submit("alpha", &target).unwrap().is_some());
        // Same guess is now checked against the republished target.
        if bc.target() != &target {
            assert!(bc.submit("beta", &target).unwrap().is_none());
        }
        assert_eq!(bc.blocks()[1].winner, "alpha");
    }

    #[test]
    fn tampered_chain_is_invalid() {
        let mut bc = ledger(9);
        let target = bc.target().clone();
        bc.submit("alpha", &target).unwrap();
        let next = bc.target().clone();
        bc.submit("beta", &next).unwrap();
        assert!(bc.is_valid_chain());

        bc.chain[1].winner = "mallory".into();
        assert!(!bc.is_valid_chain());
    }
}
