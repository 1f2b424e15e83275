use serde::Serialize;
use sha2::{Digest, Sha256};

use super::{BLOCK_REWARD, GENESIS_WINNER, Header};

/// A single accepted block. Blocks are linked by fingerprint, not mined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub header: Header,
    pub previous_fingerprint: u64,
    pub reward: u64,
    pub winner: String,
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis(header_length: usize) -> Self {
        Self {
            header: Header::zeroed(header_length),
            previous_fingerprint: 0,
            reward: 0,
            winner: GENESIS_WINNER.to_string(),
        }
    }

    /// Create a rewarded block won by `winner` with the given target header.
    pub fn new(header: Header, previous_fingerprint: u64, winner: &str) -> Self {
        Self {
            header,
            previous_fingerprint,
            reward: BLOCK_REWARD,
            winner: winner.to_string(),
        }
    }

    /// SHA-256 over the block's fields, truncated to the first 8 bytes (big-endian).
    pub fn fingerprint(&self) -> u64 {
        let digits: Vec<String> = self.header.digits().iter().map(u8::to_string).collect();
        let preimage = format!(
            "{}:{}:{}:{}",
            self.previous_fingerprint,
            self.reward,
            self.winner,
            digits.join(",")
        );
        let mut hasher = Sha256::new();
        hasher.update(preimage.as_bytes());
        let digest = hasher.finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }

    pub fn is_genesis(&self) -> bool {
        self.previous_fingerprint == 0
            && self.reward == 0
            && self.winner == GENESIS_WINNER
            && self.header.is_zeroed()
    }
}
