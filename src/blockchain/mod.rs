pub mod block;
pub mod header;
pub mod model;
pub mod phi;

pub use block::Block;
pub use header::Header;
pub use model::Blockchain;

/// Default number of digits in a published header.
pub const HEADER_LENGTH: usize = 6;

/// Reward credited to the winner of a block.
pub const BLOCK_REWARD: u64 = 1;

/// Winner recorded in the genesis block.
pub const GENESIS_WINNER: &str = "practicum";

/// Bounds (inclusive) of the random shift increment applied on every republish.
pub const MIN_SHIFT_STEP: u32 = 1;
pub const MAX_SHIFT_STEP: u32 = 11;
