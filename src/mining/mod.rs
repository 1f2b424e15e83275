pub mod candidate;
pub mod names;
pub mod report;
pub mod session;

pub use candidate::{Candidate, Guesser, RandomGuesser};
pub use names::{MobyNames, NameSource};
pub use report::{MiningReport, Standing, rank};
pub use session::MiningSession;

/// Default size of the candidate population.
pub const CANDIDATES_COUNT: usize = 345;

/// Default number of mining cycles per run.
pub const MINING_CYCLES_COUNT: u64 = 54321;
