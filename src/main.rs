mod blockchain;
mod config;
mod error;
mod mining;

use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use blockchain::Blockchain;
use config::MiningConfig;
use error::ChainResult;
use mining::{MiningSession, MobyNames, RandomGuesser};

fn main() -> ChainResult<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = MiningConfig::from_env()?;
    info!("Starting a new phi coin mining session: {config:?}");

    let mut seeds = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let ledger_rng = StdRng::seed_from_u64(seeds.next_u64());
    let mut chain = Blockchain::new(config.header_length, ledger_rng)?;
    let mut names = MobyNames::new(StdRng::seed_from_u64(seeds.next_u64()));
    let guesser = RandomGuesser::new(StdRng::seed_from_u64(seeds.next_u64()));
    let mut session =
        MiningSession::with_names(&mut names, config.candidates, guesser, config.cycles);

    let report = session.run(&mut chain)?;
    info!(
        "Mining finished: {} blocks, final shift {}, valid={}",
        report.height,
        report.final_shift,
        chain.is_valid_chain()
    );
    for winner in report.winners() {
        info!("Winner is {} with reward {}", winner.name, winner.reward);
    }

    if config.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
