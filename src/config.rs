use std::env;
use std::str::FromStr;

use crate::blockchain::HEADER_LENGTH;
use crate::error::{ChainError, ChainResult};
use crate::mining::{CANDIDATES_COUNT, MINING_CYCLES_COUNT};

/// Runtime settings for a mining run, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningConfig {
    pub header_length: usize,
    pub candidates: usize,
    pub cycles: u64,
    /// Seed for every random source; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub report_json: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            header_length: HEADER_LENGTH,
            candidates: CANDIDATES_COUNT,
            cycles: MINING_CYCLES_COUNT,
            seed: None,
            report_json: false,
        }
    }
}

impl MiningConfig {
    pub fn from_env() -> ChainResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChainResult<Self> {
        let defaults = Self::default();
        let config = Self {
            header_length: parse_or(
                "MINING_HEADER_LENGTH",
                lookup("MINING_HEADER_LENGTH"),
                defaults.header_length,
            )?,
            candidates: parse_or(
                "MINING_CANDIDATES",
                lookup("MINING_CANDIDATES"),
                defaults.candidates,
            )?,
            cycles: parse_or("MINING_CYCLES", lookup("MINING_CYCLES"), defaults.cycles)?,
            seed: match lookup("MINING_SEED") {
                Some(raw) => Some(parse_or("MINING_SEED", Some(raw), 0)?),
                None => None,
            },
            report_json: parse_flag("MINING_REPORT_JSON", lookup("MINING_REPORT_JSON"))?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ChainResult<()> {
        if self.header_length == 0 {
            return Err(ChainError::InvalidConfig("header length must be positive".into()));
        }
        if self.candidates == 0 {
            return Err(ChainError::InvalidConfig("at least one candidate is required".into()));
        }
        Ok(())
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> ChainResult<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ChainError::Config { key, value }),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>) -> ChainResult<bool> {
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("0") | Some("false") => Ok(false),
        Some("1") | Some("true") => Ok(true),
        Some(other) => Err(ChainError::Config {
            key,
            value: other.to_string(),
        }),
    }
}
