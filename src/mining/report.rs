use serde::Serialize;

use super::Candidate;

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub reward: u64,
}

/// Summary of a finished mining run.
#[derive(Debug, Clone, Serialize)]
pub struct MiningReport {
    pub run_id: String,
    pub started_at: i64,  // Unix timestamp (UTC)
    pub finished_at: i64, // Unix timestamp (UTC)
    pub elapsed_ms: i64,
    pub cycles: u64,
    pub candidates: usize,
    pub height: usize,
    pub final_shift: u32,
    pub standings: Vec<Standing>,
}

impl MiningReport {
    /// Standings that actually earned something.
    pub fn winners(&self) -> impl Iterator<Item = &Standing> {
        self.standings.iter().filter(|s| s.reward > 0)
    }
}

/// Rank candidates by reward, highest first. Ties keep their original order
/// and zero-reward candidates are kept at the tail.
pub fn rank(candidates: &[Candidate]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = candidates
        .iter()
        .map(|c| Standing {
            name: c.name().to_string(),
            reward: c.reward(),
        })
        .collect();
    // sort_by is stable
    standings.sort_by(|a, b| b.reward.cmp(&a.reward));
    standings
}
