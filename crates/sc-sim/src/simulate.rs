//! Batch draw simulation
//!
//! Runs millions of draws against a tier to measure empirical outcome
//! frequencies and return-to-player. Work is split into chunks that run on
//! the rayon pool; each chunk owns a ChaCha8 stream seeded from the base seed
//! plus its chunk index, so a given config always produces the same report.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use sc_prize::{PriceTier, RandomSource, SeededSource};

use crate::error::{SimError, SimResult};

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Total draws across all chunks
    pub draws: u64,
    /// Base seed; chunk `i` uses `seed + i`
    pub seed: u64,
    /// Number of parallel chunks
    pub chunks: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            draws: 1_000_000,
            seed: 42,
            chunks: num_cpus::get(),
        }
    }
}

impl SimConfig {
    pub fn new(draws: u64, seed: u64) -> Self {
        Self {
            draws,
            seed,
            ..Default::default()
        }
    }

    pub fn with_chunks(mut self, chunks: usize) -> Self {
        self.chunks = chunks;
        self
    }

    /// Draws assigned to chunk `index`; the remainder goes to the first chunks
    fn chunk_draws(&self, index: usize) -> u64 {
        let chunks = self.chunks as u64;
        let base = self.draws / chunks;
        let extra = u64::from((index as u64) < self.draws % chunks);
        base + extra
    }
}

/// Aggregated result of a batch simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub tier_value: f64,
    pub draws: u64,
    /// Ticket price times draws
    pub total_paid: f64,
    /// Sum of all prize amounts drawn
    pub total_won: f64,
    /// Hit count per payout table entry, in table order
    pub hits: Vec<u64>,
    /// Draws that paid anything
    pub winning_draws: u64,
    /// RTP implied by the payout table, in percent
    pub theoretical_rtp: f64,
}

impl SimReport {
    fn empty(tier: &PriceTier) -> Self {
        Self {
            tier_value: tier.value(),
            draws: 0,
            total_paid: 0.0,
            total_won: 0.0,
            hits: vec![0; tier.payout_table().len()],
            winning_draws: 0,
            theoretical_rtp: tier.rtp(),
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.draws += other.draws;
        self.total_paid += other.total_paid;
        self.total_won += other.total_won;
        self.winning_draws += other.winning_draws;
        for (a, b) in self.hits.iter_mut().zip(other.hits) {
            *a += b;
        }
        self
    }

    /// Empirical return to player, in percent
    pub fn rtp(&self) -> f64 {
        if self.total_paid > 0.0 {
            (self.total_won / self.total_paid) * 100.0
        } else {
            0.0
        }
    }

    /// Share of draws that paid anything, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.draws > 0 {
            (self.winning_draws as f64 / self.draws as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Empirical frequency of payout entry `index`, in [0, 1]
    pub fn frequency(&self, index: usize) -> f64 {
        match self.hits.get(index) {
            Some(&hits) if self.draws > 0 => hits as f64 / self.draws as f64,
            _ => 0.0,
        }
    }
}

/// Simulate `config.draws` draws of `tier`
pub fn simulate_tier(tier: &PriceTier, config: &SimConfig) -> SimResult<SimReport> {
    if config.chunks == 0 {
        return Err(SimError::InvalidConfig("chunks must be at least 1".into()));
    }

    log::info!(
        "Simulating {} draws of {} ({} chunks, seed {})",
        config.draws,
        tier.label(),
        config.chunks,
        config.seed
    );

    let report = (0..config.chunks)
        .into_par_iter()
        .map(|index| {
            let seed = config.seed.wrapping_add(index as u64);
            run_chunk(tier, config.chunk_draws(index), seed)
        })
        .reduce(|| SimReport::empty(tier), SimReport::merge);

    log::debug!(
        "{}: rtp {:.2}% (theoretical {:.2}%), hit rate {:.2}%",
        tier.label(),
        report.rtp(),
        report.theoretical_rtp,
        report.hit_rate()
    );
    Ok(report)
}

fn run_chunk(tier: &PriceTier, draws: u64, seed: u64) -> SimReport {
    let table = tier.payout_table();
    let mut source = SeededSource::from_seed(seed);
    let mut report = SimReport::empty(tier);

    for _ in 0..draws {
        let index = table.draw_index(source.next_unit());
        let amount = table.outcomes()[index].amount;
        report.hits[index] += 1;
        report.total_won += amount;
        if amount > 0.0 {
            report.winning_draws += 1;
        }
    }

    report.draws = draws;
    report.total_paid = tier.value() * draws as f64;
    report
}
