//! Simulation driver.
//!
//! Ties the pieces together for one run: addresses are translated into a
//! reference string, which is streamed through a fresh [`LruEngine`] one
//! page at a time. Every step is recorded so callers can narrate or inspect
//! the run afterwards.
//!
//! # Components
//! - [`Simulation`] - Runs a validated [`SimulationConfig`] over addresses
//! - [`SimulationReport`] - Full per-step trace plus totals
//! - [`SimulationStats`] - Hit/fault/eviction counters
//! - [`load_addresses`] - Reads an address file

mod stats;

use std::fs;
use std::path::Path;

use log::info;

use crate::common::{Error, PageNumber, Result, SimulationConfig};
use crate::replacer::{LruEngine, StepOutcome};
use crate::translate::{parse_addresses, reference_string};

pub use stats::SimulationStats;

/// One processed reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStep {
    /// Position in the reference string, starting at 1.
    pub index: usize,

    /// Raw address the page was derived from.
    pub address: u64,

    /// What the engine did with the reference.
    pub outcome: StepOutcome,
}

impl SimulationStep {
    /// Page number of `address`.
    #[inline]
    pub fn page(&self) -> PageNumber {
        self.outcome.page
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub reference_string: Vec<PageNumber>,
    pub steps: Vec<SimulationStep>,
    pub stats: SimulationStats,
    /// Resident pages after the last step, MRU -> LRU.
    pub final_resident: Vec<PageNumber>,
}

impl SimulationReport {
    #[inline]
    pub fn fault_count(&self) -> u64 {
        self.stats.faults
    }
}

/// Runs LRU simulations for a fixed configuration.
///
/// Each call to [`run`](Self::run) builds its own engine, so runs never share
/// state and a `Simulation` can be reused for any number of address lists.
///
/// # Example
/// ```
/// use pagesim::{Simulation, SimulationConfig, PageNumber};
///
/// let sim = Simulation::new(SimulationConfig::new(200, 2).unwrap());
/// let report = sim.run_str("0100,0822,0150,0555").unwrap();
///
/// assert_eq!(report.fault_count(), 3);
/// assert_eq!(report.final_resident, vec![PageNumber::new(2), PageNumber::new(0)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate `addresses` in order.
    ///
    /// # Errors
    /// - `Error::NoAddresses` if `addresses` is empty
    pub fn run(&self, addresses: &[u64]) -> Result<SimulationReport> {
        if addresses.is_empty() {
            return Err(Error::NoAddresses);
        }

        let pages = reference_string(addresses, self.config.page_size())?;
        let mut engine = LruEngine::new(self.config.frame_count())?;
        let mut stats = SimulationStats::default();

        info!(
            "starting LRU simulation: page_size={} frames={} addresses={}",
            self.config.page_size(),
            self.config.frame_count(),
            addresses.len()
        );

        let steps: Vec<SimulationStep> = addresses
            .iter()
            .zip(&pages)
            .enumerate()
            .map(|(i, (&address, &page))| {
                let outcome = engine.access(page);
                stats.record(&outcome);
                SimulationStep {
                    index: i + 1,
                    address,
                    outcome,
                }
            })
            .collect();

        info!("simulation complete: {}", stats);

        Ok(SimulationReport {
            config: self.config,
            reference_string: pages,
            steps,
            stats,
            final_resident: engine.resident(),
        })
    }

    /// Parse `content` with the configured separator, then [`run`](Self::run).
    ///
    /// # Errors
    /// - `Error::InvalidAddress` on the first malformed token
    /// - `Error::NoAddresses` if no tokens remain after skipping empty ones
    pub fn run_str(&self, content: &str) -> Result<SimulationReport> {
        let addresses = parse_addresses(content, self.config.separator())?;
        self.run(&addresses)
    }
}

/// Read and parse an address file such as `0100,0822,0555`.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidAddress` on the first malformed token
pub fn load_addresses(path: impl AsRef<Path>, separator: char) -> Result<Vec<u64>> {
    let content = fs::read_to_string(path.as_ref())?;
    let addresses = parse_addresses(&content, separator)?;
    info!(
        "loaded {} addresses from {}",
        addresses.len(),
        path.as_ref().display()
    );
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replacer::AccessKind;

    fn sim(page_size: u64, frames: usize) -> Simulation {
        Simulation::new(SimulationConfig::new(page_size, frames).unwrap())
    }

    #[test]
    fn test_run_records_every_step() {
        let report = sim(200, 2).run(&[100, 822, 150, 555]).unwrap();

        assert_eq!(
            report.reference_string,
            vec![PageNumber(0), PageNumber(4), PageNumber(0), PageNumber(2)]
        );
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[0].index, 1);
        assert_eq!(report.steps[3].index, 4);
        assert_eq!(report.steps[2].address, 150);
        assert_eq!(report.steps[2].page(), PageNumber(0));
        assert_eq!(report.steps[3].page(), PageNumber(2));
        assert_eq!(report.steps[2].outcome.kind, AccessKind::Hit);
        assert_eq!(report.steps[3].outcome.evicted, Some(PageNumber(4)));
    }

    #[test]
    fn test_run_stats_match_engine() {
        let report = sim(1, 2).run(&[1, 2, 1, 3]).unwrap();

        assert_eq!(report.stats.accesses, 4);
        assert_eq!(report.stats.hits, 1);
        assert_eq!(report.stats.faults, 3);
        assert_eq!(report.stats.evictions, 1);
        assert_eq!(report.fault_count(), 3);
        assert_eq!(report.final_resident, vec![PageNumber(3), PageNumber(1)]);
    }

    #[test]
    fn test_run_empty_is_error() {
        assert!(matches!(sim(100, 3).run(&[]), Err(Error::NoAddresses)));
        assert!(matches!(sim(100, 3).run_str(" , ,"), Err(Error::NoAddresses)));
    }

    #[test]
    fn test_run_str_invalid_address() {
        match sim(100, 3).run_str("100,abc,300") {
            Err(Error::InvalidAddress(token)) => assert_eq!(token, "abc"),
            other => panic!("Expected InvalidAddress, got {other:?}"),
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let s = sim(1, 1);
        let first = s.run(&[4, 4, 5]).unwrap();
        let second = s.run(&[4, 4, 5]).unwrap();

        assert_eq!(first.fault_count(), 2);
        assert_eq!(second.fault_count(), 2);
        assert_eq!(first.final_resident, second.final_resident);
    }

    #[test]
    fn test_run_str_custom_separator() {
        let config = SimulationConfig::new(10, 2).unwrap().with_separator(' ');
        let report = Simulation::new(config).run_str("5 15 25").unwrap();
        assert_eq!(
            report.reference_string,
            vec![PageNumber(0), PageNumber(1), PageNumber(2)]
        );
    }

    #[test]
    fn test_step_page_comes_from_outcome() {
        let report = sim(200, 3).run(&[100, 822, 555, 100]).unwrap();
        for (step, &page) in report.steps.iter().zip(&report.reference_string) {
            assert_eq!(step.page(), page);
            assert_eq!(step.page(), step.outcome.page);
        }
    }

    #[test]
    fn test_run_with_more_frames_than_addresses() {
        let config = SimulationConfig::new(200, usize::MAX).unwrap();
        let report = Simulation::new(config).run(&[100, 822, 555]).unwrap();

        assert_eq!(report.fault_count(), 3);
        assert_eq!(report.stats.evictions, 0);
        assert_eq!(
            report.final_resident,
            vec![PageNumber(2), PageNumber(4), PageNumber(0)]
        );
    }
}
