//! Simulation run statistics.

use std::fmt;

use crate::replacer::StepOutcome;

/// Counters collected over one simulation run.
///
/// A run is single-threaded, so plain integers are enough. The struct is
/// `Copy` and can be printed, compared and stored freely.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let stats = SimulationStats::default();
/// assert_eq!(stats.hit_rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of references processed.
    pub accesses: u64,

    /// References whose page was already resident.
    pub hits: u64,

    /// References whose page had to be loaded.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Fold one step into the counters.
    pub fn record(&mut self, outcome: &StepOutcome) {
        self.accesses += 1;
        if outcome.is_hit() {
            self.hits += 1;
        } else {
            self.faults += 1;
        }
        if outcome.evicted.is_some() {
            self.evictions += 1;
        }
    }

    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageNumber;
    use crate::replacer::AccessKind;

    fn outcome(kind: AccessKind, evicted: Option<u64>) -> StepOutcome {
        StepOutcome {
            page: PageNumber(0),
            kind,
            evicted: evicted.map(PageNumber),
            resident: vec![],
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = SimulationStats::default();
        assert_eq!(stats.accesses, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SimulationStats::default();
        stats.record(&outcome(AccessKind::Fault, None));
        stats.record(&outcome(AccessKind::Fault, Some(1)));
        stats.record(&outcome(AccessKind::Hit, None));
        stats.record(&outcome(AccessKind::Hit, None));

        assert_eq!(stats.accesses, 4);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.fault_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimulationStats {
            accesses: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
