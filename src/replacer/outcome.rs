//! Per-access result types.

use std::fmt;

use crate::common::PageNumber;

/// Whether an access found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// The page was already resident and got promoted to MRU.
    Hit,
    /// The page was not resident and had to be loaded.
    Fault,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Hit => write!(f, "hit"),
            AccessKind::Fault => write!(f, "fault"),
        }
    }
}

/// The result of processing one page reference.
///
/// Produced by [`LruEngine::access`](crate::LruEngine::access), never stored
/// by the engine itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// The page that was referenced.
    pub page: PageNumber,

    /// Hit or fault.
    pub kind: AccessKind,

    /// Page evicted to make room. Only set on a fault at full capacity.
    pub evicted: Option<PageNumber>,

    /// Resident pages after the step, ordered MRU -> LRU.
    pub resident: Vec<PageNumber>,
}

impl StepOutcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.kind == AccessKind::Hit
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        self.kind == AccessKind::Fault
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.page, self.kind)?;
        if let Some(victim) = self.evicted {
            write!(f, " (evicted {})", victim)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        let outcome = StepOutcome {
            page: PageNumber(3),
            kind: AccessKind::Fault,
            evicted: Some(PageNumber(2)),
            resident: vec![PageNumber(3), PageNumber(1)],
        };
        assert!(outcome.is_fault());
        assert!(!outcome.is_hit());
    }

    #[test]
    fn test_outcome_display() {
        let outcome = StepOutcome {
            page: PageNumber(3),
            kind: AccessKind::Fault,
            evicted: Some(PageNumber(2)),
            resident: vec![PageNumber(3), PageNumber(1)],
        };
        assert_eq!(format!("{}", outcome), "Page(3) fault (evicted Page(2))");

        let hit = StepOutcome {
            page: PageNumber(1),
            kind: AccessKind::Hit,
            evicted: None,
            resident: vec![PageNumber(1)],
        };
        assert_eq!(format!("{}", hit), "Page(1) hit");
    }
}
