//! Page replacement policy.
//!
//! Currently implements:
//! - [`LruEngine`] - Least Recently Used, O(1) per access
//!
//! Each access produces a [`StepOutcome`] describing whether it hit or
//! faulted, which page (if any) was evicted, and the resident set afterwards.

mod lru;
mod outcome;

pub use lru::{EngineState, LruEngine};
pub use outcome::{AccessKind, StepOutcome};
