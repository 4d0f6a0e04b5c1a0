//! pagesim - A least-recently-used page replacement simulator.
//!
//! Given a sequence of memory addresses, a page size and a number of
//! physical frames, reports which accesses fault and which resident page is
//! evicted on each fault. Only page presence is modelled: there is no TLB,
//! no dirty-bit tracking and no per-process address space.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (simulation/)                    │   │
//! │  │     SimulationConfig → steps → SimulationReport          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │            ↓                                 ↓                  │
//! │  ┌────────────────────────┐   ┌────────────────────────────┐   │
//! │  │  Translation           │   │  Replacement (replacer/)   │   │
//! │  │  address / page_size   │──▶│  LruEngine → StepOutcome   │   │
//! │  └────────────────────────┘   └────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageNumber, Error, config)
//! - [`translate`] - Address parsing and address-to-page translation
//! - [`replacer`] - The LRU replacement engine
//! - [`simulation`] - Run driver, per-step trace and statistics
//!
//! # Quick Start
//! ```
//! use pagesim::{translate, LruEngine};
//!
//! let mut engine = LruEngine::new(2).unwrap();
//! for address in [100, 822, 150, 555] {
//!     let page = translate(address, 200).unwrap();
//!     let outcome = engine.access(page);
//!     println!("{} -> {}", address, outcome);
//! }
//! assert_eq!(engine.fault_count(), 3);
//! ```

pub mod common;
pub mod replacer;
pub mod simulation;
pub mod translate;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_PAGE_SIZE, DEFAULT_SEPARATOR};
pub use common::{Error, PageNumber, Result, SimulationConfig};

pub use replacer::{AccessKind, EngineState, LruEngine, StepOutcome};
pub use simulation::{
    load_addresses, Simulation, SimulationReport, SimulationStats, SimulationStep,
};
pub use translate::{parse_address, parse_addresses, reference_string, translate, translate_token};
