//! Common types shared across the simulator.
//!
//! This module contains the fundamental primitives used throughout the codebase:
//! - Configuration constants and the validated run configuration
//! - Error types
//! - The page number identifier

pub mod config;
pub mod error;
mod page_number;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use page_number::PageNumber;
