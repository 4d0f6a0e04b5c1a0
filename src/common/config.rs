//! Configuration for a simulation run.

use crate::common::{Error, Result};

/// Separator between addresses in an address file (`0100,0822,0555`).
pub const DEFAULT_SEPARATOR: char = ',';

/// Page size in bytes used when none is given.
pub const DEFAULT_PAGE_SIZE: u64 = 200;

/// Validated parameters of one simulation run.
///
/// Construction fails instead of clamping, so a value of this type always
/// has a positive page size and a positive frame count.
///
/// # Example
/// ```
/// use pagesim::SimulationConfig;
///
/// let config = SimulationConfig::new(200, 3).unwrap();
/// assert_eq!(config.page_size(), 200);
/// assert!(SimulationConfig::new(0, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    page_size: u64,
    frame_count: usize,
    separator: char,
}

impl SimulationConfig {
    /// Create a config, validating page size and frame count.
    ///
    /// # Errors
    /// - `Error::InvalidPageSize` if `page_size` is 0
    /// - `Error::InvalidCapacity` if `frame_count` is 0
    pub fn new(page_size: u64, frame_count: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        if frame_count == 0 {
            return Err(Error::InvalidCapacity(frame_count));
        }
        Ok(Self {
            page_size,
            frame_count,
            separator: DEFAULT_SEPARATOR,
        })
    }

    /// Use a different address separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[inline]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_valid() {
        let config = SimulationConfig::new(DEFAULT_PAGE_SIZE, 4).unwrap();
        assert_eq!(config.page_size(), 200);
        assert_eq!(config.frame_count(), 4);
        assert_eq!(config.separator(), ',');
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        assert!(matches!(
            SimulationConfig::new(0, 4),
            Err(Error::InvalidPageSize(0))
        ));
    }

    #[test]
    fn test_config_rejects_zero_frames() {
        assert!(matches!(
            SimulationConfig::new(100, 0),
            Err(Error::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_config_with_separator() {
        let config = SimulationConfig::new(100, 1).unwrap().with_separator(';');
        assert_eq!(config.separator(), ';');
    }
}
