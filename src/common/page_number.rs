//! Page number type.

use std::fmt;

/// Identifies a virtual page.
///
/// A page number is derived from a raw address by floor division with the
/// page size and never changes afterwards. Using `u64` makes negative page
/// numbers unrepresentable.
///
/// # Example
/// ```
/// use pagesim::PageNumber;
///
/// let page = PageNumber::new(2);
/// assert_eq!(page.0, 2);
/// assert_eq!(page.to_string(), "Page(2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u64);

impl PageNumber {
    /// Create a new PageNumber.
    #[inline]
    pub fn new(n: u64) -> Self {
        PageNumber(n)
    }
}

impl From<u64> for PageNumber {
    fn from(n: u64) -> Self {
        PageNumber(n)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_new() {
        let page = PageNumber::new(42);
        assert_eq!(page.0, 42);
        assert_eq!(PageNumber::from(42), page);
    }

    #[test]
    fn test_page_number_ordering() {
        assert!(PageNumber::new(1) < PageNumber::new(2));
        assert!(PageNumber::new(5) > PageNumber::new(3));
    }

    #[test]
    fn test_page_number_display() {
        assert_eq!(format!("{}", PageNumber::new(7)), "Page(7)");
    }
}
