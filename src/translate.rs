//! Address translation - raw addresses to page numbers.
//!
//! Translation is a pure function of the address and the page size:
//! `page = address / page_size` (floor division). Identical inputs always
//! produce identical reference strings, which is what makes runs replayable.

use crate::common::{Error, PageNumber, Result};

/// Map a raw address to the page that contains it.
///
/// # Errors
/// - `Error::InvalidPageSize` if `page_size` is 0
///
/// # Example
/// ```
/// use pagesim::{translate, PageNumber};
///
/// assert_eq!(translate(555, 200).unwrap(), PageNumber::new(2));
/// ```
#[inline]
pub fn translate(address: u64, page_size: u64) -> Result<PageNumber> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize(page_size));
    }
    Ok(PageNumber(address / page_size))
}

/// Parse one address token as a non-negative integer.
///
/// Surrounding whitespace is ignored and leading zeros are allowed
/// (`"0100"` is address 100).
///
/// # Errors
/// - `Error::InvalidAddress` for empty, negative, non-numeric or
///   out-of-range tokens
pub fn parse_address(token: &str) -> Result<u64> {
    let trimmed = token.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| Error::InvalidAddress(trimmed.to_string()))
}

/// Parse and translate a single address token.
pub fn translate_token(token: &str, page_size: u64) -> Result<PageNumber> {
    translate(parse_address(token)?, page_size)
}

/// Split `content` on `separator` and parse every non-empty token.
///
/// Empty tokens (trailing separators, blank lines) are skipped. Parsing
/// stops at the first invalid token. Empty input yields an empty vector;
/// whether that is acceptable is up to the caller.
///
/// # Example
/// ```
/// use pagesim::parse_addresses;
///
/// let addrs = parse_addresses("0100, 0822,0555,\n", ',').unwrap();
/// assert_eq!(addrs, vec![100, 822, 555]);
/// ```
pub fn parse_addresses(content: &str, separator: char) -> Result<Vec<u64>> {
    content
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_address)
        .collect()
}

/// Translate a sequence of addresses into a reference string.
pub fn reference_string(addresses: &[u64], page_size: u64) -> Result<Vec<PageNumber>> {
    addresses
        .iter()
        .map(|&address| translate(address, page_size))
        .collect()
}
