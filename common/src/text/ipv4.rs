use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("dotted-quad pattern is valid")
});

/// Every non-overlapping dotted-quad shaped substring of `line`, left to right.
///
/// Nothing is validated here, `999.1.2.3` is a candidate too.
pub fn find_candidates(line: &str) -> Vec<&str> {
    DOTTED_QUAD.find_iter(line).map(|m| m.as_str()).collect()
}

/// Whether `text` is exactly one valid IPv4 literal.
///
/// Octets must be in 0-255 and leading zeros are refused (`010.0.0.1`).
pub fn is_valid_ipv4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}
