//! # Text Processing
//!
//! Finds IPv4 literals in free-form text and swaps them for hostnames.
//!
//! Scanning is deliberately loose (any `n.n.n.n` shape with 1-3 digit
//! groups); [`ipv4::is_valid_ipv4`] is the gate that decides whether a
//! candidate is worth a lookup.

pub mod ipv4;
pub mod substitute;

pub use ipv4::{find_candidates, is_valid_ipv4};
pub use substitute::{process_line, process_text};
