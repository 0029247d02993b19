use tracing::{debug, info};

use crate::lookup::HostnameLookup;
use crate::text::ipv4::{find_candidates, is_valid_ipv4};

/// Replaces every resolvable IPv4 literal in `line` with its hostname.
///
/// Candidates are collected from the original line first. Each one that
/// validates is looked up, and on a hit every occurrence of that exact
/// substring is replaced before moving on. Misses leave the text alone.
pub async fn process_line<L>(lookup: &L, line: &str) -> String
where
    L: HostnameLookup + ?Sized,
{
    let candidates: Vec<&str> = find_candidates(line);
    let mut output: String = line.to_string();

    for candidate in candidates {
        if !is_valid_ipv4(candidate) {
            debug!("Skipping {candidate}, not a valid IPv4 address");
            continue;
        }

        match lookup.resolve(candidate).await {
            Some(hostname) => {
                info!("{candidate} -> {hostname}");
                output = output.replace(candidate, &hostname);
            }
            None => debug!("No hostname for {candidate}"),
        }
    }

    output
}

/// Runs [`process_line`] over each `\n` separated line, keeping line count and order.
pub async fn process_text<L>(lookup: &L, text: &str) -> String
where
    L: HostnameLookup + ?Sized,
{
    let mut lines: Vec<String> = Vec::new();
    for line in text.split('\n') {
        lines.push(process_line(lookup, line).await);
    }
    lines.join("\n")
}
