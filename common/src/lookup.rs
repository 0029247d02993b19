use std::collections::HashMap;

use async_trait::async_trait;

/// Anything that can turn an IPv4 literal into a device hostname.
///
/// Text processing only depends on this trait, the controller-backed
/// implementation lives in `ipresolve-core`.
#[async_trait]
pub trait HostnameLookup: Send + Sync {
    /// Returns the hostname owning `ip_address`, or `None` when nothing matches.
    ///
    /// Implementations must not fail: lookup errors count as a miss.
    async fn resolve(&self, ip_address: &str) -> Option<String>;
}

/// Fixed address-to-hostname table.
#[async_trait]
impl HostnameLookup for HashMap<String, String> {
    async fn resolve(&self, ip_address: &str) -> Option<String> {
        self.get(ip_address).cloned()
    }
}
