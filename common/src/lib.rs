//! Shared building blocks for `ipresolve`.
//!
//! * **[`config`]**: runtime configuration handed from the CLI to the core.
//! * **[`lookup`]**: the [`HostnameLookup`](lookup::HostnameLookup) seam between text processing and the controller.
//! * **[`text`]**: IPv4 candidate scanning and hostname substitution.

pub mod config;
pub mod lookup;
pub mod text;
