//! Controller-backed hostname resolution.
//!
//! * [`session`]: token acquisition and authenticated, rate-limit aware GETs.
//! * [`resolver`]: IP -> device hostname lookups and text substitution on top of a session.

pub mod error;
pub mod resolver;
pub mod session;

pub use error::{Error, Result};
pub use resolver::Resolver;
pub use session::Session;
