//! Sender identity decomposition.
//!
//! A message prefix such as `nick!user@host` is split into its nickname,
//! username and hostname parts. Decomposition is total: a prefix lacking
//! either delimiter degrades to a partially populated identity.

mod borrowed;
mod types;

pub use self::borrowed::IdentityRef;
pub use self::types::Identity;
