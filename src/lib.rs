//! # ircline
//!
//! Decomposes IRC protocol lines into prefix, command and arguments, and
//! splits a sender prefix into nickname, username and hostname.
//!
//! The crate does no I/O and keeps no state. Callers feed it one line at a
//! time and decide what to do with lines it rejects.
//!
//! ## Features
//!
//! - Owned [`Message`] and [`Identity`] types with deep-copy `Clone`
//! - Zero-copy [`MessageRef`] and [`IdentityRef`] sharing the same grammar
//! - `serde` feature: `Serialize`/`Deserialize` for the owned types
//! - `tracing` feature: trace events for rejected lines
//!
//! ## Quick Start
//!
//! ```rust
//! use ircline::Message;
//!
//! let msg: Message = ":nick!user@host PRIVMSG #chan :hello there".parse().unwrap();
//! assert_eq!(msg.command, "PRIVMSG");
//! assert_eq!(msg.identity.host, "host");
//! assert_eq!(msg.trailing(), "hello there");
//!
//! assert!("   ".parse::<Message>().is_err());
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod error;
pub mod identity;
pub mod message;

pub use self::chan::{ChannelExt, CHANNEL_SENTINELS};
pub use self::error::{MessageParseError, Result};
pub use self::identity::{Identity, IdentityRef};
pub use self::message::{Message, MessageRef};
