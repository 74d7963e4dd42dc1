//! Zero-copy borrowed message type.
//!
//! `MessageRef<'a>` holds references into the original line and applies the
//! same grammar as [`Message`], without allocating for the common case of up
//! to fifteen arguments.
//!
//! # Example
//!
//! ```
//! use ircline::MessageRef;
//!
//! let msg = MessageRef::parse(":nick!user@host PRIVMSG #channel :Hello!").unwrap();
//!
//! assert_eq!(msg.command, "PRIVMSG");
//! assert_eq!(msg.identity.nick, "nick");
//! assert_eq!(msg.trailing(), "Hello!");
//! ```

use smallvec::SmallVec;

use crate::chan::ChannelExt;
use crate::error::MessageParseError;
use crate::identity::IdentityRef;

use super::types::Message;

/// A borrowed protocol line that references the original input string.
///
/// Use this when inspecting lines briefly in a tight loop; convert with
/// [`to_owned`](Self::to_owned) when the message must outlive its input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageRef<'a> {
    /// The input line with surrounding whitespace removed.
    pub raw: &'a str,
    /// Prefix without its leading `:`, or empty when the line had none.
    pub prefix: &'a str,
    /// Decomposition of `prefix`.
    pub identity: IdentityRef<'a>,
    /// The command token. Never empty.
    pub command: &'a str,
    /// Arguments following the command, in wire order.
    pub args: SmallVec<[&'a str; 15]>,
}

impl<'a> MessageRef<'a> {
    /// Parse a protocol line into a borrowed `MessageRef`.
    #[must_use = "parsing result should be handled"]
    pub fn parse(line: &'a str) -> Result<MessageRef<'a>, MessageParseError> {
        let parsed = super::parse::parse_line(line)?;
        let prefix = parsed.prefix.unwrap_or("");

        Ok(MessageRef {
            raw: parsed.raw,
            prefix,
            identity: IdentityRef::parse(prefix),
            command: parsed.command,
            args: parsed.params,
        })
    }

    /// Get the last argument, or an empty string if there are none.
    #[inline]
    pub fn trailing(&self) -> &'a str {
        self.args.last().copied().unwrap_or("")
    }

    /// Get the message text. Same as [`trailing`](Self::trailing).
    #[inline]
    pub fn message(&self) -> &'a str {
        self.trailing()
    }

    /// Check whether the first argument names a channel.
    pub fn from_channel(&self) -> bool {
        self.args.first().is_some_and(|target| target.is_channel_target())
    }

    /// Get a specific argument by index.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// Convert to an owned [`Message`].
    pub fn to_owned(&self) -> Message {
        Message {
            raw: self.raw.to_owned(),
            prefix: self.prefix.to_owned(),
            identity: self.identity.to_owned(),
            command: self.command.to_owned(),
            args: self.args.iter().map(|&arg| arg.to_owned()).collect(),
        }
    }
}

impl<'a> TryFrom<&'a str> for MessageRef<'a> {
    type Error = MessageParseError;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        MessageRef::parse(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_borrows_input() {
        let line = String::from(":dan!d@localhost PRIVMSG #chan :Hey what's up!");
        let msg = MessageRef::parse(&line).unwrap();
        assert_eq!(msg.prefix, "dan!d@localhost");
        assert_eq!(msg.identity.user, "d");
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.args.as_slice(), &["#chan", "Hey what's up!"]);
        assert!(msg.from_channel());
        assert_eq!(msg.arg(1), Some("Hey what's up!"));
    }

    #[test]
    fn test_matches_owned_parse() {
        let lines = [
            ":irc.example.com CAP LS * :multi-prefix extended-join sasl",
            "CAP REQ :sasl",
            "JOIN #a #b #c",
            "  PING   ",
            ":nick@host NOTICE user :msg with spaces",
        ];
        for line in lines {
            let borrowed = MessageRef::parse(line).unwrap();
            let owned = Message::parse(line).unwrap();
            assert_eq!(borrowed.to_owned(), owned, "mismatch for {line:?}");
        }
    }

    #[test]
    fn test_rejects_same_lines_as_owned() {
        for line in ["", "   ", ":", ":onlyprefix", ":p :"] {
            assert_eq!(
                MessageRef::parse(line).err(),
                Message::parse(line).err(),
                "mismatch for {line:?}"
            );
        }
    }

    #[test]
    fn test_trailing_empty_args() {
        let msg = MessageRef::try_from("AWAY").unwrap();
        assert_eq!(msg.trailing(), "");
        assert_eq!(msg.message(), "");
        assert!(!msg.from_channel());
    }
}
