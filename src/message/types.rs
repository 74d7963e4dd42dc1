use crate::chan::ChannelExt;
use crate::error::MessageParseError;
use crate::identity::Identity;

use super::nom_parser::ParsedLine;

/// An owned, fully decomposed protocol line.
///
/// `Clone` produces a deep copy: the clone owns its own [`Identity`] and its
/// own argument storage, so changes to one never show up in the other.
///
/// # Example
///
/// ```
/// use ircline::Message;
///
/// let msg: Message = ":nick!user@host PRIVMSG #chan :hello there".parse().unwrap();
/// assert_eq!(msg.prefix, "nick!user@host");
/// assert_eq!(msg.identity.nick, "nick");
/// assert_eq!(msg.command, "PRIVMSG");
/// assert_eq!(msg.args, ["#chan", "hello there"]);
/// assert!(msg.from_channel());
/// assert_eq!(msg.trailing(), "hello there");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The input line with surrounding whitespace removed.
    pub raw: String,
    /// Prefix without its leading `:`, or empty when the line had none.
    pub prefix: String,
    /// Decomposition of `prefix`.
    pub identity: Identity,
    /// The command token. Never empty.
    pub command: String,
    /// Arguments following the command, in wire order. Only the last one,
    /// when it was a `:` trailing parameter, may contain spaces.
    pub args: Vec<String>,
}

impl Message {
    /// Decompose a protocol line.
    ///
    /// Fails when the line is blank, holds only a prefix, or yields no
    /// command token.
    #[must_use = "parsing result should be handled"]
    pub fn parse(line: &str) -> Result<Message, MessageParseError> {
        super::parse::parse_line(line).map(Message::from_parsed)
    }

    fn from_parsed(parsed: ParsedLine<'_>) -> Message {
        let prefix = parsed.prefix.unwrap_or("");
        Message {
            raw: parsed.raw.to_owned(),
            prefix: prefix.to_owned(),
            identity: Identity::parse(prefix),
            command: parsed.command.to_owned(),
            args: parsed.params.iter().map(|&arg| arg.to_owned()).collect(),
        }
    }

    /// Get the last argument, or an empty string if there are none.
    pub fn trailing(&self) -> &str {
        self.args.last().map_or("", String::as_str)
    }

    /// Get the message text. Same as [`trailing`](Self::trailing).
    pub fn message(&self) -> &str {
        self.trailing()
    }

    /// Check whether the first argument names a channel.
    ///
    /// Mostly meaningful for `PRIVMSG`-like messages whose first argument is
    /// the target.
    pub fn from_channel(&self) -> bool {
        self.args.first().is_some_and(|target| target.is_channel_target())
    }

    /// Get a specific argument by index.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Get the nickname from the prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.identity.nick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_and_message() {
        let msg = Message::parse("PRIVMSG #chan :hello there").unwrap();
        assert_eq!(msg.trailing(), "hello there");
        assert_eq!(msg.message(), "hello there");

        let msg = Message::parse("QUIT").unwrap();
        assert_eq!(msg.trailing(), "");
        assert_eq!(msg.message(), "");
    }

    #[test]
    fn test_trailing_without_colon() {
        let msg = Message::parse("JOIN #a #b #c").unwrap();
        assert_eq!(msg.trailing(), "#c");
    }

    #[test]
    fn test_from_channel() {
        assert!(Message::parse("PRIVMSG #chan :hi").unwrap().from_channel());
        assert!(Message::parse("PRIVMSG &local :hi").unwrap().from_channel());
        assert!(!Message::parse("PRIVMSG nick :hi").unwrap().from_channel());
        assert!(!Message::parse("PING").unwrap().from_channel());
        // trailing parameters count as the first argument too
        assert!(Message::parse("PRIVMSG :#chan").unwrap().from_channel());
        assert!(!Message::parse("PRIVMSG  #chan").unwrap().from_channel());
    }

    #[test]
    fn test_arg_and_source_nickname() {
        let msg = Message::parse(":nick!user@host KICK #chan victim :bye").unwrap();
        assert_eq!(msg.arg(0), Some("#chan"));
        assert_eq!(msg.arg(1), Some("victim"));
        assert_eq!(msg.arg(3), None);
        assert_eq!(msg.source_nickname(), Some("nick"));

        let msg = Message::parse(":irc.example.com NOTICE * :hi").unwrap();
        assert_eq!(msg.source_nickname(), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Message::parse(":nick!user@host PRIVMSG #chan :hello").unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.args.push("extra".to_owned());
        copy.identity.nick.push('_');
        copy.command.make_ascii_lowercase();

        assert_eq!(original.args, ["#chan", "hello"]);
        assert_eq!(original.identity.nick, "nick");
        assert_eq!(original.command, "PRIVMSG");
        assert_eq!(copy.args.len(), 3);
    }

    #[test]
    fn test_clone_of_empty_args() {
        let original = Message::parse("PING").unwrap();
        let mut copy = original.clone();
        copy.args.push("late".to_owned());
        assert!(original.args.is_empty());
    }
}
