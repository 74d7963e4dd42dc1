use std::convert::Infallible;
use std::str::FromStr;

use super::borrowed::IdentityRef;

/// The decomposed sender prefix of a message.
///
/// Fields that the prefix does not contain are empty strings. `host` always
/// holds something derived from `raw`: the text after the first `@`, or the
/// whole prefix when no `@` is present.
///
/// # Example
///
/// ```
/// use ircline::Identity;
///
/// let id = Identity::parse("nick!user@host.example.com");
/// assert_eq!(id.nick, "nick");
/// assert_eq!(id.user, "user");
/// assert_eq!(id.host, "host.example.com");
///
/// let server = Identity::parse("irc.example.com");
/// assert_eq!(server.host, "irc.example.com");
/// assert!(server.nick.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    /// The prefix this identity was decomposed from.
    pub raw: String,
    /// Nickname, or empty when the prefix has no `!`.
    pub nick: String,
    /// Username, or empty when the prefix has no `@`.
    pub user: String,
    /// Hostname, or the whole prefix when it has no `@`.
    pub host: String,
}

impl Identity {
    /// Decompose a prefix string. Never fails.
    pub fn parse(s: &str) -> Self {
        IdentityRef::parse(s).to_owned()
    }

    /// Get the nickname, if one was found.
    pub fn nick(&self) -> Option<&str> {
        non_empty(&self.nick)
    }

    /// Get the username, if one was found.
    pub fn user(&self) -> Option<&str> {
        non_empty(&self.user)
    }

    /// Get the hostname, if non-empty.
    pub fn host(&self) -> Option<&str> {
        non_empty(&self.host)
    }

    /// Whether the identity was decomposed from an empty prefix.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl FromStr for Identity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Identity::parse(s))
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Identity::parse(s)
    }
}

impl From<IdentityRef<'_>> for Identity {
    fn from(id: IdentityRef<'_>) -> Self {
        id.to_owned()
    }
}
