//! Zero-copy borrowed identity.

use super::types::Identity;

/// A borrowed identity that references the original prefix string.
///
/// This is the zero-copy alternative to [`Identity`] and performs the same
/// decomposition without allocating.
///
/// # Example
///
/// ```
/// use ircline::IdentityRef;
///
/// let id = IdentityRef::parse("nick!user@host");
/// assert_eq!(id.nick, "nick");
/// assert_eq!(id.user, "user");
/// assert_eq!(id.host, "host");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct IdentityRef<'a> {
    /// The prefix this identity was decomposed from.
    pub raw: &'a str,
    /// Nickname, or empty when the prefix has no `!`.
    pub nick: &'a str,
    /// Username, or empty when the prefix has no `@`.
    pub user: &'a str,
    /// Hostname, or the whole prefix when it has no `@`.
    pub host: &'a str,
}

impl<'a> IdentityRef<'a> {
    /// Decompose a prefix string.
    ///
    /// Splits on the first `@` into a user part and the host, then splits the
    /// user part on its first `!` into nick and user. When there is no `@`
    /// the whole input is taken as the host.
    pub fn parse(s: &'a str) -> Self {
        let mut id = IdentityRef {
            raw: s,
            nick: "",
            user: "",
            host: s,
        };

        let Some((user_part, host)) = s.split_once('@') else {
            return id;
        };
        id.host = host;

        match user_part.split_once('!') {
            Some((nick, user)) => {
                id.nick = nick;
                id.user = user;
            }
            None => id.user = user_part,
        }

        id
    }

    /// Convert to an owned [`Identity`].
    pub fn to_owned(self) -> Identity {
        Identity {
            raw: self.raw.to_owned(),
            nick: self.nick.to_owned(),
            user: self.user.to_owned(),
            host: self.host.to_owned(),
        }
    }
}

impl<'a> From<&'a str> for IdentityRef<'a> {
    fn from(s: &'a str) -> Self {
        IdentityRef::parse(s)
    }
}

impl<'a> From<&'a Identity> for IdentityRef<'a> {
    fn from(id: &'a Identity) -> Self {
        IdentityRef {
            raw: &id.raw,
            nick: &id.nick,
            user: &id.user,
            host: &id.host,
        }
    }
}
