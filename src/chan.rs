//! Channel target detection.
//!
//! Only the leading sentinel is inspected. No length or character validation
//! is performed, so this is a heuristic for telling channel targets apart
//! from nicknames rather than a channel name validator.

/// Leading characters that mark a target as a channel.
pub const CHANNEL_SENTINELS: [char; 2] = ['#', '&'];

/// Extension trait for checking whether a target names a channel.
pub trait ChannelExt {
    /// Check if this string starts with one of the [`CHANNEL_SENTINELS`].
    ///
    /// An empty string is never a channel target.
    fn is_channel_target(&self) -> bool;
}

impl ChannelExt for str {
    fn is_channel_target(&self) -> bool {
        self.starts_with(CHANNEL_SENTINELS)
    }
}

impl ChannelExt for String {
    fn is_channel_target(&self) -> bool {
        self.as_str().is_channel_target()
    }
}
