//! Message parsing entry points.
//!
//! This module implements `FromStr` and `TryFrom<&str>` for `Message` and
//! routes every parse through the nom tokenizer.

use std::str::FromStr;

use crate::error::MessageParseError;

use super::nom_parser::ParsedLine;
use super::types::Message;

/// Tokenize a line, reporting rejections when tracing is enabled.
pub(super) fn parse_line(line: &str) -> Result<ParsedLine<'_>, MessageParseError> {
    ParsedLine::parse(line).map_err(|err| {
        trace_rejection(line, &err);
        err
    })
}

#[cfg(feature = "tracing")]
fn trace_rejection(line: &str, err: &MessageParseError) {
    tracing::trace!(
        target: "ircline::message",
        error = %err,
        len = line.len(),
        "rejected line"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn trace_rejection(_line: &str, _err: &MessageParseError) {}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Message::parse(s)
    }
}

impl TryFrom<&str> for Message {
    type Error = MessageParseError;

    fn try_from(s: &str) -> Result<Message, Self::Error> {
        Message::parse(s)
    }
}
