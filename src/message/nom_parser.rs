//! Nom-based line tokenizer.
//!
//! This module splits a line into its borrowed prefix, command and argument
//! slices. Both [`Message`](super::Message) and
//! [`MessageRef`](super::MessageRef) are built from its output.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::rest,
    sequence::{preceded, terminated},
    IResult,
};
use smallvec::SmallVec;

use crate::error::MessageParseError;

/// Parse the message prefix (the part after `:` and up to the first space).
///
/// The separating space is consumed. Fails when no space follows.
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), parse_middle)(input)
}

/// Parse one space-terminated token, consuming the space.
///
/// The token may be empty when spaces are doubled up.
fn parse_middle(input: &str) -> IResult<&str, &str> {
    terminated(take_till(|c: char| c == ' '), char(' '))(input)
}

/// Parse the trailing parameter: everything after a leading `:`.
fn parse_trailing(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), rest)(input)
}

/// Split the argument section into tokens.
///
/// Tokens are split on single spaces until the remaining input starts with
/// `:`, which introduces a trailing parameter that keeps its spaces. A final
/// token with no space after it is taken whole and is not a trailing
/// parameter.
fn parse_params(input: &str) -> SmallVec<[&str; 15]> {
    let mut params: SmallVec<[&str; 15]> = SmallVec::new();
    let mut line = input;

    while !line.is_empty() && !line.starts_with(':') {
        match parse_middle(line) {
            Ok((next, token)) => {
                params.push(token);
                line = next;
            }
            Err(_) => {
                params.push(line);
                line = "";
            }
        }
    }

    if let Ok((_, trailing)) = parse_trailing(line) {
        params.push(trailing);
    }

    params
}

/// A tokenized line with borrowed string slices.
///
/// This is the intermediate representation shared by the owned and
/// borrowed message types. It holds references into the trimmed input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedLine<'a> {
    /// The input with surrounding whitespace removed.
    pub raw: &'a str,
    /// Prefix without its leading `:`, if present.
    pub prefix: Option<&'a str>,
    /// The command token. Never empty.
    pub command: &'a str,
    /// Arguments following the command, in wire order.
    pub params: SmallVec<[&'a str; 15]>,
}

impl<'a> ParsedLine<'a> {
    /// Tokenize a line.
    ///
    /// The line is trimmed once up front, so trailing whitespace or a CRLF
    /// terminator never produces an extra empty argument.
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let (line, prefix) = if raw.starts_with(':') {
            let (line, prefix) =
                parse_prefix(raw).map_err(|_| MessageParseError::UnterminatedPrefix)?;
            (line, Some(prefix))
        } else {
            (raw, None)
        };

        let mut params = parse_params(line);
        if params.is_empty() || params[0].is_empty() {
            return Err(MessageParseError::MissingCommand);
        }
        let command = params.remove(0);

        Ok(ParsedLine {
            raw,
            prefix,
            command,
            params,
        })
    }
}
