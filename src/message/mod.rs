//! Protocol line decomposition.

mod borrowed;
mod nom_parser;
mod parse;
mod types;

pub use self::borrowed::MessageRef;
pub use self::types::Message;
