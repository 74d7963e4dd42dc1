//! Serialization of decomposed messages through serde.
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use ircline::{Identity, Message};

#[test]
fn test_message_json_roundtrip() {
    let msg: Message = ":nick!user@host PRIVMSG #chan :hello there".parse().unwrap();

    let json = serde_json::to_string(&msg).unwrap();
    let back: Message = serde_json::from_str(&json).unwrap();

    assert_eq!(back, msg);
}

#[test]
fn test_identity_json_fields() {
    let id = Identity::parse("nick!user@host");
    let value = serde_json::to_value(&id).unwrap();

    assert_eq!(value["raw"], "nick!user@host");
    assert_eq!(value["nick"], "nick");
    assert_eq!(value["user"], "user");
    assert_eq!(value["host"], "host");
}
