//! Deterministic JSON serialization for the session file.
//!
//! Keys come out sorted (the file is a `BTreeMap`), indented with two spaces
//! and followed by a trailing newline.

mod json;

pub use json::*;
