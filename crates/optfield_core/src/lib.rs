//! Optional field wrapper for JSON-backed records.
//!
//! [`field::Optional`] tells "key absent or null" apart from "key present with
//! a value", including values that are themselves zero-like (`0`, `false`,
//! `""`).

/// Optional wrapper, its serde adapter, byte codec, and named aliases.
pub mod field;
