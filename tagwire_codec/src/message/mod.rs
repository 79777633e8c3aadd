//! # Message codec
//!
//! Recursive encode/decode of composite values as field-frame envelopes.
//!
//! Decode resolves each field id against the message descriptor: a known id
//! is decoded under its declared type (wire tag checked first), an unknown
//! id is decoded from the wire tag alone and discarded, always leniently,
//! so that fields added by newer schemas never break older readers. Strict
//! mode instead rejects unknown ids outright, and verifies required-field
//! presence after the STOP.
//!
//! Encode walks the descriptor's field table (or the single set variant, for
//! unions) and mirrors the decode dispatch keyed by declared type.

mod read;
mod write;

pub use read::*;
pub use write::*;
