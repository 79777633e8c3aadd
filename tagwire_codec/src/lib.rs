//! # Binary wire codec
//!
//! The tag-length-value wire format for [`tagwire_types`] messages.
//!
//! A message is encoded as a sequence of field frames, each
//! `[wire tag: 1][field id: 2, big-endian][payload]`, terminated by a lone
//! STOP byte. Payload layout depends on the wire tag alone, so a reader can
//! always skip a field it does not know; interpretation (string vs binary,
//! enum vs i32) comes from the declared schema type when the field id is
//! known.
//!
//! All multi-byte integers are big-endian. The byte layout is the
//! interoperability contract: independent implementations of the same schema
//! must agree on it bit-exactly.

pub mod binary_io;
pub mod error;
pub mod frame;
pub mod message;
pub mod serializer;
pub mod wire;

pub use binary_io::{BinaryReader, BinaryWriter, WriteLen};
pub use error::{CodecError, CodecResult};
pub use frame::{read_field_frame, write_field_frame, FieldFrame};
pub use message::{
    consume_message, read_field_value, read_message, write_field_value, write_message,
};
pub use serializer::BinaryCodec;
pub use wire::WireType;
