use std::io;
use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// Decode and encode failures. All are terminal for the call: the codec
/// performs no retry and returns no partial value. A failed encode may have
/// written a partial byte sequence; callers wanting atomicity buffer first.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying I/O failure, or truncation mid-read (fewer bytes available
    /// than a frame or length header demands).
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] io::Error),

    /// A tag byte outside the wire-type table, detected before any payload
    /// byte is consumed.
    #[error("unknown wire type {0}")]
    UnknownWireType(u8),

    /// A table-valid tag that cannot head a value (STOP in value position).
    #[error("unknown data type: {0}")]
    UnknownDataType(u8),

    /// The wire tag of a known field disagrees with its declared type.
    #[error("wrong field type for id={field_id}: expected {expected}, got {actual}")]
    TypeMismatch {
        field_id: i16,
        expected: &'static str,
        actual: &'static str,
    },

    /// Strict decode met a field id the descriptor does not know.
    #[error("reading unknown field {field_id} in strict mode")]
    StrictModeViolation { field_id: i16 },

    /// Strict decode finished with required fields unset.
    #[error("missing required fields {fields} in message {message}")]
    MissingRequiredFields { message: String, fields: String },

    #[error("null key in map")]
    NullMapKey,

    #[error("null value in map")]
    NullMapValue,

    #[error("null value in {0}")]
    NullContainerItem(&'static str),

    /// Encode met a value whose variant does not match the declared type.
    #[error("unhandled field type: {declared} (value is {value})")]
    UnhandledFieldType {
        declared: &'static str,
        value: &'static str,
    },

    /// A blob or container too large for its 4-byte length header.
    #[error("length {0} exceeds wire limit")]
    LengthOverflow(usize),

    /// A message type reference that was never bound by the registry.
    #[error("unresolved message type {0}")]
    UnresolvedType(String),
}
