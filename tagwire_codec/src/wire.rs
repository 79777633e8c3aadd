use crate::error::CodecError;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;
use tagwire_types::schema::LogicalType;

/// The single-byte wire tag identifying a value's physical encoding.
///
/// The discriminants are the wire contract and must never change. Gaps (5,
/// 7, 9) are inherited from the format's ancestry and stay reserved.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum WireType {
    Stop = 0,
    Void = 1,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    Binary = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl WireType {
    /// Fails with [`CodecError::UnknownWireType`] before any payload byte is
    /// consumed; payload length is tag-dependent and cannot be guessed.
    pub fn from_tag(tag: u8) -> Result<Self, CodecError> {
        Self::from_u8(tag).ok_or(CodecError::UnknownWireType(tag))
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The wire tag a declared schema type implies.
    pub fn for_type(declared: &LogicalType) -> Self {
        match declared {
            LogicalType::Void => Self::Void,
            LogicalType::Bool => Self::Bool,
            LogicalType::Byte => Self::Byte,
            LogicalType::I16 => Self::I16,
            LogicalType::I32 => Self::I32,
            LogicalType::I64 => Self::I64,
            LogicalType::Double => Self::Double,
            LogicalType::Str => Self::Binary,
            LogicalType::Binary => Self::Binary,
            LogicalType::Enum(_) => Self::I32,
            LogicalType::Message(_) => Self::Struct,
            LogicalType::Map(_, _) => Self::Map,
            LogicalType::Set(_) => Self::Set,
            LogicalType::List(_) => Self::List,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Double => "double",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Binary => "binary",
            Self::Struct => "struct",
            Self::Map => "map",
            Self::Set => "set",
            Self::List => "list",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
