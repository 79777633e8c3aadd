//! # Value model
//!
//! [`Value`] is the dynamic in-memory representation of anything that can
//! travel on the wire: primitives, enum values, composite messages, and the
//! three container kinds.
//!
//! `Value` carries a total ordering so that it can serve as a `BTreeMap` key
//! or `BTreeSet` item. Same-kind values compare naturally (doubles by
//! `total_cmp`), cross-kind values compare by kind ordinal.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

mod enum_value;
mod message;

pub use enum_value::*;
pub use message::*;

#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Byte(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
    Enum(EnumValue),
    Message(Message),
    Map(BTreeMap<Value, Value>),
    Set(BTreeSet<Value>),
    List(Vec<Value>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Byte(_) => "byte",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Double(_) => "double",
            Self::Str(_) => "string",
            Self::Bytes(_) => "binary",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
            Self::Map(_) => "map",
            Self::Set(_) => "set",
            Self::List(_) => "list",
        }
    }

    fn kind_ordinal(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Byte(_) => 1,
            Self::I16(_) => 2,
            Self::I32(_) => 3,
            Self::I64(_) => 4,
            Self::Double(_) => 5,
            Self::Str(_) => 6,
            Self::Bytes(_) => 7,
            Self::Enum(_) => 8,
            Self::Message(_) => 9,
            Self::Map(_) => 10,
            Self::Set(_) => 11,
            Self::List(_) => 12,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        let ord = match (self, other) {
            (Self::Bool(slf), Self::Bool(oth)) => slf.cmp(oth),
            (Self::Byte(slf), Self::Byte(oth)) => slf.cmp(oth),
            (Self::I16(slf), Self::I16(oth)) => slf.cmp(oth),
            (Self::I32(slf), Self::I32(oth)) => slf.cmp(oth),
            (Self::I64(slf), Self::I64(oth)) => slf.cmp(oth),
            (Self::Double(slf), Self::Double(oth)) => slf.total_cmp(oth),
            (Self::Str(slf), Self::Str(oth)) => slf.cmp(oth),
            (Self::Bytes(slf), Self::Bytes(oth)) => slf.cmp(oth),
            (Self::Enum(slf), Self::Enum(oth)) => slf.cmp(oth),
            (Self::Message(slf), Self::Message(oth)) => slf.cmp(oth),
            (Self::Map(slf), Self::Map(oth)) => slf.cmp(oth),
            (Self::Set(slf), Self::Set(oth)) => slf.cmp(oth),
            (Self::List(slf), Self::List(oth)) => slf.cmp(oth),
            _ => self.kind_ordinal().cmp(&other.kind_ordinal()),
        };
        Some(ord)
    }
}
impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Value {}
