use crate::schema::{EnumDescriptor, MessageDescriptor};
use anyhow::{anyhow, Result};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// The declared type of a field, as the schema sees it. This is richer than
/// the wire tag: it distinguishes string from binary, enum from i32, and
/// carries the element types of containers.
#[derive(Clone, Debug)]
pub enum LogicalType {
    Void,
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    Str,
    Binary,
    Enum(Arc<EnumDescriptor>),
    Message(MessageRef),
    Map(Box<LogicalType>, Box<LogicalType>),
    Set(Box<LogicalType>),
    List(Box<LogicalType>),
}

impl LogicalType {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Double => "double",
            Self::Str => "string",
            Self::Binary => "binary",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
            Self::Map(_, _) => "map",
            Self::Set(_) => "set",
            Self::List(_) => "list",
        }
    }

    /// Shorthand for a field referring to an already-defined message type.
    pub fn message(descriptor: &Arc<MessageDescriptor>) -> Self {
        Self::Message(MessageRef::bound(descriptor))
    }
}

/// A lazily-bound reference to a message descriptor.
///
/// Recursive and mutually-recursive schemas cannot eagerly inline their
/// field types. A ref is handed out at declaration time and bound once the
/// referent is defined; resolution happens per decode/encode, long after
/// registration has completed.
#[derive(Clone)]
pub struct MessageRef {
    name: Arc<str>,
    cell: Arc<OnceLock<Arc<MessageDescriptor>>>,
}

impl MessageRef {
    pub(crate) fn unbound(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            cell: Arc::new(OnceLock::new()),
        }
    }

    pub(crate) fn bound(descriptor: &Arc<MessageDescriptor>) -> Self {
        let moi = Self::unbound(descriptor.name());
        let _ = moi.cell.set(Arc::clone(descriptor));
        moi
    }

    pub(crate) fn bind(&self, descriptor: Arc<MessageDescriptor>) -> Result<()> {
        self.cell
            .set(descriptor)
            .map_err(|_| anyhow!("Message type {} defined twice", self.name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> Option<&Arc<MessageDescriptor>> {
        self.cell.get()
    }

    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageRef")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}
