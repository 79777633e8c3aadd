//! # Schema layer
//!
//! Descriptors are the runtime image of a compiled schema: message shapes
//! with ordered field tables, enums with id/name variant lookup, and the
//! declared [`LogicalType`] of every field. They are built once through a
//! [`SchemaRegistry`] and shared immutably (`Arc`) for the process lifetime;
//! the codec only ever reads them.

mod builder;
mod descriptor;
mod logical_type;
mod registry;

pub use builder::*;
pub use descriptor::*;
pub use logical_type::*;
pub use registry::*;
