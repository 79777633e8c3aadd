//! Shared schema fixtures. Two "versions" of the same qualified types live
//! in separate registries, simulating a reader and a writer compiled against
//! different revisions of one schema.

use anyhow::Result;
use std::sync::Arc;
use tagwire_types::schema::{
    EnumDescriptor, FieldDescriptor, LogicalType, MessageDescriptor, MessageShape, Requirement,
    SchemaRegistry,
};

pub struct PersonSchema {
    pub person: Arc<MessageDescriptor>,
    pub role: Arc<EnumDescriptor>,
}

fn person_base_fields(role: &Arc<EnumDescriptor>) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(1, "name", Requirement::Required, LogicalType::Str),
        FieldDescriptor::new(2, "id", Requirement::Required, LogicalType::I32),
        FieldDescriptor::new(3, "email", Requirement::Optional, LogicalType::Str),
        FieldDescriptor::new(
            4,
            "tags",
            Requirement::Optional,
            LogicalType::List(Box::new(LogicalType::Str)),
        ),
        FieldDescriptor::new(
            5,
            "props",
            Requirement::Optional,
            LogicalType::Map(Box::new(LogicalType::I32), Box::new(LogicalType::Str)),
        ),
        FieldDescriptor::new(
            6,
            "role",
            Requirement::Optional,
            LogicalType::Enum(Arc::clone(role)),
        ),
    ]
}

/// The reader's revision: base fields only, two-variant role enum.
pub fn person_v1() -> Result<PersonSchema> {
    let mut registry = SchemaRegistry::new();
    let role = registry.define_enum("demo.Role", vec![(1, "USER"), (2, "ADMIN")])?;
    let person = registry.define_message(
        "demo.Person",
        MessageShape::Struct,
        person_base_fields(&role),
    )?;
    registry.ensure_resolved()?;
    Ok(PersonSchema { person, role })
}

/// The writer's revision: adds a nickname, a struct-typed address, and a
/// third role variant.
pub fn person_v2() -> Result<PersonSchema> {
    let mut registry = SchemaRegistry::new();
    let role = registry.define_enum("demo.Role", vec![(1, "USER"), (2, "ADMIN"), (9, "SUPER")])?;
    let address = registry.define_message(
        "demo.Address",
        MessageShape::Struct,
        vec![
            FieldDescriptor::new(1, "street", Requirement::Optional, LogicalType::Str),
            FieldDescriptor::new(2, "city", Requirement::Optional, LogicalType::Str),
        ],
    )?;

    let mut fields = person_base_fields(&role);
    fields.push(FieldDescriptor::new(
        7,
        "nickname",
        Requirement::Optional,
        LogicalType::Str,
    ));
    fields.push(FieldDescriptor::new(
        8,
        "address",
        Requirement::Optional,
        LogicalType::message(&address),
    ));

    let person = registry.define_message("demo.Person", MessageShape::Struct, fields)?;
    registry.ensure_resolved()?;
    Ok(PersonSchema { person, role })
}

pub struct SignalSchema {
    pub signal: Arc<MessageDescriptor>,
}

pub fn signal_union() -> Result<SignalSchema> {
    let mut registry = SchemaRegistry::new();
    let signal = registry.define_message(
        "demo.Signal",
        MessageShape::Union,
        vec![
            FieldDescriptor::new(1, "ping", Requirement::Optional, LogicalType::Void),
            FieldDescriptor::new(2, "payload", Requirement::Optional, LogicalType::Binary),
            FieldDescriptor::new(3, "code", Requirement::Optional, LogicalType::I32),
        ],
    )?;
    registry.ensure_resolved()?;
    Ok(SignalSchema { signal })
}

/// Self-referential message type: a node holding a list of nodes.
pub fn tree_schema() -> Result<Arc<MessageDescriptor>> {
    let mut registry = SchemaRegistry::new();
    let node_ref = registry.declare_message("demo.Node");
    let node = registry.define_message(
        "demo.Node",
        MessageShape::Struct,
        vec![
            FieldDescriptor::new(1, "label", Requirement::Required, LogicalType::Str),
            FieldDescriptor::new(
                2,
                "children",
                Requirement::Optional,
                LogicalType::List(Box::new(LogicalType::Message(node_ref))),
            ),
        ],
    )?;
    registry.ensure_resolved()?;
    Ok(node)
}
