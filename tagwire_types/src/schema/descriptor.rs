use crate::schema::{LogicalType, MessageBuilder};
use crate::value::{EnumValue, Value};
use anyhow::{anyhow, ensure, Result};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Requirement {
    Required,
    Optional,
    Default,
}

/// The closed set of composite message kinds. The wire envelope is identical
/// for all three; the shape only changes builder and encode policy (unions
/// hold at most one variant).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageShape {
    Struct,
    Union,
    Exception,
}

#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub id: i16,
    pub name: String,
    pub requirement: Requirement,
    pub field_type: LogicalType,
    pub default_value: Option<Value>,
}

impl FieldDescriptor {
    pub fn new(
        id: i16,
        name: impl Into<String>,
        requirement: Requirement,
        field_type: LogicalType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            requirement,
            field_type,
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }
}

/// The runtime image of one message type: qualified name, shape, and the
/// field table in declaration order.
#[derive(Debug)]
pub struct MessageDescriptor {
    name: String,
    shape: MessageShape,
    fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    pub(crate) fn new(
        name: impl Into<String>,
        shape: MessageShape,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self> {
        let name = name.into();
        let mut seen_ids = HashSet::new();
        for field in fields.iter() {
            ensure!(
                field.id != 0,
                "Field id 0 is reserved (field {} in message {})",
                field.name,
                name
            );
            ensure!(
                seen_ids.insert(field.id),
                "Duplicate field id {} in message {}",
                field.id,
                name
            );
        }
        Ok(Self {
            name,
            shape,
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> MessageShape {
        self.shape
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_by_id(&self, id: i16) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// A fresh accumulation target for decode or by-hand construction.
    pub fn builder(self: &Arc<Self>) -> MessageBuilder {
        MessageBuilder::new(Arc::clone(self))
    }
}

#[derive(Clone, Debug)]
pub struct EnumVariant {
    pub id: i32,
    pub name: String,
}

#[derive(Debug)]
pub struct EnumDescriptor {
    name: String,
    variants: Vec<EnumVariant>,
}

impl EnumDescriptor {
    pub(crate) fn new(name: impl Into<String>, variants: Vec<EnumVariant>) -> Result<Self> {
        let name = name.into();
        let mut seen_ids = HashSet::new();
        for variant in variants.iter() {
            ensure!(
                seen_ids.insert(variant.id),
                "Duplicate variant id {} in enum {}",
                variant.id,
                name
            );
        }
        Ok(Self { name, variants })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[EnumVariant] {
        &self.variants
    }

    /// `None` when the id has no variant. An id from a newer (or older)
    /// schema version is expected input, not an error.
    pub fn value_by_id(&self, id: i32) -> Option<EnumValue> {
        self.variants
            .iter()
            .find(|v| v.id == id)
            .map(|v| EnumValue::new(v.id, v.name.clone()))
    }

    pub fn value_by_name(&self, name: &str) -> Option<EnumValue> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .map(|v| EnumValue::new(v.id, v.name.clone()))
    }

    pub fn value_by_name_err(&self, name: &str) -> Result<EnumValue> {
        self.value_by_name(name)
            .ok_or_else(|| anyhow!("No variant {} in enum {}", name, self.name))
    }
}
