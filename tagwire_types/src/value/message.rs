use crate::schema::{FieldDescriptor, MessageDescriptor, MessageShape};
use crate::value::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable composite value: a descriptor plus the set fields, keyed by
/// field id. Built through [`crate::schema::MessageBuilder`]; never mutated
/// afterwards.
#[derive(Clone, Debug)]
pub struct Message {
    descriptor: Arc<MessageDescriptor>,
    fields: BTreeMap<i16, Value>,
}

impl Message {
    pub(crate) fn new(descriptor: Arc<MessageDescriptor>, fields: BTreeMap<i16, Value>) -> Self {
        Self { descriptor, fields }
    }

    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    pub fn get(&self, field_id: i16) -> Option<&Value> {
        self.fields.get(&field_id)
    }

    pub fn has(&self, field_id: i16) -> bool {
        self.fields.contains_key(&field_id)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// For a union-shaped message, the one set variant (descriptor + value).
    /// `None` when no variant is set, or for non-union shapes.
    pub fn union_field(&self) -> Option<(&FieldDescriptor, &Value)> {
        if self.descriptor.shape() != MessageShape::Union {
            return None;
        }
        let (id, value) = self.fields.iter().next()?;
        let field = self.descriptor.field_by_id(*id)?;
        Some((field, value))
    }
}

/* Structural comparison: descriptor identity by qualified name, then the
 * set-field tables. */
impl PartialOrd for Message {
    fn partial_cmp(&self, other: &Message) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Message {
    fn cmp(&self, other: &Message) -> Ordering {
        self.descriptor
            .name()
            .cmp(other.descriptor.name())
            .then_with(|| self.fields.cmp(&other.fields))
    }
}
impl PartialEq for Message {
    fn eq(&self, other: &Message) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Message {}
