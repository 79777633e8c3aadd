use crate::schema::{MessageDescriptor, MessageShape, Requirement};
use crate::value::{Message, Value};
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Mutable accumulation target for one message: decode feeds it
/// `(field id, value)` pairs, then freezes it into a [`Message`].
///
/// For union shapes, setting a field clears any previously set variant.
#[derive(Debug)]
pub struct MessageBuilder {
    descriptor: Arc<MessageDescriptor>,
    fields: BTreeMap<i16, Value>,
}

impl MessageBuilder {
    pub(crate) fn new(descriptor: Arc<MessageDescriptor>) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
        }
    }

    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    pub fn set(&mut self, field_id: i16, value: Value) -> &mut Self {
        if self.descriptor.shape() == MessageShape::Union {
            self.fields.clear();
        }
        self.fields.insert(field_id, value);
        self
    }

    pub fn is_set(&self, field_id: i16) -> bool {
        self.fields.contains_key(&field_id)
    }

    /// Names of required fields not yet set, in declaration order.
    pub fn missing_required(&self) -> Vec<&str> {
        self.descriptor
            .fields()
            .iter()
            .filter(|f| f.requirement == Requirement::Required && !self.is_set(f.id))
            .map(|f| f.name.as_str())
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            return Ok(());
        }
        Err(anyhow!(
            "Missing required fields {} in message {}",
            missing.join(","),
            self.descriptor.name()
        ))
    }

    /// Freeze into an immutable message. Unset non-optional fields with a
    /// declared default receive it here; unions never backfill.
    pub fn build(mut self) -> Message {
        if self.descriptor.shape() != MessageShape::Union {
            for field in self.descriptor.fields() {
                if field.requirement == Requirement::Optional {
                    continue;
                }
                if let Some(default_value) = &field.default_value {
                    self.fields
                        .entry(field.id)
                        .or_insert_with(|| default_value.clone());
                }
            }
        }
        Message::new(self.descriptor, self.fields)
    }
}
