use crate::schema::{
    EnumDescriptor, EnumVariant, FieldDescriptor, MessageDescriptor, MessageRef, MessageShape,
};
use anyhow::{anyhow, ensure, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Append-only registry of schema descriptors, built once at process start
/// and then shared immutably.
///
/// Recursive type graphs register in two steps: [`Self::declare_message`]
/// hands out an unbound [`MessageRef`] that fields may embed, and
/// [`Self::define_message`] binds it. [`Self::ensure_resolved`] verifies no
/// declaration was left dangling before the registry is put into service.
#[derive(Default)]
pub struct SchemaRegistry {
    messages: HashMap<String, MessageRef>,
    enums: HashMap<String, Arc<EnumDescriptor>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ref to the named message type, usable in field types before the
    /// type itself is defined.
    pub fn declare_message(&mut self, name: &str) -> MessageRef {
        self.messages
            .entry(name.to_owned())
            .or_insert_with(|| MessageRef::unbound(name))
            .clone()
    }

    pub fn define_message(
        &mut self,
        name: &str,
        shape: MessageShape,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Arc<MessageDescriptor>> {
        let descriptor = Arc::new(MessageDescriptor::new(name, shape, fields)?);
        let msg_ref = self.declare_message(name);
        msg_ref.bind(Arc::clone(&descriptor))?;
        Ok(descriptor)
    }

    pub fn define_enum(
        &mut self,
        name: &str,
        variants: Vec<(i32, &str)>,
    ) -> Result<Arc<EnumDescriptor>> {
        ensure!(
            !self.enums.contains_key(name),
            "Enum type {} defined twice",
            name
        );
        let variants = variants
            .into_iter()
            .map(|(id, variant_name)| EnumVariant {
                id,
                name: variant_name.to_owned(),
            })
            .collect();
        let descriptor = Arc::new(EnumDescriptor::new(name, variants)?);
        self.enums.insert(name.to_owned(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    pub fn message(&self, name: &str) -> Result<Arc<MessageDescriptor>> {
        self.messages
            .get(name)
            .and_then(|r| r.get())
            .map(Arc::clone)
            .ok_or_else(|| anyhow!("Unknown message type {}", name))
    }

    pub fn enum_type(&self, name: &str) -> Result<Arc<EnumDescriptor>> {
        self.enums
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| anyhow!("Unknown enum type {}", name))
    }

    /// Fails if any declared message type was never defined.
    pub fn ensure_resolved(&self) -> Result<()> {
        for (name, msg_ref) in self.messages.iter() {
            ensure!(
                msg_ref.is_bound(),
                "Message type {} declared but never defined",
                name
            );
        }
        Ok(())
    }
}
