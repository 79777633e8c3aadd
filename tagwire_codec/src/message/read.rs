use crate::binary_io::BinaryReader;
use crate::error::{CodecError, CodecResult};
use crate::frame::{read_field_frame, FieldFrame};
use crate::wire::WireType;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::sync::Arc;
use tagwire_types::schema::{LogicalType, MessageDescriptor};
use tagwire_types::value::{Message, Value};
use tracing::trace;

/// Read one message envelope against `descriptor`.
///
/// Strict mode rejects unknown field ids and missing required fields;
/// lenient mode skips the former and tolerates the latter.
pub fn read_message<R: Read>(
    r: &mut BinaryReader<R>,
    descriptor: &Arc<MessageDescriptor>,
    strict: bool,
) -> CodecResult<Message> {
    let mut builder = descriptor.builder();

    while let Some(frame) = read_field_frame(r)? {
        match descriptor.field_by_id(frame.id) {
            Some(field) => {
                let value = read_field_value(r, &frame, Some(&field.field_type), strict)?;
                // An absent value (unrecognized enum id) sets nothing.
                if let Some(value) = value {
                    builder.set(field.id, value);
                }
            }
            None => {
                if strict {
                    return Err(CodecError::StrictModeViolation { field_id: frame.id });
                }
                trace!(field_id = frame.id, wire_type = %frame.wire_type, "skipping unknown field");
                // The sub-decode of a skipped field is unconditionally
                // lenient: its content comes from a schema we don't have.
                read_field_value(r, &frame, None, false)?;
            }
        }
    }

    if strict {
        let missing = builder.missing_required();
        if !missing.is_empty() {
            return Err(CodecError::MissingRequiredFields {
                message: descriptor.name().to_owned(),
                fields: missing.join(","),
            });
        }
    }

    Ok(builder.build())
}

/// Consume one message envelope without building any value. Used to skip
/// unknown struct-typed fields; never allocates a builder.
pub fn consume_message<R: Read>(r: &mut BinaryReader<R>) -> CodecResult<()> {
    while let Some(frame) = read_field_frame(r)? {
        read_field_value(r, &frame, None, false)?;
    }
    Ok(())
}

/// Read one value. The wire tag dictates the payload shape; the declared
/// type (when the field is known) dictates interpretation: string vs binary
/// for blob payloads, enum-by-id vs raw integer for i32 payloads, and the
/// element types of containers.
///
/// Returns `None` when the bytes were consumed but no value applies: an
/// unrecognized enum id, or the skipped payload of an unknown struct field.
pub fn read_field_value<R: Read>(
    r: &mut BinaryReader<R>,
    frame: &FieldFrame,
    declared: Option<&LogicalType>,
    strict: bool,
) -> CodecResult<Option<Value>> {
    if let Some(declared_type) = declared {
        let expected = WireType::for_type(declared_type);
        if expected != frame.wire_type {
            return Err(CodecError::TypeMismatch {
                field_id: frame.id,
                expected: expected.as_str(),
                actual: frame.wire_type.as_str(),
            });
        }
    }

    let value = match frame.wire_type {
        WireType::Stop => {
            return Err(CodecError::UnknownDataType(WireType::Stop.tag()));
        }
        WireType::Void => Some(Value::Bool(true)),
        WireType::Bool => Some(Value::Bool(r.expect_i8()? != 0)),
        WireType::Byte => Some(Value::Byte(r.expect_i8()?)),
        WireType::Double => Some(Value::Double(r.expect_f64()?)),
        WireType::I16 => Some(Value::I16(r.expect_i16()?)),
        WireType::I32 => {
            let int = r.expect_i32()?;
            match declared {
                Some(LogicalType::Enum(enum_type)) => {
                    // An id with no variant decodes as absent, not as an
                    // error: the writer's enum may be newer than ours.
                    enum_type.value_by_id(int).map(Value::Enum)
                }
                _ => Some(Value::I32(int)),
            }
        }
        WireType::I64 => Some(Value::I64(r.expect_i64()?)),
        WireType::Binary => {
            let len = r.expect_u32()? as usize;
            let data = r.expect_bytes(len)?;
            match declared {
                Some(LogicalType::Str) => {
                    Some(Value::Str(String::from_utf8_lossy(&data).into_owned()))
                }
                _ => Some(Value::Bytes(data)),
            }
        }
        WireType::Struct => match declared {
            Some(LogicalType::Message(msg_ref)) => {
                let nested = msg_ref
                    .get()
                    .ok_or_else(|| CodecError::UnresolvedType(msg_ref.name().to_owned()))?;
                let nested = Arc::clone(nested);
                Some(Value::Message(read_message(r, &nested, strict)?))
            }
            _ => {
                consume_message(r)?;
                None
            }
        },
        WireType::Map => {
            let key_tag = WireType::from_tag(r.expect_u8()?)?;
            let value_tag = WireType::from_tag(r.expect_u8()?)?;
            let count = r.expect_u32()?;

            let (key_type, value_type) = match declared {
                Some(LogicalType::Map(key_type, value_type)) => {
                    (Some(key_type.as_ref()), Some(value_type.as_ref()))
                }
                _ => (None, None),
            };
            let key_frame = FieldFrame {
                id: 1,
                wire_type: key_tag,
            };
            let value_frame = FieldFrame {
                id: 2,
                wire_type: value_tag,
            };

            let mut out = BTreeMap::new();
            for _ in 0..count {
                let key = read_field_value(r, &key_frame, key_type, strict)?;
                let value = read_field_value(r, &value_frame, value_type, strict)?;
                match (key, value) {
                    (Some(key), Some(value)) => {
                        out.insert(key, value);
                    }
                    (None, _) if strict => return Err(CodecError::NullMapKey),
                    (_, None) if strict => return Err(CodecError::NullMapValue),
                    _ => trace!("dropping map entry with absent key or value"),
                }
            }
            Some(Value::Map(out))
        }
        WireType::Set => {
            let item_frame = FieldFrame {
                id: 0,
                wire_type: WireType::from_tag(r.expect_u8()?)?,
            };
            let count = r.expect_u32()?;

            let item_type = match declared {
                Some(LogicalType::Set(item_type)) => Some(item_type.as_ref()),
                _ => None,
            };

            let mut out = BTreeSet::new();
            for _ in 0..count {
                match read_field_value(r, &item_frame, item_type, strict)? {
                    Some(item) => {
                        out.insert(item);
                    }
                    None if strict => return Err(CodecError::NullContainerItem("set")),
                    None => trace!("dropping absent set item"),
                }
            }
            Some(Value::Set(out))
        }
        WireType::List => {
            let item_frame = FieldFrame {
                id: 0,
                wire_type: WireType::from_tag(r.expect_u8()?)?,
            };
            let count = r.expect_u32()?;

            let item_type = match declared {
                Some(LogicalType::List(item_type)) => Some(item_type.as_ref()),
                _ => None,
            };

            let mut out = Vec::with_capacity(count as usize);
            for _ in 0..count {
                match read_field_value(r, &item_frame, item_type, strict)? {
                    Some(item) => out.push(item),
                    None if strict => return Err(CodecError::NullContainerItem("list")),
                    None => trace!("dropping absent list item"),
                }
            }
            Some(Value::List(out))
        }
    };

    Ok(value)
}
