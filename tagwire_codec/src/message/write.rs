use crate::binary_io::{BinaryWriter, WriteLen};
use crate::error::{CodecError, CodecResult};
use crate::frame::write_field_frame;
use crate::wire::WireType;
use std::io::Write;
use tagwire_types::schema::{LogicalType, MessageShape};
use tagwire_types::value::{Message, Value};

/// Write one message envelope: one frame + payload per present field (in
/// declaration order; unions write their single set variant), then STOP.
/// Returns the byte count written, STOP included.
pub fn write_message<W: Write>(w: &mut BinaryWriter<W>, message: &Message) -> CodecResult<WriteLen> {
    let mut w_len = 0;
    let descriptor = message.descriptor();

    match descriptor.shape() {
        MessageShape::Union => {
            if let Some((field, value)) = message.union_field() {
                w_len += write_field_frame(w, WireType::for_type(&field.field_type), field.id)?;
                w_len += *write_field_value(w, value, &field.field_type)?;
            }
        }
        MessageShape::Struct | MessageShape::Exception => {
            for field in descriptor.fields() {
                if let Some(value) = message.get(field.id) {
                    w_len +=
                        write_field_frame(w, WireType::for_type(&field.field_type), field.id)?;
                    w_len += *write_field_value(w, value, &field.field_type)?;
                }
            }
        }
    }

    w_len += w.write_u8(WireType::Stop.tag())?;
    Ok(WriteLen::from(w_len))
}

/// Write one value's payload under its declared type. The frame header is
/// the caller's; container headers (element tags, counts) are written here.
pub fn write_field_value<W: Write>(
    w: &mut BinaryWriter<W>,
    value: &Value,
    declared: &LogicalType,
) -> CodecResult<WriteLen> {
    let w_len = match (declared, value) {
        // A void payload is the frame alone.
        (LogicalType::Void, _) => 0,
        (LogicalType::Bool, Value::Bool(b)) => w.write_i8(if *b { 1 } else { 0 })?,
        (LogicalType::Byte, Value::Byte(int)) => w.write_i8(*int)?,
        (LogicalType::I16, Value::I16(int)) => w.write_i16(*int)?,
        (LogicalType::I32, Value::I32(int)) => w.write_i32(*int)?,
        (LogicalType::I64, Value::I64(int)) => w.write_i64(*int)?,
        (LogicalType::Double, Value::Double(double)) => w.write_f64(*double)?,
        (LogicalType::Str, Value::Str(s)) => write_blob(w, s.as_bytes())?,
        (LogicalType::Binary, Value::Bytes(b)) => write_blob(w, b)?,
        (LogicalType::Enum(_), Value::Enum(enum_value)) => w.write_i32(enum_value.id)?,
        (LogicalType::Message(_), Value::Message(nested)) => *write_message(w, nested)?,
        (LogicalType::Map(key_type, value_type), Value::Map(map)) => {
            let mut w_len = 0;
            w_len += w.write_u8(WireType::for_type(key_type).tag())?;
            w_len += w.write_u8(WireType::for_type(value_type).tag())?;
            w_len += w.write_u32(len_u32(map.len())?)?;
            for (key, value) in map.iter() {
                w_len += *write_field_value(w, key, key_type)?;
                w_len += *write_field_value(w, value, value_type)?;
            }
            w_len
        }
        (LogicalType::Set(item_type), Value::Set(set)) => {
            write_items(w, item_type, set.iter(), set.len())?
        }
        (LogicalType::List(item_type), Value::List(list)) => {
            write_items(w, item_type, list.iter(), list.len())?
        }
        (declared, value) => {
            return Err(CodecError::UnhandledFieldType {
                declared: declared.kind_name(),
                value: value.kind_name(),
            });
        }
    };
    Ok(WriteLen::from(w_len))
}

fn write_blob<W: Write>(w: &mut BinaryWriter<W>, buf: &[u8]) -> CodecResult<usize> {
    let mut w_len = 0;
    w_len += w.write_u32(len_u32(buf.len())?)?;
    w_len += w.write_bytes(buf)?;
    Ok(w_len)
}

/// Shared SET/LIST payload: item tag, count, then item payloads in iteration
/// order.
fn write_items<'a, W: Write>(
    w: &mut BinaryWriter<W>,
    item_type: &LogicalType,
    items: impl Iterator<Item = &'a Value>,
    count: usize,
) -> CodecResult<usize> {
    let mut w_len = 0;
    w_len += w.write_u8(WireType::for_type(item_type).tag())?;
    w_len += w.write_u32(len_u32(count)?)?;
    for item in items {
        w_len += *write_field_value(w, item, item_type)?;
    }
    Ok(w_len)
}

fn len_u32(len: usize) -> CodecResult<u32> {
    u32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))
}
