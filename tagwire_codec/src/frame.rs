//! The TLV envelope of a single field: `[tag: 1][field id: 2]` followed by a
//! tag-dependent payload. A lone STOP tag, with no id, ends the field list.

use crate::binary_io::{BinaryReader, BinaryWriter};
use crate::error::CodecResult;
use crate::wire::WireType;
use std::fmt;
use std::io::{Read, Write};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldFrame {
    pub id: i16,
    pub wire_type: WireType,
}

impl fmt::Display for FieldFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field({}: {})", self.id, self.wire_type)
    }
}

/// `None` means the STOP sentinel: end of the field list, not an error.
pub fn read_field_frame<R: Read>(r: &mut BinaryReader<R>) -> CodecResult<Option<FieldFrame>> {
    let wire_type = WireType::from_tag(r.expect_u8()?)?;
    if wire_type == WireType::Stop {
        return Ok(None);
    }
    let id = r.expect_i16()?;
    Ok(Some(FieldFrame { id, wire_type }))
}

/// Always 3 bytes. The terminating STOP byte is the caller's to write, once,
/// after the last field of the message.
pub fn write_field_frame<W: Write>(
    w: &mut BinaryWriter<W>,
    wire_type: WireType,
    id: i16,
) -> CodecResult<usize> {
    let mut w_len = 0;
    w_len += w.write_u8(wire_type.tag())?;
    w_len += w.write_i16(id)?;
    Ok(w_len)
}
