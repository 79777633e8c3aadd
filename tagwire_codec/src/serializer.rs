use crate::binary_io::{BinaryReader, BinaryWriter, WriteLen};
use crate::error::CodecResult;
use crate::message::{read_message, write_message};
use std::io::{Cursor, Read, Write};
use std::sync::Arc;
use tagwire_types::schema::MessageDescriptor;
use tagwire_types::value::Message;

/// Whole-message serializer holding the decode policy. Encoding is policy-
/// free; the strict flag only governs decode.
#[derive(Clone, Copy, Debug)]
pub struct BinaryCodec {
    strict: bool,
}

impl BinaryCodec {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn serialize<W: Write>(&self, w: &mut W, message: &Message) -> CodecResult<WriteLen> {
        let mut w = BinaryWriter::new(w);
        write_message(&mut w, message)
    }

    pub fn deserialize<R: Read>(
        &self,
        r: &mut R,
        descriptor: &Arc<MessageDescriptor>,
    ) -> CodecResult<Message> {
        let mut r = BinaryReader::new(r);
        read_message(&mut r, descriptor, self.strict)
    }

    pub fn to_bytes(&self, message: &Message) -> CodecResult<Vec<u8>> {
        let mut buf = vec![];
        self.serialize(&mut buf, message)?;
        Ok(buf)
    }

    pub fn from_bytes(
        &self,
        buf: &[u8],
        descriptor: &Arc<MessageDescriptor>,
    ) -> CodecResult<Message> {
        let mut r = Cursor::new(buf);
        self.deserialize(&mut r, descriptor)
    }
}
