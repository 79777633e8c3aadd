//! Fixed-width big-endian primitives and counted byte blobs, the leaf layer
//! under the message codec.

use crate::error::CodecResult;
use derive_more::{Deref, From, Into};
use std::io::{Read, Write};
use std::mem;

/// Count of bytes produced by one write call, for length accounting.
#[derive(From, Into, Deref, Clone, Copy, Debug)]
pub struct WriteLen(usize);

pub struct BinaryReader<R: Read> {
    r: R,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(r: R) -> Self {
        Self { r }
    }

    pub fn into_inner(self) -> R {
        self.r
    }

    pub fn expect_u8(&mut self) -> CodecResult<u8> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        self.r.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn expect_i8(&mut self) -> CodecResult<i8> {
        Ok(self.expect_u8()? as i8)
    }

    pub fn expect_i16(&mut self) -> CodecResult<i16> {
        let mut buf = [0u8; mem::size_of::<i16>()];
        self.r.read_exact(&mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    pub fn expect_i32(&mut self) -> CodecResult<i32> {
        let mut buf = [0u8; mem::size_of::<i32>()];
        self.r.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    pub fn expect_i64(&mut self) -> CodecResult<i64> {
        let mut buf = [0u8; mem::size_of::<i64>()];
        self.r.read_exact(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }

    pub fn expect_f64(&mut self) -> CodecResult<f64> {
        let mut buf = [0u8; mem::size_of::<f64>()];
        self.r.read_exact(&mut buf)?;
        Ok(f64::from_be_bytes(buf))
    }

    /// The 4-byte unsigned length/count header of blobs and containers.
    pub fn expect_u32(&mut self) -> CodecResult<u32> {
        let mut buf = [0u8; mem::size_of::<u32>()];
        self.r.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    pub fn expect_bytes(&mut self, len: usize) -> CodecResult<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.r.read_exact(&mut buf)?;
        Ok(buf)
    }
}

pub struct BinaryWriter<W: Write> {
    w: W,
}

impl<W: Write> BinaryWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    pub fn write_u8(&mut self, int: u8) -> CodecResult<usize> {
        self.write_buf(&int.to_be_bytes())
    }

    pub fn write_i8(&mut self, int: i8) -> CodecResult<usize> {
        self.write_buf(&int.to_be_bytes())
    }

    pub fn write_i16(&mut self, int: i16) -> CodecResult<usize> {
        self.write_buf(&int.to_be_bytes())
    }

    pub fn write_i32(&mut self, int: i32) -> CodecResult<usize> {
        self.write_buf(&int.to_be_bytes())
    }

    pub fn write_i64(&mut self, int: i64) -> CodecResult<usize> {
        self.write_buf(&int.to_be_bytes())
    }

    pub fn write_f64(&mut self, double: f64) -> CodecResult<usize> {
        self.write_buf(&double.to_be_bytes())
    }

    pub fn write_u32(&mut self, int: u32) -> CodecResult<usize> {
        self.write_buf(&int.to_be_bytes())
    }

    pub fn write_bytes(&mut self, buf: &[u8]) -> CodecResult<usize> {
        self.write_buf(buf)
    }

    fn write_buf(&mut self, buf: &[u8]) -> CodecResult<usize> {
        self.w.write_all(buf)?;
        Ok(buf.len())
    }
}
