use omnom::prelude::*;
use std::io::{self, Read, Seek, SeekFrom};

use crate::error::{Error, Result};

/// Seekable byte source with an absolute position.
///
/// The length of the underlying stream is captured on construction, so a seek
/// past the end fails right away instead of on the next read.
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    position: u64,
    len: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    pub fn new(mut inner: R) -> Result<Self> {
        let position = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(position))?;

        Ok(Self {
            inner,
            position,
            len,
        })
    }

    pub fn tell(&self) -> u64 {
        self.position
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads exactly `n` bytes.
    pub fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0_u8; n];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let wanted = buf.len() as u64;
        self.inner
            .read_exact(buf)
            .map_err(|e| self.truncated(e, wanted))?;
        self.position += wanted;
        Ok(())
    }

    /// Reads up to `n` bytes, stopping early at the end of the stream.
    pub fn read_at_most(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(n);
        let count = (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
        self.position += count as u64;
        Ok(buf)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let value: u16 = self.inner.read_be().map_err(|e| self.truncated(e, 2))?;
        self.position += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value: u32 = self.inner.read_be().map_err(|e| self.truncated(e, 4))?;
        self.position += 4;
        Ok(value)
    }

    pub fn seek(&mut self, offset: u64) -> Result<u64> {
        if offset > self.len {
            return Err(Error::Truncated {
                offset: self.len,
                expected: offset - self.len,
            });
        }
        self.position = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(self.position)
    }

    /// Reads bytes one at a time until a NUL byte is consumed.
    ///
    /// The terminator is not part of the returned bytes.
    pub fn read_cstring(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut byte = [0_u8; 1];
        loop {
            self.read_into(&mut byte)?;
            if byte[0] == 0 {
                return Ok(bytes);
            }
            bytes.push(byte[0]);
        }
    }

    pub fn read_remaining(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.len.saturating_sub(self.position) as usize);
        let count = self.inner.read_to_end(&mut buf)?;
        self.position += count as u64;
        Ok(buf)
    }

    fn truncated(&self, err: io::Error, wanted: u64) -> Error {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Truncated {
                offset: self.position,
                expected: wanted,
            }
        } else {
            Error::Io(err)
        }
    }
}
