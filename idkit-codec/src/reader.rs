//! Cursor over encoded input with nesting-depth bookkeeping.

use crate::{DecodeOptions, Error, Result};
use rmp::decode::ValueReadError;
use std::io;
use std::ops::{Deref, DerefMut};

/// MessagePack `nil` marker.
pub const NIL: u8 = 0xc0;

/// Reads values from a byte slice.
///
/// Every formatter that decodes a value calls [`Reader::enter`] first. The
/// returned guard gives the depth back when it is dropped, so an early `?`
/// return never leaves the reader one level deeper than it should be.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader with default options.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, &DecodeOptions::default())
    }

    #[must_use]
    pub fn with_options(data: &'a [u8], options: &DecodeOptions) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the next byte without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// True if the next byte is the nil marker.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.peek() == Some(NIL)
    }

    /// Consumes a nil marker if one is next.
    pub fn try_read_nil(&mut self) -> bool {
        if self.is_nil() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < len {
            return Err(Error::UnexpectedEof {
                needed: len,
                available,
            });
        }
        let data: &'a [u8] = self.data;
        let bytes = &data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Consumes exactly `N` raw bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Steps one level deeper, failing once the configured limit is passed.
    pub fn enter(&mut self) -> Result<DepthGuard<'_, 'a>> {
        if self.depth >= self.max_depth {
            return Err(Error::DepthExceeded {
                max: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(DepthGuard { reader: self })
    }

    /// Runs an `rmp` decode function against the unread input.
    ///
    /// `needed` is the minimum encoded size, reported if the input runs out.
    /// The position only advances on success.
    pub(crate) fn decode_with<T>(
        &mut self,
        expected: &'static str,
        needed: usize,
        read: impl FnOnce(&mut &'a [u8]) -> std::result::Result<T, ValueReadError<io::Error>>,
    ) -> Result<T> {
        let data: &'a [u8] = self.data;
        let mut buf = &data[self.pos..];
        let available = buf.len();
        let value = read(&mut buf).map_err(|e| Error::from_read(e, expected, needed, available))?;
        self.pos = data.len() - buf.len();
        Ok(value)
    }
}

/// One level of nesting; decrements the reader's depth when dropped.
#[derive(Debug)]
pub struct DepthGuard<'r, 'a> {
    reader: &'r mut Reader<'a>,
}

impl<'a> Deref for DepthGuard<'_, 'a> {
    type Target = Reader<'a>;

    fn deref(&self) -> &Reader<'a> {
        &*self.reader
    }
}

impl<'a> DerefMut for DepthGuard<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Reader<'a> {
        &mut *self.reader
    }
}

impl Drop for DepthGuard<'_, '_> {
    fn drop(&mut self) {
        self.reader.depth -= 1;
    }
}
