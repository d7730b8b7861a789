//! Buffer Utilities
//!
//! Every value of the glucose profile is a packed little endian structure where the presence of
//! most fields depends on a flags byte. The decoders walk these values with a [`LeReader`] so that
//! the cursor always advances by exactly the number of bytes consumed by a field.

use crate::DecodeError;

/// A little endian reader over a byte slice
///
/// Each read takes the name of the field being read. When the slice ends before a field is
/// complete, the returned [`DecodeError::TooShort`] names the field and the number of bytes that
/// would have been required.
#[derive(Debug, Clone)]
pub struct LeReader<'a> {
    raw: &'a [u8],
    cursor: usize,
}

impl<'a> LeReader<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        LeReader { raw, cursor: 0 }
    }

    /// Get the number of bytes that have not been read
    pub fn remaining(&self) -> usize {
        self.raw.len() - self.cursor
    }

    fn take<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], DecodeError> {
        let end = self.cursor + N;

        let bytes = self.raw.get(self.cursor..end).ok_or(DecodeError::TooShort {
            field,
            needed: end,
            len: self.raw.len(),
        })?;

        let mut array = [0u8; N];

        array.copy_from_slice(bytes);

        self.cursor = end;

        Ok(array)
    }

    pub fn u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        self.take::<1>(field).map(|[b]| b)
    }

    pub fn u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        self.take::<2>(field).map(u16::from_le_bytes)
    }

    pub fn i16(&mut self, field: &'static str) -> Result<i16, DecodeError> {
        self.take::<2>(field).map(i16::from_le_bytes)
    }
}
