//! Cursor-based reader over an action-string byte buffer.
//!
//! This module provides the [`Cursor`] type, a positioned sequential reader designed for
//! decoding action-string instructions. It offers bounds-checked access to binary data with
//! little-endian fixed-width reads, null-terminated strings, bounded sub-regions, and position
//! get/set for random access during control-flow discovery.
//!
//! # Architecture
//!
//! The cursor is built around a simple model that maintains a position within a byte slice:
//!
//! - **Position tracking** - Maintains current offset for sequential parsing operations
//! - **Bounds checking** - All operations validate data availability before reading
//! - **Bounded sub-regions** - [`Cursor::take`] limits a read to a declared operand length
//! - **Bit-level access** - [`Cursor::bits`] opens a [`crate::stream::BitReader`] mid-stream
//!
//! # Usage Examples
//!
//! ```rust
//! use avmscope::stream::Cursor;
//!
//! let data = [0x01, 0x02, 0x03, 0x04];
//! let mut cursor = Cursor::new(&data);
//!
//! let value = cursor.read_le::<u16>()?;
//! assert_eq!(value, 0x0201);
//!
//! cursor.seek(3)?;
//! assert_eq!(cursor.read_le::<u8>()?, 0x04);
//! # Ok::<(), avmscope::Error>(())
//! ```

use crate::{
    stream::{bits::BitReader, io::read_le_at, AvmIO},
    Result,
};

/// A bounds-checked positional reader over a byte slice.
///
/// `Cursor` maintains an internal position and provides the read primitives the action-string
/// format needs: little-endian integers and floats, null-terminated strings, raw byte runs,
/// bounded sub-cursors for declared-length operand regions, and a bit-level view for
/// bit-packed fields.
///
/// # Examples
///
/// ```rust
/// use avmscope::stream::Cursor;
///
/// let data = [0x07, 0x00, 0x48, 0x69, 0x00];
/// let mut cursor = Cursor::new(&data);
///
/// assert_eq!(cursor.read_le::<u16>()?, 7);
/// assert_eq!(cursor.read_string_utf8()?, "Hi");
/// assert_eq!(cursor.remaining(), 0);
/// # Ok::<(), avmscope::Error>(())
/// ```
pub struct Cursor<'a> {
    /// The binary data being read
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new [`Cursor`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the cursor has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Get the current position of the cursor within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Move the current position to the specified index.
    ///
    /// The one-past-the-end position is permitted; every position beyond it is rejected.
    ///
    /// # Arguments
    /// * `pos` - The position to move the cursor to
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is beyond the data length.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if self.position + step > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position += step;
        Ok(())
    }

    /// Peek at the next byte without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is at or beyond the data length.
    pub fn peek_byte(&self) -> Result<u8> {
        if self.position >= self.data.len() {
            return Err(out_of_bounds_error!());
        }
        Ok(self.data[self.position])
    }

    /// Read a type `T` from the current position in little-endian format and advance the
    /// position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avmscope::stream::Cursor;
    ///
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut cursor = Cursor::new(&data);
    ///
    /// let value = cursor.read_le::<u32>()?;
    /// assert_eq!(value, 0x04030201);
    /// # Ok::<(), avmscope::Error>(())
    /// ```
    pub fn read_le<T: AvmIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read `len` raw bytes and advance the position past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.position + len > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Read a null-terminated UTF-8 string from the current position.
    ///
    /// If no null terminator is found before the end of the buffer, the remaining bytes form
    /// the string and the cursor is left at the end of the buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the bytes are not valid UTF-8.
    pub fn read_string_utf8(&mut self) -> Result<String> {
        let start = self.position;
        let mut end = start;

        while end < self.data.len() && self.data[end] != 0 {
            end += 1;
        }

        let string_data = &self.data[start..end];

        // Step past the terminator when one was found; a string running to the end of the
        // buffer is accepted as-is.
        if end < self.data.len() {
            self.position = end + 1;
        } else {
            self.position = end;
        }

        match std::str::from_utf8(string_data) {
            Ok(value) => Ok(value.to_string()),
            Err(_) => Err(malformed_error!("Invalid UTF-8 string at offset {}", start)),
        }
    }

    /// Split off a bounded sub-cursor over the next `len` bytes, advancing this cursor past
    /// them.
    ///
    /// The sub-cursor cannot read outside its region; it is used for operand encodings that
    /// fill a declared length with a variable number of entries, such as push value lists.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `len` bytes remain.
    pub fn take(&mut self, len: usize) -> Result<Cursor<'a>> {
        Ok(Cursor::new(self.read_bytes(len)?))
    }

    /// Open a bit-level reader at the current position.
    ///
    /// The returned [`BitReader`] consumes whole bytes from this cursor as bits are requested,
    /// so dropping it leaves the cursor byte-realigned after the last byte touched.
    pub fn bits<'c>(&'c mut self) -> BitReader<'c, 'a> {
        BitReader::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_le_values() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut cursor = Cursor::new(&data);

        let first = cursor.read_le::<u32>().unwrap();
        assert_eq!(first, 0x04030201);

        cursor.seek(6).unwrap();
        let last = cursor.read_le::<u16>().unwrap();
        assert_eq!(last, 0x0807);
    }

    #[test]
    fn seek_bounds() {
        let data = [0x01, 0x02];
        let mut cursor = Cursor::new(&data);

        assert!(cursor.seek(2).is_ok());
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.seek(3).is_err());
    }

    #[test]
    fn advance_by_bounds() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = Cursor::new(&data);

        cursor.advance_by(3).unwrap();
        assert_eq!(cursor.pos(), 3);
        assert!(cursor.advance_by(1).is_err());
    }

    #[test]
    fn peek_does_not_advance() {
        let data = [0x2A];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.peek_byte().unwrap(), 0x2A);
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.read_le::<u8>().unwrap(), 0x2A);
        assert!(cursor.peek_byte().is_err());
    }

    #[test]
    fn strings() {
        let data = [b'H', b'e', b'l', b'l', b'o', 0x00, b'W', b'o', b'r', b'l', b'd', 0x00];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_string_utf8().unwrap(), "Hello");
        assert_eq!(cursor.read_string_utf8().unwrap(), "World");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn string_without_terminator() {
        let data = [b'H', b'i'];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_string_utf8().unwrap(), "Hi");
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn empty_string() {
        let data = [0x00, 0x07];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_string_utf8().unwrap(), "");
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn invalid_utf8_string() {
        let data = [0xFF, 0xFE, 0x00];
        let mut cursor = Cursor::new(&data);

        assert!(cursor.read_string_utf8().is_err());
    }

    #[test]
    fn take_sub_cursor() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut cursor = Cursor::new(&data);

        let mut sub = cursor.take(2).unwrap();
        assert_eq!(cursor.pos(), 2);
        assert_eq!(sub.read_le::<u16>().unwrap(), 0x0201);
        assert!(sub.read_le::<u8>().is_err());

        assert!(cursor.take(3).is_err());
    }
}
