/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised by byte sources, sinks and the reader
pub enum ByteIoError {
    /// An error from the underlying std I/O object
    StdIoError(std::io::Error),
    /// Requested more bytes than the reader holds.
    ///
    /// `(requested, available)`
    NotEnoughBytes(usize, usize),
    /// The sink cannot hold the bytes being written.
    ///
    /// `(requested, available)`
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] with
/// helpers for walking over tokens of a text header and borrowing
/// runs of raw bytes from the underlying buffer.
pub struct ByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new instance of the byte stream
    ///
    /// # Example
    /// ```
    /// use pnm_core::bytestream::ByteReader;
    /// let reader = ByteReader::new(b"P6");
    /// assert_eq!(reader.remaining(), 2);
    /// ```
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end parks the reader at the end.
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }
    /// Undo a buffer read by moving the position pointer `num`
    /// bytes behind.
    ///
    /// This operation will saturate at zero
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Return true if the underlying buffer stream is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }
    /// Get current position of the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Return true whether or not we read to the end of the
    /// buffer and have no more bytes left.
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Get number of bytes unread inside this
    /// stream.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }
    /// Look at the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Return a reference to the next `num_bytes` bytes and advance past
    /// them, or an error if the stream does not hold that many.
    pub fn get_as_ref(&mut self, num_bytes: usize) -> Result<&'a [u8], ByteIoError> {
        let end = self
            .position
            .checked_add(num_bytes)
            .ok_or(ByteIoError::Generic("Read size overflows"))?;

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(ByteIoError::NotEnoughBytes(num_bytes, self.remaining()))
        }
    }
    /// Consume bytes as long as `func` returns true for them
    ///
    /// Stops at the first byte for which `func` returns false,
    /// leaving that byte unread
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) {
        while let Some(byte) = self.peek_u8() {
            if !(func)(byte) {
                break;
            }
            self.position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ByteReader;

    #[test]
    fn get_as_ref_does_not_advance_on_failure() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        reader.skip(1);

        assert!(reader.get_as_ref(3).is_err());
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.get_as_ref(2).unwrap(), &[2, 3]);
        assert!(reader.eof());
    }

    #[test]
    fn skip_and_rewind_saturate() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        reader.skip(10);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.peek_u8(), None);
        reader.rewind(10);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn skip_until_false_stops_on_first_mismatch() {
        let mut reader = ByteReader::new(b"  \n\t42");
        reader.skip_until_false(|x| x.is_ascii_whitespace());
        assert_eq!(reader.peek_u8(), Some(b'4'));
        assert_eq!(reader.remaining(), 2);
    }
}
