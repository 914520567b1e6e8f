/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, Cursor, Read};

use crate::bytestream::{ByteIoError, ByteSourceTrait};

impl ByteSourceTrait for &[u8] {
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        sink.extend_from_slice(self);
        let bytes_read = self.len();
        // consumed
        *self = &[];

        Ok(bytes_read)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl ByteSourceTrait for Vec<u8> {
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        let bytes_read = self.len();
        sink.append(self);

        Ok(bytes_read)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> ByteSourceTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        self.read_to_end(sink).map_err(ByteIoError::from)
    }

    fn size_hint(&self) -> Option<usize> {
        let len = self.get_ref().as_ref().len();
        let position = usize::try_from(self.position()).unwrap_or(len);

        Some(len.saturating_sub(position))
    }
}

impl<T: Read> ByteSourceTrait for BufReader<T> {
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        self.read_to_end(sink).map_err(ByteIoError::from)
    }
}

impl ByteSourceTrait for File {
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        self.read_to_end(sink).map_err(ByteIoError::from)
    }

    fn size_hint(&self) -> Option<usize> {
        self.metadata()
            .ok()
            .and_then(|meta| usize::try_from(meta.len()).ok())
    }
}
