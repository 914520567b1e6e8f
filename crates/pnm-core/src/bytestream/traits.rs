/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in pnm
//!
//!
//! This exposes the traits and implementations for sources
//! and sinks in the pnm family of decoders and encoders.

use crate::bytestream::reader::ByteIoError;

/// The Input trait implemented for byte sources.
///
/// Decoding is not incremental, the whole encoded image is materialized
/// in memory before the decoder runs, so a source only has to be able
/// to hand over everything it holds.
///
/// Implemented for in-memory buffers ([`&[u8]`](slice), [`Vec<u8>`],
/// [`Cursor`](std::io::Cursor)) and std readers ([`File`](std::fs::File),
/// [`BufReader`](std::io::BufReader)).
pub trait ByteSourceTrait {
    /// Read all bytes remaining in this input to `sink` until we hit eof
    ///
    /// # Returns
    /// - `Ok(usize)` The actual number of bytes added to the sink
    /// - `Err()` An error that occurred when reading bytes
    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError>;

    /// A hint for how many bytes this source holds, if it is cheap to know.
    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// The writer trait implemented for pnm encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteSinkTrait {
    /// Write all bytes to the sink or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;
    /// A hint to tell the implementation how big of a size we expect the image to be
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    /// If your implementation doesn't support such, e.g file or mutable slices, it's okay to return
    /// `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}
