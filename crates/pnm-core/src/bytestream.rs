/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and the traits used to feed bytes into decoders
//! and collect bytes from encoders.
//!
//! Decoders read from an in-memory slice through [`ByteReader`], which keeps
//! an exact byte offset so that binary payloads can be located without
//! line oriented scanning.
//!
//! Callers holding a file, a stream or a buffer go through [`ByteSourceTrait`]
//! to materialize the bytes and through [`ByteSinkTrait`] to write them out.
pub use reader::*;
pub use traits::*;

mod reader;
mod std_readers;
mod std_writers;
mod traits;
