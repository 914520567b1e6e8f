/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder and encoder options
//!
//! This module exposes structs for which all implemented
//! decoders and encoders get shared options
//!
//! All supported options are put into one `DecoderOptions` or
//! `EncoderOptions` to allow for global configurations
pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;

mod decoder;
mod encoder;
