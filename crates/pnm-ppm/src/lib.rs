/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! This crate handles the two color members of the netpbm family
//!
//! - `P3`: Textual, whitespace separated decimal samples
//! - `P6`: Binary, one byte per sample
//!
//! Samples are always 8 bit, the declared maximum value lies in `1..=255`.
//!
//! # Example
//! ```
//! use pnm_core::options::EncoderOptions;
//! use pnm_core::variant::EncodingVariant;
//! use pnm_ppm::{PPMDecoder, PPMEncoder};
//!
//! let pixels = [255, 0, 0, 0, 255, 0];
//! let options = EncoderOptions::new(2, 1, 255, EncodingVariant::Textual);
//!
//! let mut encoded = vec![];
//! PPMEncoder::new(&pixels, options).encode(&mut encoded).unwrap();
//! assert_eq!(encoded, b"P3\n2 1\n255\n255 0 0 0 255 0\n");
//!
//! let mut decoder = PPMDecoder::new(&encoded);
//! assert_eq!(decoder.decode().unwrap(), pixels);
//! ```
pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;

mod decoder;
mod encoder;
mod errors;
