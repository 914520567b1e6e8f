/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry points for reading and writing images
//!
//! Sources and sinks are abstracted by [`ByteSourceTrait`] and
//! [`ByteSinkTrait`], so files, buffered streams and in-memory
//! buffers all work the same way.
use pnm_core::bytestream::{ByteSinkTrait, ByteSourceTrait};
use pnm_core::log::trace;
use pnm_core::options::DecoderOptions;
use pnm_ppm::PPMDecoder;

use crate::codecs::ppm::PPMImageEncoder;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

pub mod ppm;

impl Image {
    /// Decode an image from in-memory bytes with default options
    ///
    /// ```
    /// use pnm_image::color::Rgb;
    /// use pnm_image::image::Image;
    ///
    /// let image = Image::decode(b"P6\n1 1\n255\n\x01\x02\x03").unwrap();
    /// assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb::new(1, 2, 3));
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Image, ImageErrors> {
        Image::decode_with_options(bytes, DecoderOptions::default())
    }

    /// Decode an image from in-memory bytes
    pub fn decode_with_options(bytes: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        PPMDecoder::new_with_options(options, bytes).decode_image()
    }

    /// Read all bytes from `source` and decode them
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use pnm_core::options::DecoderOptions;
    /// use pnm_image::image::Image;
    ///
    /// let file = File::open("image.ppm").unwrap();
    /// let image = Image::read(file, DecoderOptions::default()).unwrap();
    /// ```
    pub fn read<T: ByteSourceTrait>(
        mut source: T, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let mut bytes = Vec::with_capacity(source.size_hint().unwrap_or(0));
        let length = source.read_remaining(&mut bytes)?;

        trace!("Read {} bytes from source", length);

        Image::decode_with_options(&bytes, options)
    }

    /// Encode the image in its own variant into `sink`
    ///
    /// # Returns
    /// The number of bytes written
    pub fn write<T: ByteSinkTrait>(&self, sink: T) -> Result<usize, ImageErrors> {
        PPMImageEncoder::new().encode(self, sink)
    }

    /// Encode the image in its own variant into a new buffer
    pub fn encode(&self) -> Result<Vec<u8>, ImageErrors> {
        let mut out = vec![];
        self.write(&mut out)?;

        Ok(out)
    }
}
