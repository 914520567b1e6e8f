/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Glue between images and the ppm codec
use pnm_core::bytestream::ByteSinkTrait;
use pnm_core::log::info;
use pnm_core::options::EncoderOptions;
use pnm_core::variant::EncodingVariant;
use pnm_ppm::{PPMDecoder, PPMEncoder};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

impl<'a> DecoderTrait for PPMDecoder<'a> {
    fn decode_image(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;

        // headers are present once decode succeeds
        let (width, height) = PPMDecoder::get_dimensions(self).unwrap_or((0, 0));
        let max_value = self.get_max_value().unwrap_or(u8::MAX);
        let variant = self.get_variant().unwrap_or_default();

        let mut image = Image::from_u8(&pixels, width, height)?;
        image.set_max_value(max_value)?;
        image.set_variant(variant);

        Ok(image)
    }

    fn get_dimensions(&self) -> Option<(usize, usize)> {
        PPMDecoder::get_dimensions(self)
    }

    fn get_name(&self) -> &'static str {
        "PPM Decoder"
    }
}

/// Encodes images into `P3` or `P6`
///
/// By default the image's own variant is used
#[derive(Copy, Clone, Debug, Default)]
pub struct PPMImageEncoder {
    variant: Option<EncodingVariant>
}

impl PPMImageEncoder {
    pub fn new() -> PPMImageEncoder {
        PPMImageEncoder::default()
    }

    /// Always write `variant`, whatever the image says
    pub fn new_with_variant(variant: EncodingVariant) -> PPMImageEncoder {
        PPMImageEncoder {
            variant: Some(variant)
        }
    }
}

impl EncoderTrait for PPMImageEncoder {
    fn get_name(&self) -> &'static str {
        "PPM Encoder"
    }

    fn encode<T: ByteSinkTrait>(&mut self, image: &Image, sink: T) -> Result<usize, ImageErrors> {
        let (width, height) = image.dimensions();
        let variant = self.variant.unwrap_or(image.variant());

        info!("Encoding {}x{} image as {}", width, height, variant);

        let options = EncoderOptions::new(width, height, image.max_value(), variant);
        let written = PPMEncoder::new(image.as_bytes(), options).encode(sink)?;

        Ok(written)
    }
}
