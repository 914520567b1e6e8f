/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::variant::EncodingVariant;

/// Options shared by the encoders in
/// the `pnm` family of image crates
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:     usize,
    height:    usize,
    max_value: u8,
    variant:   EncodingVariant
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:     0,
            height:    0,
            max_value: 255,
            variant:   EncodingVariant::Binary
        }
    }
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `max_value`: Declared maximum channel intensity
    /// * `variant`: Grammar used for the pixel data
    ///
    pub fn new(
        width: usize, height: usize, max_value: u8, variant: EncodingVariant
    ) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            max_value,
            variant
        }
    }

    /// Get the width for which the image will be encoded in
    pub const fn get_width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn get_height(&self) -> usize {
        self.height
    }

    /// Get the maximum channel value written in the header
    pub const fn get_max_value(&self) -> u8 {
        self.max_value
    }

    /// Get the encoding variant the pixel data will be written in
    pub const fn get_variant(&self) -> EncodingVariant {
        self.variant
    }

    /// Set width for the image to be encoded
    #[must_use]
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set height for the image to be encoded
    #[must_use]
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the maximum channel value written in the header
    #[must_use]
    pub fn set_max_value(mut self, max_value: u8) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the encoding variant
    #[must_use]
    pub fn set_variant(mut self, variant: EncodingVariant) -> Self {
        self.variant = variant;
        self
    }
}
