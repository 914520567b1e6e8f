/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! This module provides the ability to store image metadata and transfer it
//! from one image to another
use pnm_core::variant::EncodingVariant;

/// Image metadata
///
/// The decoder sets this up while the encoder
/// reads these details back from the image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to serde file
    pub(crate) width:     usize,
    pub(crate) height:    usize,
    pub(crate) max_value: u8,
    pub(crate) variant:   EncodingVariant
}

impl Default for ImageMetadata {
    fn default() -> Self {
        ImageMetadata {
            width:     0,
            height:    0,
            max_value: 255,
            variant:   EncodingVariant::Binary
        }
    }
}

impl ImageMetadata {
    /// Get image dimensions as a tuple of width and height
    ///
    /// # Example
    ///
    /// ```rust
    /// use pnm_image::metadata::ImageMetadata;
    /// let meta = ImageMetadata::default();
    /// // default dimensions are usually zero
    /// assert_eq!(meta.get_dimensions(),(0,0));
    /// ```
    pub const fn get_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the declared maximum channel intensity
    pub const fn get_max_value(&self) -> u8 {
        self.max_value
    }

    /// Get the grammar the image is serialized with
    pub const fn get_variant(&self) -> EncodingVariant {
        self.variant
    }

    pub(crate) fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
}
