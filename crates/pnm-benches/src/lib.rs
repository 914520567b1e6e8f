/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Shared inputs for the pnm benchmarks
use pnm_core::variant::EncodingVariant;
use pnm_image::color::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;

/// A deterministic gradient image of the given size
///
/// # Errors
/// `InvalidArgument` for a zero width or height
pub fn sample_image(width: usize, height: usize) -> Result<Image, ImageErrors> {
    let mut image = Image::new(width, height)?;

    for (y, row) in image.rows_mut().enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = Rgb::new((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8);
        }
    }
    Ok(image)
}

/// `sample_image` encoded in the given variant
///
/// # Errors
/// `InvalidArgument` for a zero width or height, or any encoder error
pub fn sample_bytes(
    width: usize, height: usize, variant: EncodingVariant
) -> Result<Vec<u8>, ImageErrors> {
    let mut image = sample_image(width, height)?;
    image.set_variant(variant);
    image.encode()
}
