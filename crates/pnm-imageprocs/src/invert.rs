/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Invert image pixels
use pnm_image::color::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Invert an image pixel.
///
/// Every channel becomes `max_value - channel`, where `max_value` is
/// the image's declared maximum intensity
#[derive(Default, Copy, Clone, Debug)]
pub struct Invert;

impl Invert {
    /// Create a new invert operation
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn get_name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let max_value = image.max_value();

        invert(image.pixels_mut(), max_value);

        Ok(())
    }
}

/// Invert pixels in place against `max_value`
///
/// Channels above `max_value` become zero
pub fn invert(in_image: &mut [Rgb], max_value: u8) {
    for pixel in in_image.iter_mut() {
        *pixel = pixel.map(|v| max_value.saturating_sub(v));
    }
}

#[cfg(test)]
mod tests {
    use pnm_image::color::Rgb;

    use crate::invert::invert;

    #[test]
    fn invert_against_max_value() {
        let mut pixels = [Rgb::new(0, 10, 15), Rgb::new(15, 20, 3)];
        invert(&mut pixels, 15);

        assert_eq!(pixels, [Rgb::new(15, 5, 0), Rgb::new(0, 0, 12)]);
    }
}
