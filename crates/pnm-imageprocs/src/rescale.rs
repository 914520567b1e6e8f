/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rescale channel intensities to a new maximum value
use pnm_core::log::trace;
use pnm_image::color::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Change an image's maximum value, scaling every channel along
///
/// A channel `c` becomes `⌊c * new / old⌋`, where `old` is the image's
/// current maximum value.
#[derive(Copy, Clone, Debug)]
pub struct Rescale {
    new_max: u8
}

impl Rescale {
    /// Create a new rescale operation
    ///
    /// # Arguments
    /// - new_max: The new maximum intensity, must be in `1..=255`
    #[must_use]
    pub fn new(new_max: u8) -> Rescale {
        Rescale { new_max }
    }
}

impl OperationsTrait for Rescale {
    fn get_name(&self) -> &'static str {
        "Rescale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_max == 0 {
            return Err(ImageErrors::InvalidArgument(
                "max value must be in 1..=255".to_string()
            ));
        }
        let old_max = image.max_value();
        trace!("Rescaling intensities from {} to {}", old_max, self.new_max);

        rescale(image.pixels_mut(), old_max, self.new_max);
        image.set_max_value(self.new_max)
    }
}

/// Scale channels from the range `0..=old_max` to `0..=new_max`
///
/// Results are clamped to `new_max`.
pub fn rescale(in_image: &mut [Rgb], old_max: u8, new_max: u8) {
    if old_max == 0 {
        return;
    }
    let (old, new) = (u32::from(old_max), u32::from(new_max));

    for pixel in in_image.iter_mut() {
        *pixel = pixel.map(|v| ((u32::from(v) * new / old).min(new)) as u8);
    }
}
