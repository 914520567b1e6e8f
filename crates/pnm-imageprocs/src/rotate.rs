/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rotate an image by 90 degrees clockwise
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Rotate an image by 90 degrees clockwise
///
/// Width and height swap, pixel `(x, y)` moves to `(h - 1 - y, x)`
///
/// ```text
/// [1,2,3]    [7,4,1]
/// [4,5,6] -> [8,5,2]
/// [7,8,9]    [9,6,3]
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct Rotate90;

impl Rotate90 {
    /// Create a new rotate operation
    #[must_use]
    pub fn new() -> Rotate90 {
        Self
    }
}

impl OperationsTrait for Rotate90 {
    fn get_name(&self) -> &'static str {
        "Rotate 90"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        let mut out = image.pixels().to_vec();
        rotate_90(image.pixels(), &mut out, width, height);

        image.set_pixels(out, height, width)
    }
}

/// Rotate `in_image` of `width x height` clockwise into `out_image`,
/// which is then `height` pixels wide
pub fn rotate_90<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    // a 90 degree rotation is a bit cache unfriendly,
    // since widths become heights
    //
    // The lower pixel becomes the top most pixel
    for (y, row) in in_image.chunks_exact(width).enumerate() {
        let out_x = height - 1 - y;

        for (x, pixel) in row.iter().enumerate() {
            out_image[x * height + out_x] = *pixel;
        }
    }
}
