/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Neighborhood averaging resize
use pnm_core::log::trace;
use pnm_image::color::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Resize an image to a new width and height
///
/// Each destination pixel maps back to the source pixel
/// `(⌊x·src_w/dst_w⌋, ⌊y·src_h/dst_h⌋)` and takes the average of the
/// up to nine source pixels in its 3x3 neighborhood.
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    new_width:  usize,
    new_height: usize
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Argument
    /// - new_width: The new image width
    /// - new_height: The new image height.
    #[must_use]
    pub fn new(new_width: usize, new_height: usize) -> Resize {
        Resize {
            new_width,
            new_height
        }
    }
}

impl OperationsTrait for Resize {
    fn get_name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_width == 0 || self.new_height == 0 {
            return Err(ImageErrors::InvalidArgument(format!(
                "cannot resize to {}x{}, dimensions must be positive",
                self.new_width, self.new_height
            )));
        }
        let count = self.new_width.checked_mul(self.new_height).ok_or_else(|| {
            ImageErrors::InvalidArgument(format!(
                "cannot resize to {}x{}, too many pixels",
                self.new_width, self.new_height
            ))
        })?;
        let (old_w, old_h) = image.dimensions();

        trace!(
            "Resizing {}x{} image to {}x{}",
            old_w,
            old_h,
            self.new_width,
            self.new_height
        );
        let mut new_pixels = vec![Rgb::BLACK; count];

        resize(
            image.pixels(),
            &mut new_pixels,
            old_w,
            old_h,
            self.new_width,
            self.new_height
        );
        image.set_pixels(new_pixels, self.new_width, self.new_height)
    }
}

/// Average of the in-bounds pixels in the 3x3 neighborhood of `(x, y)`
fn neighborhood_average(pixels: &[Rgb], width: usize, height: usize, x: usize, y: usize) -> Rgb {
    let (mut r, mut g, mut b, mut count) = (0_u32, 0_u32, 0_u32, 0_u32);

    for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
        for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
            let pixel = pixels[ny * width + nx];

            r += u32::from(pixel.r);
            g += u32::from(pixel.g);
            b += u32::from(pixel.b);
            count += 1;
        }
    }
    // averages of u8 values fit in u8
    Rgb::new((r / count) as u8, (g / count) as u8, (b / count) as u8)
}

/// Resize `in_image` into `out_image`
///
/// # Arguments
/// - in_image: Source pixels, `in_width * in_height` long
/// - out_image: Destination pixels, `out_width * out_height` long
///
/// All dimensions must be non zero.
pub fn resize(
    in_image: &[Rgb], out_image: &mut [Rgb], in_width: usize, in_height: usize, out_width: usize,
    out_height: usize
) {
    let scale_x = in_width as f64 / out_width as f64;
    let scale_y = in_height as f64 / out_height as f64;

    for (y, row) in out_image.chunks_exact_mut(out_width).enumerate() {
        let src_y = ((y as f64 * scale_y) as usize).min(in_height - 1);

        for (x, pixel) in row.iter_mut().enumerate() {
            let src_x = ((x as f64 * scale_x) as usize).min(in_width - 1);

            *pixel = neighborhood_average(in_image, in_width, in_height, src_x, src_y);
        }
    }
}
