/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversions to the single channel and bi-level netpbm models
//!
//! The grayscale and bi-level codecs live outside this crate, these
//! types are the buffers handed over to them.
use crate::color::Rgb;
use crate::image::Image;

/// How three channels are collapsed into one
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GrayscaleMethod {
    /// `(r + g + b) / 3`
    #[default]
    Average,
    /// `0.299 r + 0.587 g + 0.114 b`, truncated
    Luma
}

impl GrayscaleMethod {
    #[inline]
    pub fn convert(self, pixel: Rgb) -> u8 {
        match self {
            GrayscaleMethod::Average => channel_average(pixel),
            GrayscaleMethod::Luma => {
                let luma = 0.299 * f64::from(pixel.r)
                    + 0.587 * f64::from(pixel.g)
                    + 0.114 * f64::from(pixel.b);

                luma as u8
            }
        }
    }
}

#[inline]
fn channel_average(pixel: Rgb) -> u8 {
    let sum = u16::from(pixel.r) + u16::from(pixel.g) + u16::from(pixel.b);
    // at most 255
    (sum / 3) as u8
}

/// A single channel image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    width:     usize,
    height:    usize,
    max_value: u8,
    pixels:    Vec<u8>
}

impl GrayImage {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The max value inherited from the color image
    pub const fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Row major samples
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }
}

/// A bi-level image, `true` marks a pixel that is on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitImage {
    width:  usize,
    height: usize,
    pixels: Vec<bool>
}

impl BitImage {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row major pixels
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }
}

impl Image {
    /// Collapse the image into one channel using `method`
    ///
    /// ```
    /// use pnm_image::color::Rgb;
    /// use pnm_image::conversions::GrayscaleMethod;
    /// use pnm_image::image::Image;
    ///
    /// let image = Image::fill(Rgb::new(30, 60, 90), 2, 2).unwrap();
    /// let gray = image.to_grayscale(GrayscaleMethod::Average);
    ///
    /// assert_eq!(gray.get(1, 1), Some(60));
    /// ```
    pub fn to_grayscale(&self, method: GrayscaleMethod) -> GrayImage {
        let (width, height) = self.dimensions();

        GrayImage {
            width,
            height,
            max_value: self.max_value(),
            pixels: self.pixels().iter().map(|x| method.convert(*x)).collect()
        }
    }

    /// Threshold the image into a bi-level image
    ///
    /// A pixel is on when the average of its channels is larger
    /// than half the max value
    pub fn to_bilevel(&self) -> BitImage {
        let (width, height) = self.dimensions();
        let threshold = self.max_value() / 2;

        BitImage {
            width,
            height,
            pixels: self
                .pixels()
                .iter()
                .map(|x| channel_average(*x) > threshold)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgb;
    use crate::conversions::GrayscaleMethod;
    use crate::image::Image;

    #[test]
    fn luma_weights() {
        assert_eq!(GrayscaleMethod::Luma.convert(Rgb::new(255, 0, 0)), 76);
        assert_eq!(GrayscaleMethod::Luma.convert(Rgb::new(0, 255, 0)), 149);
        assert_eq!(GrayscaleMethod::Luma.convert(Rgb::new(0, 0, 255)), 29);
        assert_eq!(GrayscaleMethod::Average.convert(Rgb::WHITE), 255);
    }

    #[test]
    fn bilevel_threshold_is_exclusive() {
        let mut image = Image::new(3, 1).unwrap();
        image.set_pixel(0, 0, Rgb::new(127, 127, 127));
        image.set_pixel(1, 0, Rgb::new(128, 128, 128));
        image.set_pixel(2, 0, Rgb::new(255, 0, 130));

        let bits = image.to_bilevel();

        assert_eq!(bits.pixels(), [false, true, true]);
        assert_eq!(bits.get(3, 0), None);
    }
}
