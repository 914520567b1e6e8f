/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The pixel buffer every raster operation works on
//!
//! Pixels are stored row major in one contiguous vector of
//! `width * height` [`Rgb`] values.
use core::fmt::{Debug, Formatter};
use core::slice::{ChunksExact, ChunksExactMut};

use pnm_core::variant::EncodingVariant;

use crate::color::{Point, Rgb};
use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// An RGB image
///
/// # Invariants
/// - width and height are never zero
/// - `pixels.len() == width * height`, checked on every structural change
/// - reads outside the canvas error, writes outside the canvas are ignored
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    pixels:   Vec<Rgb>,
    metadata: ImageMetadata
}

/// Number of pixels in a `width x height` canvas
///
/// # Errors
/// `InvalidArgument` if either dimension is zero or the pixel
/// count overflows
fn pixel_count(width: usize, height: usize) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::InvalidArgument(format!(
            "image dimensions must be positive, found {}x{}",
            width, height
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        ImageErrors::InvalidArgument(format!(
            "image dimensions {}x{} are too large",
            width, height
        ))
    })
}

impl Image {
    /// Create a black image with a max value of 255
    ///
    /// # Errors
    /// `InvalidArgument` if width or height is zero
    pub fn new(width: usize, height: usize) -> Result<Image, ImageErrors> {
        Image::fill(Rgb::BLACK, width, height)
    }

    /// Create an image where every pixel is `color`
    ///
    /// ```
    /// use pnm_image::color::Rgb;
    /// use pnm_image::image::Image;
    /// let image = Image::fill(Rgb::new(1, 2, 3), 5, 6).unwrap();
    ///
    /// assert!(image.pixels().iter().all(|x| *x == Rgb::new(1, 2, 3)));
    /// assert!(Image::fill(Rgb::new(1, 2, 3), 0, 6).is_err());
    /// ```
    ///
    /// # Errors
    /// `InvalidArgument` if width or height is zero
    pub fn fill(color: Rgb, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let count = pixel_count(width, height)?;

        Ok(Image::with_pixels(vec![color; count], width, height))
    }

    fn with_pixels(pixels: Vec<Rgb>, width: usize, height: usize) -> Image {
        let mut metadata = ImageMetadata::default();
        metadata.set_dimensions(width, height);

        Image { pixels, metadata }
    }

    /// Create an image from row major pixels
    ///
    /// # Errors
    /// - `DimensionsMisMatch` if `pixels.len() != width * height`
    /// - `InvalidArgument` if width or height is zero
    pub fn from_pixels(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let expected = pixel_count(width, height)?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Image::with_pixels(pixels, width, height))
    }

    /// Create an image from interleaved RGB bytes
    ///
    /// ```
    /// use pnm_image::color::Rgb;
    /// use pnm_image::image::Image;
    /// let image = Image::from_u8(&[1, 2, 3, 4, 5, 6], 2, 1).unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0).unwrap(), Rgb::new(4, 5, 6));
    /// ```
    pub fn from_u8(pixels: &[u8], width: usize, height: usize) -> Result<Image, ImageErrors> {
        let expected = width.saturating_mul(height).saturating_mul(3);

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let pixels: &[Rgb] = bytemuck::try_cast_slice(pixels)
            .map_err(|_| ImageErrors::DimensionsMisMatch(expected, pixels.len()))?;

        Image::from_pixels(pixels.to_vec(), width, height)
    }

    /// View the pixels as interleaved RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.metadata.get_dimensions()
    }

    pub const fn width(&self) -> usize {
        self.metadata.width
    }

    pub const fn height(&self) -> usize {
        self.metadata.height
    }

    /// Get the declared maximum channel intensity
    pub const fn max_value(&self) -> u8 {
        self.metadata.max_value
    }

    /// Set the declared maximum channel intensity
    ///
    /// Channel values are left untouched, use a rescale operation to
    /// scale them along.
    ///
    /// # Errors
    /// `InvalidArgument` if `max_value` is zero or smaller than a
    /// channel currently in the image
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), ImageErrors> {
        if max_value == 0 {
            return Err(ImageErrors::InvalidArgument(
                "max value must be in 1..=255".to_string()
            ));
        }
        let largest = self.largest_channel();

        if largest > max_value {
            return Err(ImageErrors::InvalidArgument(format!(
                "max value {} is smaller than channel value {} present in the image",
                max_value, largest
            )));
        }
        self.metadata.max_value = max_value;

        Ok(())
    }

    /// The largest channel value in the image, zero for an empty image
    pub fn largest_channel(&self) -> u8 {
        self.as_bytes().iter().copied().max().unwrap_or(0)
    }

    pub const fn variant(&self) -> EncodingVariant {
        self.metadata.variant
    }

    /// Select the grammar the image is written in
    pub fn set_variant(&mut self, variant: EncodingVariant) {
        self.metadata.variant = variant;
    }

    pub const fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    /// Return true if `(x, y)` lies on the canvas
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        self.index_of(x, y).is_some()
    }

    fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let (width, height) = self.dimensions();

        if x < width && y < height {
            Some(y * width + x)
        } else {
            None
        }
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    /// `IndexError` if the position is outside the canvas
    pub fn get_pixel(&self, x: isize, y: isize) -> Result<Rgb, ImageErrors> {
        match self.index_of(x, y) {
            Some(index) => Ok(self.pixels[index]),
            None => Err(ImageErrors::IndexError {
                x,
                y,
                width: self.width(),
                height: self.height()
            })
        }
    }

    /// Write the pixel at `(x, y)`, doing nothing if it lies outside the canvas
    #[inline]
    pub fn set_pixel(&mut self, x: isize, y: isize, color: Rgb) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Read the pixel at `point`
    pub fn get(&self, point: Point) -> Result<Rgb, ImageErrors> {
        self.get_pixel(point.x, point.y)
    }

    /// Write the pixel at `point`, ignoring points outside the canvas
    pub fn set(&mut self, point: Point, color: Rgb) {
        self.set_pixel(point.x, point.y, color);
    }

    /// All pixels in row major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// All pixels in row major order, mutable
    ///
    /// The length can't change through this, only the values
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Iterate over the rows of the image
    pub fn rows(&self) -> ChunksExact<'_, Rgb> {
        self.pixels.chunks_exact(self.width())
    }

    /// Iterate mutably over the rows of the image
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Rgb> {
        let width = self.width();
        self.pixels.chunks_exact_mut(width)
    }

    /// Replace the whole pixel buffer along with its dimensions
    ///
    /// Used by operations that change the image shape, the old
    /// buffer is dropped.
    ///
    /// # Errors
    /// - `InvalidArgument` if width or height is zero
    /// - `DimensionsMisMatch` if `pixels.len() != width * height`,
    ///    the image is left unchanged
    pub fn set_pixels(
        &mut self, pixels: Vec<Rgb>, width: usize, height: usize
    ) -> Result<(), ImageErrors> {
        let expected = pixel_count(width, height)?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        self.pixels = pixels;
        self.metadata.set_dimensions(width, height);

        Ok(())
    }
}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("max_value", &self.max_value())
            .field("variant", &self.variant())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgb;
    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn reads_outside_canvas_error() {
        let image = Image::new(3, 2).unwrap();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (isize::MIN, isize::MAX)] {
            assert!(matches!(
                image.get_pixel(x, y),
                Err(ImageErrors::IndexError { width: 3, height: 2, .. })
            ));
        }
        assert!(image.get_pixel(2, 1).is_ok());
    }

    #[test]
    fn writes_outside_canvas_are_ignored() {
        let mut image = Image::new(3, 2).unwrap();
        let before = image.clone();

        image.set_pixel(-1, 0, Rgb::WHITE);
        image.set_pixel(3, 1, Rgb::WHITE);
        image.set_pixel(0, 2, Rgb::WHITE);

        assert_eq!(image, before);
    }

    #[test]
    fn set_pixels_keeps_image_on_mismatch() {
        let mut image = Image::new(2, 2).unwrap();

        assert!(image.set_pixels(vec![Rgb::WHITE; 5], 2, 3).is_err());
        assert!(image.set_pixels(vec![], 0, 3).is_err());
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.pixels().len(), 4);

        image.set_pixels(vec![Rgb::WHITE; 6], 3, 2).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
    }

    #[test]
    fn max_value_cannot_drop_below_channels() {
        let mut image = Image::new(2, 1).unwrap();
        image.set_pixel(1, 0, Rgb::new(0, 40, 3));

        assert!(image.set_max_value(39).is_err());
        assert!(image.set_max_value(0).is_err());
        image.set_max_value(40).unwrap();

        assert_eq!(image.max_value(), 40);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (w, h) in [(0, 3), (3, 0), (0, 0)] {
            assert!(matches!(Image::new(w, h), Err(ImageErrors::InvalidArgument(_))));
            assert!(matches!(
                Image::fill(Rgb::WHITE, w, h),
                Err(ImageErrors::InvalidArgument(_))
            ));
            assert!(matches!(
                Image::from_pixels(vec![], w, h),
                Err(ImageErrors::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            Image::new(usize::MAX, 2),
            Err(ImageErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn rows_are_width_long() {
        let image = Image::new(4, 3).unwrap();

        assert_eq!(image.rows().len(), 3);
        assert!(image.rows().all(|row| row.len() == 4));
    }
}
