/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits connecting images with decoders, encoders and operations
use pnm_core::bytestream::ByteSinkTrait;
use pnm_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this trait
pub trait DecoderTrait {
    /// Decode the buffer the decoder was created with into an image
    ///
    /// # Errors
    ///  - Any image decoding errors will be propagated to the caller.
    ///
    /// # Example
    /// ```
    /// use pnm_image::traits::DecoderTrait;
    /// use pnm_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n1 2 3\n");
    ///
    /// let image = decoder.decode_image().unwrap();
    /// assert_eq!(image.dimensions(), (1, 1));
    /// ```
    fn decode_image(&mut self) -> Result<Image, ImageErrors>;

    /// Get width and height of the image
    ///
    /// # Returns
    /// - Some(width,height)
    /// - None -> If image hasn't been decoded and we can't extract
    ///  the width and height.
    fn get_dimensions(&self) -> Option<(usize, usize)>;

    /// Get the name of the decoder
    fn get_name(&self) -> &'static str;
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn get_name(&self) -> &'static str;

    /// Encode `image` into `sink`
    ///
    /// # Returns
    /// The number of bytes written
    fn encode<T: ByteSinkTrait>(&mut self, image: &Image, sink: T) -> Result<usize, ImageErrors>;
}

/// This encapsulates an image operation.
///
/// Every raster operation implements this trait so they
/// can be chained and executed uniformly
pub trait OperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Execute the operation, manipulating the image in place
    ///
    /// This is what implementors provide, callers should use
    /// [`execute`](Self::execute) instead.
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute a simple operation on the image
    /// manipulating the image struct
    ///
    /// # Arguments
    /// - image: A mutable reference to an image which
    /// this operation will manipulate
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller,
    /// operations validate their arguments before touching pixels
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let start = std::time::Instant::now();
        trace!("Running {}", self.get_name());

        self.execute_impl(image)?;

        trace!(
            "Finished running `{}` in {} ms",
            self.get_name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }

    /// Run the operation on a copy of the image, leaving the
    /// original untouched
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut new_img = image.clone();
        self.execute(&mut new_img)?;

        Ok(new_img)
    }
}
