/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip: Reverse the order of rows
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Creates a vertical mirror image by reflecting the pixels around
/// the central horizontal axis
///
///```text
///old image     new image
/// a b c d e    k l m n o
/// f g h i j    f g h i j
/// k l m n o    a b c d e
///```
///
/// Named after ImageMagick's `-flip`. Some libraries use "flip" for
/// the left-right mirror instead; that operation is [`Flop`](crate::flop::Flop) here.
#[derive(Default, Copy, Clone, Debug)]
pub struct Flip;

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new() -> Flip {
        Self
    }
}

impl OperationsTrait for Flip {
    fn get_name(&self) -> &'static str {
        "Flip"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let width = image.width();
        flip(image.pixels_mut(), width);

        Ok(())
    }
}

/// Swap row `i` with row `height - 1 - i` in place
///
/// `in_out_image.len()` should be a multiple of `width`
pub fn flip<T: Copy>(in_out_image: &mut [T], width: usize) {
    let height = in_out_image.len() / width;
    let (top, bottom) = in_out_image.split_at_mut((height / 2) * width);
    // skip the middle row of odd heights
    let bottom_start = bottom.len() - (height / 2) * width;

    for (top_row, bottom_row) in top
        .chunks_exact_mut(width)
        .zip(bottom[bottom_start..].chunks_exact_mut(width).rev())
    {
        top_row.swap_with_slice(bottom_row);
    }
}

#[cfg(test)]
mod tests {
    use crate::flip::flip;

    #[test]
    fn flip_odd_height() {
        let mut data = [1, 2, 3, 4, 5, 6];
        flip(&mut data, 2);
        assert_eq!(data, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn flip_even_height() {
        let mut data = [1, 2, 3, 4, 5, 6, 7, 8];
        flip(&mut data, 2);
        assert_eq!(data, [7, 8, 5, 6, 3, 4, 1, 2]);
    }
}
