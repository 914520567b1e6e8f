/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flop: Mirror every row around the central vertical axis
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Creates a horizontal mirror image by reflecting the pixels around
/// the central vertical axis
///
///```text
///old image     new image
/// a b c d e    e d c b a
/// f g h i j    j i h g f
///```
///
/// Named after ImageMagick's `-flop`. Some libraries call this mirror
/// "flip"; the top-bottom reversal is [`Flip`](crate::flip::Flip) here.
#[derive(Default, Copy, Clone, Debug)]
pub struct Flop;

impl Flop {
    /// Create a new flop operation
    #[must_use]
    pub fn new() -> Flop {
        Self
    }
}

impl OperationsTrait for Flop {
    fn get_name(&self) -> &'static str {
        "Flop"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let width = image.width();
        flop(image.pixels_mut(), width);

        Ok(())
    }
}

/// Mirror each `width` long row of `in_out_image` in place
///
/// A trailing partial row is left untouched.
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    for row in in_out_image.chunks_exact_mut(width) {
        let (left, right) = row.split_at_mut(width / 2);

        for (l, r) in left.iter_mut().zip(right.iter_mut().rev()) {
            core::mem::swap(l, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::flop::flop;

    #[test]
    fn flop_odd_width() {
        let mut data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        flop(&mut data, 5);
        assert_eq!(data, [5, 4, 3, 2, 1, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn flop_twice_is_identity() {
        let original = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut data = original;

        flop(&mut data, 4);
        assert_ne!(data, original);
        flop(&mut data, 4);
        assert_eq!(data, original);
    }
}
