/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel and coordinate types
use bytemuck::{Pod, Zeroable};

/// An RGB pixel, one byte per channel
///
/// The layout matches the interleaved bytes of a decoded image so that
/// a pixel slice can be viewed as raw bytes without copying.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Channels as an array in `r`, `g`, `b` order
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `func` to every channel
    #[must_use]
    pub fn map<F: Fn(u8) -> u8>(self, func: F) -> Rgb {
        Rgb::new(func(self.r), func(self.g), func(self.b))
    }

    /// The largest of the three channels
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

/// A point on the canvas
///
/// Coordinates are signed and not bounds checked, shapes may
/// extend past any edge of the image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Point::new(x, y)
    }
}
