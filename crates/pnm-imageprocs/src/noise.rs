/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Two color value noise
//!
//! Each pixel is mapped to a lattice cell by scaling its coordinates
//! with a frequency, the cell is hashed with an integer bit mixer and
//! the hash selects a blend between two colors. The result is fully
//! deterministic.
use pnm_image::color::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Lattice frequency used when none is configured
pub const DEFAULT_FREQUENCY: f64 = 0.02;

/// Hash a lattice cell to a value in `(-0.5, 0.5]`
pub fn lattice_value(ix: i64, iy: i64) -> f64 {
    let mut n = ix.wrapping_add(iy.wrapping_mul(57));
    n = (n << 13) ^ n;

    let mixed = n
        .wrapping_mul(
            n.wrapping_mul(n)
                .wrapping_mul(15731)
                .wrapping_add(789_221)
        )
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;

    1.0 - (mixed as f64 / 1_073_741_824.0 + 1.0) / 2.0
}

/// Blend weight in `(0.25, 0.75]` for pixel `(x, y)`
#[inline]
pub fn blend_weight(x: usize, y: usize, frequency: f64) -> f64 {
    let ix = (x as f64 * frequency) as i64;
    let iy = (y as f64 * frequency) as i64;

    (lattice_value(ix, iy) + 1.0) / 2.0
}

#[inline]
fn blend(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8;

    Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
}

/// Paint every pixel with a noise driven blend of `from` and `to`
pub fn draw_noise(image: &mut Image, from: Rgb, to: Rgb, frequency: f64) {
    for (y, row) in image.rows_mut().enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = blend(from, to, blend_weight(x, y, frequency));
        }
    }
}

/// Fill an image with two color value noise
#[derive(Copy, Clone, Debug)]
pub struct PerlinNoise {
    from:      Rgb,
    to:        Rgb,
    frequency: f64
}

impl PerlinNoise {
    /// Create a new noise operation blending between two colors
    /// at the default frequency
    #[must_use]
    pub fn new(from: Rgb, to: Rgb) -> PerlinNoise {
        PerlinNoise {
            from,
            to,
            frequency: DEFAULT_FREQUENCY
        }
    }

    /// Set the lattice frequency, larger values give smaller cells
    #[must_use]
    pub fn set_frequency(mut self, frequency: f64) -> PerlinNoise {
        self.frequency = frequency;
        self
    }
}

impl OperationsTrait for PerlinNoise {
    fn get_name(&self) -> &'static str {
        "Perlin Noise"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !self.frequency.is_finite() {
            return Err(ImageErrors::InvalidArgument(format!(
                "noise frequency must be finite, found {}",
                self.frequency
            )));
        }
        draw_noise(image, self.from, self.to, self.frequency);

        Ok(())
    }
}
