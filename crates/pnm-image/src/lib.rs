/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory RGB raster for the netpbm color formats
//!
//! This ties up the codec in `pnm-ppm` with a pixel buffer that
//! raster operations in `pnm-imageprocs` manipulate in place.
//!
//! # Example
//! ```
//! use pnm_image::color::Rgb;
//! use pnm_image::image::Image;
//!
//! let mut image = Image::new(4, 3).unwrap();
//! image.set_pixel(1, 2, Rgb::new(255, 0, 0));
//! // writes outside the canvas are ignored
//! image.set_pixel(-1, 40, Rgb::new(255, 0, 0));
//!
//! let encoded = image.encode().unwrap();
//! let decoded = Image::decode(&encoded).unwrap();
//!
//! assert_eq!(decoded, image);
//! ```
//!
//! ## Features
//! - `log`: Forward logging to the `log` crate, enabled by default
//! - `serde-support`: Serialize image metadata via `serde`
#![allow(clippy::redundant_field_names, clippy::uninlined_format_args)]

pub mod codecs;
pub mod color;
pub mod conversions;
pub mod errors;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;
