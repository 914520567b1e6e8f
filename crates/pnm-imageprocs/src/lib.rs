/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raster routines for `pnm-image`
//!
//! This implements drawing primitives, fractal generators, procedural
//! noise, resampling and whole image transforms.
//!
//! Every routine is exposed twice, as a free function working on an
//! [`Image`](pnm_image::image::Image) and as an operation implementing
//! the `OperationsTrait` defined by pnm-image.
//!
//! # Example
//! - Draw a red line and mirror the image
//! ```
//! use pnm_image::color::{Point, Rgb};
//! use pnm_image::image::Image;
//! use pnm_image::traits::OperationsTrait;
//! use pnm_imageprocs::draw::{Draw, Shape};
//! use pnm_imageprocs::flop::Flop;
//!
//! let mut image = Image::new(10, 10).unwrap();
//! let line = Shape::Line(Point::new(0, 0), Point::new(9, 0));
//!
//! Draw::new(line, Rgb::new(255, 0, 0)).execute(&mut image).unwrap();
//! Flop::new().execute(&mut image).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod draw;
pub mod flip;
pub mod flop;
pub mod fractal;
pub mod invert;
pub mod noise;
pub mod rescale;
pub mod resize;
pub mod rotate;
