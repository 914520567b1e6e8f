/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use core::fmt::{Debug, Display, Formatter};

use pnm_core::bytestream::ByteIoError;
use pnm_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding,processing and encoding errors possible
pub enum ImageErrors {
    /// The input couldn't be decoded
    FormatError(PPMDecodeErrors),
    /// The image couldn't be encoded
    EncodeError(PPMEncodeErrors),
    /// A pixel read outside the canvas
    IndexError {
        x:      isize,
        y:      isize,
        width:  usize,
        height: usize
    },
    /// An operation was configured with values it can't work with
    InvalidArgument(String),
    /// Pixel count doesn't match dimensions, (expected, found)
    DimensionsMisMatch(usize, usize),
    IoError(ByteIoError)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FormatError(ref error) => {
                writeln!(f, "Decoding failed: {:?}", error)
            }
            Self::EncodeError(ref error) => {
                writeln!(f, "Encoding failed: {:?}", error)
            }
            Self::IndexError {
                x,
                y,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Pixel ({}, {}) is outside the {}x{} canvas",
                    x, y, width, height
                )
            }
            Self::InvalidArgument(reason) => {
                writeln!(f, "Invalid argument: {}", reason)
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {} but found {}",
                    expected, found
                )
            }
            Self::IoError(ref error) => {
                writeln!(f, "{:?}", error)
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<PPMDecodeErrors> for ImageErrors {
    fn from(from: PPMDecodeErrors) -> Self {
        ImageErrors::FormatError(from)
    }
}

impl From<PPMEncodeErrors> for ImageErrors {
    fn from(from: PPMEncodeErrors) -> Self {
        ImageErrors::EncodeError(from)
    }
}

impl From<ByteIoError> for ImageErrors {
    fn from(from: ByteIoError) -> Self {
        ImageErrors::IoError(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoError(ByteIoError::from(from))
    }
}
