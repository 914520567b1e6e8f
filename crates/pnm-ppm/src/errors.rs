/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use pnm_core::bytestream::ByteIoError;
use pnm_core::variant::EncodingVariant;

/// Errors possible during decoding
pub enum PPMDecodeErrors {
    /// The first token isn't `P3` or `P6`
    InvalidMagic(String),
    /// The stream ended while the header was being read,
    /// carries the header field that was expected
    UnexpectedEof(&'static str),
    /// A header field isn't a valid unsigned decimal integer
    InvalidNumber {
        field: &'static str,
        found: String
    },
    /// Width or height is zero, carries the field
    ZeroDimension(&'static str),
    /// Dimensions larger than the configured maximum,
    /// (expected maximum, found)
    LargeDimensions(usize, usize),
    /// Max value outside `1..=255`
    InvalidMaxValue(usize),
    /// The pixel data ended early
    ///
    /// `expected` and `found` count bytes for binary data
    /// and samples for textual data in the row that was cut short
    TruncatedData {
        row:      usize,
        expected: usize,
        found:    usize,
        variant:  EncodingVariant
    },
    /// A textual sample that isn't a valid unsigned decimal integer
    InvalidSample {
        row:    usize,
        column: usize,
        found:  String
    },
    /// A sample larger than the declared max value
    SampleOutOfRange {
        row:    usize,
        column: usize,
        value:  usize,
        max:    u8
    },
    /// Bytes after the pixel data, only an error in strict mode
    TrailingData(usize),
    IoErrors(ByteIoError)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagic(found) => {
                writeln!(f, "Invalid magic bytes, expected P3 or P6 but found {found:?}")
            }
            Self::UnexpectedEof(field) => {
                writeln!(f, "Unexpected end of stream while reading the {field}")
            }
            Self::InvalidNumber { field, found } => {
                writeln!(f, "Invalid {field}, expected an unsigned integer but found {found:?}")
            }
            Self::ZeroDimension(field) => {
                writeln!(f, "Image {field} is zero")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::InvalidMaxValue(value) => {
                writeln!(f, "Max value {value} outside supported range 1..=255")
            }
            Self::TruncatedData {
                row,
                expected,
                found,
                variant
            } => {
                let unit = if variant.is_binary() { "bytes" } else { "samples" };
                writeln!(
                    f,
                    "Truncated {variant} pixel data at row {row}, expected {expected} {unit} but found {found}"
                )
            }
            Self::InvalidSample { row, column, found } => {
                writeln!(f, "Invalid sample {found:?} at row {row}, column {column}")
            }
            Self::SampleOutOfRange {
                row,
                column,
                value,
                max
            } => {
                writeln!(
                    f,
                    "Sample {value} at row {row}, column {column} is larger than max value {max}"
                )
            }
            Self::TrailingData(count) => {
                writeln!(f, "Found {count} bytes after the pixel data")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl From<ByteIoError> for PPMDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        PPMDecodeErrors::IoErrors(value)
    }
}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    /// Pixel data length doesn't match the options,
    /// (expected, found)
    SizeMismatch(usize, usize),
    /// Width or height is zero
    ZeroDimension(&'static str),
    /// Max value of zero can't be written
    InvalidMaxValue(u8),
    /// A sample larger than the max value in the options
    SampleOutOfRange {
        index: usize,
        value: u8,
        max:   u8
    },
    /// Dimensions whose byte count overflows `usize`
    TooLargeDimensions(usize, usize),
    IoErrors(ByteIoError)
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PPMEncodeErrors::SizeMismatch(expected, found) => {
                writeln!(f, "Expected input of length {expected} but found {found}")
            }
            PPMEncodeErrors::ZeroDimension(field) => {
                writeln!(f, "Image {field} is zero")
            }
            PPMEncodeErrors::InvalidMaxValue(value) => {
                writeln!(f, "Max value {value} outside supported range 1..=255")
            }
            PPMEncodeErrors::SampleOutOfRange { index, value, max } => {
                writeln!(f, "Sample {value} at index {index} is larger than max value {max}")
            }
            PPMEncodeErrors::TooLargeDimensions(width, height) => {
                writeln!(f, "Dimensions {width}x{height} are too large to encode")
            }
            PPMEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {}

impl From<ByteIoError> for PPMEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PPMEncodeErrors::IoErrors(value)
    }
}
