/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_core::bytestream::ByteReader;
use pnm_core::log::{info, warn};
use pnm_core::options::DecoderOptions;
use pnm_core::variant::EncodingVariant;

use crate::errors::PPMDecodeErrors;

/// An instance of a PPM decoder
///
/// The decoder can decode P3 and P6 formats
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       u8,
    variant:         EncodingVariant,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pnm_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use pnm_core::options::DecoderOptions;
    /// use pnm_ppm::PPMDecoder;
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P6\n2 1\n255\n\0\0\0\0\0\0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            variant: EncodingVariant::Binary,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// After this returns the reader sits on the first byte of pixel data.
    pub fn decode_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        self.variant = self.read_magic()?;

        let width = self.read_header_integer("width")?;
        if width == 0 {
            return Err(PPMDecodeErrors::ZeroDimension("width"));
        }
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }

        let height = self.read_header_integer("height")?;
        if height == 0 {
            return Err(PPMDecodeErrors::ZeroDimension("height"));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        let max_value = self.read_header_integer("max value")?;
        if !(1..=255).contains(&max_value) {
            return Err(PPMDecodeErrors::InvalidMaxValue(max_value));
        }
        // a single whitespace byte separates the header from the data,
        // binary pixels may themselves look like whitespace
        match self.reader.peek_u8() {
            Some(byte) if byte.is_ascii_whitespace() => self.reader.skip(1),
            Some(byte) => {
                return Err(PPMDecodeErrors::InvalidNumber {
                    field: "max value",
                    found: format!("{max_value}{}", byte as char)
                });
            }
            None => {}
        }

        self.width = width;
        self.height = height;
        self.max_value = max_value as u8;

        info!("Variant: {}", self.variant);
        info!("Width: {}, height: {}", self.width, self.height);
        info!("Max value: {}", self.max_value);

        self.decoded_headers = true;

        Ok(())
    }

    fn read_magic(&mut self) -> Result<EncodingVariant, PPMDecodeErrors> {
        if self.reader.is_empty() {
            return Err(PPMDecodeErrors::UnexpectedEof("magic"));
        }
        let magic = get_token(&mut self.reader);

        EncodingVariant::from_magic(magic)
            .ok_or_else(|| PPMDecodeErrors::InvalidMagic(String::from_utf8_lossy(magic).into()))
    }

    /// Read a header integer, skipping comments and whitespace before it
    fn read_header_integer(&mut self, field: &'static str) -> Result<usize, PPMDecodeErrors> {
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            return Err(PPMDecodeErrors::UnexpectedEof(field));
        }
        let token = get_token(&mut self.reader);

        parse_integer(token).ok_or_else(|| PPMDecodeErrors::InvalidNumber {
            field,
            found: String::from_utf8_lossy(token).into()
        })
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared max value or none if headers aren't decoded
    pub const fn get_max_value(&self) -> Option<u8> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Return the encoding variant or none if headers aren't decoded
    pub const fn get_variant(&self) -> Option<EncodingVariant> {
        if self.decoded_headers {
            Some(self.variant)
        } else {
            None
        }
    }

    /// Return the number of bytes required to hold a decoded image frame
    /// decoded using the given input transformations
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image was not decoded.
    pub fn output_buf_size(&self) -> Option<usize> {
        if !self.decoded_headers {
            return None;
        }
        self.width.checked_mul(self.height)?.checked_mul(3)
    }

    /// Decode a ppm encoded file and return the interleaved RGB bytes from it
    ///
    /// Nothing is returned on failure, a truncated image never
    /// produces a partial buffer.
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .output_buf_size()
            .ok_or(PPMDecodeErrors::LargeDimensions(usize::MAX, self.width))?;

        if self.variant == EncodingVariant::Binary {
            // report truncation before reserving the output
            self.check_binary_length(size)?;
        }
        let mut pixels = vec![0_u8; size];

        match self.variant {
            EncodingVariant::Binary => self.decode_binary(&mut pixels)?,
            EncodingVariant::Textual => self.decode_textual(&mut pixels)?
        }
        self.check_trailing()?;

        Ok(pixels)
    }

    fn check_binary_length(&self, size: usize) -> Result<(), PPMDecodeErrors> {
        let stride = self.width * 3;
        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(PPMDecodeErrors::TruncatedData {
                row:      remaining / stride,
                expected: stride,
                found:    remaining % stride,
                variant:  EncodingVariant::Binary
            });
        }
        Ok(())
    }

    fn decode_binary(&mut self, pixels: &mut [u8]) -> Result<(), PPMDecodeErrors> {
        let stride = self.width * 3;

        pixels.copy_from_slice(self.reader.get_as_ref(pixels.len())?);

        let max = self.max_value;

        if max != u8::MAX {
            for (row, row_bytes) in pixels.chunks_exact(stride).enumerate() {
                if let Some(pos) = row_bytes.iter().position(|x| *x > max) {
                    return Err(PPMDecodeErrors::SampleOutOfRange {
                        row,
                        column: pos / 3,
                        value: usize::from(row_bytes[pos]),
                        max
                    });
                }
            }
        }
        Ok(())
    }

    fn decode_textual(&mut self, pixels: &mut [u8]) -> Result<(), PPMDecodeErrors> {
        let stride = self.width * 3;
        let max = self.max_value;

        for (row, row_samples) in pixels.chunks_exact_mut(stride).enumerate() {
            for (found, sample) in row_samples.iter_mut().enumerate() {
                self.reader.skip_until_false(|x| x.is_ascii_whitespace());

                if self.reader.eof() {
                    return Err(PPMDecodeErrors::TruncatedData {
                        row,
                        expected: stride,
                        found,
                        variant: EncodingVariant::Textual
                    });
                }
                let token = get_token(&mut self.reader);
                let column = found / 3;

                let value = parse_integer(token).ok_or_else(|| PPMDecodeErrors::InvalidSample {
                    row,
                    column,
                    found: String::from_utf8_lossy(token).into()
                })?;

                if value > usize::from(max) {
                    return Err(PPMDecodeErrors::SampleOutOfRange {
                        row,
                        column,
                        value,
                        max
                    });
                }
                *sample = value as u8;
            }
        }
        // whitespace after the last sample isn't extra data
        self.reader.skip_until_false(|x| x.is_ascii_whitespace());

        Ok(())
    }

    fn check_trailing(&mut self) -> Result<(), PPMDecodeErrors> {
        let extra = self.reader.remaining();

        if extra > 0 {
            if self.options.get_strict_mode() {
                return Err(PPMDecodeErrors::TrailingData(extra));
            }
            warn!("Ignoring {} bytes after the pixel data", extra);
        }
        Ok(())
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(reader: &mut ByteReader) {
    while let Some(byte) = reader.peek_u8() {
        if byte == b'#' {
            // skip the whole comment
            reader.skip_until_false(|x| x != b'\n');
        } else if byte.is_ascii_whitespace() {
            reader.skip(1);
        } else {
            break;
        }
    }
}

/// Return a reference to all bytes preceding a whitespace or a comment.
///
/// The terminating byte isn't consumed.
fn get_token<'a>(reader: &mut ByteReader<'a>) -> &'a [u8] {
    let start = reader.position();

    reader.skip_until_false(|x| !x.is_ascii_whitespace() && x != b'#');

    let end = reader.position();
    reader.rewind(end - start);
    // can't fail, the bytes were just walked over
    reader.get_as_ref(end - start).unwrap_or(&[])
}

/// Parse a non-empty run of ascii digits
///
/// Returns `None` on any other byte or on overflow.
fn parse_integer(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0_usize, |acc, byte| {
        if byte.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(usize::from(byte - b'0'))
        } else {
            None
        }
    })
}
