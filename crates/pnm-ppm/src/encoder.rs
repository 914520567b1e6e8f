/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_core::bytestream::ByteSinkTrait;
use pnm_core::log::trace;
use pnm_core::options::EncoderOptions;
use pnm_core::variant::EncodingVariant;

use crate::errors::PPMEncodeErrors;

/// Space reserved for the header on top of the pixel data
const PPM_HEADER_SIZE: usize = 32;

/// A PPM encoder
///
/// # Example
/// ```
/// use pnm_core::options::EncoderOptions;
/// use pnm_core::variant::EncodingVariant;
/// use pnm_ppm::PPMEncoder;
///
/// let pixels = [0, 1, 2];
/// let options = EncoderOptions::new(1, 1, 255, EncodingVariant::Binary);
///
/// let mut out = vec![];
/// let written = PPMEncoder::new(&pixels, options).encode(&mut out).unwrap();
///
/// assert_eq!(written, out.len());
/// assert_eq!(out, b"P6\n1 1\n255\n\x00\x01\x02");
/// ```
pub struct PPMEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> PPMEncoder<'a> {
    /// Create a new encoder which will encode the specified
    /// data whose format is contained in the options.
    ///
    /// Data is interleaved RGB, `width*height*3` bytes.
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PPMEncoder<'a> {
        PPMEncoder { data, options }
    }

    fn validate(&self) -> Result<(), PPMEncodeErrors> {
        let width = self.options.get_width();
        let height = self.options.get_height();
        let max = self.options.get_max_value();

        if width == 0 {
            return Err(PPMEncodeErrors::ZeroDimension("width"));
        }
        if height == 0 {
            return Err(PPMEncodeErrors::ZeroDimension("height"));
        }
        if max == 0 {
            return Err(PPMEncodeErrors::InvalidMaxValue(max));
        }
        let expected = calc_expected_size(self.options)
            .ok_or(PPMEncodeErrors::TooLargeDimensions(width, height))?;
        let found = self.data.len();

        if expected != found {
            return Err(PPMEncodeErrors::SizeMismatch(expected, found));
        }
        if let Some(index) = self.data.iter().position(|x| *x > max) {
            return Err(PPMEncodeErrors::SampleOutOfRange {
                index,
                value: self.data[index],
                max
            });
        }
        Ok(())
    }

    fn encode_headers<T: ByteSinkTrait>(&self, sink: &mut T) -> Result<usize, PPMEncodeErrors> {
        let header = format!(
            "{}\n{} {}\n{}\n",
            self.options.get_variant().magic(),
            self.options.get_width(),
            self.options.get_height(),
            self.options.get_max_value()
        );
        sink.write_all_bytes(header.as_bytes())?;

        Ok(header.len())
    }

    /// Encode into a sink, returning the number of bytes written
    ///
    /// Nothing is written if the data and options disagree.
    pub fn encode<T: ByteSinkTrait>(&self, mut sink: T) -> Result<usize, PPMEncodeErrors> {
        self.validate()?;

        let variant = self.options.get_variant();
        trace!("Encoding {} image", variant);

        // textual samples take up to four bytes each
        let hint = match variant {
            EncodingVariant::Binary => self.data.len(),
            EncodingVariant::Textual => self.data.len().saturating_mul(4)
        };
        sink.reserve_capacity(hint.saturating_add(PPM_HEADER_SIZE))?;

        let mut written = self.encode_headers(&mut sink)?;

        match variant {
            EncodingVariant::Binary => {
                sink.write_all_bytes(self.data)?;
                written += self.data.len();
            }
            EncodingVariant::Textual => {
                let stride = self.options.get_width() * 3;
                let mut line = Vec::with_capacity(stride * 4);

                for row in self.data.chunks_exact(stride) {
                    line.clear();

                    for (pos, sample) in row.iter().enumerate() {
                        if pos != 0 {
                            line.push(b' ');
                        }
                        push_decimal(&mut line, *sample);
                    }
                    line.push(b'\n');

                    sink.write_all_bytes(&line)?;
                    written += line.len();
                }
            }
        }
        sink.flush_bytes()?;

        Ok(written)
    }
}

/// Append the decimal representation of `value` to `out`
fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}

fn calc_expected_size(options: EncoderOptions) -> Option<usize> {
    options
        .get_width()
        .checked_mul(options.get_height())?
        .checked_mul(3)
}

#[cfg(test)]
mod tests {
    use crate::encoder::push_decimal;

    #[test]
    fn decimal_digits() {
        let mut out = vec![];
        for value in [0, 7, 10, 99, 100, 205, 255] {
            push_decimal(&mut out, value);
            out.push(b',');
        }
        assert_eq!(out, b"0,7,10,99,100,205,255,");
    }
}
