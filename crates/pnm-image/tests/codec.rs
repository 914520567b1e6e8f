/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufReader, BufWriter, Cursor};

use nanorand::Rng;
use pnm_core::options::DecoderOptions;
use pnm_core::variant::EncodingVariant;
use pnm_image::codecs::ppm::PPMImageEncoder;
use pnm_image::color::Rgb;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::{EncoderTrait, OperationsTrait};
use pnm_ppm::PPMDecodeErrors;

fn random_image(width: usize, height: usize, max: u8, variant: EncodingVariant) -> Image {
    let mut rand = nanorand::WyRand::new_seed(width as u64 * 31 + height as u64);
    let pixels = (0..width * height)
        .map(|_| {
            Rgb::new(
                rand.generate_range(0..=max),
                rand.generate_range(0..=max),
                rand.generate_range(0..=max)
            )
        })
        .collect();

    let mut image = Image::from_pixels(pixels, width, height).unwrap();
    image.set_max_value(max).unwrap();
    image.set_variant(variant);
    image
}

#[test]
fn round_trip_both_variants() {
    for variant in [EncodingVariant::Textual, EncodingVariant::Binary] {
        for (width, height, max) in [(1, 1, 1), (13, 4, 255), (7, 9, 99)] {
            let image = random_image(width, height, max, variant);
            let decoded = Image::decode(&image.encode().unwrap()).unwrap();

            assert_eq!(decoded, image);
        }
    }
}

#[test]
fn decode_two_by_two_binary() {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);

    let image = Image::decode(&data).unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb::new(255, 0, 0));
    assert_eq!(image.get_pixel(1, 0).unwrap(), Rgb::new(0, 255, 0));
    assert_eq!(image.get_pixel(0, 1).unwrap(), Rgb::new(0, 0, 255));
    assert_eq!(image.get_pixel(1, 1).unwrap(), Rgb::WHITE);
}

#[test]
fn truncated_binary_is_a_format_error() {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[0; 11]);

    let err = Image::decode(&data).unwrap_err();

    assert!(matches!(
        err,
        ImageErrors::FormatError(PPMDecodeErrors::TruncatedData { row: 1, .. })
    ));
}

#[test]
fn read_from_std_sources() {
    let image = random_image(5, 3, 255, EncodingVariant::Textual);
    let encoded = image.encode().unwrap();

    let from_cursor = Image::read(Cursor::new(encoded.clone()), DecoderOptions::default()).unwrap();
    let from_reader =
        Image::read(BufReader::new(encoded.as_slice()), DecoderOptions::default()).unwrap();
    let from_slice = Image::read(encoded.as_slice(), DecoderOptions::default()).unwrap();

    assert_eq!(from_cursor, image);
    assert_eq!(from_reader, image);
    assert_eq!(from_slice, image);
}

#[test]
fn write_to_buffered_writer() {
    let image = random_image(4, 4, 200, EncodingVariant::Binary);

    let mut out = vec![];
    {
        let writer = BufWriter::new(&mut out);
        image.write(writer).unwrap();
    }
    assert_eq!(out, image.encode().unwrap());
}

#[test]
fn encoder_variant_override() {
    let image = Image::fill(Rgb::new(1, 2, 3), 1, 1).unwrap();
    let mut out = vec![];

    PPMImageEncoder::new_with_variant(EncodingVariant::Textual)
        .encode(&image, &mut out)
        .unwrap();

    assert_eq!(out, b"P3\n1 1\n255\n1 2 3\n");
}

#[test]
fn from_u8_checks_length() {
    assert!(matches!(
        Image::from_u8(&[0; 7], 1, 2),
        Err(ImageErrors::DimensionsMisMatch(6, 7))
    ));
}

struct Paint(Rgb);

impl OperationsTrait for Paint {
    fn get_name(&self) -> &'static str {
        "Paint"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        image.pixels_mut().fill(self.0);
        Ok(())
    }
}

#[test]
fn clone_and_execute_leaves_source() {
    let image = Image::new(2, 2).unwrap();
    let painted = Paint(Rgb::WHITE).clone_and_execute(&image).unwrap();

    assert!(image.pixels().iter().all(|x| *x == Rgb::BLACK));
    assert!(painted.pixels().iter().all(|x| *x == Rgb::WHITE));
}
