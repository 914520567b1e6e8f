/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pnm_benches::{sample_bytes, sample_image};
use pnm_core::variant::EncodingVariant;
use pnm_ppm::PPMDecoder;

fn decode_ppm(buf: &[u8]) -> Vec<u8> {
    PPMDecoder::new(buf).decode().unwrap()
}

fn bench_decode(c: &mut Criterion) {
    for variant in [EncodingVariant::Binary, EncodingVariant::Textual] {
        let data = sample_bytes(1024, 768, variant).unwrap();
        let mut group = c.benchmark_group(format!("ppm: decode 1024x768 ({variant})"));

        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_function("pnm-ppm", |b| {
            b.iter(|| black_box(decode_ppm(data.as_slice())))
        });
    }
}

fn bench_encode(c: &mut Criterion) {
    for variant in [EncodingVariant::Binary, EncodingVariant::Textual] {
        let mut image = sample_image(1024, 768).unwrap();
        image.set_variant(variant);

        let mut group = c.benchmark_group(format!("ppm: encode 1024x768 ({variant})"));

        group.throughput(Throughput::Bytes(image.as_bytes().len() as u64));

        group.bench_function("pnm-image", |b| b.iter(|| black_box(image.encode().unwrap())));
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_decode, bench_encode);

criterion_main!(benches);
