/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pnm_benches::sample_image;
use pnm_image::color::{Point, Rgb};
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;
use pnm_imageprocs::draw::{Draw, Shape};
use pnm_imageprocs::fractal::{KochSnowflake, SierpinskiTriangle};
use pnm_imageprocs::noise::PerlinNoise;
use pnm_imageprocs::resize::Resize;
use pnm_imageprocs::rotate::Rotate90;

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

fn bench_draw(c: &mut Criterion) {
    let image = Image::new(800, 800).unwrap();
    let mut group = c.benchmark_group("raster: draw 800x800");

    group.bench_function("filled circle r=350", |b| {
        let op = Draw::new(
            Shape::FilledCircle {
                center: Point::new(400, 400),
                radius: 350
            },
            RED
        );
        b.iter(|| black_box(op.clone_and_execute(&image).unwrap()))
    });

    group.bench_function("koch snowflake depth=6", |b| {
        let op = KochSnowflake::new(6, Point::new(100, 200), 600, RED);
        b.iter(|| black_box(op.clone_and_execute(&image).unwrap()))
    });

    group.bench_function("sierpinski triangle depth=7", |b| {
        let op = SierpinskiTriangle::new(7, Point::new(100, 100), 600, RED);
        b.iter(|| black_box(op.clone_and_execute(&image).unwrap()))
    });

    group.bench_function("perlin noise", |b| {
        let op = PerlinNoise::new(Rgb::BLACK, Rgb::WHITE);
        b.iter(|| black_box(op.clone_and_execute(&image).unwrap()))
    });
}

fn bench_transform(c: &mut Criterion) {
    let image = sample_image(1024, 768).unwrap();
    let mut group = c.benchmark_group("raster: transform 1024x768");

    group.bench_function("resize to 512x384", |b| {
        let op = Resize::new(512, 384);
        b.iter(|| black_box(op.clone_and_execute(&image).unwrap()))
    });

    group.bench_function("rotate 90", |b| {
        let op = Rotate90::new();
        b.iter(|| black_box(op.clone_and_execute(&image).unwrap()))
    });
}

criterion_group!(benches, bench_draw, bench_transform);
criterion_main!(benches);
