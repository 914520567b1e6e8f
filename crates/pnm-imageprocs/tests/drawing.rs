/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use pnm_image::color::{Point, Rgb};
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;
use pnm_imageprocs::draw::{
    draw_filled_rectangle, draw_filled_triangle, draw_line, draw_triangle, Draw, Shape
};
use pnm_imageprocs::fractal::{base_triangle, KochSnowflake, SierpinskiTriangle};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

fn colored(image: &Image) -> usize {
    image.pixels().iter().filter(|p| **p != Rgb::BLACK).count()
}

#[test]
fn line_to_itself_plots_one_pixel() {
    let mut image = Image::new(5, 5).unwrap();
    draw_line(&mut image, Point::new(2, 3), Point::new(2, 3), RED);

    assert_eq!(colored(&image), 1);
    assert_eq!(image.get_pixel(2, 3).unwrap(), RED);
}

#[test]
fn lines_outside_canvas_are_clipped() {
    let mut image = Image::new(5, 5).unwrap();
    draw_line(&mut image, Point::new(-10, 2), Point::new(20, 2), RED);

    assert_eq!(colored(&image), 5);
    assert!(image.rows().nth(2).unwrap().iter().all(|p| *p == RED));
}

#[test]
fn filled_rectangle_is_clipped_to_canvas() {
    let mut image = Image::new(10, 10).unwrap();
    draw_filled_rectangle(&mut image, Point::new(-3, -3), 6, 6, RED);

    for y in 0..10 {
        for x in 0..10 {
            let expected = if x < 3 && y < 3 { RED } else { Rgb::BLACK };
            assert_eq!(image.get_pixel(x, y).unwrap(), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn rectangle_fully_outside_draws_nothing() {
    let mut image = Image::new(10, 10).unwrap();
    let shape = Shape::FilledRectangle {
        origin: Point::new(20, 20),
        width:  5,
        height: 5
    };
    Draw::new(shape, RED).execute(&mut image).unwrap();

    assert_eq!(colored(&image), 0);
}

#[test]
fn draw_operation_matches_free_function() {
    let mut rand = nanorand::WyRand::new_seed(42);

    for _ in 0..20 {
        let mut coordinate = || rand.generate_range(0_u32..80) as isize - 20;
        let from = Point::new(coordinate(), coordinate());
        let to = Point::new(coordinate(), coordinate());

        let mut expected = Image::new(40, 40).unwrap();
        draw_line(&mut expected, from, to, RED);

        let actual = Draw::new(Shape::Line(from, to), RED)
            .clone_and_execute(&Image::new(40, 40).unwrap())
            .unwrap();

        assert_eq!(actual, expected);
    }
}

#[test]
fn koch_depth_zero_is_base_triangle() {
    let start = Point::new(10, 5);
    let [a, b, c] = base_triangle(start, 100);

    let mut expected = Image::new(120, 120).unwrap();
    draw_triangle(&mut expected, a, b, c, RED);

    let mut image = Image::new(120, 120).unwrap();
    KochSnowflake::new(0, start, 100, RED)
        .execute(&mut image)
        .unwrap();

    assert_eq!(image, expected);
}

#[test]
fn sierpinski_depth_zero_is_filled_base_triangle() {
    let start = Point::new(0, 0);
    let [a, b, c] = base_triangle(start, 64);

    let mut expected = Image::new(70, 70).unwrap();
    draw_filled_triangle(&mut expected, a, b, c, RED);

    let mut image = Image::new(70, 70).unwrap();
    SierpinskiTriangle::new(0, start, 64, RED)
        .execute(&mut image)
        .unwrap();

    assert_eq!(image, expected);
}

#[test]
fn deeper_sierpinski_paints_less() {
    let start = Point::new(0, 0);
    let shallow = SierpinskiTriangle::new(0, start, 64, RED)
        .clone_and_execute(&Image::new(70, 70).unwrap())
        .unwrap();
    let deep = SierpinskiTriangle::new(4, start, 64, RED)
        .clone_and_execute(&Image::new(70, 70).unwrap())
        .unwrap();

    assert!(colored(&deep) > 0);
    assert!(colored(&deep) < colored(&shallow));
}

#[test]
fn fractal_depth_above_limit_is_rejected() {
    let mut image = Image::new(50, 50).unwrap();

    let koch = KochSnowflake::new(11, Point::new(0, 0), 40, RED).execute(&mut image);
    assert!(matches!(koch, Err(ImageErrors::InvalidArgument(_))));

    let sierpinski = SierpinskiTriangle::new(11, Point::new(0, 0), 40, RED).execute(&mut image);
    assert!(matches!(sierpinski, Err(ImageErrors::InvalidArgument(_))));

    assert_eq!(colored(&image), 0);
}

#[test]
fn filled_circle_is_symmetric() {
    let mut image = Image::new(21, 21).unwrap();
    let shape = Shape::FilledCircle {
        center: Point::new(10, 10),
        radius: 6
    };
    Draw::new(shape, RED).execute(&mut image).unwrap();

    for y in 0..21 {
        for x in 0..21 {
            assert_eq!(
                image.get_pixel(x, y).unwrap(),
                image.get_pixel(20 - x, y).unwrap()
            );
        }
    }
    assert_eq!(image.get_pixel(10, 10).unwrap(), RED);
    assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb::BLACK);
}

#[test]
fn extreme_coordinates_are_clipped() {
    let (min, max) = (isize::MIN, isize::MAX);
    let mut image = Image::new(6, 6).unwrap();

    let shapes = [
        Shape::Line(Point::new(min, 3), Point::new(max, 3)),
        Shape::Rectangle {
            origin: Point::new(max - 1, max - 1),
            width:  max,
            height: max
        },
        Shape::FilledRectangle {
            origin: Point::new(max, max),
            width:  max,
            height: max
        },
        Shape::Triangle(Point::new(min, min), Point::new(max, min), Point::new(0, max)),
        Shape::Polygon(vec![Point::new(min, max), Point::new(max, min), Point::new(max, max)]),
        Shape::FilledPolygonEvenOdd(vec![Point::new(min, 0), Point::new(max, 0), Point::new(0, max)]),
        Shape::Circle {
            center: Point::new(max, min),
            radius: max
        }
    ];
    for shape in shapes {
        Draw::new(shape, RED).execute(&mut image).unwrap();
    }
    // the horizontal line crosses the canvas on row 3
    assert!(image.rows().nth(3).unwrap().iter().all(|p| *p == RED));

    KochSnowflake::new(3, Point::new(max - 10, min), max, RED)
        .execute(&mut image)
        .unwrap();
    SierpinskiTriangle::new(3, Point::new(min, min), max, RED)
        .execute(&mut image)
        .unwrap();
}
