/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Drawing primitives
//!
//! All routines write through [`Image::set_pixel`], anything falling
//! outside the canvas is silently skipped. Coordinates are signed so
//! shapes may start or end off canvas.
use pnm_image::color::{Point, Rgb};
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

pub use crate::draw::circle::{draw_circle, draw_filled_circle};
pub use crate::draw::fill::{
    draw_filled_polygon, draw_filled_polygon_even_odd, draw_filled_rectangle, draw_filled_triangle
};
pub use crate::draw::line::draw_line;
pub use crate::draw::shapes::{draw_polygon, draw_rectangle, draw_triangle};

mod circle;
mod fill;
mod line;
mod shapes;

/// A shape that can be drawn on an image
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Line(Point, Point),
    Triangle(Point, Point, Point),
    FilledTriangle(Point, Point, Point),
    /// Outline through `origin`, `origin + (width, 0)`,
    /// `origin + (width, height)` and `origin + (0, height)`
    Rectangle {
        origin: Point,
        width:  isize,
        height: isize
    },
    /// The half open region `[x, x + width) x [y, y + height)`
    FilledRectangle {
        origin: Point,
        width:  isize,
        height: isize
    },
    /// Closed outline, the last point connects back to the first
    Polygon(Vec<Point>),
    /// Outline filled by scanning each row for the fill color
    ///
    /// The fill color must appear on each row only where the polygon
    /// boundary is, see [`draw_filled_polygon`]
    FilledPolygon(Vec<Point>),
    /// Polygon filled with the even-odd rule
    FilledPolygonEvenOdd(Vec<Point>),
    Circle {
        center: Point,
        radius: isize
    },
    FilledCircle {
        center: Point,
        radius: isize
    }
}

/// Draw a shape on the image
///
/// Drawing never fails, shapes partly or wholly outside the
/// canvas are clipped.
#[derive(Clone, Debug)]
pub struct Draw {
    shape: Shape,
    color: Rgb
}

impl Draw {
    /// Create a new draw operation
    #[must_use]
    pub fn new(shape: Shape, color: Rgb) -> Draw {
        Draw { shape, color }
    }
}

impl OperationsTrait for Draw {
    fn get_name(&self) -> &'static str {
        "Draw"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let color = self.color;

        match &self.shape {
            Shape::Line(from, to) => draw_line(image, *from, *to, color),
            Shape::Triangle(a, b, c) => draw_triangle(image, *a, *b, *c, color),
            Shape::FilledTriangle(a, b, c) => draw_filled_triangle(image, *a, *b, *c, color),
            Shape::Rectangle {
                origin,
                width,
                height
            } => draw_rectangle(image, *origin, *width, *height, color),
            Shape::FilledRectangle {
                origin,
                width,
                height
            } => draw_filled_rectangle(image, *origin, *width, *height, color),
            Shape::Polygon(points) => draw_polygon(image, points, color),
            Shape::FilledPolygon(points) => draw_filled_polygon(image, points, color),
            Shape::FilledPolygonEvenOdd(points) => {
                draw_filled_polygon_even_odd(image, points, color);
            }
            Shape::Circle { center, radius } => draw_circle(image, *center, *radius, color),
            Shape::FilledCircle { center, radius } => {
                draw_filled_circle(image, *center, *radius, color);
            }
        }
        Ok(())
    }
}
