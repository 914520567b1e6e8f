/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Koch snowflakes and Sierpinski triangles
//!
//! Both fractals start from the same base triangle with corners
//! `start`, `start + (size, 0)` and `start + (size / 2, ⌊√3·size/2⌋)`.
//!
//! Subdivision is driven by an explicit work stack, the call stack
//! stays flat for any depth. Depth is capped at [`MAX_FRACTAL_DEPTH`].
use pnm_image::color::{Point, Rgb};
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::draw::{draw_filled_triangle, draw_line};

/// Deepest subdivision accepted by the fractal generators
pub const MAX_FRACTAL_DEPTH: usize = 10;

fn check_depth(depth: usize) -> Result<(), ImageErrors> {
    if depth > MAX_FRACTAL_DEPTH {
        return Err(ImageErrors::InvalidArgument(format!(
            "fractal depth {depth} is larger than the maximum {MAX_FRACTAL_DEPTH}"
        )));
    }
    Ok(())
}

/// Narrow to `isize`, saturating at its bounds
fn saturate(value: i128) -> isize {
    value.clamp(isize::MIN as i128, isize::MAX as i128) as isize
}

/// The corners of the equilateral base triangle
///
/// Corners past the `isize` range saturate.
pub fn base_triangle(start: Point, size: isize) -> [Point; 3] {
    let height = (3.0_f64.sqrt() * size as f64 / 2.0) as isize;

    [
        start,
        Point::new(start.x.saturating_add(size), start.y),
        Point::new(start.x.saturating_add(size / 2), start.y.saturating_add(height))
    ]
}

/// Points one and two thirds along `from -> to` and the apex of the
/// bump between them
fn koch_points(from: Point, to: Point) -> (Point, Point, Point) {
    let (x0, y0) = (from.x as i128, from.y as i128);
    let (dx, dy) = (to.x as i128 - x0, to.y as i128 - y0);

    let first = Point::new(saturate(x0 + dx / 3), saturate(y0 + dy / 3));
    let second = Point::new(saturate(x0 + 2 * dx / 3), saturate(y0 + 2 * dy / 3));

    // (first - second) rotated by 60 degrees around second
    let (sin, cos) = std::f64::consts::FRAC_PI_3.sin_cos();
    let dx = (first.x as i128 - second.x as i128) as f64;
    let dy = (first.y as i128 - second.y as i128) as f64;

    let apex = Point::new(
        saturate((dx * cos - dy * sin) as i128 + second.x as i128),
        saturate((dx * sin + dy * cos) as i128 + second.y as i128)
    );
    (first, apex, second)
}

/// Draw a Koch curve of `depth` between two points
///
/// Depth zero is a straight line.
///
/// # Errors
/// `InvalidArgument` if `depth > MAX_FRACTAL_DEPTH`, nothing is drawn
pub fn draw_koch_curve(
    image: &mut Image, depth: usize, from: Point, to: Point, color: Rgb
) -> Result<(), ImageErrors> {
    check_depth(depth)?;

    let mut stack = vec![(depth, from, to)];

    while let Some((depth, from, to)) = stack.pop() {
        if depth == 0 {
            draw_line(image, from, to, color);
            continue;
        }
        let (first, apex, second) = koch_points(from, to);

        // reversed so segments come off the stack in path order
        stack.push((depth - 1, second, to));
        stack.push((depth - 1, apex, second));
        stack.push((depth - 1, first, apex));
        stack.push((depth - 1, from, first));
    }
    Ok(())
}

/// Draw a Koch snowflake, each edge of the base triangle
/// replaced by a Koch curve of `depth`
///
/// # Errors
/// `InvalidArgument` if `depth > MAX_FRACTAL_DEPTH`, nothing is drawn
pub fn draw_koch_snowflake(
    image: &mut Image, depth: usize, start: Point, size: isize, color: Rgb
) -> Result<(), ImageErrors> {
    check_depth(depth)?;

    let [a, b, c] = base_triangle(start, size);

    draw_koch_curve(image, depth, a, b, color)?;
    draw_koch_curve(image, depth, b, c, color)?;
    draw_koch_curve(image, depth, c, a, color)
}

#[inline]
fn midpoint(a: Point, b: Point) -> Point {
    let half = |p: isize, q: isize| ((p as i128 + q as i128) / 2) as isize;

    Point::new(half(a.x, b.x), half(a.y, b.y))
}

/// Draw a Sierpinski triangle
///
/// Depth zero fills the base triangle, every further level replaces a
/// triangle by its three corner triangles built from the edge midpoints.
///
/// # Errors
/// `InvalidArgument` if `depth > MAX_FRACTAL_DEPTH`, nothing is drawn
pub fn draw_sierpinski_triangle(
    image: &mut Image, depth: usize, start: Point, size: isize, color: Rgb
) -> Result<(), ImageErrors> {
    check_depth(depth)?;

    let [a, b, c] = base_triangle(start, size);
    let mut stack = vec![(depth, a, b, c)];

    while let Some((depth, p1, p2, p3)) = stack.pop() {
        if depth == 0 {
            draw_filled_triangle(image, p1, p2, p3, color);
            continue;
        }
        let mid1 = midpoint(p1, p2);
        let mid2 = midpoint(p2, p3);
        let mid3 = midpoint(p3, p1);

        stack.push((depth - 1, mid1, p1, mid3));
        stack.push((depth - 1, mid2, mid1, p2));
        stack.push((depth - 1, p3, mid2, mid3));
    }
    Ok(())
}

/// Draw a Koch snowflake
#[derive(Copy, Clone, Debug)]
pub struct KochSnowflake {
    depth: usize,
    start: Point,
    size:  isize,
    color: Rgb
}

impl KochSnowflake {
    /// Create a new Koch snowflake operation
    ///
    /// # Arguments
    /// - depth: Subdivision depth, at most [`MAX_FRACTAL_DEPTH`]
    /// - start: First corner of the base triangle
    /// - size: Edge length of the base triangle
    /// - color: Line color
    #[must_use]
    pub fn new(depth: usize, start: Point, size: isize, color: Rgb) -> KochSnowflake {
        KochSnowflake {
            depth,
            start,
            size,
            color
        }
    }
}

impl OperationsTrait for KochSnowflake {
    fn get_name(&self) -> &'static str {
        "Koch Snowflake"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        draw_koch_snowflake(image, self.depth, self.start, self.size, self.color)
    }
}

/// Draw a Sierpinski triangle
#[derive(Copy, Clone, Debug)]
pub struct SierpinskiTriangle {
    depth: usize,
    start: Point,
    size:  isize,
    color: Rgb
}

impl SierpinskiTriangle {
    /// Create a new Sierpinski triangle operation
    ///
    /// # Arguments
    /// - depth: Subdivision depth, at most [`MAX_FRACTAL_DEPTH`]
    /// - start: First corner of the base triangle
    /// - size: Edge length of the base triangle
    /// - color: Fill color
    #[must_use]
    pub fn new(depth: usize, start: Point, size: isize, color: Rgb) -> SierpinskiTriangle {
        SierpinskiTriangle {
            depth,
            start,
            size,
            color
        }
    }
}

impl OperationsTrait for SierpinskiTriangle {
    fn get_name(&self) -> &'static str {
        "Sierpinski Triangle"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        draw_sierpinski_triangle(image, self.depth, self.start, self.size, self.color)
    }
}

#[cfg(test)]
mod tests {
    use pnm_image::color::Point;

    use crate::fractal::{base_triangle, koch_points};

    #[test]
    fn base_triangle_corners() {
        let [a, b, c] = base_triangle(Point::new(10, 5), 100);

        assert_eq!(a, Point::new(10, 5));
        assert_eq!(b, Point::new(110, 5));
        // sqrt(3) * 50 = 86.6
        assert_eq!(c, Point::new(60, 91));
    }

    #[test]
    fn koch_bump_on_horizontal_segment() {
        let (first, apex, second) = koch_points(Point::new(0, 0), Point::new(90, 0));

        assert_eq!(first, Point::new(30, 0));
        assert_eq!(second, Point::new(60, 0));
        // (-30, 0) rotated by 60 degrees is (-15, -25.98)
        assert_eq!(apex, Point::new(45, -25));
    }
}
