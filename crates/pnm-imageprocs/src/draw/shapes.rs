/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Outlined shapes built from lines
use pnm_image::color::{Point, Rgb};
use pnm_image::image::Image;

use crate::draw::line::draw_line;

/// Draw the outline of a triangle
pub fn draw_triangle(image: &mut Image, a: Point, b: Point, c: Point, color: Rgb) {
    draw_line(image, a, b, color);
    draw_line(image, b, c, color);
    draw_line(image, c, a, color);
}

/// Draw the outline of a rectangle with a corner at `origin`
///
/// The corners are `origin`, `origin + (width, 0)`, `origin + (width, height)`
/// and `origin + (0, height)`, so the outline spans `width + 1` columns.
/// Corners past the `isize` range saturate.
pub fn draw_rectangle(image: &mut Image, origin: Point, width: isize, height: isize, color: Rgb) {
    let right = origin.x.saturating_add(width);
    let bottom = origin.y.saturating_add(height);

    let top_right = Point::new(right, origin.y);
    let bottom_left = Point::new(origin.x, bottom);
    let bottom_right = Point::new(right, bottom);

    draw_line(image, origin, top_right, color);
    draw_line(image, top_right, bottom_right, color);
    draw_line(image, bottom_right, bottom_left, color);
    draw_line(image, bottom_left, origin, color);
}

/// Draw a closed polygon, joining the last point back to the first
///
/// Nothing is drawn for an empty slice, a single point plots one pixel.
pub fn draw_polygon(image: &mut Image, points: &[Point], color: Rgb) {
    for pair in points.windows(2) {
        draw_line(image, pair[0], pair[1], color);
    }
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        draw_line(image, *last, *first, color);
    }
}
