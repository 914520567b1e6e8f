/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filled shapes
use pnm_image::color::{Point, Rgb};
use pnm_image::image::Image;

use crate::draw::shapes::draw_polygon;

/// Fill `x0..=x1` on row `y`, clipped to the canvas
pub(crate) fn fill_span(image: &mut Image, y: isize, x0: isize, x1: isize, color: Rgb) {
    let (width, height) = image.dimensions();

    let Ok(row) = usize::try_from(y) else {
        return;
    };
    if row >= height {
        return;
    }
    let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };

    if x1 < 0 {
        return;
    }
    let start = usize::try_from(x0).unwrap_or(0);
    let end = usize::try_from(x1).map_or(0, |x| x.min(width - 1));

    if start > end {
        return;
    }
    image.pixels_mut()[row * width + start..=row * width + end].fill(color);
}

/// X coordinate where the edge `from -> to` crosses row `y`
///
/// A horizontal edge contributes its start x
///
/// The line through the edge is used, rows outside the edge's own
/// y range extrapolate it.
fn edge_x(from: Point, to: Point, y: isize) -> isize {
    if from.y == to.y {
        return from.x;
    }
    let slope = (to.x as f64 - from.x as f64) / (to.y as f64 - from.y as f64);

    (from.x as f64 + (y as f64 - from.y as f64) * slope) as isize
}

/// Draw a filled triangle
///
/// Vertices are sorted by y. Each row from the top to the bottom vertex
/// is filled between the x of the top to bottom edge and the x of the
/// middle to bottom edge.
///
/// The middle to bottom edge is used for every row, including the ones
/// above the middle vertex where its line is extrapolated. A triangle
/// whose middle vertex sits lower than the top one can therefore spill
/// outside its outline on those rows.
///
/// ```
/// use pnm_image::color::{Point, Rgb};
/// use pnm_image::image::Image;
/// use pnm_imageprocs::draw::draw_filled_triangle;
///
/// let mut image = Image::new(25, 11).unwrap();
/// let (a, b, c) = (Point::new(0, 0), Point::new(10, 5), Point::new(0, 10));
/// draw_filled_triangle(&mut image, a, b, c, Rgb::WHITE);
///
/// // row 0 runs from the long edge at x=0 to the extrapolated x=20
/// let first_row = image.rows().next().unwrap();
/// assert_eq!(first_row.iter().filter(|x| **x == Rgb::WHITE).count(), 21);
/// ```
pub fn draw_filled_triangle(image: &mut Image, a: Point, b: Point, c: Point, color: Rgb) {
    let mut vertices = [a, b, c];
    vertices.sort_by_key(|p| p.y);

    let [top, middle, bottom] = vertices;
    let last_row = image.height() as isize - 1;

    // rows off the canvas paint nothing
    for y in top.y.max(0)..=bottom.y.min(last_row) {
        let long = edge_x(top, bottom, y);
        let short = edge_x(middle, bottom, y);

        fill_span(image, y, long, short, color);
    }
}

/// Fill the half open region `[x, x + width) x [y, y + height)`
///
/// The region is clipped against the canvas, a zero or negative extent
/// fills nothing.
///
/// ```
/// use pnm_image::color::{Point, Rgb};
/// use pnm_image::image::Image;
/// use pnm_imageprocs::draw::draw_filled_rectangle;
///
/// let mut image = Image::new(4, 4).unwrap();
/// draw_filled_rectangle(&mut image, Point::new(2, -1), 10, 2, Rgb::WHITE);
///
/// let lit = image.pixels().iter().filter(|x| **x == Rgb::WHITE).count();
/// assert_eq!(lit, 2);
/// ```
pub fn draw_filled_rectangle(
    image: &mut Image, origin: Point, width: isize, height: isize, color: Rgb
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let canvas_height = image.height() as isize;

    let y_start = origin.y.max(0);
    let y_end = origin.y.saturating_add(height).min(canvas_height);
    let x_end = origin.x.saturating_add(width) - 1;

    for y in y_start..y_end {
        fill_span(image, y, origin.x, x_end, color);
    }
}

/// Draw a filled polygon by scanning rows for the fill color
///
/// The outline is drawn in `color` first, then on every row the pixels
/// strictly between the first and the last pixel of that color are filled.
///
/// The result is only correct when `color` does not already appear on
/// the rows the polygon covers, use [`draw_filled_polygon_even_odd`]
/// when that can't be guaranteed.
pub fn draw_filled_polygon(image: &mut Image, points: &[Point], color: Rgb) {
    draw_polygon(image, points, color);

    for row in image.rows_mut() {
        let first = row.iter().position(|x| *x == color);
        let last = row.iter().rposition(|x| *x == color);

        if let (Some(first), Some(last)) = (first, last) {
            if last > first + 1 {
                row[first + 1..last].fill(color);
            }
        }
    }
}

/// Draw a filled polygon using the even-odd rule
///
/// Every row is sampled at its center against the edge list, spans
/// between alternating crossings are filled and the outline is drawn
/// on top. Existing pixel colors don't influence the result.
pub fn draw_filled_polygon_even_odd(image: &mut Image, points: &[Point], color: Rgb) {
    if points.len() < 3 {
        draw_polygon(image, points, color);
        return;
    }
    let canvas_height = image.height() as isize;

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(canvas_height - 1);

    let mut crossings = Vec::with_capacity(points.len());

    for y in min_y..=max_y {
        crossings.clear();
        let center = y as f64 + 0.5;

        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            let (y0, y1) = (from.y as f64, to.y as f64);

            if (y0 <= center && y1 > center) || (y1 <= center && y0 > center) {
                let x = from.x as f64 + (center - y0) / (y1 - y0) * (to.x as f64 - from.x as f64);
                crossings.push(x.floor() as isize);
            }
        }
        crossings.sort_unstable();

        for pair in crossings.chunks_exact(2) {
            fill_span(image, y, pair[0], pair[1], color);
        }
    }
    draw_polygon(image, points, color);
}

#[cfg(test)]
mod tests {
    use pnm_image::color::{Point, Rgb};
    use pnm_image::image::Image;

    use crate::draw::fill::{
        draw_filled_polygon, draw_filled_polygon_even_odd, draw_filled_triangle, fill_span
    };

    fn count(image: &Image, color: Rgb) -> usize {
        image.pixels().iter().filter(|x| **x == color).count()
    }

    #[test]
    fn span_clipping() {
        let mut image = Image::new(4, 2).unwrap();

        fill_span(&mut image, 1, 10, -10, Rgb::WHITE);
        fill_span(&mut image, 2, 0, 3, Rgb::WHITE);
        fill_span(&mut image, -1, 0, 3, Rgb::WHITE);
        fill_span(&mut image, 0, 4, 7, Rgb::WHITE);
        fill_span(&mut image, 0, -3, -1, Rgb::WHITE);

        assert_eq!(count(&image, Rgb::WHITE), 4);
        assert!(image.rows().nth(1).unwrap().iter().all(|x| *x == Rgb::WHITE));
    }

    #[test]
    fn right_triangle_rows() {
        let mut image = Image::new(5, 5).unwrap();
        draw_filled_triangle(
            &mut image,
            Point::new(0, 0),
            Point::new(0, 4),
            Point::new(4, 4),
            Rgb::WHITE
        );
        // row y spans 0..=y
        for (y, row) in image.rows().enumerate() {
            let lit = row.iter().filter(|x| **x == Rgb::WHITE).count();
            assert_eq!(lit, y + 1);
        }
    }

    #[test]
    fn rows_above_middle_vertex_follow_middle_to_bottom_edge() {
        let mut image = Image::new(25, 11).unwrap();
        draw_filled_triangle(
            &mut image,
            Point::new(0, 0),
            Point::new(10, 5),
            Point::new(0, 10),
            Rgb::WHITE
        );
        // long edge stays on x=0, the middle to bottom edge gives x = 20 - 2y
        for (y, row) in image.rows().enumerate() {
            let expected: Vec<bool> = (0..25).map(|x| x <= 20 - 2 * y).collect();
            let lit: Vec<bool> = row.iter().map(|x| *x == Rgb::WHITE).collect();

            assert_eq!(lit, expected, "row {y}");
        }
    }

    #[test]
    fn triangle_with_far_vertices_is_clipped() {
        let mut image = Image::new(6, 4).unwrap();
        draw_filled_triangle(
            &mut image,
            Point::new(isize::MIN, isize::MIN),
            Point::new(isize::MAX, isize::MIN),
            Point::new(0, isize::MAX),
            Rgb::WHITE
        );
        assert_eq!(count(&image, Rgb::WHITE), 24);
    }

    #[test]
    fn degenerate_triangle_is_a_span() {
        let mut image = Image::new(6, 2).unwrap();
        draw_filled_triangle(
            &mut image,
            Point::new(1, 1),
            Point::new(4, 1),
            Point::new(1, 1),
            Rgb::WHITE
        );
        assert_eq!(count(&image, Rgb::WHITE), 4);
    }

    #[test]
    fn square_fills_match() {
        let square = [
            Point::new(1, 1),
            Point::new(5, 1),
            Point::new(5, 5),
            Point::new(1, 5)
        ];
        let mut scan = Image::new(8, 8).unwrap();
        let mut even_odd = Image::new(8, 8).unwrap();

        draw_filled_polygon(&mut scan, &square, Rgb::WHITE);
        draw_filled_polygon_even_odd(&mut even_odd, &square, Rgb::WHITE);

        assert_eq!(count(&scan, Rgb::WHITE), 25);
        assert_eq!(scan, even_odd);
    }

    #[test]
    fn even_odd_ignores_existing_colors() {
        let triangle = [Point::new(0, 0), Point::new(6, 0), Point::new(0, 6)];

        let mut clean = Image::new(8, 8).unwrap();
        draw_filled_polygon_even_odd(&mut clean, &triangle, Rgb::WHITE);

        let mut dirty = Image::new(8, 8).unwrap();
        dirty.set_pixel(7, 2, Rgb::WHITE);
        draw_filled_polygon_even_odd(&mut dirty, &triangle, Rgb::WHITE);
        dirty.set_pixel(7, 2, Rgb::BLACK);

        assert_eq!(clean, dirty);
    }
}
