/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Circles drawn as a band around a scaled radius
use pnm_image::color::{Point, Rgb};
use pnm_image::image::Image;

/// Fraction of the radius the band is centered on
const RADIUS_SCALE: f64 = 0.85;
/// Half width of the band
const BAND: f64 = 0.5;

/// Pixels `(x, y)` of the canvas whose distance `d` from `center`
/// may satisfy `|d - r * 0.85| < 0.5` for some radius up to `radius`
///
/// Returns an inclusive `(x0, x1, y0, y1)` window clipped to the canvas
fn window(image: &Image, center: Point, radius: isize) -> Option<(usize, usize, usize, usize)> {
    let (width, height) = image.dimensions();
    let reach = radius.saturating_add(1);

    let clip = |low: isize, high: isize, len: usize| -> Option<(usize, usize)> {
        if high < 0 {
            return None;
        }
        let low = usize::try_from(low).unwrap_or(0);
        let high = usize::try_from(high).map_or(0, |x| x.min(len - 1));

        (low <= high).then_some((low, high))
    };
    let (x0, x1) = clip(
        center.x.saturating_sub(reach),
        center.x.saturating_add(reach),
        width
    )?;
    let (y0, y1) = clip(
        center.y.saturating_sub(reach),
        center.y.saturating_add(reach),
        height
    )?;

    Some((x0, x1, y0, y1))
}

#[inline]
fn distance(center: Point, x: usize, y: usize) -> f64 {
    let dx = x as f64 - center.x as f64;
    let dy = y as f64 - center.y as f64;

    (dx * dx + dy * dy).sqrt()
}

#[inline]
fn on_band(distance: f64, radius: isize) -> bool {
    (distance - radius as f64 * RADIUS_SCALE).abs() < BAND
}

/// Draw a circle outline
///
/// Every pixel whose distance `d` from the center satisfies
/// `|d - radius * 0.85| < 0.5` is plotted. A negative radius draws nothing.
pub fn draw_circle(image: &mut Image, center: Point, radius: isize, color: Rgb) {
    if radius < 0 {
        return;
    }
    let Some((x0, x1, y0, y1)) = window(image, center, radius) else {
        return;
    };
    let width = image.width();
    let pixels = image.pixels_mut();

    for y in y0..=y1 {
        for x in x0..=x1 {
            if on_band(distance(center, x, y), radius) {
                pixels[y * width + x] = color;
            }
        }
    }
}

/// Radii in `0..=radius` whose band can touch a canvas pixel,
/// as an inclusive range
fn reachable_radii(image: &Image, center: Point, radius: isize) -> Option<(isize, isize)> {
    let (width, height) = image.dimensions();
    let (cx, cy) = (center.x as f64, center.y as f64);
    let (right, bottom) = ((width - 1) as f64, (height - 1) as f64);

    // nearest and farthest canvas pixel from the center
    let near = (cx.clamp(0.0, right) - cx).hypot(cy.clamp(0.0, bottom) - cy);
    let far = cx.abs().max((right - cx).abs()).hypot(cy.abs().max((bottom - cy).abs()));

    let low = ((near - BAND) / RADIUS_SCALE).floor().max(0.0) as isize;
    let high = (((far + BAND) / RADIUS_SCALE).ceil() as isize).min(radius);

    (low <= high).then_some((low, high))
}

/// Draw a filled circle as concentric outlines from `radius` down to zero
///
/// Radii whose outline can't reach the canvas are skipped.
pub fn draw_filled_circle(image: &mut Image, center: Point, radius: isize, color: Rgb) {
    let Some((low, high)) = reachable_radii(image, center, radius) else {
        return;
    };
    for r in (low..=high).rev() {
        draw_circle(image, center, r, color);
    }
}

#[cfg(test)]
mod tests {
    use pnm_image::color::{Point, Rgb};
    use pnm_image::image::Image;

    use crate::draw::circle::{draw_circle, draw_filled_circle};

    #[test]
    fn radius_zero_is_the_center() {
        let mut image = Image::new(5, 5).unwrap();
        draw_circle(&mut image, Point::new(2, 2), 0, Rgb::WHITE);

        assert_eq!(image.get_pixel(2, 2).unwrap(), Rgb::WHITE);
        assert_eq!(image.pixels().iter().filter(|x| **x == Rgb::WHITE).count(), 1);
    }

    #[test]
    fn band_sits_inside_radius() {
        let mut image = Image::new(30, 30).unwrap();
        draw_circle(&mut image, Point::new(15, 15), 10, Rgb::WHITE);

        // 0.85 * 10 = 8.5, the band covers distances in (8, 9)
        assert_eq!(image.get_pixel(15, 15).unwrap(), Rgb::BLACK);
        assert_eq!(image.get_pixel(15, 25).unwrap(), Rgb::BLACK);
        assert_eq!(image.get_pixel(15, 15 - 9).unwrap(), Rgb::BLACK);
        assert_eq!(image.get_pixel(15 + 6, 15 + 6).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn circle_off_canvas_draws_nothing() {
        let mut image = Image::new(4, 4).unwrap();
        draw_filled_circle(&mut image, Point::new(100, -100), 5, Rgb::WHITE);
        draw_circle(&mut image, Point::new(1, 1), -3, Rgb::WHITE);

        assert!(image.pixels().iter().all(|x| *x == Rgb::BLACK));
    }

    #[test]
    fn filled_circle_covers_center() {
        let mut image = Image::new(9, 9).unwrap();
        draw_filled_circle(&mut image, Point::new(4, 4), 3, Rgb::WHITE);

        assert_eq!(image.get_pixel(4, 4).unwrap(), Rgb::WHITE);
        assert_eq!(image.get_pixel(4, 6).unwrap(), Rgb::WHITE);
        assert_eq!(image.get_pixel(0, 0).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn skipped_radii_paint_nothing() {
        for (cx, cy, radius) in [(4, 4, 3), (-6, 2, 12), (20, -3, 25), (2, 30, 40), (3, 3, 0)] {
            let center = Point::new(cx, cy);

            let mut every_radius = Image::new(9, 7).unwrap();
            for r in 0..=radius {
                draw_circle(&mut every_radius, center, r, Rgb::WHITE);
            }
            let mut image = Image::new(9, 7).unwrap();
            draw_filled_circle(&mut image, center, radius, Rgb::WHITE);

            assert_eq!(image, every_radius, "center {center:?} radius {radius}");
        }
    }

    #[test]
    fn extreme_center_and_radius() {
        let mut image = Image::new(4, 4).unwrap();
        draw_filled_circle(&mut image, Point::new(isize::MIN, isize::MAX), isize::MAX, Rgb::WHITE);
        draw_circle(&mut image, Point::new(isize::MAX, 0), isize::MAX, Rgb::WHITE);

        assert!(image.pixels().iter().all(|x| *x == Rgb::BLACK));

        draw_filled_circle(&mut image, Point::new(1, 1), isize::MAX, Rgb::WHITE);
        assert_eq!(image.get_pixel(1, 1).unwrap(), Rgb::WHITE);
    }
}
