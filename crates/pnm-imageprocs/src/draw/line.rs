/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_image::color::{Point, Rgb};
use pnm_image::image::Image;

/// Range of steps `k` in `0..=steps` for which `start + step * k`
/// lands in `0..len`
fn visible_steps(start: i128, step: i128, len: i128, steps: i128) -> Option<(i128, i128)> {
    let (low, high) = if step > 0 {
        (-start, len - 1 - start)
    } else {
        (start - (len - 1), start)
    };
    let (low, high) = (low.max(0), high.min(steps));

    (low <= high).then_some((low, high))
}

/// Minor axis offset after `k` major axis steps
///
/// Equals the position the step by step Bresenham walk reaches,
/// `⌊(2·k·minor + major − 1) / (2·major)⌋`, split so nothing overflows.
fn minor_offset(k: u128, minor: u128, major: u128) -> u128 {
    let product = k * minor;
    let (whole, rest) = (product / major, product % major);

    whole + (2 * rest + major - 1) / (2 * major)
}

/// Draw a line between two points using Bresenham's algorithm
///
/// Both end points are plotted, a line from a point to itself
/// plots exactly that point.
///
/// The pixels are the ones the classic error-accumulating walk
/// (`err = dx - dy`, `e2 = 2 * err`) visits, but each position is
/// computed directly, so only the steps crossing the canvas are taken
/// and end points anywhere in the `isize` range are fine.
pub fn draw_line(image: &mut Image, from: Point, to: Point, color: Rgb) {
    let (x0, y0) = (from.x as i128, from.y as i128);
    let dx = to.x as i128 - x0;
    let dy = to.y as i128 - y0;
    let (sx, sy) = (dx.signum(), dy.signum());

    let major = dx.abs().max(dy.abs());

    if major == 0 {
        image.set_pixel(from.x, from.y, color);
        return;
    }
    let minor = dx.abs().min(dy.abs());
    let x_major = dx.abs() >= dy.abs();

    let (width, height) = image.dimensions();
    let (start, step, len) = if x_major {
        (x0, sx, width as i128)
    } else {
        (y0, sy, height as i128)
    };
    let Some((first, last)) = visible_steps(start, step, len, major) else {
        return;
    };

    for k in first..=last {
        let offset = minor_offset(k as u128, minor as u128, major as u128) as i128;

        let (x, y) = if x_major {
            (x0 + sx * k, y0 + sy * offset)
        } else {
            (x0 + sx * offset, y0 + sy * k)
        };
        if let (Ok(x), Ok(y)) = (isize::try_from(x), isize::try_from(y)) {
            image.set_pixel(x, y, color);
        }
    }
}
