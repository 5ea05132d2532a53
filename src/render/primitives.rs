//! Line rasterization.

use crate::render::{Framebuffer, Rgba};

/// Draw a line using Bresenham's algorithm (non-antialiased).
pub(crate) fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a line `thickness` pixels wide by stacking offset Bresenham lines.
pub(crate) fn draw_thick_line(
    fb: &mut Framebuffer,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: u32,
    color: Rgba,
) {
    let half = (thickness / 2) as i32;
    // Offset perpendicular to the major axis
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    for off in -half..=(thickness as i32 - 1 - half) {
        if steep {
            draw_line(fb, x0 + off, y0, x1 + off, y1, color);
        } else {
            draw_line(fb, x0, y0 + off, x1, y1 + off, color);
        }
    }
}

/// Draw a rectangle outline.
pub(crate) fn draw_rect_outline(fb: &mut Framebuffer, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
    let (x1, y1) = (x + w - 1, y + h - 1);
    draw_line(fb, x, y, x1, y, color);
    draw_line(fb, x, y1, x1, y1, color);
    draw_line(fb, x, y, x, y1, color);
    draw_line(fb, x1, y, x1, y1, color);
}
