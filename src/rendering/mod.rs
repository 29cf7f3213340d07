use macroquad::prelude::*;
use crate::domain::{Dimensions, PointBuffer};

pub const WINDOW_TITLE: &str = "Conway's Game of Life";

const POINT_COLOR: Color = WHITE;

/// Convert a normalized device coordinate (y up) to a screen position
fn ndc_to_screen(x: f32, y: f32, screen_w: f32, screen_h: f32) -> (f32, f32) {
    let sx = (x + 1.0) * 0.5 * screen_w;
    let sy = (1.0 - (y + 1.0) * 0.5) * screen_h;
    (sx, sy)
}

/// Screen positions of the flat `x, y, z` triples in a point buffer
fn screen_positions(points: &PointBuffer, screen_w: f32, screen_h: f32) -> Vec<(f32, f32)> {
    points
        .as_flat()
        .chunks_exact(3)
        .map(|point| ndc_to_screen(point[0], point[1], screen_w, screen_h))
        .collect()
}

/// Draw one frame's points. The whole frame is redrawn from the buffer;
/// nothing is kept from the previous frame.
pub fn draw_points(points: &PointBuffer, dims: Dimensions) {
    clear_background(BLACK);

    let (screen_w, screen_h) = (screen_width(), screen_height());
    // One grid cell per point, never smaller than a pixel
    let point_w = (screen_w / dims.width() as f32).max(1.0);
    let point_h = (screen_h / dims.height() as f32).max(1.0);

    for (sx, sy) in screen_positions(points, screen_w, screen_h) {
        draw_rectangle(sx, sy - point_h, point_w, point_h, POINT_COLOR);
    }
}
