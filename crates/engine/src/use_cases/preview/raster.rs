//! Isometric rasterization of a map's tile grid.
//!
//! Every cell is a 16x8 diamond. Cell `(x, y)` has its top vertex at
//! `((x - y) * 8 + canvas_width / 2 - offset, (x + y) * 4)`, which places
//! the whole grid edge to edge on a `(W+H)*8` by `(W+H)*4` canvas.

use eordb_domain::{Map, MapTileSpec};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageFormat, Rgba, RgbaImage};

pub const TILE_WIDTH: i32 = 16;
pub const TILE_HEIGHT: i32 = 8;

/// Half the base width of the locator arrow, in pixels.
pub const ARROW_SIZE: f32 = 10.0;

const HALF_WIDTH: f32 = (TILE_WIDTH / 2) as f32;
const HALF_HEIGHT: f32 = (TILE_HEIGHT / 2) as f32;

pub const WALL: Rgba<u8> = Rgba([0x50, 0x50, 0x50, 0xff]);
pub const GATHER: Rgba<u8> = Rgba([0x3b, 0x86, 0x56, 0xff]);
pub const FISHING: Rgba<u8> = Rgba([0x2b, 0x4f, 0x75, 0xff]);
pub const CHEST: Rgba<u8> = Rgba([0x77, 0x4a, 0x89, 0xff]);
pub const FLOOR: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xff]);
pub const NPC_SPAWN: Rgba<u8> = Rgba([0xb3, 0x4b, 0x5e, 0xff]);
pub const WARP: Rgba<u8> = Rgba([0x4a, 0x5c, 0x9c, 0xff]);
pub const ARROW_FILL: Rgba<u8> = Rgba([0xff, 0xcc, 0x00, 0xff]);
pub const ARROW_OUTLINE: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

/// Canvas geometry for one map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: u32,
    pub height: u32,
    offset_x: f32,
}

impl Projection {
    pub fn for_map(map: &Map) -> Self {
        let span = (map.width + map.height).max(0) as u32;
        Self {
            // A 0x0 PNG cannot be encoded; empty maps get a single pixel.
            width: (span * HALF_WIDTH as u32).max(1),
            height: (span * HALF_HEIGHT as u32).max(1),
            offset_x: ((map.width - map.height) as f32 * HALF_WIDTH) / 2.0,
        }
    }

    /// Top vertex of the diamond for cell `(x, y)`.
    pub fn project(&self, x: i32, y: i32) -> (f32, f32) {
        let (x, y) = (i64::from(x), i64::from(y));
        let iso_x = (x - y) as f32 * HALF_WIDTH + self.width as f32 / 2.0 - self.offset_x;
        let iso_y = (x + y) as f32 * HALF_HEIGHT;
        (iso_x, iso_y)
    }
}

/// Fill colour of a cell: tile spec first, then NPC spawn, then warp.
pub fn tile_color(map: &Map, x: i32, y: i32) -> Rgba<u8> {
    if let Some(spec) = map.spec_at(x, y) {
        return spec_color(spec);
    }
    if map.has_npc_spawn_at(x, y) {
        NPC_SPAWN
    } else if map.has_warp_at(x, y) {
        WARP
    } else {
        FLOOR
    }
}

fn spec_color(spec: MapTileSpec) -> Rgba<u8> {
    match spec {
        s if s.is_blocking() => WALL,
        s if s.is_gather() => GATHER,
        s if s.is_fishing() => FISHING,
        MapTileSpec::Chest => CHEST,
        _ => FLOOR,
    }
}

pub fn render(map: &Map) -> RgbaImage {
    let projection = Projection::for_map(map);
    let mut canvas = RgbaImage::new(projection.width, projection.height);
    for y in 0..map.height {
        for x in 0..map.width {
            let (iso_x, iso_y) = projection.project(x, y);
            let diamond = [
                (iso_x, iso_y),
                (iso_x + HALF_WIDTH, iso_y + HALF_HEIGHT),
                (iso_x, iso_y + TILE_HEIGHT as f32),
                (iso_x - HALF_WIDTH, iso_y + HALF_HEIGHT),
            ];
            fill_polygon(&mut canvas, &diamond, tile_color(map, x, y));
        }
    }
    canvas
}

/// Draws the locator triangle for cell `(x, y)` onto a rendered preview.
pub fn draw_arrow(canvas: &mut RgbaImage, projection: &Projection, x: i32, y: i32) {
    let (iso_x, top) = projection.project(x, y);
    let iso_y = top - TILE_HEIGHT as f32 + HALF_HEIGHT + ARROW_SIZE * 2.0 + 5.0;
    let triangle = [
        (iso_x, iso_y - ARROW_SIZE),
        (iso_x - ARROW_SIZE, iso_y + ARROW_SIZE),
        (iso_x + ARROW_SIZE, iso_y + ARROW_SIZE),
    ];
    fill_polygon(canvas, &triangle, ARROW_FILL);
    stroke_polygon(canvas, &triangle, 2.0, ARROW_OUTLINE);
}

/// Even-odd scanline fill, sampling pixel centres.
fn fill_polygon(canvas: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    let (Some(min_y), Some(max_y)) = (
        points.iter().map(|p| p.1).reduce(f32::min),
        points.iter().map(|p| p.1).reduce(f32::max),
    ) else {
        return;
    };

    let first_row = min_y.floor().max(0.0) as u32;
    let last_row = (max_y.ceil().max(0.0) as u32).min(canvas.height());
    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for row in first_row..last_row {
        let scan_y = row as f32 + 0.5;
        crossings.clear();
        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= scan_y) != (y1 <= scan_y) {
                crossings.push(x0 + (scan_y - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(f32::total_cmp);

        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0) as u32;
            let end = ((span[1] - 0.5).ceil().max(0.0) as u32).min(canvas.width());
            for column in start..end {
                canvas.put_pixel(column, row, color);
            }
        }
    }
}

/// Outlines the polygon with a line `width` pixels wide, centred on its
/// edges.
fn stroke_polygon(canvas: &mut RgbaImage, points: &[(f32, f32)], width: f32, color: Rgba<u8>) {
    let reach = width / 2.0;
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        let left = (start.0.min(end.0) - reach).floor().max(0.0) as u32;
        let right = ((start.0.max(end.0) + reach).ceil().max(0.0) as u32).min(canvas.width());
        let top = (start.1.min(end.1) - reach).floor().max(0.0) as u32;
        let bottom = ((start.1.max(end.1) + reach).ceil().max(0.0) as u32).min(canvas.height());

        for row in top..bottom {
            for column in left..right {
                let centre = (column as f32 + 0.5, row as f32 + 0.5);
                if distance_to_segment(centre, start, end) <= reach {
                    canvas.put_pixel(column, row, color);
                }
            }
        }
    }
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}

pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    Ok(image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8())
}
