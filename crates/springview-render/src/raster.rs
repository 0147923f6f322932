use crate::font;
use crate::geometry::{coverage, Disc, Segment, Triangle};
use crate::math::Vec2;
use crate::viewport::Viewport;
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use springview_model::Scene;
use std::collections::HashMap;

pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

const MARGIN: f32 = 80.0;
const NODE_RADIUS: f32 = 26.0;
const EDGE_HALF_WIDTH: f32 = 1.0;
const ARROW_LENGTH: f32 = 14.0;
const ARROW_HALF_WIDTH: f32 = 5.0;
const LABEL_SCALE: u32 = 2;
const TITLE_SCALE: u32 = 2;
const TITLE_TOP: i32 = 16;
const TITLE: &str = "Graph Visualization";

const BACKGROUND: [f32; 3] = [1.0, 1.0, 1.0];
const NODE_FILL: [f32; 3] = [0.678, 0.847, 0.902];
const EDGE_COLOR: [f32; 3] = [0.502, 0.502, 0.502];
const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

pub fn render_scene(scene: &Scene, settings: &RenderSettings) -> RgbImage {
    let view = Viewport::fit(scene, settings.width, settings.height, MARGIN);
    let prims = build_prims(scene, &view);

    let width = settings.width as usize;
    let mut shaded = vec![BACKGROUND; width * settings.height as usize];
    shaded.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            *pixel = shade(p, &prims);
        }
    });

    let mut image = image_from_shaded(&shaded, settings.width, settings.height);
    draw_labels(&mut image, scene, &view);
    draw_title(&mut image, settings.width);
    image
}

struct Prims {
    bodies: Vec<Segment>,
    heads: Vec<Triangle>,
    discs: Vec<Disc>,
}

fn build_prims(scene: &Scene, view: &Viewport) -> Prims {
    let mut positions: HashMap<&str, Vec2> = HashMap::new();
    for node in &scene.nodes {
        positions.insert(node.id.as_str(), view.to_px(node.position));
    }

    let mut bodies = Vec::new();
    let mut heads = Vec::new();

    for edge in &scene.edges {
        let Some(&from) = positions.get(edge.from.as_str()) else { continue };
        let Some(&to) = positions.get(edge.to.as_str()) else { continue };

        let delta = to - from;
        let distance = delta.length();
        // self-loops and edges hidden behind their endpoint discs
        if distance <= NODE_RADIUS * 2.0 + 0.0001 {
            continue;
        }

        let dir = delta / distance;
        let start = from + dir * NODE_RADIUS;
        let tip = to - dir * NODE_RADIUS;
        let head_len = ARROW_LENGTH.min(distance - NODE_RADIUS * 2.0);
        let base = tip - dir * head_len;
        let side = dir.perp() * ARROW_HALF_WIDTH;

        heads.push(Triangle {
            a: tip,
            b: base + side,
            c: base - side,
        });
        if (base - start).dot(dir) > 0.0 {
            bodies.push(Segment { a: start, b: base });
        }
    }

    let discs = scene
        .nodes
        .iter()
        .map(|node| Disc {
            center: positions[node.id.as_str()],
            radius: NODE_RADIUS,
        })
        .collect();

    Prims {
        bodies,
        heads,
        discs,
    }
}

fn shade(p: Vec2, prims: &Prims) -> [f32; 3] {
    let mut color = BACKGROUND;

    for segment in &prims.bodies {
        blend(
            &mut color,
            EDGE_COLOR,
            coverage(segment.distance(p) - EDGE_HALF_WIDTH),
        );
    }
    for head in &prims.heads {
        blend(&mut color, EDGE_COLOR, coverage(head.signed_distance(p)));
    }
    // nodes draw over the edges
    for disc in &prims.discs {
        blend(&mut color, NODE_FILL, coverage(disc.signed_distance(p)));
    }

    color
}

fn blend(dst: &mut [f32; 3], src: [f32; 3], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    for channel in 0..3 {
        dst[channel] = dst[channel] * (1.0 - alpha) + src[channel] * alpha;
    }
}

fn image_from_shaded(shaded: &[[f32; 3]], width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize;
            image.put_pixel(x, y, to_rgb(shaded[idx]));
        }
    }

    image
}

fn to_rgb(color: [f32; 3]) -> Rgb<u8> {
    Rgb([
        (color[0].clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
    ])
}

fn draw_labels(image: &mut RgbImage, scene: &Scene, view: &Viewport) {
    for node in &scene.nodes {
        let center = view.to_px(node.position);
        let width = font::text_width(&node.id, LABEL_SCALE) as i32;
        let height = (font::GLYPH_HEIGHT * LABEL_SCALE) as i32;
        font::draw_text(
            image,
            &node.id,
            center.x as i32 - width / 2,
            center.y as i32 - height / 2,
            LABEL_SCALE,
            LABEL_COLOR,
        );
    }
}

fn draw_title(image: &mut RgbImage, width: u32) {
    let text_width = font::text_width(TITLE, TITLE_SCALE) as i32;
    font::draw_text(
        image,
        TITLE,
        (width as i32 - text_width) / 2,
        TITLE_TOP,
        TITLE_SCALE,
        LABEL_COLOR,
    );
}
