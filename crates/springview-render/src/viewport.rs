use crate::math::Vec2;
use springview_model::Scene;

/// Maps scene coordinates onto the canvas: uniform scale fitting the scene
/// bounding box inside the margins, scene y pointing up.
pub struct Viewport {
    scale: f32,
    center: Vec2,
    canvas_center: Vec2,
}

impl Viewport {
    pub fn fit(scene: &Scene, width: u32, height: u32, margin: f32) -> Self {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

        for node in &scene.nodes {
            let p = Vec2::new(node.position[0], node.position[1]);
            min = min.min(p);
            max = max.max(p);
        }

        if scene.nodes.is_empty() {
            min = Vec2::zero();
            max = Vec2::zero();
        }

        let center = (min + max) * 0.5;
        let extent = max - min;
        let avail_x = (width as f32 - 2.0 * margin).max(1.0);
        let avail_y = (height as f32 - 2.0 * margin).max(1.0);

        let scale_x = if extent.x > 0.0 {
            avail_x / extent.x
        } else {
            f32::INFINITY
        };
        let scale_y = if extent.y > 0.0 {
            avail_y / extent.y
        } else {
            f32::INFINITY
        };
        let mut scale = scale_x.min(scale_y);
        if !scale.is_finite() {
            scale = 1.0;
        }

        Self {
            scale,
            center,
            canvas_center: Vec2::new(width as f32 * 0.5, height as f32 * 0.5),
        }
    }

    pub fn to_px(&self, position: [f32; 2]) -> Vec2 {
        let p = Vec2::new(position[0], position[1]) - self.center;
        Vec2::new(
            self.canvas_center.x + p.x * self.scale,
            self.canvas_center.y - p.y * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use springview_model::{Scene, SceneNode};

    fn scene(positions: &[[f32; 2]]) -> Scene {
        Scene {
            nodes: positions
                .iter()
                .enumerate()
                .map(|(index, &position)| SceneNode {
                    id: index.to_string(),
                    position,
                })
                .collect(),
            edges: Vec::new(),
        }
    }

    #[test]
    fn fit_keeps_nodes_inside_the_margins() {
        let scene = scene(&[[-1.0, -1.0], [1.0, 1.0], [0.3, -0.7]]);
        let view = Viewport::fit(&scene, 1200, 800, 80.0);

        for node in &scene.nodes {
            let p = view.to_px(node.position);
            assert!(p.x >= 80.0 - 1e-3 && p.x <= 1120.0 + 1e-3);
            assert!(p.y >= 80.0 - 1e-3 && p.y <= 720.0 + 1e-3);
        }
    }

    #[test]
    fn fit_centers_a_single_node() {
        let view = Viewport::fit(&scene(&[[0.4, -0.2]]), 640, 480, 50.0);
        let p = view.to_px([0.4, -0.2]);
        assert!((p.x - 320.0).abs() < 1e-3);
        assert!((p.y - 240.0).abs() < 1e-3);
    }

    #[test]
    fn scene_y_points_up_on_the_canvas() {
        let view = Viewport::fit(&scene(&[[0.0, -1.0], [0.0, 1.0]]), 640, 480, 50.0);
        let top = view.to_px([0.0, 1.0]);
        let bottom = view.to_px([0.0, -1.0]);
        assert!(top.y < bottom.y);
    }
}
