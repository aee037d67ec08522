use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::Point3;

use crate::model::Trail;

fn to_f32(p: &Point3<f64>) -> Point3<f32> {
    nalgebra::convert(*p)
}

/// Draws trails as the outline of the triangle strip they describe: both
/// edges of the ribbon, plus the rung at each sample.
pub struct TrailRenderer {
    line_renderer: LineRenderer,
}

impl TrailRenderer {
    pub fn new() -> Self {
        TrailRenderer {
            line_renderer: LineRenderer::new(),
        }
    }

    pub fn draw_trail(&mut self, trail: &Trail, color: Point3<f32>) {
        let edge_color = color * 0.6;
        let mut previous = None;
        for seg in trail.linearize() {
            let (p0, p1) = (to_f32(&seg.p0), to_f32(&seg.p1));
            if let Some((q0, q1)) = previous {
                self.line_renderer.draw_line(q0, p0, edge_color);
                self.line_renderer.draw_line(q1, p1, edge_color);
            }
            self.line_renderer.draw_line(p0, p1, color);
            previous = Some((p0, p1));
        }
    }
}

impl Renderer for TrailRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.line_renderer.render(pass, camera);
    }
}
