use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::WindowEvent;
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

use crate::model::CameraView;

// A look-at camera that's positioned entirely by the simulation. It ignores
// mouse and keyboard input; those are turned into simulation commands
// elsewhere. The only event it cares about is the window changing size.
pub struct FollowCamera {
    // -- position --
    eye: Point3<f32>,
    look_at: Point3<f32>,
    up: Vector3<f32>,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    z_near: f32,
    z_far: f32,
}

impl FollowCamera {
    pub fn new() -> Self {
        FollowCamera {
            eye: Point3::new(0.0, 1000.0, 0.0),
            look_at: Point3::origin(),
            up: -Vector3::z(),
            width: 800,
            height: 600,
            fovy: PI / 4.0,
            z_near: 0.01,
            z_far: 2000.0,
        }
    }

    pub fn set_view(&mut self, view: &CameraView) {
        self.eye = nalgebra::convert(view.eye);
        self.look_at = nalgebra::convert(view.look_at);
        self.up = nalgebra::convert(view.up);
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.z_near,
            self.z_far,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }
}

impl Camera for FollowCamera {
    fn handle_event(&mut self, _canvas: &Canvas, event: &WindowEvent) {
        if let WindowEvent::FramebufferSize(w, h) = *event {
            self.width = w.max(1);
            self.height = h.max(1);
        }
    }

    fn eye(&self) -> Point3<f32> {
        self.eye
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye, &self.look_at, &self.up)
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.z_near, self.z_far)
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
