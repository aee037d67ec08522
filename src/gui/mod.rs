use std::time::Instant;

use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::text::Font;
use kiss3d::window::{State, Window};
use nalgebra::{Point2, Point3, Translation3};

use self::camera::FollowCamera;
use self::controller::Controller;
use self::renderers::TrailRenderer;
use crate::model::{RenderMode, Simulation};

mod camera;
mod controller;
mod renderers;

pub struct Viewer {
    simulation: Simulation,
    controller: Controller,
    body_spheres: Vec<SceneNode>,
    camera: FollowCamera,
    renderer: TrailRenderer,
    last_frame: Instant,
}

impl Viewer {
    pub fn new(simulation: Simulation, window: &mut Window) -> Self {
        // Unit spheres, scaled every frame to the body's presented size
        let body_spheres = simulation
            .system()
            .bodies()
            .map(|body| {
                let mut sphere = window.add_sphere(1.0);
                let color = &body.info.color;
                sphere.set_color(color.x, color.y, color.z);
                sphere
            })
            .collect();

        let mut viewer = Self {
            simulation,
            controller: Controller::new(),
            body_spheres,
            camera: FollowCamera::new(),
            renderer: TrailRenderer::new(),
            last_frame: Instant::now(),
        };
        viewer.update_scene_objects();
        viewer
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        for event in events.iter() {
            self.controller.process_event(event, &mut self.simulation);
        }
    }

    fn update_scene_objects(&mut self) {
        self.camera.set_view(&self.simulation.camera_view());

        for (body, sphere) in self
            .simulation
            .system()
            .bodies()
            .zip(self.body_spheres.iter_mut())
        {
            let presented = self.simulation.presented(body.id);
            let position: Point3<f32> = nalgebra::convert(presented.position);
            let scale = presented.scale as f32;
            sphere.set_local_translation(Translation3::from(position.coords));
            sphere.set_local_scale(scale, scale, scale);
        }
    }

    fn draw_trails(&mut self) {
        if !self.controller.show_trails() {
            return;
        }
        for body in self.simulation.system().bodies() {
            self.renderer.draw_trail(&body.trail, body.info.color);
        }
    }

    fn status_text(&self) -> String {
        let camera = self.simulation.camera();
        let focus = match camera.target() {
            Some(id) => self.simulation.system().get_body(id).info.name.clone(),
            None => String::from("-"),
        };
        let mode = match camera.mode() {
            RenderMode::ToScale => "to scale",
            RenderMode::Minified => "minified",
        };

        format!(
            "Mode: {}
Focused on: {}
Zoom: {}/{}
{}
FPS: {:.0}",
            mode,
            focus,
            camera.zoom_level(),
            camera.max_zoom_level(),
            if self.simulation.is_paused() {
                "Paused"
            } else {
                "Running"
            },
            self.controller.fps(),
        )
    }
}

impl State for Viewer {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        self.simulation.frame(elapsed);
        self.update_scene_objects();
        self.draw_trails();

        window.draw_text(
            &self.status_text(),
            &Point2::origin(),
            60.0,
            &Font::default(),
            &Point3::new(1.0, 1.0, 1.0),
        );
        self.controller.increment_frame_counter();
    }
}
