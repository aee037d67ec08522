use std::collections::VecDeque;

use super::body::BodyID;
use super::camera::{CameraController, CameraView, ZoomDirection};
use super::error::Result;
use super::integrator::Integrator;
use super::params::Parameters;
use super::presentation::{present, Presented, RenderMode};
use super::system::System;

/// Discrete user requests. They're queued as they arrive and applied at the
/// start of the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleMode,
    CycleTarget,
    Zoom(ZoomDirection),
    TogglePause,
}

/// Owns all the simulation state and runs it one frame at a time.
pub struct Simulation {
    system: System,
    integrator: Integrator,
    camera: CameraController,
    commands: VecDeque<Command>,
    paused: bool,
    // Results of the last frame, indexed like the system's bodies
    view: CameraView,
    presented: Vec<Presented>,
}

impl Simulation {
    pub fn new(system: System, params: &Parameters, mode: RenderMode) -> Result<Self> {
        params.validate()?;
        let integrator = Integrator::new(params.integrator)?;
        let camera = CameraController::new(params.camera, mode)?;

        let mut simulation = Simulation {
            view: camera.view(&system),
            presented: vec![],
            system,
            integrator,
            camera,
            commands: VecDeque::new(),
            paused: false,
        };
        simulation.update_presentation();
        Ok(simulation)
    }

    pub fn queue(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Runs one frame: apply queued commands, step the physics, then place the
    /// camera, the bodies and their trails. Returns the number of physics steps.
    pub fn frame(&mut self, elapsed: f64) -> usize {
        while let Some(command) = self.commands.pop_front() {
            self.apply(command);
        }

        let num_steps = if self.paused {
            0
        } else {
            self.integrator.advance(&mut self.system, elapsed)
        };

        self.view = self.camera.view(&self.system);
        self.update_presentation();

        let camera_distance = self.view.distance();
        for (body, presented) in self.system.bodies_mut().zip(self.presented.iter()) {
            body.trail.record(presented.position, camera_distance);
        }

        num_steps
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleMode => self.camera.toggle_mode(&mut self.system),
            Command::CycleTarget => self.camera.cycle_target(&mut self.system),
            Command::Zoom(direction) => self.camera.zoom(direction, &mut self.system),
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
        }
    }

    fn update_presentation(&mut self) {
        let mode = self.camera.mode();
        let system = &self.system;
        self.presented = system.ids().map(|id| present(system, id, mode)).collect();
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn mode(&self) -> RenderMode {
        self.camera.mode()
    }

    /// The camera as placed by the last frame.
    pub fn camera_view(&self) -> CameraView {
        self.view
    }

    /// Render position and scale of a body as of the last frame.
    pub fn presented(&self, id: BodyID) -> Presented {
        self.presented[id.0]
    }
}
