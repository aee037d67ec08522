pub mod body;
pub mod camera;
pub mod error;
pub mod integrator;
pub mod params;
pub mod presentation;
pub mod scenario;
pub mod simulation;
pub mod system;
pub mod trail;

pub use body::{Body, BodyID, BodyInfo, MinifiedScale};
pub use camera::{CameraController, CameraView, ZoomDirection};
pub use error::Error;
pub use integrator::Integrator;
pub use params::{CameraParams, IntegratorParams, Parameters, TrailParams};
pub use presentation::{present, Presented, RenderMode};
pub use simulation::{Command, Simulation};
pub use system::System;
pub use trail::{Trail, TrailSegment};
