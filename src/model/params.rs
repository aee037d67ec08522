//! Tunable knobs for the simulation.
//!
//! The defaults are chosen for the built-in Sun/Earth/Moon scenario: gravity
//! is far stronger than the real thing, so that a "year" passes in under a
//! minute of wall time.

use nalgebra::{Point3, Vector3};

use super::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub integrator: IntegratorParams,
    pub trail: TrailParams,
    pub camera: CameraParams,
    pub max_bodies: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct IntegratorParams {
    pub gravity: f64,   // G, in whatever units the scenario uses
    pub step: f64,      // fixed physics step, in seconds
    pub softening: f64, // added to dist^2 so forces stay finite
    pub max_frame_time: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TrailParams {
    pub capacity: usize,
    pub line_width_divisor: f64,
    pub up: Vector3<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct CameraParams {
    // Camera distance at zoom level 0
    pub min_zoom: f64,
    // Zoom levels run from 0 to this, inclusive
    pub max_zoom_level: u32,
    pub initial_zoom_level: u32,
    // At max zoom, the camera sits this many radii from the target
    pub radius_factor: f64,
    // Floor for the top-zoom distance, so tiny or zero-radius bodies still
    // leave room between the eye and the target
    pub min_distance: f64,
    pub vertical_offset_ratio: f64,
    pub overhead_eye: Point3<f64>,
    pub overhead_up: Vector3<f64>,
    pub follow_up: Vector3<f64>,
}

impl Default for IntegratorParams {
    fn default() -> Self {
        IntegratorParams {
            gravity: 6.0,
            step: 1.0 / 240.0,
            softening: 1e-6,
            max_frame_time: 0.3,
        }
    }
}

impl Default for TrailParams {
    fn default() -> Self {
        TrailParams {
            capacity: 1000,
            line_width_divisor: 500.0,
            up: Vector3::y(),
        }
    }
}

impl Default for CameraParams {
    fn default() -> Self {
        CameraParams {
            min_zoom: 800.0,
            max_zoom_level: 20,
            initial_zoom_level: 10,
            radius_factor: 3.5,
            min_distance: 0.01,
            vertical_offset_ratio: 0.5,
            overhead_eye: Point3::new(0.0, 1000.0, 0.0),
            overhead_up: -Vector3::z(),
            follow_up: Vector3::y(),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            integrator: IntegratorParams::default(),
            trail: TrailParams::default(),
            camera: CameraParams::default(),
            max_bodies: 50,
        }
    }
}

fn check(ok: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, reason })
    }
}

fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl IntegratorParams {
    pub fn validate(&self) -> Result<()> {
        check(self.gravity.is_finite(), "gravity", "must be finite")?;
        check(positive(self.step), "step", "must be positive")?;
        check(positive(self.softening), "softening", "must be positive")?;
        check(
            positive(self.max_frame_time),
            "max_frame_time",
            "must be positive",
        )
    }
}

impl TrailParams {
    pub fn validate(&self) -> Result<()> {
        check(self.capacity > 0, "trail capacity", "must be at least 1")?;
        check(
            positive(self.line_width_divisor),
            "line_width_divisor",
            "must be positive",
        )?;
        check(self.up.norm() > 0.0, "trail up", "must be non-zero")
    }
}

impl CameraParams {
    pub fn validate(&self) -> Result<()> {
        check(positive(self.min_zoom), "min_zoom", "must be positive")?;
        check(
            self.max_zoom_level > 0,
            "max_zoom_level",
            "must be at least 1",
        )?;
        check(
            self.initial_zoom_level <= self.max_zoom_level,
            "initial_zoom_level",
            "must not exceed max_zoom_level",
        )?;
        check(
            positive(self.radius_factor),
            "radius_factor",
            "must be positive",
        )?;
        check(
            positive(self.min_distance) && self.min_distance < self.min_zoom,
            "min_distance",
            "must be positive and below min_zoom",
        )
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        self.integrator.validate()?;
        self.trail.validate()?;
        self.camera.validate()?;
        check(self.max_bodies > 0, "max_bodies", "must be at least 1")
    }
}
