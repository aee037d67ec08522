use nalgebra::{Point3, Vector3};

use super::body::{Body, BodyID};
use super::error::Result;
use super::params::CameraParams;
use super::presentation::{render_position, RenderMode};
use super::system::System;
use crate::math::geometry::{direction_or, log_lerp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling up zooms in. A zero offset isn't a zoom at all.
    pub fn from_scroll(offset: f64) -> Option<Self> {
        if offset > 0.0 {
            Some(ZoomDirection::In)
        } else if offset < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Everything a renderer needs to set up a look-at view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Point3<f64>,
    pub look_at: Point3<f64>,
    pub up: Vector3<f64>,
}

impl CameraView {
    pub fn distance(&self) -> f64 {
        (self.eye - self.look_at).norm()
    }
}

/// Tracks what the camera is looking at and how closely.
///
/// With no target, the camera hangs over the origin. With a target, it trails
/// behind the body along its direction of travel, at a distance picked from a
/// logarithmic ramp of discrete zoom levels.
///
/// Every transition clears all trails: trail width and reference frame depend
/// on the camera, and a trail recorded under one setting looks wrong under
/// another.
#[derive(Debug, Clone)]
pub struct CameraController {
    params: CameraParams,
    mode: RenderMode,
    target: Option<BodyID>,
    zoom_level: u32,
}

impl CameraController {
    pub fn new(params: CameraParams, mode: RenderMode) -> Result<Self> {
        params.validate()?;
        Ok(CameraController {
            params,
            mode,
            target: None,
            zoom_level: params.initial_zoom_level,
        })
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn target(&self) -> Option<BodyID> {
        self.target
    }

    pub fn zoom_level(&self) -> u32 {
        self.zoom_level
    }

    pub fn max_zoom_level(&self) -> u32 {
        self.params.max_zoom_level
    }

    pub fn toggle_mode(&mut self, system: &mut System) {
        self.mode = self.mode.toggled();
        self.target = None;
        system.clear_trails();
        log::debug!("Switched to {:?} mode", self.mode);
    }

    /// Focuses the next body in registry order; after the last body comes the
    /// free camera, then the first body again. Only allowed when drawing to
    /// scale.
    pub fn cycle_target(&mut self, system: &mut System) {
        if self.mode != RenderMode::ToScale {
            log::debug!("Ignoring target switch in {:?} mode", self.mode);
            return;
        }

        let next = match self.target {
            None => 0,
            Some(BodyID(i)) => i + 1,
        };
        self.target = if next < system.len() {
            Some(BodyID(next))
        } else {
            None
        };
        system.clear_trails();

        match self.target {
            Some(id) => log::debug!("Camera following {}", system.get_body(id).info.name),
            None => log::debug!("Camera free"),
        }
    }

    /// Steps the zoom level, saturating at both ends. Only allowed when
    /// following a body in to-scale mode.
    pub fn zoom(&mut self, direction: ZoomDirection, system: &mut System) {
        if self.target.is_none() || self.mode != RenderMode::ToScale {
            log::debug!("Ignoring zoom without a focused body");
            return;
        }

        self.zoom_level = match direction {
            ZoomDirection::In => u32::min(self.zoom_level + 1, self.params.max_zoom_level),
            ZoomDirection::Out => self.zoom_level.saturating_sub(1),
        };
        system.clear_trails();
        log::debug!("Zoom level {}", self.zoom_level);
    }

    /// Camera distance for the current zoom level. Level 0 is `min_zoom` away;
    /// the top level is `radius_factor` radii away (but never closer than
    /// `min_distance`), so bigger bodies can't be approached as closely.
    pub fn zoom_distance(&self, target: &Body) -> f64 {
        let t = self.zoom_level as f64 / self.params.max_zoom_level as f64;
        let closest = f64::max(
            target.info.radius * self.params.radius_factor,
            self.params.min_distance,
        );
        log_lerp(self.params.min_zoom, closest, t)
    }

    pub fn view(&self, system: &System) -> CameraView {
        let id = match self.target {
            Some(id) => id,
            None => {
                return CameraView {
                    eye: self.params.overhead_eye,
                    look_at: Point3::origin(),
                    up: self.params.overhead_up,
                }
            }
        };

        let target = system.get_body(id);
        let look_at = render_position(system, id, self.mode);
        let distance = self.zoom_distance(target);

        // Sit behind the body along its direction of travel, and a little
        // above its orbital plane.
        let heading = direction_or(&target.velocity, Vector3::x());
        let eye = look_at
            + heading * (target.info.radius + distance)
            + self.params.follow_up * (distance * self.params.vertical_offset_ratio);

        CameraView {
            eye,
            look_at,
            up: self.params.follow_up,
        }
    }
}
