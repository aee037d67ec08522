//! Mapping from physical coordinates to render space.
//!
//! Real solar-system proportions make moons invisible, so besides drawing
//! things to scale we support a "minified" mode. There, each body's offset
//! from its anchor is multiplied by its own distance scale, and its radius
//! by its own size scale. The anchor's render position becomes the origin,
//! which exaggerates local structure (Earth-Moon) while keeping the global
//! layout (Sun-Earth) recognizable.

use nalgebra::Point3;

use super::body::{Body, BodyID};
use super::system::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    ToScale,
    Minified,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::ToScale => RenderMode::Minified,
            RenderMode::Minified => RenderMode::ToScale,
        }
    }
}

/// Where and how big to draw a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presented {
    pub position: Point3<f64>,
    pub scale: f64,
}

pub fn present(system: &System, id: BodyID, mode: RenderMode) -> Presented {
    let body = system.get_body(id);
    match mode {
        RenderMode::ToScale => to_scale(body),
        RenderMode::Minified => minified(system, body),
    }
}

pub fn render_position(system: &System, id: BodyID, mode: RenderMode) -> Point3<f64> {
    present(system, id, mode).position
}

fn to_scale(body: &Body) -> Presented {
    Presented {
        position: Point3::from(body.position),
        scale: body.info.radius,
    }
}

fn minified(system: &System, body: &Body) -> Presented {
    Presented {
        position: minified_position(system, body),
        scale: body.info.radius * body.info.minified.size,
    }
}

// Anchors always point at earlier bodies, so this terminates.
fn minified_position(system: &System, body: &Body) -> Point3<f64> {
    let dist_scale = body.info.minified.dist;
    match body.anchor {
        None => Point3::from(body.position * dist_scale),
        Some(anchor_id) => {
            let anchor = system.get_body(anchor_id);
            let origin = minified_position(system, anchor);
            origin + (body.position - anchor.position) * dist_scale
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use super::*;
    use crate::model::body::{BodyInfo, MinifiedScale};
    use crate::model::params::TrailParams;

    fn add(
        system: &mut System,
        position: Vector3<f64>,
        radius: f64,
        minified: MinifiedScale,
        anchor: Option<BodyID>,
    ) -> BodyID {
        let info = BodyInfo {
            name: String::new(),
            mass: 1.0,
            radius,
            color: Point3::new(1.0, 1.0, 1.0),
            minified,
        };
        system
            .add_body(info, position, Vector3::zeros(), anchor)
            .unwrap()
    }

    fn scale(size: f64, dist: f64) -> MinifiedScale {
        MinifiedScale { size, dist }
    }

    #[test]
    fn test_to_scale_is_identity() {
        let mut system = System::new(4, TrailParams::default()).unwrap();
        let a = add(&mut system, Vector3::new(10.0, -3.0, 7.5), 2.0, scale(40.0, 2.0), None);
        let b = add(&mut system, Vector3::new(12.0, 0.0, 1.0), 0.5, scale(9.0, 5.0), Some(a));

        for id in [a, b] {
            let presented = present(&system, id, RenderMode::ToScale);
            let body = system.get_body(id);
            assert_eq!(presented.position, Point3::from(body.position));
            assert_eq!(presented.scale, body.info.radius);
        }
    }

    #[test]
    fn test_unanchored_minified() {
        let mut system = System::new(4, TrailParams::default()).unwrap();
        let a = add(&mut system, Vector3::new(10.0, 0.0, -4.0), 2.0, scale(40.0, 0.5), None);

        let presented = present(&system, a, RenderMode::Minified);
        approx::assert_relative_eq!(presented.position, Point3::new(5.0, 0.0, -2.0));
        approx::assert_relative_eq!(presented.scale, 80.0);
    }

    #[test]
    fn test_anchor_composition() {
        let mut system = System::new(4, TrailParams::default()).unwrap();
        let a = add(&mut system, Vector3::new(10.0, 0.0, 0.0), 1.0, scale(1.0, 2.0), None);
        let b = add(&mut system, Vector3::new(12.0, 0.0, 0.0), 0.1, scale(3.0, 5.0), Some(a));

        // (10 * 2) + (12 - 10) * 5
        let presented = present(&system, b, RenderMode::Minified);
        approx::assert_relative_eq!(presented.position, Point3::new(30.0, 0.0, 0.0));
        approx::assert_relative_eq!(presented.scale, 0.3, max_relative = 1e-12);
    }

    #[test]
    fn test_deep_anchor_chain_recurses() {
        let mut system = System::new(4, TrailParams::default()).unwrap();
        let sun = add(&mut system, Vector3::new(1.0, 0.0, 0.0), 1.0, scale(1.0, 3.0), None);
        let planet = add(&mut system, Vector3::new(5.0, 0.0, 0.0), 1.0, scale(1.0, 2.0), Some(sun));
        let moon = add(&mut system, Vector3::new(5.0, 0.0, 1.0), 1.0, scale(1.0, 10.0), Some(planet));

        // sun: 3; planet: 3 + 4 * 2 = 11; moon: 11 + (0, 0, 1) * 10
        approx::assert_relative_eq!(
            render_position(&system, planet, RenderMode::Minified),
            Point3::new(11.0, 0.0, 0.0)
        );
        approx::assert_relative_eq!(
            render_position(&system, moon, RenderMode::Minified),
            Point3::new(11.0, 0.0, 10.0)
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(RenderMode::ToScale.toggled(), RenderMode::Minified);
        assert_eq!(RenderMode::Minified.toggled().toggled(), RenderMode::Minified);
    }
}
