use nalgebra::{Point3, Vector3};

use super::trail::Trail;

/// Index of a body in its `System`. Bodies are never removed, so these stay
/// valid for the lifetime of the system.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// Per-body multipliers used only when drawing in minified mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinifiedScale {
    pub size: f64,
    pub dist: f64,
}

impl MinifiedScale {
    pub fn identity() -> Self {
        MinifiedScale {
            size: 1.0,
            dist: 1.0,
        }
    }
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub color: Point3<f32>,
    pub minified: MinifiedScale,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    // Origin for this body's minified coordinates. Always refers to a body
    // that was added before this one.
    pub anchor: Option<BodyID>,
    pub trail: Trail,
}

impl Body {
    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.info.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.info.mass * self.velocity.norm_squared()
    }
}
