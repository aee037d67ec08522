use nalgebra::{Point3, Vector3};

use super::body::{Body, BodyID, BodyInfo};
use super::error::{Error, Result};
use super::params::TrailParams;
use super::trail::Trail;

/// The ordered collection of simulated bodies. Insertion order is the order
/// bodies are integrated and drawn in, and body 0 is conventionally the
/// dominant mass.
#[derive(Debug, Clone)]
pub struct System {
    // Invariants:
    //   - bodies[i].id == BodyID(i)
    //   - bodies.len() <= capacity
    //   - every anchor refers to an earlier body
    bodies: Vec<Body>,
    capacity: usize,
    trail_params: TrailParams,
}

impl System {
    pub fn new(capacity: usize, trail_params: TrailParams) -> Result<Self> {
        trail_params.validate()?;
        if capacity == 0 {
            return Err(Error::InvalidParameter {
                name: "max_bodies",
                reason: "must be at least 1",
            });
        }
        Ok(System {
            bodies: Vec::with_capacity(capacity),
            capacity,
            trail_params,
        })
    }

    pub fn add_body(
        &mut self,
        info: BodyInfo,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        anchor: Option<BodyID>,
    ) -> Result<BodyID> {
        if !(info.mass.is_finite() && info.mass > 0.0) {
            return Err(Error::InvalidMass(info.mass));
        }
        if !(info.radius.is_finite() && info.radius >= 0.0) {
            return Err(Error::InvalidRadius(info.radius));
        }
        if let Some(anchor_id) = anchor {
            if anchor_id.0 >= self.bodies.len() {
                return Err(Error::UnknownAnchor(anchor_id));
            }
        }
        if self.bodies.len() >= self.capacity {
            return Err(Error::SystemFull(self.capacity));
        }

        let id = BodyID(self.bodies.len());
        log::debug!("Adding body {} as {:?}", info.name, id);
        self.bodies.push(Body {
            id,
            info,
            position,
            velocity,
            anchor,
            trail: Trail::new(&self.trail_params),
        });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        self.bodies.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyID> {
        (0..self.bodies.len()).map(BodyID)
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn get_body_mut(&mut self, id: BodyID) -> &mut Body {
        &mut self.bodies[id.0]
    }

    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|b| b.info.name.eq_ignore_ascii_case(name))
    }

    pub fn clear_trails(&mut self) {
        for body in self.bodies.iter_mut() {
            body.trail.clear();
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.info.mass).sum()
    }

    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Mass-weighted mean position. Returns the origin for an empty system.
    pub fn center_of_mass(&self) -> Point3<f64> {
        let total_mass = self.total_mass();
        if total_mass == 0.0 {
            return Point3::origin();
        }
        let weighted: Vector3<f64> = self
            .bodies
            .iter()
            .map(|b| b.position * b.info.mass)
            .sum();
        Point3::from(weighted / total_mass)
    }

    /// Kinetic plus gravitational potential energy, with the potential softened
    /// as `-G m m / sqrt(r^2 + softening)`. The integrator softens the force
    /// slightly differently, so this is only approximately conserved even
    /// with a perfect integrator; the difference vanishes for separations
    /// much larger than `sqrt(softening)`.
    pub fn total_energy(&self, gravity: f64, softening: f64) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();

        let mut potential = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in self.bodies[i + 1..].iter() {
                let dist2 = (b.position - a.position).norm_squared();
                potential -= gravity * a.info.mass * b.info.mass / (dist2 + softening).sqrt();
            }
        }

        kinetic + potential
    }
}
