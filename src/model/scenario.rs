//! The built-in Sun/Earth/Moon setup.
//!
//! Units are arbitrary; with the default G the Earth goes around in about
//! half a minute.

use nalgebra::{Point3, Vector3};

use super::body::{BodyInfo, MinifiedScale};
use super::error::Result;
use super::params::Parameters;
use super::system::System;

const EARTH_RADIUS: f64 = 0.0164;

/// Speed for a circular orbit of radius `r` around a mass `mass`.
pub fn circular_velocity(gravity: f64, mass: f64, r: f64) -> f64 {
    (gravity * mass / r).sqrt()
}

pub fn sun_earth_moon(params: &Parameters) -> Result<System> {
    let g = params.integrator.gravity;
    let mut system = System::new(params.max_bodies, params.trail)?;

    let sun_info = BodyInfo {
        name: "Sun".to_owned(),
        mass: 333_000.0,
        radius: EARTH_RADIUS * 100.0,
        color: Point3::new(0.97, 0.45, 0.1),
        minified: MinifiedScale {
            size: 40.0,
            dist: 1.0,
        },
    };
    let earth_info = BodyInfo {
        name: "Earth".to_owned(),
        mass: 1.0,
        radius: EARTH_RADIUS,
        color: Point3::new(0.02, 0.05, 1.0),
        minified: MinifiedScale {
            size: 1219.0,
            dist: 0.5,
        },
    };
    let moon_info = BodyInfo {
        name: "Moon".to_owned(),
        mass: 0.0123,
        radius: EARTH_RADIUS / 3.5,
        color: Point3::new(0.8, 0.8, 0.8),
        minified: MinifiedScale {
            size: 1219.0,
            dist: 30.0,
        },
    };

    let sun_pos = Vector3::zeros();
    let earth_pos = Vector3::new(382.0, 0.0, 0.0);
    let moon_pos = Vector3::new(383.0, 0.0, 0.0);

    // Everything orbits in the xz-plane, heading towards +z
    let earth_speed = circular_velocity(g, sun_info.mass, (earth_pos - sun_pos).norm());
    // The moon needs to keep up with the earth, as well as circle it
    let moon_speed = circular_velocity(g, earth_info.mass, (moon_pos - earth_pos).norm())
        + circular_velocity(g, sun_info.mass, (moon_pos - sun_pos).norm());

    let sun = system.add_body(sun_info, sun_pos, Vector3::zeros(), None)?;
    let earth = system.add_body(earth_info, earth_pos, Vector3::z() * earth_speed, Some(sun))?;
    system.add_body(moon_info, moon_pos, Vector3::z() * moon_speed, Some(earth))?;

    Ok(system)
}
