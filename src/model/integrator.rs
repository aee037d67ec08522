//! Fixed-step gravitational integrator.
//!
//! Wall-clock time is poured into an accumulator and drained in steps of a
//! fixed size, so the physics comes out the same regardless of frame rate.
//! Each step is a semi-implicit Euler update: every body's velocity is kicked
//! using positions from before the step, and only then are positions moved
//! using the new velocities.

use nalgebra::Vector3;

use super::error::Result;
use super::params::IntegratorParams;
use super::system::System;
use crate::math::geometry::direction_or;

#[derive(Debug, Clone)]
pub struct Integrator {
    params: IntegratorParams,
    // Simulated time owed but not yet stepped. Always in [0, step) between calls.
    accumulator: f64,
}

impl Integrator {
    pub fn new(params: IntegratorParams) -> Result<Self> {
        params.validate()?;
        Ok(Integrator {
            params,
            accumulator: 0.0,
        })
    }

    pub fn params(&self) -> &IntegratorParams {
        &self.params
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Advances the system by `elapsed` seconds of wall time, clamped to
    /// `max_frame_time` so a long stall doesn't trigger a huge catch-up.
    /// Returns the number of fixed steps taken.
    pub fn advance(&mut self, system: &mut System, elapsed: f64) -> usize {
        // max() also maps NaN to zero
        let elapsed = elapsed.max(0.0);
        let clamped = elapsed.min(self.params.max_frame_time);
        if clamped < elapsed {
            log::warn!(
                "Frame took {:.3} s, only simulating {:.3} s of it",
                elapsed,
                clamped
            );
        }
        self.accumulator += clamped;

        let mut num_steps = 0;
        while self.accumulator >= self.params.step {
            self.step(system);
            self.accumulator -= self.params.step;
            num_steps += 1;
        }

        log::trace!("Took {} physics steps", num_steps);
        num_steps
    }

    /// Performs exactly one fixed step, ignoring the accumulator.
    pub fn step(&self, system: &mut System) {
        let dt = self.params.step;

        // Kick: all velocities from the same snapshot of positions
        let accels = self.accelerations(system);
        for (body, a) in system.bodies_mut().zip(accels.iter()) {
            body.velocity += a * dt;
        }

        // Drift
        for body in system.bodies_mut() {
            body.position += body.velocity * dt;
        }
    }

    /// Gravitational acceleration on each body, in registry order.
    pub fn accelerations(&self, system: &System) -> Vec<Vector3<f64>> {
        let IntegratorParams {
            gravity, softening, ..
        } = self.params;

        system
            .bodies()
            .map(|body_i| {
                let mut accel = Vector3::zeros();
                for body_j in system.bodies() {
                    // A body isn't pulled by its own gravity
                    if body_i.id == body_j.id {
                        continue;
                    }

                    let d = body_j.position - body_i.position;
                    let (m_i, m_j) = (body_i.info.mass, body_j.info.mass);
                    let force = gravity * m_i * m_j / (d.norm_squared() + softening);
                    // Coincident bodies have no well-defined direction; skip the pull
                    accel += direction_or(&d, Vector3::zeros()) * (force / m_i);
                }
                accel
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::*;
    use crate::model::body::{BodyInfo, MinifiedScale};
    use crate::model::params::TrailParams;

    fn params(step: f64) -> IntegratorParams {
        IntegratorParams {
            gravity: 1.0,
            step,
            softening: 1e-9,
            max_frame_time: 0.3,
        }
    }

    fn two_bodies() -> System {
        let mut system = System::new(2, TrailParams::default()).unwrap();
        for (mass, x) in [(4.0, 0.0), (1.0, 2.0)] {
            let info = BodyInfo {
                name: String::new(),
                mass,
                radius: 0.1,
                color: Point3::new(1.0, 1.0, 1.0),
                minified: MinifiedScale::identity(),
            };
            system
                .add_body(info, Vector3::new(x, 0.0, 0.0), Vector3::zeros(), None)
                .unwrap();
        }
        system
    }

    #[test]
    fn test_accelerations() {
        let integrator = Integrator::new(params(0.01)).unwrap();
        let accels = integrator.accelerations(&two_bodies());

        // a = G * m_other / d^2, towards the other body
        approx::assert_relative_eq!(accels[0], Vector3::new(0.25, 0.0, 0.0), max_relative = 1e-8);
        approx::assert_relative_eq!(accels[1], Vector3::new(-1.0, 0.0, 0.0), max_relative = 1e-8);
    }

    #[test]
    fn test_single_step_kicks_then_drifts() {
        let integrator = Integrator::new(params(0.1)).unwrap();
        let mut system = two_bodies();
        integrator.step(&mut system);

        // Velocity updated first, then position moves by the *new* velocity
        let light = system.get_body(crate::model::body::BodyID(1));
        approx::assert_relative_eq!(light.velocity.x, -0.1, max_relative = 1e-8);
        approx::assert_relative_eq!(light.position.x, 2.0 - 0.01, max_relative = 1e-8);
    }

    #[test]
    fn test_coincident_bodies_stay_finite() {
        let integrator = Integrator::new(params(0.1)).unwrap();
        let mut system = two_bodies();
        system.get_body_mut(crate::model::body::BodyID(1)).position = Vector3::zeros();

        integrator.step(&mut system);
        for body in system.bodies() {
            assert!(body.position.iter().all(|x| x.is_finite()));
            assert!(body.velocity.iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn test_accumulator() {
        let mut integrator = Integrator::new(params(0.125)).unwrap();
        let mut system = two_bodies();

        assert_eq!(integrator.advance(&mut system, 0.0625), 0);
        approx::assert_relative_eq!(integrator.accumulator(), 0.0625);

        // 0.0625 + 0.25 = 0.3125 -> two steps, with 0.0625 carried over
        assert_eq!(integrator.advance(&mut system, 0.25), 2);
        approx::assert_relative_eq!(integrator.accumulator(), 0.0625);

        // Nonsense input doesn't move anything
        assert_eq!(integrator.advance(&mut system, -1.0), 0);
        assert_eq!(integrator.advance(&mut system, f64::NAN), 0);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut integrator = Integrator::new(params(0.125)).unwrap();
        let mut system = two_bodies();

        // A ten-second hiccup only buys max_frame_time (0.3 s) worth of steps
        assert_eq!(integrator.advance(&mut system, 10.0), 2);
        approx::assert_relative_eq!(integrator.accumulator(), 0.05, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Integrator::new(params(0.0)).is_err());
        assert!(Integrator::new(params(-0.1)).is_err());
    }
}
