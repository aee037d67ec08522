//! Command-line overrides shared by the binaries.

use clap::{Args, ValueEnum};

use crate::model::{Parameters, RenderMode};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    ToScale,
    Minified,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::ToScale => RenderMode::ToScale,
            ModeArg::Minified => RenderMode::Minified,
        }
    }
}

/// Physics and trail knobs. Anything left unset keeps its default.
#[derive(Debug, Clone, Default, Args)]
pub struct PhysicsArgs {
    /// Gravitational constant (much stronger than reality by default)
    #[arg(long)]
    pub gravity: Option<f64>,
    /// Fixed physics steps per simulated second
    #[arg(long)]
    pub steps_per_second: Option<f64>,
    /// Longest stretch of wall time simulated in a single frame, in seconds
    #[arg(long)]
    pub max_frame_time: Option<f64>,
    /// Softening term added to squared distances
    #[arg(long)]
    pub softening: Option<f64>,
    /// Number of segments kept per trail
    #[arg(long)]
    pub trail_length: Option<usize>,
}

impl PhysicsArgs {
    pub fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::default();
        if let Some(gravity) = self.gravity {
            params.integrator.gravity = gravity;
        }
        if let Some(rate) = self.steps_per_second {
            params.integrator.step = rate.recip();
        }
        if let Some(max_frame_time) = self.max_frame_time {
            params.integrator.max_frame_time = max_frame_time;
        }
        if let Some(softening) = self.softening {
            params.integrator.softening = softening;
        }
        if let Some(trail_length) = self.trail_length {
            params.trail.capacity = trail_length;
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        physics: PhysicsArgs,
        #[arg(long, value_enum, default_value_t = ModeArg::Minified)]
        mode: ModeArg,
    }

    #[test]
    fn test_defaults_untouched() {
        let args = TestArgs::try_parse_from(["test"]).unwrap();
        let params = args.physics.to_parameters();
        let defaults = Parameters::default();
        assert_eq!(params.integrator.gravity, defaults.integrator.gravity);
        assert_eq!(params.integrator.step, defaults.integrator.step);
        assert_eq!(params.trail.capacity, defaults.trail.capacity);
        assert_eq!(RenderMode::from(args.mode), RenderMode::Minified);
    }

    #[test]
    fn test_overrides() {
        let args = TestArgs::try_parse_from([
            "test",
            "--gravity",
            "2.5",
            "--steps-per-second",
            "100",
            "--trail-length",
            "16",
            "--mode",
            "to-scale",
        ])
        .unwrap();
        let params = args.physics.to_parameters();
        assert_eq!(params.integrator.gravity, 2.5);
        approx::assert_relative_eq!(params.integrator.step, 0.01);
        assert_eq!(params.trail.capacity, 16);
        assert_eq!(RenderMode::from(args.mode), RenderMode::ToScale);

        // Validation is still the model's job
        let args = TestArgs::try_parse_from(["test", "--trail-length", "0"]).unwrap();
        assert!(args.physics.to_parameters().validate().is_err());
    }
}
