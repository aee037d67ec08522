use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;

use lagrange_demo::cli::{ModeArg, PhysicsArgs};
use lagrange_demo::gui::Viewer;
use lagrange_demo::model::{scenario, Simulation};

/// Sun, Earth and Moon under exaggerated gravity.
///
/// Ctrl switches between true scale and the minified view, Space cycles the
/// focused body (true scale only), the scroll wheel zooms on the focused
/// body, P pauses, and T hides the trails.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    physics: PhysicsArgs,
    /// How to draw the system at startup
    #[arg(long, value_enum, default_value_t = ModeArg::Minified)]
    mode: ModeArg,
}

fn main() -> Result<(), lagrange_demo::model::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let params = args.physics.to_parameters();
    let system = scenario::sun_earth_moon(&params)?;
    let simulation = Simulation::new(system, &params, args.mode.into())?;
    log::info!(
        "Simulating {} bodies at {} steps/s",
        simulation.system().len(),
        params.integrator.step.recip()
    );

    let mut window = Window::new("Lagrange Demo");
    window.set_light(Light::StickToCamera);

    let viewer = Viewer::new(simulation, &mut window);
    window.render_loop(viewer);
    Ok(())
}
