use clap::Parser;
use plotters::prelude::*;

use lagrange_demo::cli::PhysicsArgs;
use lagrange_demo::model::{scenario, BodyID, Integrator, System};

/// Runs the built-in scenario without a window and plots how the Earth-Sun
/// and Moon-Earth separations evolve, as a sanity check on the integrator.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    physics: PhysicsArgs,
    /// Simulated time to run for, in seconds
    #[arg(long, default_value_t = 120.0)]
    duration: f64,
    /// Where to write the plot
    #[arg(long, default_value = "plots/orbit-drift.png")]
    output: String,
}

struct Sample {
    time: f64,
    earth_sun: f64,
    moon_earth: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let params = args.physics.to_parameters();
    let mut system = scenario::sun_earth_moon(&params)?;
    let integrator = Integrator::new(params.integrator)?;
    let (gravity, softening, step) = (
        params.integrator.gravity,
        params.integrator.softening,
        params.integrator.step,
    );

    let initial_energy = system.total_energy(gravity, softening);
    let num_steps = (args.duration / step).ceil() as usize;
    // Keep the plot to a sensible number of points
    let sample_every = usize::max(num_steps / 2000, 1);

    let mut samples = vec![sample(&system, 0.0)];
    for i in 1..=num_steps {
        integrator.step(&mut system);
        if i % sample_every == 0 {
            samples.push(sample(&system, i as f64 * step));
        }
    }

    let final_energy = system.total_energy(gravity, softening);
    log::info!(
        "Ran {} steps; relative energy drift {:.3e}",
        num_steps,
        (final_energy - initial_energy) / initial_energy.abs()
    );

    draw_plot(&args.output, &samples)?;
    log::info!("Wrote {}", args.output);
    Ok(())
}

fn separation(system: &System, a: BodyID, b: BodyID) -> f64 {
    (system.get_body(a).position - system.get_body(b).position).norm()
}

fn sample(system: &System, time: f64) -> Sample {
    let (sun, earth, moon) = (BodyID(0), BodyID(1), BodyID(2));
    Sample {
        time,
        earth_sun: separation(system, earth, sun),
        moon_earth: separation(system, moon, earth),
    }
}

// Both curves are drawn relative to their starting value, so they share an axis.
fn draw_plot(name: &str, samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = std::path::Path::new(name).parent() {
        std::fs::create_dir_all(dir)?;
    }

    let first = &samples[0];
    let curves = [
        ("Earth-Sun", RED, samples.iter().map(|s| s.earth_sun / first.earth_sun).collect::<Vec<_>>()),
        ("Moon-Earth", BLUE, samples.iter().map(|s| s.moon_earth / first.moon_earth).collect()),
    ];

    let t_max = samples.last().map_or(1.0, |s| s.time) as f32;
    let (y_min, y_max) = curves
        .iter()
        .flat_map(|(_, _, ys)| ys.iter().copied())
        .fold((1.0f64, 1.0f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let margin = (y_max - y_min).max(1e-3) * 0.1;

    let root = BitMapBackend::new(name, (960, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Separation / initial separation", ("sans-serif", 24))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(
            0.0f32..t_max,
            (y_min - margin) as f32..(y_max + margin) as f32,
        )?;

    chart.configure_mesh().draw()?;

    for (label, color, ys) in curves.iter() {
        chart
            .draw_series(LineSeries::new(
                samples
                    .iter()
                    .zip(ys.iter())
                    .map(|(s, y)| (s.time as f32, *y as f32)),
                color,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], *color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
