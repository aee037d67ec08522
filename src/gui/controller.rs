use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, WindowEvent};

use crate::model::{Command, Simulation, ZoomDirection};

// Key config, all in one place
const KEY_TOGGLE_MODE_LEFT: Key = Key::LControl;
const KEY_TOGGLE_MODE_RIGHT: Key = Key::RControl;
const KEY_CYCLE_TARGET: Key = Key::Space;
const KEY_TOGGLE_PAUSE: Key = Key::P;
const KEY_TOGGLE_TRAILS: Key = Key::T;

// Frame rate is averaged over windows at least this long
const FPS_WINDOW: Duration = Duration::from_secs(1);

pub struct Controller {
    show_trails: bool,
    // -- frame rate --
    window_start: Instant,
    frames_in_window: u32,
    fps: f64,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            show_trails: true,
            window_start: Instant::now(),
            frames_in_window: 0,
            fps: 0.0,
        }
    }

    /// Turns window events into simulation commands. Nothing is applied here;
    /// the simulation picks the commands up on its next frame.
    pub fn process_event(&mut self, event: Event, simulation: &mut Simulation) {
        match event.value {
            WindowEvent::Key(KEY_TOGGLE_MODE_LEFT | KEY_TOGGLE_MODE_RIGHT, Action::Press, _) => {
                simulation.queue(Command::ToggleMode);
            }
            WindowEvent::Key(KEY_CYCLE_TARGET, Action::Press, _) => {
                simulation.queue(Command::CycleTarget);
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                simulation.queue(Command::TogglePause);
            }
            WindowEvent::Key(KEY_TOGGLE_TRAILS, Action::Press, _) => {
                self.show_trails = !self.show_trails;
            }
            WindowEvent::Scroll(_, off, _) => {
                if let Some(direction) = ZoomDirection::from_scroll(off) {
                    simulation.queue(Command::Zoom(direction));
                }
            }
            _ => {}
        }
    }

    pub fn show_trails(&self) -> bool {
        self.show_trails
    }

    /// Frame rate over the last completed window.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn increment_frame_counter(&mut self) {
        self.count_frame_at(Instant::now());
    }

    fn count_frame_at(&mut self, now: Instant) {
        self.frames_in_window += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed > FPS_WINDOW {
            self.fps = self.frames_in_window as f64 / elapsed.as_secs_f64();
            log::info!("{:.3} ms/frame ({:.1} FPS)", 1000.0 / self.fps, self.fps);
            self.window_start = now;
            self.frames_in_window = 0;
        }
    }
}
