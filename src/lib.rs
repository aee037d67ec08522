pub mod cli;
pub mod gui;
pub mod math;
pub mod model;
