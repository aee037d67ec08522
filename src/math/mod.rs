pub mod geometry;
pub mod ring_buffer;
