mod application;
mod color;
mod config;
mod controls;
mod geometry;
mod renderer;

#[cfg(feature = "wrapper")]
mod wrapper;

pub use application::*;
pub use color::*;
pub use config::*;
pub use controls::*;
pub use geometry::*;
pub use renderer::*;

#[cfg(feature = "wrapper")]
pub use wrapper::*;
