mod backend;
mod core;
mod error;
mod shader;

#[cfg(feature = "glow_rendering")]
mod glow_backend;

#[cfg(test)]
mod recording;

pub use backend::*;
pub use self::core::*;
pub use error::*;
pub use shader::*;

#[cfg(feature = "glow_rendering")]
pub use glow_backend::*;

#[cfg(test)]
pub(crate) use recording::*;
