use crate::*;

use std::fmt::{
    Display,
    Formatter,
    Result,
};

/// The errors that can prevent the `Application` from starting. All of them are fatal: once one of
/// them occurred, nothing will be rendered and the user should be notified with the `Display`
/// text of the error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InitError {
    /// The host doesn't have a drawing surface with the given id
    MissingSurface { id: String },
    /// The drawing surface exists, but can't provide the required graphics context
    ContextUnavailable(String),
    /// The shader of the given stage failed to compile. The `log` is the compiler diagnostic.
    ShaderCompilation { stage: ShaderStage, log: String },
    /// The shader program failed to link. The `log` is the linker diagnostic.
    ProgramLink { log: String },
    /// The linked shader program doesn't have an active vertex input with this name
    MissingAttribute(String),
    /// The linked shader program doesn't have an active uniform variable with this name
    MissingUniform(String),
    /// The graphics context couldn't allocate the vertex buffer
    BufferAllocation(String),
    /// The configuration given by the host page is invalid
    InvalidConfig(String),
}

impl Display for InitError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result {
        match self {
            InitError::MissingSurface { id } => write!(
                formatter, "Unable to find the canvas element with id '{}'", id
            ),
            InitError::ContextUnavailable(reason) => write!(
                formatter,
                "Unable to initialize WebGL. Your browser may not support it. ({})",
                reason
            ),
            InitError::ShaderCompilation { stage, log } => write!(
                formatter,
                "An error occurred compiling the shaders: {} ({} stage)",
                log, stage.get_name()
            ),
            InitError::ProgramLink { log } => write!(
                formatter, "Unable to initialize the shader program: {}", log
            ),
            InitError::MissingAttribute(name) => write!(
                formatter, "The shader program doesn't have the vertex input '{}'", name
            ),
            InitError::MissingUniform(name) => write!(
                formatter, "The shader program doesn't have the uniform variable '{}'", name
            ),
            InitError::BufferAllocation(reason) => write!(
                formatter, "Unable to allocate the vertex buffer: {}", reason
            ),
            InitError::InvalidConfig(reason) => write!(
                formatter, "Invalid configuration: {}", reason
            ),
        }
    }
}

impl std::error::Error for InitError {}

impl From<ConfigError> for InitError {
    fn from(error: ConfigError) -> Self {
        InitError::InvalidConfig(error.to_string())
    }
}
