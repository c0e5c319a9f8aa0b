use crate::*;

/// The stages of the shader program that the `Renderer` compiles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn get_name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// The graphics operations that the `Renderer` needs from the underlying graphics API (WebGL on
/// the web and OpenGL on desktop).
///
/// Each method corresponds to one (or a few) calls into the graphics API, and the `Renderer`
/// decides the order in which they are issued. This keeps the `Renderer` independent of the
/// actual graphics context, which allows its behavior to be unit tested without any window or
/// browser environment.
///
/// ## Handles
/// The associated types are the handles that the graphics API hands out for compiled shader
/// stages, linked programs, buffers and uniform variables. The `Renderer` stores the ones it
/// needs for as long as it lives.
pub trait GraphicsBackend {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type UniformLocation;

    /// Sets the color that subsequent `clear` calls fill the frame with.
    fn set_clear_color(&mut self, color: Color);

    /// Fills the color buffer of the frame with the current clear color.
    fn clear(&mut self);

    /// Sets the viewport to the rectangle from (0, 0) to (*width*, *height*) in pixels.
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Creates and compiles a shader of the given `ShaderStage` from the given *source* code.
    ///
    /// If the compilation fails, the shader must be deleted and the compiler diagnostic must be
    /// returned as error.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;

    fn delete_shader(&mut self, shader: Self::Shader);

    /// Creates a program, attaches the given compiled *vertex* and *fragment* shaders to it and
    /// links it.
    ///
    /// If linking fails, the program must be deleted and the linker diagnostic must be returned
    /// as error.
    fn link_program(
        &mut self, vertex: Self::Shader, fragment: Self::Shader
    ) -> Result<Self::Program, String>;

    fn delete_program(&mut self, program: Self::Program);

    /// Gets the location of the vertex input with the given *name*, or `None` if the program
    /// doesn't have an active input with that name.
    fn get_attribute_location(&mut self, program: Self::Program, name: &str) -> Option<u32>;

    /// Gets the handle of the uniform variable with the given *name*, or `None` if the program
    /// doesn't have an active uniform variable with that name.
    fn get_uniform_location(
        &mut self, program: Self::Program, name: &str
    ) -> Option<Self::UniformLocation>;

    /// Allocates a vertex buffer, binds it and fills it with the given *data*, hinting to the
    /// graphics API that the data will never be modified.
    fn create_static_vertex_buffer(&mut self, data: &[f32]) -> Result<Self::Buffer, String>;

    /// Tells the vertex input at *location* to read floats from the currently bound vertex buffer
    /// according to the given `VertexLayout`, and enables that input.
    fn set_vertex_layout(&mut self, location: u32, layout: VertexLayout);

    fn use_program(&mut self, program: Self::Program);

    /// Sets the 4-component float uniform variable at *location* of the program in use to the
    /// components of *color*.
    fn set_uniform_color(&mut self, location: &Self::UniformLocation, color: Color);

    /// Draws *count* vertices of the bound vertex buffer, starting at index *first*, as a
    /// triangle strip.
    fn draw_triangle_strip(&mut self, first: u32, count: u32);
}
