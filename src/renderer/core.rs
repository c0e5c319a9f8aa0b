use crate::*;

use log::{info, trace};

/// The `Renderer` owns the graphics context, the shader program and the vertex buffer with the
/// rectangle. It is created once by `initialize` and then draws the rectangle with a different
/// color every time `render` is called.
///
/// The program and the geometry are fixed after initialization: `render` only changes the value
/// of the uniform color variable.
pub struct Renderer<B: GraphicsBackend> {
    backend: B,
    geometry: GeometryBuffer,

    program: B::Program,
    vertex_buffer: B::Buffer,
    position_location: u32,
    color_location: B::UniformLocation,
}

impl<B: GraphicsBackend> Renderer<B> {
    /// Prepares the given (already acquired) graphics *backend* for drawing the rectangle with the
    /// `ShaderSources::flat_color` program.
    pub fn initialize(backend: B) -> Result<Self, InitError> {
        Self::initialize_with(backend, ShaderSources::flat_color(), GeometryBuffer::rectangle())
    }

    /// Prepares the given graphics *backend* for drawing the given *geometry* with the program
    /// compiled from the given *sources*. These sources must declare the `POSITION_ATTRIBUTE` and
    /// the `COLOR_UNIFORM`.
    ///
    /// The frame is cleared to opaque black before the shaders are compiled. When any step
    /// fails, the remaining steps are skipped and the `InitError` is returned. In particular, the
    /// program is not linked when a shader fails to compile, and the program is never used when
    /// it fails to link. The shader stages are deleted once the program is linked, and the
    /// program is deleted again when a later step fails.
    pub fn initialize_with(
        mut backend: B, sources: ShaderSources, geometry: GeometryBuffer
    ) -> Result<Self, InitError> {
        backend.set_clear_color(Color::BLACK);
        backend.clear();

        let program = build_program(&mut backend, sources)?;
        info!("Linked the shader program");

        match prepare_program(&mut backend, program, &geometry) {
            Ok((position_location, color_location, vertex_buffer)) => {
                backend.use_program(program);
                Ok(Self {
                    backend,
                    geometry,
                    program,
                    vertex_buffer,
                    position_location,
                    color_location,
                })
            }
            Err(init_error) => {
                backend.delete_program(program);
                Err(init_error)
            }
        }
    }

    /// Clears the frame and draws the rectangle with the given fill *color*.
    pub fn render(&mut self, color: Color) {
        trace!("Rendering the rectangle with {:?}", color);
        self.backend.clear();
        self.backend.set_uniform_color(&self.color_location, color);
        self.backend.draw_triangle_strip(0, self.geometry.get_num_vertices() as u32);
    }

    /// Lets subsequent `render` calls draw onto the area from (0, 0) to (*width*, *height*).
    /// The caller should `render` again after this.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.backend.set_viewport(width, height);
    }

    pub fn get_geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    pub fn get_program(&self) -> B::Program {
        self.program
    }

    pub fn get_vertex_buffer(&self) -> B::Buffer {
        self.vertex_buffer
    }

    /// Gets the location of the `POSITION_ATTRIBUTE` vertex input of the program
    pub fn get_position_location(&self) -> u32 {
        self.position_location
    }

    /// Gets the graphics backend of this `Renderer`. Drawing with it directly will most likely be
    /// overwritten by the next `render` call.
    pub fn get_backend(&self) -> &B {
        &self.backend
    }
}

fn build_program<B: GraphicsBackend>(
    backend: &mut B, sources: ShaderSources
) -> Result<B::Program, InitError> {
    let vertex = compile(backend, ShaderStage::Vertex, sources.vertex)?;
    let fragment = match compile(backend, ShaderStage::Fragment, sources.fragment) {
        Ok(fragment) => fragment,
        Err(error) => {
            backend.delete_shader(vertex);
            return Err(error);
        }
    };

    // The stages are released together with the program once they are attached to it
    let linked = backend.link_program(vertex, fragment);
    backend.delete_shader(vertex);
    backend.delete_shader(fragment);
    linked.map_err(|log| InitError::ProgramLink { log })
}

type PreparedProgram<B> = (
    u32, <B as GraphicsBackend>::UniformLocation, <B as GraphicsBackend>::Buffer
);

fn prepare_program<B: GraphicsBackend>(
    backend: &mut B, program: B::Program, geometry: &GeometryBuffer
) -> Result<PreparedProgram<B>, InitError> {
    let position_location = backend
        .get_attribute_location(program, POSITION_ATTRIBUTE)
        .ok_or_else(|| InitError::MissingAttribute(POSITION_ATTRIBUTE.to_string()))?;
    let color_location = backend
        .get_uniform_location(program, COLOR_UNIFORM)
        .ok_or_else(|| InitError::MissingUniform(COLOR_UNIFORM.to_string()))?;

    let vertex_buffer = backend
        .create_static_vertex_buffer(geometry.get_positions())
        .map_err(InitError::BufferAllocation)?;
    backend.set_vertex_layout(position_location, VertexLayout::POSITION_2D);
    info!("Uploaded {} vertices", geometry.get_num_vertices());

    Ok((position_location, color_location, vertex_buffer))
}

fn compile<B: GraphicsBackend>(
    backend: &mut B, stage: ShaderStage, source: &str
) -> Result<B::Shader, InitError> {
    backend
        .compile_shader(stage, source)
        .map_err(|log| InitError::ShaderCompilation { stage, log })
}
