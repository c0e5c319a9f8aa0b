use crate::*;

use glow::HasContext;

/// The `GraphicsBackend` for real graphics contexts: WebGL on the web and OpenGL (ES) on
/// desktop, both accessed through `glow`.
///
/// Normally, only the *wrapper* should construct this.
pub struct GlowBackend {
    gl: glow::Context,
}

impl GlowBackend {
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }
}

fn shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// Safety: every handle passed to `self.gl` was created by `self.gl`.
impl GraphicsBackend for GlowBackend {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type UniformLocation = glow::UniformLocation;

    fn set_clear_color(&mut self, color: Color) {
        unsafe {
            self.gl.clear_color(
                color.get_red_float(),
                color.get_green_float(),
                color.get_blue_float(),
                color.get_alpha_float(),
            );
        }
    }

    fn clear(&mut self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) }
    }

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<glow::Shader, String> {
        unsafe {
            let shader = self.gl.create_shader(shader_type(stage))?;
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);

            if self.gl.get_shader_compile_status(shader) {
                Ok(shader)
            } else {
                let log = self.gl.get_shader_info_log(shader);
                self.gl.delete_shader(shader);
                Err(log)
            }
        }
    }

    fn delete_shader(&mut self, shader: glow::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn link_program(
        &mut self, vertex: glow::Shader, fragment: glow::Shader
    ) -> Result<glow::Program, String> {
        unsafe {
            let program = self.gl.create_program()?;
            self.gl.attach_shader(program, vertex);
            self.gl.attach_shader(program, fragment);
            self.gl.link_program(program);

            if self.gl.get_program_link_status(program) {
                Ok(program)
            } else {
                let log = self.gl.get_program_info_log(program);
                self.gl.delete_program(program);
                Err(log)
            }
        }
    }

    fn delete_program(&mut self, program: glow::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn get_attribute_location(&mut self, program: glow::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn get_uniform_location(
        &mut self, program: glow::Program, name: &str
    ) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn create_static_vertex_buffer(&mut self, data: &[f32]) -> Result<glow::Buffer, String> {
        let bytes: Vec<u8> = data.iter().flat_map(|value| value.to_ne_bytes()).collect();
        unsafe {
            let buffer = self.gl.create_buffer()?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, &bytes, glow::STATIC_DRAW);
            Ok(buffer)
        }
    }

    fn set_vertex_layout(&mut self, location: u32, layout: VertexLayout) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                location,
                layout.components,
                glow::FLOAT,
                layout.normalized,
                layout.stride,
                layout.offset,
            );
            self.gl.enable_vertex_attrib_array(location);
        }
    }

    fn use_program(&mut self, program: glow::Program) {
        unsafe { self.gl.use_program(Some(program)) }
    }

    fn set_uniform_color(&mut self, location: &glow::UniformLocation, color: Color) {
        let [red, green, blue, alpha] = color.to_float_array();
        unsafe { self.gl.uniform_4_f32(Some(location), red, green, blue, alpha) }
    }

    fn draw_triangle_strip(&mut self, first: u32, count: u32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLE_STRIP, first as i32, count as i32) }
    }
}
