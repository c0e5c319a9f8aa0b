use crate::*;

use std::cell::RefCell;
use std::rc::Rc;

/// A graphics call that was issued to a `RecordingBackend`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum GlCall {
    ClearColor([f32; 4]),
    Clear,
    Viewport(u32, u32),
    CompileShader(ShaderStage),
    DeleteShader(ShaderStage),
    LinkProgram,
    DeleteProgram,
    GetAttributeLocation(String),
    GetUniformLocation(String),
    UploadStaticVertices(Vec<f32>),
    VertexLayout(u32, VertexLayout),
    UseProgram,
    UniformColor([f32; 4]),
    DrawTriangleStrip { first: u32, count: u32 },
}

impl GlCall {
    pub(crate) fn is_draw(&self) -> bool {
        matches!(self, GlCall::DrawTriangleStrip { .. })
    }
}

/// A `GraphicsBackend` that doesn't draw anything, but remembers every call that was made to it.
/// It can also simulate compiler, linker and allocation failures.
pub(crate) struct RecordingBackend {
    calls: Rc<RefCell<Vec<GlCall>>>,
    compile_failure: Option<(ShaderStage, String)>,
    link_failure: Option<String>,
    buffer_failure: Option<String>,
    has_attributes: bool,
    has_uniforms: bool,
}

impl RecordingBackend {
    pub(crate) const POSITION_LOCATION: u32 = 0;

    pub(crate) fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            compile_failure: None,
            link_failure: None,
            buffer_failure: None,
            has_attributes: true,
            has_uniforms: true,
        }
    }

    pub(crate) fn fail_compile(mut self, stage: ShaderStage, log: &str) -> Self {
        self.compile_failure = Some((stage, log.to_string()));
        self
    }

    pub(crate) fn fail_link(mut self, log: &str) -> Self {
        self.link_failure = Some(log.to_string());
        self
    }

    pub(crate) fn fail_buffer(mut self, log: &str) -> Self {
        self.buffer_failure = Some(log.to_string());
        self
    }

    pub(crate) fn without_attributes(mut self) -> Self {
        self.has_attributes = false;
        self
    }

    pub(crate) fn without_uniforms(mut self) -> Self {
        self.has_uniforms = false;
        self
    }

    /// Gets a shared reference to the list of recorded calls. This is useful for inspecting the
    /// calls after the backend has been moved (and possibly dropped).
    pub(crate) fn share_calls(&self) -> Rc<RefCell<Vec<GlCall>>> {
        Rc::clone(&self.calls)
    }

    pub(crate) fn get_calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count_draws(&self) -> usize {
        self.calls.borrow().iter().filter(|call| call.is_draw()).count()
    }

    pub(crate) fn count_uploads(&self) -> usize {
        self.calls.borrow().iter().filter(
            |call| matches!(call, GlCall::UploadStaticVertices(_))
        ).count()
    }

    /// Gets the data of the most recent vertex buffer upload
    pub(crate) fn get_uploaded_vertices(&self) -> Option<Vec<f32>> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            GlCall::UploadStaticVertices(data) => Some(data.clone()),
            _ => None,
        })
    }

    /// Gets the value of the color uniform at the time of the most recent draw call, or `None`
    /// if nothing has been drawn yet.
    pub(crate) fn get_last_drawn_color(&self) -> Option<[f32; 4]> {
        let mut color = None;
        let mut drawn_color = None;
        for call in self.calls.borrow().iter() {
            match call {
                GlCall::UniformColor(components) => color = Some(*components),
                GlCall::DrawTriangleStrip { .. } => drawn_color = color,
                _ => (),
            }
        }
        drawn_color
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl GraphicsBackend for RecordingBackend {
    type Shader = ShaderStage;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn set_clear_color(&mut self, color: Color) {
        self.record(GlCall::ClearColor(color.to_float_array()));
    }

    fn clear(&mut self) {
        self.record(GlCall::Clear);
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.record(GlCall::Viewport(width, height));
    }

    fn compile_shader(&mut self, stage: ShaderStage, _source: &str) -> Result<ShaderStage, String> {
        self.record(GlCall::CompileShader(stage));
        match &self.compile_failure {
            Some((failing_stage, log)) if *failing_stage == stage => {
                self.record(GlCall::DeleteShader(stage));
                Err(log.clone())
            }
            _ => Ok(stage),
        }
    }

    fn delete_shader(&mut self, shader: ShaderStage) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn link_program(&mut self, _vertex: ShaderStage, _fragment: ShaderStage) -> Result<u32, String> {
        self.record(GlCall::LinkProgram);
        match &self.link_failure {
            Some(log) => Err(log.clone()),
            None => Ok(1),
        }
    }

    fn delete_program(&mut self, _program: u32) {
        self.record(GlCall::DeleteProgram);
    }

    fn get_attribute_location(&mut self, _program: u32, name: &str) -> Option<u32> {
        self.record(GlCall::GetAttributeLocation(name.to_string()));
        if self.has_attributes {
            Some(Self::POSITION_LOCATION)
        } else {
            None
        }
    }

    fn get_uniform_location(&mut self, _program: u32, name: &str) -> Option<String> {
        self.record(GlCall::GetUniformLocation(name.to_string()));
        if self.has_uniforms {
            Some(name.to_string())
        } else {
            None
        }
    }

    fn create_static_vertex_buffer(&mut self, data: &[f32]) -> Result<u32, String> {
        if let Some(log) = &self.buffer_failure {
            return Err(log.clone());
        }
        self.record(GlCall::UploadStaticVertices(data.to_vec()));
        Ok(1)
    }

    fn set_vertex_layout(&mut self, location: u32, layout: VertexLayout) {
        self.record(GlCall::VertexLayout(location, layout));
    }

    fn use_program(&mut self, _program: u32) {
        self.record(GlCall::UseProgram);
    }

    fn set_uniform_color(&mut self, _location: &String, color: Color) {
        self.record(GlCall::UniformColor(color.to_float_array()));
    }

    fn draw_triangle_strip(&mut self, first: u32, count: u32) {
        self.record(GlCall::DrawTriangleStrip { first, count });
    }
}
