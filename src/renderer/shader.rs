/// The name of the vertex input that receives the positions of the rectangle
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";

/// The name of the uniform variable that holds the fill color
pub const COLOR_UNIFORM: &str = "uFragColor";

/// The vertex shader forwards the position of each vertex unchanged to clip space.
pub const VERTEX_SHADER_SOURCE: &str = "
attribute vec4 aVertexPosition;

void main() {
    gl_Position = aVertexPosition;
}
";

/// The fragment shader gives every pixel the color of the uniform variable.
pub const FRAGMENT_SHADER_SOURCE: &str = "
precision mediump float;

uniform vec4 uFragColor;

void main() {
    gl_FragColor = uFragColor;
}
";

/// The source code of both stages of a shader program.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl ShaderSources<'static> {
    /// Gets the sources of the program that fills the rectangle with the color of the
    /// `COLOR_UNIFORM`.
    pub const fn flat_color() -> Self {
        Self {
            vertex: VERTEX_SHADER_SOURCE,
            fragment: FRAGMENT_SHADER_SOURCE,
        }
    }
}
