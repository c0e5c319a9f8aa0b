/// The positions of the rectangle, as (x, y) pairs in normalized device coordinates, in triangle
/// strip order: top-left, top-right, bottom-left, bottom-right.
#[rustfmt::skip]
pub const RECTANGLE_POSITIONS: [f32; 8] = [
    -0.7,  0.5,
     0.7,  0.5,
    -0.7, -0.5,
     0.7, -0.5,
];

/// The immutable vertex data that the `Renderer` uploads once during its initialization: a
/// sequence of 2-dimensional positions that form a rectangle when drawn as a triangle strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryBuffer {
    positions: [f32; 8],
}

impl GeometryBuffer {
    /// Gets the rectangle spanning x in [-0.7, 0.7] and y in [-0.5, 0.5].
    pub const fn rectangle() -> Self {
        Self {
            positions: RECTANGLE_POSITIONS,
        }
    }

    /// Gets the raw floats of this geometry, 2 per vertex.
    pub fn get_positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn get_num_vertices(&self) -> usize {
        self.positions.len() / VertexLayout::POSITION_2D.components as usize
    }

    /// Computes the smallest axis-aligned `Bounds` that contain all vertices of this geometry.
    pub fn get_bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        for vertex in self.positions.chunks_exact(2) {
            bounds.left = bounds.left.min(vertex[0]);
            bounds.right = bounds.right.max(vertex[0]);
            bounds.bottom = bounds.bottom.min(vertex[1]);
            bounds.top = bounds.top.max(vertex[1]);
        }
        bounds
    }
}

/// Describes how the vertex shader input reads the uploaded vertex buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VertexLayout {
    /// The number of floats per vertex
    pub components: i32,
    pub normalized: bool,
    /// The distance in bytes between consecutive vertices, where 0 means tightly packed
    pub stride: i32,
    /// The offset in bytes of the first vertex in the buffer
    pub offset: i32,
}

impl VertexLayout {
    pub const POSITION_2D: VertexLayout = VertexLayout {
        components: 2,
        normalized: false,
        stride: 0,
        offset: 0,
    };
}

/// An axis-aligned rectangle in normalized device coordinates. Used to reason about where the
/// geometry ends up on the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    left: f32,
    bottom: f32,
    right: f32,
    top: f32,
}

impl Bounds {
    /// Constructs new `Bounds` with the given left bound, bottom bound, right bound and top bound.
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }

    pub fn get_left(&self) -> f32 {
        self.left
    }

    pub fn get_bottom(&self) -> f32 {
        self.bottom
    }

    pub fn get_right(&self) -> f32 {
        self.right
    }

    pub fn get_top(&self) -> f32 {
        self.top
    }
}
