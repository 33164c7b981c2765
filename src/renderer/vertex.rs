//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: [f32; 4] = [0.3, 0.7, 1.0, 1.0];
    pub const ROCK: [f32; 4] = [0.55, 0.45, 0.35, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const RESTART_BUTTON: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const RESTART_LABEL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let vertices = [Vertex::new(1.0, 2.0, colors::SHIP); 3];
        assert_eq!(as_bytes(&vertices).len(), 72);
    }
}
