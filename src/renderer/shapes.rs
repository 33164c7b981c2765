//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a rectangle, in pixel coordinates
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t) = (rect.left() as f32, rect.top() as f32);
    let (r, b) = (rect.right() as f32, rect.bottom() as f32);
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}

/// Append a rectangle to a vertex list
pub fn push_quad(vertices: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    vertices.extend_from_slice(&quad(rect, color));
}

/// Convert pixel coordinates (origin top-left, y down) to clip space
/// ([-1, 1], y up) in place
pub fn to_clip_space(vertices: &mut [Vertex], width: i32, height: i32) {
    let (w, h) = (width as f32, height as f32);
    for vertex in vertices {
        let [x, y] = vertex.position;
        vertex.position = [x / w * 2.0 - 1.0, 1.0 - y / h * 2.0];
    }
}
