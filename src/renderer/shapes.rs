//! Shape generation for 2D primitives
//!
//! Input is in playfield units (origin top-left, y down); output vertices
//! are in normalized device coordinates.

use super::vertex::Vertex;
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::Quad;

/// Map a playfield point to NDC (-1..1, y up)
#[inline]
pub fn playfield_to_ndc(x: f32, y: f32) -> (f32, f32) {
    (
        x / PLAYFIELD_WIDTH * 2.0 - 1.0,
        1.0 - y / PLAYFIELD_HEIGHT * 2.0,
    )
}

/// Two triangles covering the quad
pub fn quad(q: &Quad) -> [Vertex; 6] {
    let (left, top) = playfield_to_ndc(q.x1, q.y1);
    let (right, bottom) = playfield_to_ndc(q.x2, q.y2);

    [
        Vertex::new(left, top, q.color),
        Vertex::new(left, bottom, q.color),
        Vertex::new(right, top, q.color),
        Vertex::new(right, top, q.color),
        Vertex::new(left, bottom, q.color),
        Vertex::new(right, bottom, q.color),
    ]
}

/// Vertices for a whole frame
pub fn quads(items: &[Quad]) -> Vec<Vertex> {
    items.iter().flat_map(quad).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_corners_map_to_ndc_corners() {
        assert_eq!(playfield_to_ndc(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(playfield_to_ndc(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT), (1.0, -1.0));
        assert_eq!(
            playfield_to_ndc(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            (0.0, 0.0)
        );
    }

    #[test]
    fn test_quad_vertices() {
        let color = [0.2, 0.4, 0.6, 1.0];
        let q = Quad {
            x1: 0.0,
            y1: 0.0,
            x2: PLAYFIELD_WIDTH / 2.0,
            y2: PLAYFIELD_HEIGHT / 2.0,
            color,
        };
        let verts = quad(&q);
        assert_eq!(verts[0], Vertex::new(-1.0, 1.0, color));
        assert_eq!(verts[5], Vertex::new(0.0, 0.0, color));
        assert!(verts.iter().all(|v| v.color == color));
    }

    #[test]
    fn test_frame_has_six_vertices_per_quad() {
        let state = crate::sim::GameState::new(1, crate::AiMode::Reactive);
        assert_eq!(quads(&state.quads()).len(), 18);
    }
}
