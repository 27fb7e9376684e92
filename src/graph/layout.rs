//! Node placement for renderers.
//!
//! Positions are metadata only; no shortest path computation reads them.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Screen position of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Drawing surface the layout is fitted into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub node_radius: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            node_radius: 10.0,
        }
    }
}

/// Extra horizontal offset that pushes node 0 outside the ring
const NODE_ZERO_OFFSET: f64 = 50.0;

/// Places node 0 to the right of a ring and spreads the remaining nodes
/// evenly around the ring, starting at an angle of 30 degrees.
pub fn circular_layout(node_count: usize, canvas: &Canvas) -> Vec<Position> {
    let margin = 2.0 * canvas.node_radius;
    let usable_width = canvas.width - 2.0 * margin;
    let usable_height = canvas.height - 2.0 * margin;

    // Center sits right of the canvas middle
    let center_x = canvas.width / 2.0 + usable_width / 8.0;
    let center_y = canvas.height / 2.0;
    let radius = usable_width.min(usable_height) / 2.0 - canvas.node_radius;

    let mut positions = Vec::with_capacity(node_count);
    if node_count == 0 {
        return positions;
    }

    positions.push(Position {
        x: center_x + radius + NODE_ZERO_OFFSET,
        y: center_y,
    });

    let ring_nodes = (node_count - 1) as f64;
    let angle_offset = PI / 6.0;
    for i in 1..node_count {
        let angle = 2.0 * PI * (i - 1) as f64 / ring_nodes + angle_offset;
        positions.push(Position {
            x: center_x + radius * angle.cos(),
            y: center_y + radius * angle.sin(),
        });
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: Position, b: Position) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn empty_and_single_node_layouts() {
        let canvas = Canvas::default();
        assert!(circular_layout(0, &canvas).is_empty());

        let single = circular_layout(1, &canvas);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0], Position { x: 690.0, y: 300.0 });
    }

    #[test]
    fn ring_nodes_share_the_radius() {
        let canvas = Canvas::default();
        let positions = circular_layout(6, &canvas);
        let center = Position { x: 370.0, y: 300.0 };

        assert_eq!(positions.len(), 6);
        for p in &positions[1..] {
            assert!((distance(*p, center) - 270.0).abs() < 1e-9);
        }

        // First ring node sits at 30 degrees
        let first = positions[1];
        assert!((first.x - (370.0 + 270.0 * (PI / 6.0).cos())).abs() < 1e-9);
        assert!((first.y - (300.0 + 270.0 * (PI / 6.0).sin())).abs() < 1e-9);
    }
}
