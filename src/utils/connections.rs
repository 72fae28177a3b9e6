use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::tree_layout::{TreeLayout, get_path_to_node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Straight,
    Orthogonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A parent-to-child edge routed as a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: i64,
    pub to: i64,
    pub kind: ConnectionKind,
    pub points: Vec<Point>,
    /// Both ends lie on the active path; drawn solid, otherwise dashed.
    pub active: bool,
}

impl Connection {
    /// SVG path data for the polyline.
    pub fn svg_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{} {} {}", if i == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Route every edge of the layout, marking those on the path to `active_leaf`.
pub fn calculate_connections(layout: &TreeLayout, active_leaf: i64) -> Vec<Connection> {
    let active: HashSet<i64> = get_path_to_node(layout, active_leaf).into_iter().collect();

    let mut connections = Vec::new();
    for node in layout.values() {
        for child_id in &node.children {
            let Some(child) = layout.get(child_id) else {
                continue;
            };

            let start = Point {
                x: node.x + node.width / 2.0,
                y: node.y + node.height,
            };
            let end = Point {
                x: child.x + child.width / 2.0,
                y: child.y,
            };

            let (kind, points) = if node.column == child.column {
                (ConnectionKind::Straight, vec![start, end])
            } else {
                let mid_y = start.y + (end.y - start.y) / 2.0;
                (
                    ConnectionKind::Orthogonal,
                    vec![
                        start,
                        Point { x: start.x, y: mid_y },
                        Point { x: end.x, y: mid_y },
                        end,
                    ],
                )
            };

            connections.push(Connection {
                from: node.id,
                to: child.id,
                kind,
                points,
                active: active.contains(&node.id) && active.contains(&child.id),
            });
        }
    }

    connections
}
