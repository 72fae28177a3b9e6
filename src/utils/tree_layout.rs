//! Spatial layout of a message tree for the tree view.
//!
//! Conversation branches flow downward in columns. At a fork the first child
//! keeps its parent's column and every further child opens the next free
//! column to the right, so each path reads straight down and horizontal
//! movement only happens at decision points.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::MessageContainer;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub card_width: f64,
    pub card_height: f64,
    pub column_spacing: f64,
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            card_width: 250.0,
            card_height: 100.0,
            column_spacing: 300.0,
            vertical_spacing: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub children: Vec<i64>,
    pub parent: Option<i64>,
    pub column: usize,
    pub depth: usize,
}

pub type TreeLayout = BTreeMap<i64, TreeNode>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

struct LayoutBuilder<'a> {
    config: &'a LayoutConfig,
    children: HashMap<i64, Vec<i64>>,
    next_column: usize,
    layout: TreeLayout,
}

impl LayoutBuilder<'_> {
    fn assign(&mut self, node_id: i64, column: usize, depth: usize, parent: Option<i64>) {
        let children = self.children.get(&node_id).cloned().unwrap_or_default();

        self.layout.insert(
            node_id,
            TreeNode {
                id: node_id,
                x: column as f64 * self.config.column_spacing,
                y: depth as f64 * self.config.vertical_spacing,
                width: self.config.card_width,
                height: self.config.card_height,
                children: children.clone(),
                parent,
                column,
                depth,
            },
        );

        let mut iter = children.into_iter();
        if let Some(first) = iter.next() {
            self.assign(first, column, depth + 1, Some(node_id));
        }
        for child in iter {
            self.next_column += 1;
            let child_column = self.next_column;
            self.assign(child, child_column, depth + 1, Some(node_id));
        }
    }
}

/// Lay out every container reachable from a root.
///
/// Input must be a forest. Cycles recurse without bound and a non-root whose
/// parent is absent is left out of the result.
pub fn calculate_tree_layout(tree: &[MessageContainer], config: &LayoutConfig) -> TreeLayout {
    let mut children: HashMap<i64, Vec<i64>> = HashMap::with_capacity(tree.len());
    let mut roots = Vec::new();

    for container in tree {
        children.entry(container.id).or_default();
        match container.parent_id() {
            Some(parent) => children.entry(parent).or_default().push(container.id),
            None => roots.push(container.id),
        }
    }

    let mut builder = LayoutBuilder {
        config,
        children,
        next_column: 0,
        layout: TreeLayout::new(),
    };

    for (index, root) in roots.into_iter().enumerate() {
        if index > 0 {
            builder.next_column += 1;
        }
        let column = builder.next_column;
        builder.assign(root, column, 0, None);
    }

    builder.layout
}

/// Size of a canvas holding the whole layout plus half a spacing of margin.
pub fn calculate_bounding_box(layout: &TreeLayout, config: &LayoutConfig) -> BoundingBox {
    let (max_x, max_y) = layout.values().fold((0.0_f64, 0.0_f64), |(mx, my), node| {
        (mx.max(node.x + node.width), my.max(node.y + node.height))
    });

    BoundingBox {
        width: max_x + config.column_spacing / 2.0,
        height: max_y + config.vertical_spacing / 2.0,
    }
}

/// Ids from the root down to `leaf_id`, or empty when the leaf is not laid out.
pub fn get_path_to_node(layout: &TreeLayout, leaf_id: i64) -> Vec<i64> {
    let mut path = Vec::new();
    let mut current = layout.get(&leaf_id);

    while let Some(node) = current {
        path.push(node.id);
        current = node.parent.and_then(|parent| layout.get(&parent));
    }

    path.reverse();
    path
}
