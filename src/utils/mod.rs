pub mod connections;
pub mod fork_utils;
pub mod lineage_utils;
pub mod tree_layout;

pub use connections::{Connection, ConnectionKind, Point, calculate_connections};
pub use fork_utils::{
    count_children, create_forked_message, find_siblings, generate_temporary_id, get_descendants,
    is_temporary_id, message_id_display,
};
pub use lineage_utils::{get_message_path, validate_tree, validate_tree_size};
pub use tree_layout::{
    BoundingBox, LayoutConfig, TreeLayout, TreeNode, calculate_bounding_box,
    calculate_tree_layout, get_path_to_node,
};
