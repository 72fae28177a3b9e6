use std::collections::{HashMap, HashSet};

use crate::domain::MessageContainer;

/// Root-to-leaf chain of containers ending at `leaf_id`.
///
/// Unknown leaves give an empty path. A missing ancestor ends the walk early.
pub fn get_message_path(leaf_id: i64, tree: &[MessageContainer]) -> Vec<MessageContainer> {
    let by_id: HashMap<i64, &MessageContainer> = tree.iter().map(|m| (m.id, m)).collect();

    let mut path = Vec::new();
    let mut current = by_id.get(&leaf_id).copied();

    while let Some(container) = current {
        path.push(container.clone());
        current = container.parent_id().and_then(|parent| by_id.get(&parent).copied());
    }

    path.reverse();
    path
}

/// Check the forest invariants of a bulk-loaded tree: unique ids, existing
/// parents, no cycles.
pub fn validate_tree(tree: &[MessageContainer]) -> Result<(), String> {
    let mut parents: HashMap<i64, Option<i64>> = HashMap::with_capacity(tree.len());
    for container in tree {
        if parents.insert(container.id, container.parent_id()).is_some() {
            return Err(format!("Duplicate message id {}", container.id));
        }
    }

    for container in tree {
        if let Some(parent) = container.parent_id() {
            if !parents.contains_key(&parent) {
                return Err(format!(
                    "Message {} references missing parent {}",
                    container.id, parent
                ));
            }
        }
    }

    // Every walk must reach a root within tree.len() steps.
    let mut known_rooted: HashSet<i64> = HashSet::new();
    for container in tree {
        let mut seen = HashSet::new();
        let mut current = Some(container.id);
        while let Some(id) = current {
            if known_rooted.contains(&id) {
                break;
            }
            if !seen.insert(id) {
                return Err(format!("Cycle detected through message {}", id));
            }
            current = parents.get(&id).copied().flatten();
        }
        known_rooted.extend(seen);
    }

    Ok(())
}

/// Validate the tree stays within the configured size
pub fn validate_tree_size(len: usize, max_size: usize) -> Result<(), String> {
    if len > max_size {
        return Err(format!(
            "Message tree size {} exceeds maximum allowed size {}",
            len, max_size
        ));
    }
    Ok(())
}
