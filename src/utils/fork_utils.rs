use std::collections::{HashSet, VecDeque};

use crate::domain::{Message, MessageContainer, MessageRole};

/// Temporary ids are negative so they can never collide with backend ids.
pub fn is_temporary_id(id: i64) -> bool {
    id < 0
}

/// Pick the first free negative id, searching downward from -1.
pub fn generate_temporary_id(tree: &[MessageContainer]) -> i64 {
    let existing: HashSet<i64> = tree.iter().map(|m| m.id).collect();

    let mut temp_id = -1;
    while existing.contains(&temp_id) {
        temp_id -= 1;
    }
    temp_id
}

/// Build an empty draft hanging off `parent`. The caller appends it to the tree.
pub fn create_forked_message(
    parent: &MessageContainer,
    tree: &[MessageContainer],
    role: MessageRole,
) -> MessageContainer {
    MessageContainer {
        id: generate_temporary_id(tree),
        parent_message_id: Some(parent.id),
        message: Message::new(role, ""),
    }
}

/// Display form of an id, flagging drafts.
pub fn message_id_display(id: i64) -> String {
    if is_temporary_id(id) {
        format!("{} (draft)", id)
    } else {
        id.to_string()
    }
}

/// Containers sharing the parent of `message_id`, excluding itself.
pub fn find_siblings(message_id: i64, tree: &[MessageContainer]) -> Vec<MessageContainer> {
    let Some(message) = tree.iter().find(|m| m.id == message_id) else {
        return Vec::new();
    };
    let parent = message.parent_id();

    tree.iter()
        .filter(|m| m.parent_id() == parent && m.id != message_id)
        .cloned()
        .collect()
}

pub fn count_children(message_id: i64, tree: &[MessageContainer]) -> usize {
    tree.iter()
        .filter(|m| m.parent_id() == Some(message_id))
        .count()
}

/// Breadth-first collection of every container below `message_id`.
pub fn get_descendants(message_id: i64, tree: &[MessageContainer]) -> Vec<MessageContainer> {
    let mut descendants = Vec::new();
    let mut queue = VecDeque::from([message_id]);

    while let Some(current) = queue.pop_front() {
        for child in tree.iter().filter(|m| m.parent_id() == Some(current)) {
            queue.push_back(child.id);
            descendants.push(child.clone());
        }
    }

    descendants
}
