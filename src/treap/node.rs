use crate::entry::Entry;
use crate::treap::tree;

/// A struct representing an internal node of a treap.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub priority: u32,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U, priority: u32) -> Self {
        Node {
            entry: Entry { key, value },
            priority,
            left: None,
            right: None,
        }
    }

    /// Returns `true` if `child` outranks this node's priority. Equal
    /// priorities satisfy the heap property and trigger no rotation.
    pub fn is_heap_property_violated(&self, child: &tree::Tree<T, U>) -> bool {
        match child {
            Some(ref child_node) => child_node.priority > self.priority,
            None => false,
        }
    }
}
