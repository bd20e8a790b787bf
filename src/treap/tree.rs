use crate::entry::Entry;
use crate::treap::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// Rotations rearrange ownership of two adjacent nodes. They preserve the
// binary search tree property and are only used to repair local violations
// of the heap property. The required child must be present; a missing child
// is a defect in the treap itself, not a runtime condition.

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    child
}

/// Inserts `new_node` with a standard binary search tree descent, rotating on
/// the way back up whenever the child just descended into outranks its
/// parent's priority. If the key already exists, the entry is replaced in
/// place and the old entry returned; the node keeps its priority and the
/// tree keeps its shape.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let ret = match new_node.entry.key.cmp(&node.entry.key) {
        Ordering::Less => {
            let ret = insert(&mut node.left, new_node);
            if node.is_heap_property_violated(&node.left) {
                node = rotate_right(node);
            }
            ret
        },
        Ordering::Greater => {
            let ret = insert(&mut node.right, new_node);
            if node.is_heap_property_violated(&node.right) {
                node = rotate_left(node);
            }
            ret
        },
        Ordering::Equal => Some(mem::replace(&mut node.entry, new_node.entry)),
    };

    *tree = Some(node);
    ret
}

/// Removes the node with the given key, returning its entry. A node with at
/// most one child is spliced out directly; a node with two children is
/// rotated toward its higher-priority child until it reaches a removable
/// position, each rotation strictly reducing its depth.
pub fn remove<T, U>(tree: &mut Tree<T, U>, key: &T) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return None,
    };

    match key.cmp(&node.entry.key) {
        Ordering::Less => {
            let ret = remove(&mut node.left, key);
            *tree = Some(node);
            ret
        },
        Ordering::Greater => {
            let ret = remove(&mut node.right, key);
            *tree = Some(node);
            ret
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                *tree = right;
                Some(node.entry)
            },
            (left, None) => {
                *tree = left;
                Some(node.entry)
            },
            (Some(left_node), Some(right_node)) => {
                let left_outranks_right = left_node.priority > right_node.priority;
                node.left = Some(left_node);
                node.right = Some(right_node);
                let mut node = if left_outranks_right {
                    rotate_right(node)
                } else {
                    rotate_left(node)
                };
                let ret = if left_outranks_right {
                    remove(&mut node.right, key)
                } else {
                    remove(&mut node.left, key)
                };
                *tree = Some(node);
                ret
            },
        },
    }
}

pub fn contains<T, U>(tree: &Tree<T, U>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => match key.cmp(&node.entry.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn get<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U>(tree: &'a mut Tree<T, U>, key: &T) -> Option<&'a mut Entry<T, U>>
where
    T: Ord,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

/// Asserts the binary search tree property and the heap property over the
/// whole tree and returns the number of reachable nodes.
#[cfg(test)]
pub fn check_invariants<T, U>(tree: &Tree<T, U>) -> usize
where
    T: Ord,
{
    fn check<T, U>(
        tree: &Tree<T, U>,
        lower: Option<&T>,
        upper: Option<&T>,
        parent_priority: Option<u32>,
    ) -> usize
    where
        T: Ord,
    {
        match tree {
            Some(ref node) => {
                let key = &node.entry.key;
                if let Some(lower) = lower {
                    assert!(lower < key);
                }
                if let Some(upper) = upper {
                    assert!(key < upper);
                }
                if let Some(parent_priority) = parent_priority {
                    assert!(node.priority <= parent_priority);
                }
                let left_count = check(&node.left, lower, Some(key), Some(node.priority));
                let right_count = check(&node.right, Some(key), upper, Some(node.priority));
                left_count + right_count + 1
            },
            None => 0,
        }
    }

    check(tree, None, None, None)
}

#[cfg(test)]
pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(ref node) => std::cmp::max(height(&node.left), height(&node.right)) + 1,
        None => 0,
    }
}
