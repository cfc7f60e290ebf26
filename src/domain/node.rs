//! Owned tree node.

use std::mem::{self, ManuallyDrop};
use std::ptr;

use tracing::instrument;

/// A vertex of an N-ary tree.
///
/// Every node exclusively owns its children, so a tree is dropped as a whole
/// together with its root and cannot contain cycles. Dropping is iterative and
/// does not recurse once per level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a node with an initial child sequence.
    pub fn with_children(value: T, children: Vec<Node<T>>) -> Self {
        Self { value, children }
    }

    /// Appends `child` (and its subtree) as the last child.
    pub fn add_child(&mut self, child: Node<T>) {
        self.children.push(child);
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.into_parts().0
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub(crate) fn into_parts(self) -> (T, Vec<Node<T>>) {
        let mut node = ManuallyDrop::new(self);
        let children = mem::take(&mut node.children);
        // SAFETY: `node` is never dropped, so `value` is moved out exactly once.
        // The emptied `children` vector owns no allocation.
        let value = unsafe { ptr::read(&node.value) };
        (value, children)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels below and including this node. A leaf has depth 1.
    #[instrument(level = "trace", skip_all)]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in &node.children {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// Total number of nodes in this subtree.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter_dfs().count()
    }

    /// Values of all childless nodes, in pre-order.
    #[instrument(level = "trace", skip_all)]
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter_dfs()
            .filter(|node| node.is_leaf())
            .map(Node::value)
            .collect()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      root
    //      /  \
    // child1 child2
    //    |
    // grandchild1
    fn small_tree() -> Node<&'static str> {
        let mut child1 = Node::new("child1");
        child1.add_child(Node::new("grandchild1"));
        Node::with_children("root", vec![child1, Node::new("child2")])
    }

    #[test]
    fn test_new_is_leaf() {
        let node = Node::new(42);
        assert_eq!(*node.value(), 42);
        assert!(node.is_leaf());
        assert_eq!(node.depth(), 1);
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn test_add_child_appends_in_order() {
        let mut root = Node::new("root");
        root.add_child(Node::new("a"));
        root.add_child(Node::new("b"));
        root.add_child(Node::new("a"));

        let values: Vec<_> = root.children().iter().map(|c| *c.value()).collect();
        assert_eq!(values, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_depth_len_and_leaves() {
        let tree = small_tree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.leaf_values(), vec![&"grandchild1", &"child2"]);
    }

    #[test]
    fn test_value_mut_changes_only_that_node() {
        let mut tree = small_tree();
        *tree.value_mut() = "ROOT";
        assert_eq!(*tree.value(), "ROOT");
        assert_eq!(*tree.children()[0].value(), "child1");
        assert_eq!(tree.into_value(), "ROOT");
    }

    #[test]
    fn test_into_parts_keeps_value_and_children() {
        let (value, children) = small_tree().into_parts();
        assert_eq!(value, "root");
        assert_eq!(children.len(), 2);
        assert_eq!(*children[0].children()[0].value(), "grandchild1");
    }

    #[test]
    fn test_into_value_of_owned_payload() {
        let node = Node::with_children(String::from("root"), vec![Node::new(String::from("leaf"))]);
        assert_eq!(node.into_value(), "root");
    }

    #[test]
    fn test_drop_releases_every_payload() {
        use std::rc::Rc;

        let payload = Rc::new(());
        let mut root = Node::new(Rc::clone(&payload));
        for _ in 0..3 {
            let mut child = Node::new(Rc::clone(&payload));
            child.add_child(Node::new(Rc::clone(&payload)));
            root.add_child(child);
        }
        assert_eq!(Rc::strong_count(&payload), 8);

        drop(root);
        assert_eq!(Rc::strong_count(&payload), 1);

        let (value, children) = Node::with_children(Rc::clone(&payload), vec![Node::new(Rc::clone(&payload))]).into_parts();
        assert_eq!(Rc::strong_count(&payload), 3);
        drop(children);
        drop(value);
        assert_eq!(Rc::strong_count(&payload), 1);
    }
}
