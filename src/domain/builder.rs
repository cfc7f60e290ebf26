//! Declarative tree construction.
//!
//! ```
//! use ntree::domain::build_tree;
//!
//! let tree = build_tree("A", |a| {
//!     a.child_with("B", |b| {
//!         b.child("D");
//!         b.child("E");
//!     });
//!     a.child("C");
//! });
//! assert_eq!(tree.len(), 5);
//! ```

use tracing::instrument;

use crate::domain::node::Node;

/// Mutable handle on a node under construction.
///
/// Handed to the construction closure of [`build_tree`]; the closure runs once,
/// synchronously, before the finished root is returned.
#[derive(Debug)]
pub struct TreeBuilder<T> {
    node: Node<T>,
}

impl<T> TreeBuilder<T> {
    pub fn new(value: T) -> Self {
        Self {
            node: Node::new(value),
        }
    }

    /// Appends an already built subtree.
    pub fn add_child(&mut self, child: Node<T>) -> &mut Self {
        self.node.add_child(child);
        self
    }

    /// Appends a leaf.
    pub fn child(&mut self, value: T) -> &mut Self {
        self.add_child(Node::new(value))
    }

    /// Appends a child populated by a nested construction closure.
    pub fn child_with<F>(&mut self, value: T, f: F) -> &mut Self
    where
        F: FnOnce(&mut TreeBuilder<T>),
    {
        let child = build_tree(value, f);
        self.add_child(child)
    }

    pub fn value(&self) -> &T {
        self.node.value()
    }

    pub fn build(self) -> Node<T> {
        self.node
    }
}

/// Creates a root holding `root_value`, runs `f` against it and returns the result.
#[instrument(level = "trace", skip_all)]
pub fn build_tree<T, F>(root_value: T, f: F) -> Node<T>
where
    F: FnOnce(&mut TreeBuilder<T>),
{
    let mut builder = TreeBuilder::new(root_value);
    f(&mut builder);
    builder.build()
}

impl<T> Node<T> {
    /// Same as [`build_tree`].
    pub fn build<F>(root_value: T, f: F) -> Node<T>
    where
        F: FnOnce(&mut TreeBuilder<T>),
    {
        build_tree(root_value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_closure_yields_leaf() {
        let tree = build_tree(7, |_| {});
        assert_eq!(tree, Node::new(7));
    }

    #[test]
    fn test_nested_builders_match_manual_construction() {
        let built = Node::build("A", |a| {
            a.child_with("B", |b| {
                b.child("D").child("E");
            });
            a.add_child(Node::build("C", |c| {
                c.child("F").child("G");
            }));
        });

        let mut b = Node::new("B");
        b.add_child(Node::new("D"));
        b.add_child(Node::new("E"));
        let c = Node::with_children("C", vec![Node::new("F"), Node::new("G")]);
        let manual = Node::with_children("A", vec![b, c]);

        assert_eq!(built, manual);
    }

    #[test]
    fn test_closure_runs_exactly_once_before_return() {
        let mut runs = 0;
        let tree = build_tree(0, |root| {
            runs += 1;
            assert_eq!(*root.value(), 0);
            root.child(1);
        });
        assert_eq!(runs, 1);
        assert_eq!(tree.children().len(), 1);
    }
}
