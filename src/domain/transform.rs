//! Shape-preserving `map` and root-first `filter`.
//!
//! Both rebuild the tree bottom-up: every child subtree is produced before it is
//! attached to its new parent. The transform or predicate is applied in
//! pre-order, so side-effecting closures observe the same order as `dfs`.

use tracing::{instrument, trace};

use crate::domain::node::Node;

impl<T> Node<T> {
    /// Returns a new tree of identical shape with every value replaced by `f(value)`.
    #[instrument(level = "trace", skip_all)]
    pub fn map<R, F>(&self, mut f: F) -> Node<R>
    where
        F: FnMut(&T) -> R,
    {
        map_node(self, &mut f)
    }

    /// Consuming variant of [`Node::map`]; values are moved into `f`.
    #[instrument(level = "trace", skip_all)]
    pub fn into_map<R, F>(self, mut f: F) -> Node<R>
    where
        F: FnMut(T) -> R,
    {
        into_map_node(self, &mut f)
    }

    /// Keeps the nodes accepted by `predicate`.
    ///
    /// Returns `None` if the root is rejected. A rejected node drops its whole
    /// subtree: its descendants are never tested and never promoted.
    #[instrument(level = "trace", skip_all)]
    pub fn filter<P>(&self, mut predicate: P) -> Option<Node<T>>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter_node(self, &mut predicate)
    }

    /// Consuming variant of [`Node::filter`]; no `Clone` bound needed.
    #[instrument(level = "trace", skip_all)]
    pub fn into_filter<P>(self, mut predicate: P) -> Option<Node<T>>
    where
        P: FnMut(&T) -> bool,
    {
        into_filter_node(self, &mut predicate)
    }
}

fn map_node<T, R, F>(node: &Node<T>, f: &mut F) -> Node<R>
where
    F: FnMut(&T) -> R,
{
    let value = f(node.value());
    let children = node
        .children()
        .iter()
        .map(|child| map_node(child, f))
        .collect();
    Node::with_children(value, children)
}

fn into_map_node<T, R, F>(node: Node<T>, f: &mut F) -> Node<R>
where
    F: FnMut(T) -> R,
{
    let (value, children) = node.into_parts();
    let value = f(value);
    let children = children
        .into_iter()
        .map(|child| into_map_node(child, f))
        .collect();
    Node::with_children(value, children)
}

fn filter_node<T, P>(node: &Node<T>, predicate: &mut P) -> Option<Node<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    if !predicate(node.value()) {
        trace!(children = node.children().len(), "subtree rejected");
        return None;
    }
    let children = node
        .children()
        .iter()
        .filter_map(|child| filter_node(child, predicate))
        .collect();
    Some(Node::with_children(node.value().clone(), children))
}

fn into_filter_node<T, P>(node: Node<T>, predicate: &mut P) -> Option<Node<T>>
where
    P: FnMut(&T) -> bool,
{
    if !predicate(node.value()) {
        trace!(children = node.children().len(), "subtree rejected");
        return None;
    }
    let (value, children) = node.into_parts();
    let children = children
        .into_iter()
        .filter_map(|child| into_filter_node(child, predicate))
        .collect();
    Some(Node::with_children(value, children))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Node<i32> {
        Node::with_children(
            1,
            vec![
                Node::with_children(2, vec![Node::new(4), Node::new(5)]),
                Node::with_children(3, vec![Node::new(6)]),
            ],
        )
    }

    #[test]
    fn test_map_changes_type_and_keeps_shape() {
        let tree = numbers();
        let mapped = tree.map(|v| v.to_string());
        assert_eq!(mapped.len(), tree.len());
        assert_eq!(mapped.depth(), tree.depth());
        assert_eq!(*mapped.children()[0].children()[1].value(), "5");
    }

    #[test]
    fn test_map_applies_in_preorder() {
        let mut calls = Vec::new();
        numbers().map(|v| calls.push(*v));
        assert_eq!(calls, vec![1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_into_map_moves_values() {
        let tree = Node::with_children(String::from("a"), vec![Node::new(String::from("b"))]);
        let mapped = tree.into_map(|s| s + "!");
        assert_eq!(mapped.value(), "a!");
        assert_eq!(mapped.children()[0].value(), "b!");
    }

    #[test]
    fn test_filter_rejected_root_is_none() {
        assert_eq!(numbers().filter(|v| *v != 1), None);
        assert_eq!(numbers().into_filter(|v| *v > 1), None);
    }

    #[test]
    fn test_filter_never_tests_descendants_of_rejected_node() {
        let mut tested = Vec::new();
        let filtered = numbers().filter(|v| {
            tested.push(*v);
            *v != 2
        });
        assert_eq!(tested, vec![1, 2, 3, 6]);
        assert_eq!(
            filtered,
            Some(Node::with_children(
                1,
                vec![Node::with_children(3, vec![Node::new(6)])]
            ))
        );
    }

    #[test]
    fn test_into_filter_matches_filter() {
        let even_or_root = |v: &i32| *v == 1 || v % 2 == 0;
        assert_eq!(
            numbers().filter(even_or_root),
            numbers().into_filter(even_or_root)
        );
    }
}
