//! Pre-order and level-order traversal.
//!
//! Both walks use an explicit work list instead of recursion, so tree depth is
//! bounded by heap memory rather than by the call stack. `map` and `filter`
//! still recurse per level.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::node::Node;

impl<T> Node<T> {
    /// Visits the root, then each child's subtree in child order (pre-order).
    #[instrument(level = "trace", skip_all)]
    pub fn dfs<F>(&self, mut action: F)
    where
        F: FnMut(&Node<T>),
    {
        for node in self.iter_dfs() {
            action(node);
        }
    }

    /// Visits nodes level by level, left to right within a level.
    #[instrument(level = "trace", skip_all)]
    pub fn bfs<F>(&self, mut action: F)
    where
        F: FnMut(&Node<T>),
    {
        for node in self.iter_bfs() {
            action(node);
        }
    }

    pub fn iter_dfs(&self) -> DfsIter<'_, T> {
        DfsIter::new(self)
    }

    pub fn iter_bfs(&self) -> BfsIter<'_, T> {
        BfsIter::new(self)
    }

    /// Node references grouped by depth; `levels()[0]` holds only the root.
    #[instrument(level = "trace", skip_all)]
    pub fn levels(&self) -> Vec<Vec<&Node<T>>> {
        let mut levels: Vec<Vec<&Node<T>>> = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((self, 0usize));

        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() <= depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node);
            for child in node.children() {
                queue.push_back((child, depth + 1));
            }
        }

        levels
    }
}

/// Borrowing pre-order iterator.
pub struct DfsIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> DfsIter<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for DfsIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.children().iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

/// Borrowing level-order iterator.
pub struct BfsIter<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BfsIter<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl<'a, T> Iterator for BfsIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        self.queue.extend(current.children());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Node<usize> {
        let mut node = Node::new(len - 1);
        for value in (0..len - 1).rev() {
            node = Node::with_children(value, vec![node]);
        }
        node
    }

    #[test]
    fn test_leaf_visits_itself_only() {
        let leaf = Node::new("x");
        let mut seen = Vec::new();
        leaf.dfs(|n| seen.push(*n.value()));
        leaf.bfs(|n| seen.push(*n.value()));
        assert_eq!(seen, vec!["x", "x"]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let tree = chain(100_000);
        let mut count = 0;
        tree.dfs(|_| count += 1);
        assert_eq!(count, 100_000);
        assert_eq!(tree.iter_bfs().count(), 100_000);
        assert_eq!(tree.depth(), 100_000);
        drop(tree);
    }

    #[test]
    fn test_levels_group_by_depth() {
        let tree = Node::with_children(
            1,
            vec![
                Node::with_children(2, vec![Node::new(4)]),
                Node::new(3),
            ],
        );
        let levels: Vec<Vec<i32>> = tree
            .levels()
            .iter()
            .map(|level| level.iter().map(|n| *n.value()).collect())
            .collect();
        assert_eq!(levels, vec![vec![1], vec![2, 3], vec![4]]);
    }
}
