//! ASCII outline rendering via termtree.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::node::Node;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeRender for Node<T> {
    #[instrument(level = "trace", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
