//! Generic owned N-ary tree with pre-order and level-order traversal,
//! shape-preserving `map`, root-first `filter` and a closure-based builder.
//!
//! ```
//! use ntree::domain::Node;
//!
//! let tree = Node::build("A", |a| {
//!     a.child_with("B", |b| {
//!         b.child("D").child("E");
//!     });
//!     a.child_with("C", |c| {
//!         c.child("F").child("G");
//!     });
//! });
//!
//! let mut order = Vec::new();
//! tree.bfs(|node| order.push(*node.value()));
//! assert_eq!(order, ["A", "B", "C", "D", "E", "F", "G"]);
//!
//! let pruned = tree.filter(|v| *v != "B").unwrap();
//! assert_eq!(pruned.len(), 4);
//! ```
//!
//! A tree may be traversed from several threads through shared references when
//! `T: Sync`; mutation requires exclusive ownership.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{build_tree, Node, TreeBuilder};
