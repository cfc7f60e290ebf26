//! The canonical demonstration tree.

use crate::domain::{build_tree, Node};

//        A
//      /   \
//     B     C
//    / \   / \
//   D   E F   G
pub fn sample_tree() -> Node<String> {
    build_tree("A".to_string(), |a| {
        a.child_with("B".to_string(), |b| {
            b.child("D".to_string());
            b.child("E".to_string());
        });
        a.child_with("C".to_string(), |c| {
            c.child("F".to_string());
            c.child("G".to_string());
        });
    })
}
