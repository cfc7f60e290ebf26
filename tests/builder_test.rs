//! Builder DSL

use ntree::domain::{build_tree, Node, TreeBuilder};
use rstest::rstest;

#[rstest]
fn given_nested_closures_when_building_then_children_in_call_order() {
    let tree = build_tree(0, |root| {
        root.child_with(1, |one| {
            one.child_with(11, |eleven| {
                eleven.child(111);
            });
            one.child(12);
        });
        root.child(2);
        root.add_child(Node::with_children(3, vec![Node::new(31)]));
    });

    let mut values = Vec::new();
    tree.dfs(|n| values.push(*n.value()));
    assert_eq!(values, vec![0, 1, 11, 111, 12, 2, 3, 31]);
    assert_eq!(tree.depth(), 4);
}

#[rstest]
fn given_explicit_builder_when_finished_then_same_as_closure_form() {
    let mut builder = TreeBuilder::new("root");
    builder.child("a").child("b");
    let explicit = builder.build();

    let closure = Node::build("root", |r| {
        r.child("a");
        r.child("b");
    });

    assert_eq!(explicit, closure);
}

#[rstest]
fn given_duplicate_values_when_building_then_all_kept() {
    let tree = build_tree("x", |x| {
        x.child("x").child("x");
    });
    assert_eq!(tree.len(), 3);
}
