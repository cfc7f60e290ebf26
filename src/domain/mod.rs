//! Domain layer: the tree itself
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod node;
pub mod render;
pub mod transform;
pub mod traverse;

pub use builder::{build_tree, TreeBuilder};
pub use node::Node;
pub use render::TreeRender;
pub use traverse::{BfsIter, DfsIter};
