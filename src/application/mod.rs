//! Application layer: demo use cases
//!
//! Builds the sample tree and turns domain operations into printable sections.

pub mod error;
pub mod report;
pub mod sample;

pub use error::{ApplicationError, ApplicationResult};
pub use report::{Case, DemoReport, Section, ValueFilter};
pub use sample::sample_tree;
