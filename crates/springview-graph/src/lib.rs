//! Graph indexing and layout.

pub mod build;
pub mod layout;

pub use build::index_graph;
pub use layout::layout_graph;
