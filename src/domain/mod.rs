//! Domain layer: catalog tree, entities and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod render;

pub use arena::{Catalog, PreOrderIterator, TreeNode};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use render::{render_listing, TreeNodeConvert};
