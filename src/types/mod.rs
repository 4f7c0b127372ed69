//! Data types shared by the header engine.
//!
//! Everything here is produced by collaborators (tree builder, theme
//! resolver, scroll controller) and is read-only to the engine.

mod config;
mod hidden;
mod node;
mod options;
mod theme;

pub use config::*;
pub use hidden::*;
pub use node::*;
pub use options::*;
pub use theme::*;
