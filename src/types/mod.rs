//! Wire types for the Dust public API.

pub mod agent;
pub mod conversation;
pub mod document;
pub mod file;

pub use agent::*;
pub use conversation::*;
pub use document::*;
pub use file::*;
