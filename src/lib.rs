pub mod config;
pub mod error;
pub mod escape;
pub mod media;
pub mod message;
pub mod preview;
pub mod target;
pub mod tree;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::AttachError;
pub use preview::{Completion, FilePreviewInput, PendingRead, Selection};
