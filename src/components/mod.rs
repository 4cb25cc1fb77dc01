mod header;
mod preview_input;
mod preview_target;

pub use header::Header;
pub use preview_input::PreviewInput;
pub use preview_target::PreviewTarget;
