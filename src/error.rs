// External Crate Imports
use thiserror::Error;

// Public API ==========================================================================================================

/// Reasons a `FilePreviewInput` can refuse to attach
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum AttachError {
    #[error("attribute `data-{0}` is not set")]
    MissingAttribute(&'static str),
    #[error("element `#{0}` could not be found")]
    TargetNotFound(String),
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            AttachError::MissingAttribute("target-for").to_string(),
            "attribute `data-target-for` is not set"
        );
        assert_eq!(
            AttachError::TargetNotFound("previews".to_owned()).to_string(),
            "element `#previews` could not be found"
        );
    }
}
