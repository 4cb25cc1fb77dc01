// External Crate Imports
use color_eyre::Result;

// Local Crate Imports
use crate::media::MediaKind;

// Public API ==========================================================================================================

/// The container that previews are rendered into, along with the handful of node operations needed to fill it
pub trait Target {
    /// A handle to the container itself, or to one of the list items created inside of it
    type Node: Clone;

    /// The container's lowercase tag name (e.g. `"div"` or `"ul"`)
    fn tag_name(&self) -> String;

    fn root(&self) -> Self::Node;

    /// Removes every child node from the container
    fn clear(&mut self) -> Result<()>;

    /// Appends a new, empty `li` to the container and returns it
    fn append_list_item(&mut self) -> Result<Self::Node>;

    /// Parses `html` and appends the resulting nodes to the end of `node`
    fn insert_html(&mut self, node: &Self::Node, html: &str) -> Result<()>;

    fn append_media(&mut self, node: &Self::Node, media: &MediaPreview) -> Result<()>;

    fn is_list(&self) -> bool {
        matches!(self.tag_name().as_str(), "ol" | "ul")
    }
}

/// A fully loaded media element: an `img` (with `alt` text) or an `audio` / `video` (with controls and fallback text)
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MediaPreview {
    kind: MediaKind,
    src: String,
    name: String,
}

impl MediaPreview {
    #[must_use]
    pub fn new(kind: MediaKind, src: impl Into<String>, name: impl Into<String>) -> Self {
        let src = src.into();
        let name = name.into();
        Self { kind, src, name }
    }

    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Native playback controls are shown for `audio` and `video`, but images have none
    #[must_use]
    pub fn controls(&self) -> bool {
        self.kind != MediaKind::Image
    }
}
