// Standard Library Imports
use std::{ffi::OsStr, path::Path};

// External Crate Imports
use base64::{Engine, engine::general_purpose::STANDARD};

// Public API ==========================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

impl MediaKind {
    /// Classifies a MIME type by its major type (the part before the `/`)
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match major_type(mime) {
            "image" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SelectedFile {
    name: String,
    size: u64,
    mime: String,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        let name = name.into();
        let mime = mime.into();
        Self { name, size, mime }
    }

    /// Builds a file from a path, as reported by native file dialogs, guessing its MIME type from the extension
    #[must_use]
    pub fn from_path(path: &str, size: u64) -> Self {
        let path = Path::new(path);
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        let mime = guess_mime(path);

        Self::new(name, size, mime)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(&self.mime)
    }
}

#[must_use]
pub fn major_type(mime: &str) -> &str {
    mime.split('/').next().unwrap_or_default()
}

#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        UNKNOWN_MIME
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

// Private Helper Code =================================================================================================

const UNKNOWN_MIME: &str = "application/octet-stream";

fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "opus" => "audio/opus",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "ogv" => "video/ogg",
        "avi" => "video/x-msvideo",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => UNKNOWN_MIME,
    }
}

// Unit Tests ==========================================================================================================
