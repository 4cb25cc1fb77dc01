// Local Crate Imports
use crate::{escape::escape_html, media::SelectedFile};

// Public API ==========================================================================================================

pub const NAME_PLACEHOLDER: &str = "${name}";
pub const SIZE_PLACEHOLDER: &str = "${size}";

/// An HTML fragment shown in place of a preview, with `${name}` and `${size}` placeholders
///
/// The template itself is trusted markup and is never escaped, only the file name substituted into it is.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn render(&self, file: &SelectedFile) -> String {
        self.0
            .replace(NAME_PLACEHOLDER, &escape_html(file.name()))
            .replace(SIZE_PLACEHOLDER, &file.size().to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ErrorMessage {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use const_format::concatcp;
    use indoc::indoc;

    use super::*;

    const TOO_BIG: &str = concatcp!(NAME_PLACEHOLDER, " (", SIZE_PLACEHOLDER, " bytes) too big");

    #[test]
    fn render() {
        let message = ErrorMessage::new(TOO_BIG);
        let file = SelectedFile::new("<x>.png", 999, "image/png");

        assert_eq!(message.render(&file), "&lt;x&gt;.png (999 bytes) too big");
    }

    #[test]
    fn render_every_occurrence() {
        let message = ErrorMessage::new(indoc! {r#"
            <p class="error">
              <strong>${name}</strong> (${size} B) can't be previewed.
              <small>${name} / ${size}</small>
            </p>
        "#});
        let file = SelectedFile::new("Q&A.pdf", 1024, "application/pdf");

        assert_eq!(
            message.render(&file),
            indoc! {r#"
                <p class="error">
                  <strong>Q&amp;A.pdf</strong> (1024 B) can't be previewed.
                  <small>Q&amp;A.pdf / 1024</small>
                </p>
            "#}
        );
    }

    #[test]
    fn template_markup_is_not_escaped() {
        let message = ErrorMessage::from("<em>\"${name}\" & friends</em>");
        let file = SelectedFile::new("it's.mov", 0, "video/quicktime");

        assert_eq!(message.render(&file), "<em>\"it&#39;s.mov\" & friends</em>");
        assert_eq!(message.template(), "<em>\"${name}\" & friends</em>");
    }

    #[test]
    fn template_without_placeholders() {
        let message = ErrorMessage::from(String::from("<span>Unsupported file</span>"));
        let file = SelectedFile::new("notes.txt", 12, "text/plain");

        assert_eq!(message.render(&file), "<span>Unsupported file</span>");
    }
}
