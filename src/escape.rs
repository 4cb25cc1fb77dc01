// Public API ==========================================================================================================

/// Replaces the five HTML-significant characters (`& < > " '`) with their entities, leaving everything else as is
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for char in text.chars() {
        match ENTITIES.iter().find(|&&(special, _)| special == char) {
            Some((_, entity)) => escaped.push_str(entity),
            None => escaped.push(char),
        }
    }

    escaped
}

// Private Helper Code =================================================================================================

const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape_html("<a>&'\""), "&lt;a&gt;&amp;&#39;&quot;");
        assert_eq!(
            escape_html(r#"<img src="x" onerror='alert(1)'>"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;alert(1)&#39;&gt;"
        );
    }

    #[test]
    fn leave_ordinary_text_alone() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("holiday photo (1).jpg"), "holiday photo (1).jpg");
        assert_eq!(escape_html("写真_2025.png"), "写真_2025.png");
    }

    #[test]
    fn escaping_twice_encodes_ampersands_again() {
        let once = escape_html("Tom & Jerry.mp4");
        assert_eq!(once, "Tom &amp; Jerry.mp4");

        // NOTE: Escaping isn't idempotent, so the `&` of an existing entity is itself escaped a second time
        assert_eq!(escape_html(&once), "Tom &amp;amp; Jerry.mp4");
    }
}
