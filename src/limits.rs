//! Size limits for webhook payloads.
//!
//! Discord documents hard upper bounds for every piece of text in a webhook
//! message and for the number of embeds and fields. All of them live here as
//! one plain read-only table so the validation code has a single source of
//! truth.

/// Upper bounds on webhook payload sizes.
///
/// String limits count UTF-16 code units (see [`utf16_len`]), which is how
/// the platform measures length; count limits are plain element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of the top-level message content.
    pub content: usize,
    /// Maximum length of an embed title.
    pub embed_title: usize,
    /// Maximum length of an embed description.
    pub embed_description: usize,
    /// Maximum number of fields per embed.
    pub embed_fields: usize,
    /// Maximum length of a field name.
    pub field_name: usize,
    /// Maximum length of a field value.
    pub field_value: usize,
    /// Maximum length of the footer text.
    pub footer_text: usize,
    /// Maximum length of the author name.
    pub author_name: usize,
    /// Maximum number of embeds per payload.
    pub embeds: usize,
    /// Aggregate character budget across all embed text in one payload.
    pub total: usize,
}

impl Limits {
    /// The platform's documented limits.
    pub const DEFAULT: Self = Self {
        content: 4000,
        embed_title: 256,
        embed_description: 2048,
        embed_fields: 25,
        field_name: 256,
        field_value: 1024,
        footer_text: 2048,
        author_name: 256,
        embeds: 10,
        total: 6000,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Length of a string in UTF-16 code units.
///
/// The platform counts limits this way, so a character outside the Basic
/// Multilingual Plane costs two units.
#[must_use]
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let limits = Limits::default();

        assert_eq!(limits.content, 4000);
        assert_eq!(limits.embed_title, 256);
        assert_eq!(limits.embed_description, 2048);
        assert_eq!(limits.embed_fields, 25);
        assert_eq!(limits.field_name, 256);
        assert_eq!(limits.field_value, 1024);
        assert_eq!(limits.footer_text, 2048);
        assert_eq!(limits.author_name, 256);
        assert_eq!(limits.embeds, 10);
        assert_eq!(limits.total, 6000);
    }

    #[test]
    fn utf16_len_counts_ascii_as_one_unit() {
        assert_eq!(utf16_len("hello"), 5);
        assert_eq!(utf16_len(""), 0);
    }

    #[test]
    fn utf16_len_counts_surrogate_pairs_as_two_units() {
        // U+1F600 GRINNING FACE is outside the BMP.
        assert_eq!(utf16_len("\u{1F600}"), 2);
        // U+00E9 is a single unit despite being two UTF-8 bytes.
        assert_eq!(utf16_len("\u{00E9}"), 1);
    }
}
