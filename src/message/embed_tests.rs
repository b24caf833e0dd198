//! Tests for the embed model and its sub-objects.

use chrono::{TimeZone, Utc};

use super::{Color, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, ValidationError};

mod color {
    use super::*;

    #[test]
    fn packs_channels_into_24_bits() {
        assert_eq!(Color::new(255, 0, 128).to_u32(), 0x00FF_0080);
        assert_eq!(Color::new(255, 0, 128).to_u32(), 16_711_808);
        assert_eq!(Color::new(0, 0, 0).to_u32(), 0);
        assert_eq!(Color::new(255, 255, 255).to_u32(), 0x00FF_FFFF);
    }

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Color::from_u32(0x00FF_0080), Color::new(255, 0, 128));
        assert_eq!(Color::from_u32(0x0012_3456).to_u32(), 0x0012_3456);
    }

    #[test]
    fn serializes_as_packed_integer() {
        let json = serde_json::to_string(&Color::new(255, 0, 128)).unwrap();
        assert_eq!(json, "16711808");
    }

    #[test]
    fn deserializes_from_packed_integer() {
        let color: Color = serde_json::from_str("16711808").unwrap();
        assert_eq!(color, Color::new(255, 0, 128));
    }
}

mod footer {
    use super::*;

    #[test]
    fn new_accepts_text_within_limit() {
        let footer = EmbedFooter::new("a".repeat(2048)).unwrap();
        assert_eq!(footer.text().len(), 2048);
        assert!(footer.icon_url().is_none());
    }

    #[test]
    fn new_rejects_oversized_text() {
        let err = EmbedFooter::new("a".repeat(2049)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "footer.text",
                limit: 2048,
                actual: 2049,
            }
        );
    }

    #[test]
    fn with_icon_url_sets_icon() {
        let footer = EmbedFooter::new("hi")
            .unwrap()
            .with_icon_url("https://example.com/icon.png");
        assert_eq!(footer.icon_url(), Some("https://example.com/icon.png"));
    }
}

mod author {
    use super::*;

    #[test]
    fn new_rejects_oversized_name() {
        let err = EmbedAuthor::new("a".repeat(257)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong {
                field: "author.name",
                limit: 256,
                actual: 257,
            }
        ));
    }

    #[test]
    fn builder_chains_optional_urls() {
        let author = EmbedAuthor::new("bot")
            .unwrap()
            .with_url("https://example.com")
            .with_icon_url("https://example.com/a.png");

        assert_eq!(author.name(), "bot");
        assert_eq!(author.url(), Some("https://example.com"));
        assert_eq!(author.icon_url(), Some("https://example.com/a.png"));
    }
}

mod field {
    use super::*;

    #[test]
    fn new_validates_name_and_value() {
        assert!(EmbedField::new("name", "value", true).is_ok());
        assert!(matches!(
            EmbedField::new("a".repeat(257), "v", false),
            Err(ValidationError::TooLong { field: "field.name", .. })
        ));
        assert!(matches!(
            EmbedField::new("n", "a".repeat(1025), false),
            Err(ValidationError::TooLong { field: "field.value", .. })
        ));
    }
}

mod embed {
    use super::*;

    #[test]
    fn with_title_accepts_up_to_limit() {
        let mut embed = Embed::new();
        embed.with_title("a".repeat(256)).unwrap();
        assert_eq!(embed.title().unwrap().len(), 256);
    }

    #[test]
    fn with_title_rejects_oversize_and_keeps_prior_value() {
        let mut embed = Embed::new();
        embed.with_title("old").unwrap();

        let err = embed.with_title("a".repeat(257)).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::TooLong {
                field: "embed.title",
                limit: 256,
                actual: 257,
            }
        ));
        assert_eq!(embed.title(), Some("old"));
    }

    #[test]
    fn with_description_rejects_oversize() {
        let mut embed = Embed::new();
        let err = embed.with_description("a".repeat(2049)).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::TooLong { field: "embed.description", .. }
        ));
        assert!(embed.description().is_none());
    }

    #[test]
    fn limits_count_utf16_units_not_bytes() {
        // 256 two-byte characters: 512 UTF-8 bytes but 256 UTF-16 units.
        let mut embed = Embed::new();
        assert!(embed.with_title("\u{00E9}".repeat(256)).is_ok());
        // A non-BMP character counts as two units.
        assert!(embed.with_title("\u{1F600}".repeat(129)).is_err());
    }

    #[test]
    fn add_field_allows_exactly_25_fields() {
        let mut embed = Embed::new();
        for i in 0..25 {
            embed.add_field(format!("name {i}"), "value", false).unwrap();
        }

        let err = embed.add_field("one more", "value", false).unwrap_err();

        assert_eq!(err, ValidationError::TooManyFields { limit: 25 });
        assert_eq!(embed.fields().len(), 25);
    }

    #[test]
    fn add_field_rejects_oversized_field_without_appending() {
        let mut embed = Embed::new();
        embed.add_field("ok", "value", false).unwrap();

        let result = embed.add_field("n", "a".repeat(1025), false);

        assert!(result.is_err());
        assert_eq!(embed.fields().len(), 1);
    }

    #[test]
    fn fields_preserve_insertion_order() {
        let mut embed = Embed::new();
        embed.add_field("first", "1", false).unwrap();
        embed.add_field("second", "2", true).unwrap();

        let names: Vec<_> = embed.fields().iter().map(EmbedField::name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn char_count_sums_all_text() {
        let mut embed = Embed::new();
        embed
            .with_title("title")
            .unwrap()
            .with_description("description")
            .unwrap()
            .with_footer(EmbedFooter::new("footer").unwrap())
            .with_author(EmbedAuthor::new("author").unwrap());
        embed.add_field("name", "value", false).unwrap();

        // 5 + 11 + 6 + 6 + 4 + 5
        assert_eq!(embed.char_count(), 37);
    }

    #[test]
    fn char_count_ignores_urls_and_media() {
        let mut embed = Embed::new();
        embed
            .with_url("https://example.com")
            .with_image(EmbedImage::new("https://example.com/i.png"))
            .with_color(Color::new(1, 2, 3));

        assert_eq!(embed.char_count(), 0);
    }

    #[test]
    fn empty_embed_serializes_to_empty_object() {
        let json = serde_json::to_string(&Embed::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn serialization_omits_unset_keys() {
        let mut embed = Embed::new();
        embed.with_title("only title").unwrap();

        let value: serde_json::Value = serde_json::to_value(&embed).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(object["title"], "only title");
    }

    #[test]
    fn absent_color_is_omitted_not_zero() {
        let mut embed = Embed::new();
        embed.with_title("t").unwrap();

        let value: serde_json::Value = serde_json::to_value(&embed).unwrap();
        assert!(value.get("color").is_none());
    }

    #[test]
    fn timestamp_serializes_as_iso8601() {
        let mut embed = Embed::new();
        embed.with_timestamp(Utc.with_ymd_and_hms(2020, 5, 17, 12, 34, 56).unwrap());

        let value: serde_json::Value = serde_json::to_value(&embed).unwrap();
        let timestamp = value["timestamp"].as_str().unwrap();

        assert!(timestamp.starts_with("2020-05-17T12:34:56"));
    }

    #[test]
    fn full_embed_round_trips_through_json() {
        let mut embed = Embed::new();
        embed
            .with_title("title")
            .unwrap()
            .with_description("description")
            .unwrap()
            .with_url("https://example.com")
            .with_timestamp(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap())
            .with_color(Color::new(255, 0, 128))
            .with_footer(EmbedFooter::new("footer").unwrap())
            .with_image(EmbedImage::new("https://example.com/i.png"))
            .with_author(EmbedAuthor::new("author").unwrap());
        embed.add_field("name", "value", true).unwrap();

        let json = serde_json::to_string(&embed).unwrap();
        let parsed: Embed = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, embed);
    }
}
