//! Rich embed blocks and their sub-objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::limits::{Limits, utf16_len};

use super::ValidationError;

/// An RGB color, sent on the wire as one packed 24-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from three 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the channels into `(R << 16) | (G << 8) | B`.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        u32::from(self.r) << 16 | u32::from(self.g) << 8 | u32::from(self.b)
    }

    /// Unpacks a 24-bit integer into channels. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_u32())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let packed = u32::deserialize(deserializer)?;
        Ok(Self::from_u32(packed))
    }
}

/// Footer line of an embed.
///
/// Construction validates the text length, so an oversized footer is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    icon_url: Option<String>,
}

impl EmbedFooter {
    /// Creates a footer with the given text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `text` exceeds the footer
    /// text limit.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        ValidationError::check_len("footer.text", &text, Limits::DEFAULT.footer_text)?;
        Ok(Self {
            text,
            icon_url: None,
        })
    }

    /// Sets the footer icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Returns the footer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the footer icon URL, if set.
    #[must_use]
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }
}

/// Image attached to an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    url: String,
}

impl EmbedImage {
    /// Creates an image pointing at the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Returns the image URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Thumbnail shown beside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    url: String,
}

impl EmbedThumbnail {
    /// Creates a thumbnail pointing at the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Returns the thumbnail URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Author line of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    icon_url: Option<String>,
}

impl EmbedAuthor {
    /// Creates an author line with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `name` exceeds the author
    /// name limit.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        ValidationError::check_len("author.name", &name, Limits::DEFAULT.author_name)?;
        Ok(Self {
            name,
            url: None,
            icon_url: None,
        })
    }

    /// Sets the URL the author name links to.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the author icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Returns the author name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the author URL, if set.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the author icon URL, if set.
    #[must_use]
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }
}

/// One name/value pair in an embed's field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

impl EmbedField {
    /// Creates a field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `name` or `value` exceeds
    /// its limit.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let value = value.into();
        ValidationError::check_len("field.name", &name, Limits::DEFAULT.field_name)?;
        ValidationError::check_len("field.value", &value, Limits::DEFAULT.field_value)?;
        Ok(Self {
            name,
            value,
            inline,
        })
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the field renders inline.
    #[must_use]
    pub const fn inline(&self) -> bool {
        self.inline
    }
}

/// A rich message block attached to a webhook payload.
///
/// Every sub-block is independently optional; an unset block is omitted from
/// the wire object entirely rather than sent as `null`. All text is
/// validated against the platform limits at the moment it is set: a rejected
/// mutation returns an error and leaves the embed in its prior state.
///
/// # Example
///
/// ```
/// use discord_webhook::message::{Color, Embed, EmbedFooter};
///
/// # fn example() -> Result<(), discord_webhook::message::ValidationError> {
/// let mut embed = Embed::new();
/// embed
///     .with_title("Deploy finished")?
///     .with_description("All checks green.")?
///     .with_color(Color::new(0x2E, 0xCC, 0x71))
///     .with_footer(EmbedFooter::new("ci-bot")?);
/// embed.add_field("duration", "41s", true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    thumbnail: Option<EmbedThumbnail>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    fields: Vec<EmbedField>,
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `title` exceeds the title
    /// limit; the embed is unchanged.
    pub fn with_title(&mut self, title: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let title = title.into();
        ValidationError::check_len("embed.title", &title, Limits::DEFAULT.embed_title)?;
        self.title = Some(title);
        Ok(self)
    }

    /// Sets the description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `description` exceeds the
    /// description limit; the embed is unchanged.
    pub fn with_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let description = description.into();
        ValidationError::check_len(
            "embed.description",
            &description,
            Limits::DEFAULT.embed_description,
        )?;
        self.description = Some(description);
        Ok(self)
    }

    /// Sets the URL the title links to.
    pub fn with_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the timestamp shown in the embed footer area.
    pub fn with_timestamp(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the accent color.
    pub fn with_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Sets the footer. The footer text was validated at construction.
    pub fn with_footer(&mut self, footer: EmbedFooter) -> &mut Self {
        self.footer = Some(footer);
        self
    }

    /// Sets the image.
    pub fn with_image(&mut self, image: EmbedImage) -> &mut Self {
        self.image = Some(image);
        self
    }

    /// Sets the thumbnail.
    pub fn with_thumbnail(&mut self, thumbnail: EmbedThumbnail) -> &mut Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Sets the author line. The author name was validated at construction.
    pub fn with_author(&mut self, author: EmbedAuthor) -> &mut Self {
        self.author = Some(author);
        self
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `name` or `value` exceeds its
    /// limit, or [`ValidationError::TooManyFields`] once the embed already
    /// holds the maximum number of fields. The embed is unchanged on error.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Result<&mut Self, ValidationError> {
        let field = EmbedField::new(name, value, inline)?;
        if self.fields.len() >= Limits::DEFAULT.embed_fields {
            return Err(ValidationError::TooManyFields {
                limit: Limits::DEFAULT.embed_fields,
            });
        }
        self.fields.push(field);
        Ok(self)
    }

    /// Returns the title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the title URL, if set.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the timestamp, if set.
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the accent color, if set.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the footer, if set.
    #[must_use]
    pub const fn footer(&self) -> Option<&EmbedFooter> {
        self.footer.as_ref()
    }

    /// Returns the image, if set.
    #[must_use]
    pub const fn image(&self) -> Option<&EmbedImage> {
        self.image.as_ref()
    }

    /// Returns the thumbnail, if set.
    #[must_use]
    pub const fn thumbnail(&self) -> Option<&EmbedThumbnail> {
        self.thumbnail.as_ref()
    }

    /// Returns the author line, if set.
    #[must_use]
    pub const fn author(&self) -> Option<&EmbedAuthor> {
        self.author.as_ref()
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[EmbedField] {
        &self.fields
    }

    /// Total UTF-16 length of all text in this embed.
    ///
    /// Counts title, description, footer text, author name, and every field
    /// name and value. This feeds the payload-wide aggregate budget.
    #[must_use]
    pub fn char_count(&self) -> usize {
        let mut count = 0;
        if let Some(title) = &self.title {
            count += utf16_len(title);
        }
        if let Some(description) = &self.description {
            count += utf16_len(description);
        }
        if let Some(footer) = &self.footer {
            count += utf16_len(&footer.text);
        }
        if let Some(author) = &self.author {
            count += utf16_len(&author.name);
        }
        for field in &self.fields {
            count += utf16_len(&field.name) + utf16_len(&field.value);
        }
        count
    }
}
