//! # Block Registry
//!
//! Static catalog of block kinds: the attributes each kind starts with and
//! the attribute names each kind understands.
//!
//! The schema is guidance for editors and the linter. It is not enforced:
//! blocks may carry attributes outside their schema, and the renderer simply
//! ignores them.

use crate::attributes::Attributes;
use crate::block::BlockKind;
use serde::Serialize;

/// Shape of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Text,
    /// Pixel length
    Number,
    Color,
    Url,
    List,
    Choice(&'static [&'static str]),
}

/// One entry of a kind's attribute schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub ty: AttributeType,
    pub description: &'static str,
}

const fn spec(name: &'static str, ty: AttributeType, description: &'static str) -> AttributeSpec {
    AttributeSpec { name, ty, description }
}

pub const HEADING_LEVELS: &[&str] = &["h1", "h2", "h3"];

const HEADER_SCHEMA: &[AttributeSpec] = &[
    spec("title", AttributeType::Text, "Large title on the gradient band"),
    spec("subtitle", AttributeType::Text, "Optional line below the title"),
];

const HEADING_SCHEMA: &[AttributeSpec] = &[
    spec("text", AttributeType::Text, "Heading text"),
    spec("level", AttributeType::Choice(HEADING_LEVELS), "Heading size"),
    spec("color", AttributeType::Color, "Text color"),
];

const PARAGRAPH_SCHEMA: &[AttributeSpec] = &[
    spec("text", AttributeType::Text, "Body text"),
    spec("color", AttributeType::Color, "Text color"),
    spec("fontSize", AttributeType::Number, "Font size in pixels"),
];

const IMAGE_SCHEMA: &[AttributeSpec] = &[
    spec("url", AttributeType::Url, "Image source; blank shows a placeholder"),
    spec("alt", AttributeType::Text, "Alternative text"),
    spec("width", AttributeType::Number, "Display width in pixels"),
];

const BUTTON_SCHEMA: &[AttributeSpec] = &[
    spec("text", AttributeType::Text, "Button label"),
    spec("url", AttributeType::Url, "Link target"),
    spec("color", AttributeType::Color, "Button color"),
];

const DIVIDER_SCHEMA: &[AttributeSpec] = &[
    spec("color", AttributeType::Color, "Rule color"),
    spec("margin", AttributeType::Number, "Vertical spacing in pixels"),
];

const SPACER_SCHEMA: &[AttributeSpec] = &[spec("height", AttributeType::Number, "Gap height in pixels")];

const LIST_SCHEMA: &[AttributeSpec] = &[
    spec("items", AttributeType::List, "Bullet items, in order"),
    spec("color", AttributeType::Color, "Text color"),
];

const FOOTER_SCHEMA: &[AttributeSpec] = &[spec("text", AttributeType::Text, "Small print")];

/// Attribute names understood by `kind`
pub fn attribute_schema(kind: BlockKind) -> &'static [AttributeSpec] {
    match kind {
        BlockKind::Header => HEADER_SCHEMA,
        BlockKind::Heading => HEADING_SCHEMA,
        BlockKind::Paragraph => PARAGRAPH_SCHEMA,
        BlockKind::Image => IMAGE_SCHEMA,
        BlockKind::Button => BUTTON_SCHEMA,
        BlockKind::Divider => DIVIDER_SCHEMA,
        BlockKind::Spacer => SPACER_SCHEMA,
        BlockKind::List => LIST_SCHEMA,
        BlockKind::Footer => FOOTER_SCHEMA,
    }
}

/// Starter attributes for a newly inserted block of `kind`
pub fn default_attributes(kind: BlockKind) -> Attributes {
    match kind {
        BlockKind::Header => Attributes::new()
            .with("title", "Your Company")
            .with("subtitle", "News and updates from our team"),
        BlockKind::Heading => Attributes::new()
            .with("text", "Section heading")
            .with("level", "h2")
            .with("color", "#1f2937"),
        BlockKind::Paragraph => Attributes::new()
            .with("text", "Write your message here.")
            .with("color", "#4b5563")
            .with("fontSize", 16u32),
        BlockKind::Image => Attributes::new()
            .with("url", "")
            .with("alt", "Image")
            .with("width", 520u32),
        BlockKind::Button => Attributes::new()
            .with("text", "Shop now")
            .with("url", "#")
            .with("color", "#6366f1"),
        BlockKind::Divider => Attributes::new()
            .with("color", "#e5e7eb")
            .with("margin", 24u32),
        BlockKind::Spacer => Attributes::new().with("height", 32u32),
        BlockKind::List => Attributes::new()
            .with("items", vec!["First item", "Second item", "Third item"])
            .with("color", "#4b5563"),
        BlockKind::Footer => Attributes::new()
            .with("text", "You are receiving this email because you subscribed to our updates."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_stay_within_schema() {
        for kind in BlockKind::ALL {
            let schema = attribute_schema(kind);
            for (name, _) in default_attributes(kind).iter() {
                assert!(
                    schema.iter().any(|spec| spec.name == name),
                    "{kind} default '{name}' is missing from its schema"
                );
            }
        }
    }

    #[test]
    fn test_paragraph_defaults() {
        let attrs = default_attributes(BlockKind::Paragraph);
        assert_eq!(attrs.number("fontSize"), Some(16.0));
        assert!(attrs.non_empty_text("text").is_some());
        assert!(attrs.non_empty_text("color").is_some());
    }

    #[test]
    fn test_image_defaults_to_blank_url() {
        let attrs = default_attributes(BlockKind::Image);
        assert_eq!(attrs.non_empty_text("url"), None);
    }
}
