use crate::attributes::Attributes;
use crate::registry::default_attributes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of block kinds an email template is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Header,
    Heading,
    Paragraph,
    Image,
    Button,
    Divider,
    Spacer,
    List,
    Footer,
}

impl BlockKind {
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Header,
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::List,
        BlockKind::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::List => "list",
            BlockKind::Footer => "footer",
        }
    }

    /// Human-readable label for block pickers
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Header => "Header",
            BlockKind::Heading => "Heading",
            BlockKind::Paragraph => "Text",
            BlockKind::Image => "Image",
            BlockKind::Button => "Button",
            BlockKind::Divider => "Divider",
            BlockKind::Spacer => "Spacer",
            BlockKind::List => "List",
            BlockKind::Footer => "Footer",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Opaque block identifier, unique within one document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One typed unit of email content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,

    /// Fixed at creation; changing kind means remove + insert
    #[serde(rename = "type")]
    pub kind: BlockKind,

    #[serde(default)]
    pub attributes: Attributes,
}

impl Block {
    /// Create a block carrying the registry defaults for `kind`
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            attributes: default_attributes(kind),
        }
    }

    pub fn with_attributes(id: BlockId, kind: BlockKind, attributes: Attributes) -> Self {
        Self { id, kind, attributes }
    }
}
