use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed catalogue of block variants a page can contain.
///
/// Wire tags are kebab-case with a `-block` suffix (`heading-block`,
/// `columns-block`, ...). There are no user-defined block types: a tag that
/// is not listed here is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum BlockKind {
    // Content
    Heading,
    Text,
    Button,
    Image,
    Card,
    RichText,
    Video,
    Audio,
    List,
    Quote,
    Divider,
    Spacer,
    Accordion,
    Tabs,
    Embed,
    Icon,
    Stats,
    Map,
    Logo,

    // Containers
    Grid,
    Flex,
    Stack,
    Container,
    Columns,
}

/// Whether a block variant is a leaf or holds child blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    Content,
    Container,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type: {0}")]
pub struct UnknownTag(pub String);

impl BlockKind {
    pub const ALL: [BlockKind; 24] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Image,
        BlockKind::Card,
        BlockKind::RichText,
        BlockKind::Video,
        BlockKind::Audio,
        BlockKind::List,
        BlockKind::Quote,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::Accordion,
        BlockKind::Tabs,
        BlockKind::Embed,
        BlockKind::Icon,
        BlockKind::Stats,
        BlockKind::Map,
        BlockKind::Logo,
        BlockKind::Grid,
        BlockKind::Flex,
        BlockKind::Stack,
        BlockKind::Container,
        BlockKind::Columns,
    ];

    /// The `_type` tag used on the wire.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading-block",
            BlockKind::Text => "text-block",
            BlockKind::Button => "button-block",
            BlockKind::Image => "image-block",
            BlockKind::Card => "card-block",
            BlockKind::RichText => "rich-text-block",
            BlockKind::Video => "video-block",
            BlockKind::Audio => "audio-block",
            BlockKind::List => "list-block",
            BlockKind::Quote => "quote-block",
            BlockKind::Divider => "divider-block",
            BlockKind::Spacer => "spacer-block",
            BlockKind::Accordion => "accordion-block",
            BlockKind::Tabs => "tabs-block",
            BlockKind::Embed => "embed-block",
            BlockKind::Icon => "icon-block",
            BlockKind::Stats => "stats-block",
            BlockKind::Map => "map-block",
            BlockKind::Logo => "logo-block",
            BlockKind::Grid => "grid-block",
            BlockKind::Flex => "flex-block",
            BlockKind::Stack => "stack-block",
            BlockKind::Container => "container-block",
            BlockKind::Columns => "columns-block",
        }
    }

    /// Look up a variant by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn class(self) -> BlockClass {
        match self {
            BlockKind::Grid
            | BlockKind::Flex
            | BlockKind::Stack
            | BlockKind::Container
            | BlockKind::Columns => BlockClass::Container,
            BlockKind::Heading
            | BlockKind::Text
            | BlockKind::Button
            | BlockKind::Image
            | BlockKind::Card
            | BlockKind::RichText
            | BlockKind::Video
            | BlockKind::Audio
            | BlockKind::List
            | BlockKind::Quote
            | BlockKind::Divider
            | BlockKind::Spacer
            | BlockKind::Accordion
            | BlockKind::Tabs
            | BlockKind::Embed
            | BlockKind::Icon
            | BlockKind::Stats
            | BlockKind::Map
            | BlockKind::Logo => BlockClass::Content,
        }
    }

    pub fn is_container(self) -> bool {
        self.class() == BlockClass::Container
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BlockKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl TryFrom<String> for BlockKind {
    type Error = UnknownTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlockKind> for &'static str {
    fn from(kind: BlockKind) -> Self {
        kind.tag()
    }
}
