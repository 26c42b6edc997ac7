use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::wire::RawBlock;

/// The closed set of block types the editor palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Header,
    Text,
    Button,
    Image,
    Divider,
    Spacer,
    Social,
    Columns,
    Video,
    Footer,
    BrandHeader,
}

impl BlockType {
    pub const ALL: [BlockType; 11] = [
        BlockType::Header,
        BlockType::Text,
        BlockType::Button,
        BlockType::Image,
        BlockType::Divider,
        BlockType::Spacer,
        BlockType::Social,
        BlockType::Columns,
        BlockType::Video,
        BlockType::Footer,
        BlockType::BrandHeader,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Text => "text",
            BlockType::Button => "button",
            BlockType::Image => "image",
            BlockType::Divider => "divider",
            BlockType::Spacer => "spacer",
            BlockType::Social => "social",
            BlockType::Columns => "columns",
            BlockType::Video => "video",
            BlockType::Footer => "footer",
            BlockType::BrandHeader => "brand-header",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        BlockType::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoStyle {
    Gradient,
    Solid,
    Outline,
}

impl LogoStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LogoStyle::Gradient => "gradient",
            LogoStyle::Solid => "solid",
            LogoStyle::Outline => "outline",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "gradient" => Some(LogoStyle::Gradient),
            "solid" => Some(LogoStyle::Solid),
            "outline" => Some(LogoStyle::Outline),
            _ => None,
        }
    }
}

/// Heading element a `header` block renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLevel {
    H1,
    H2,
    H3,
}

impl HeaderLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderLevel::H1 => "h1",
            HeaderLevel::H2 => "h2",
            HeaderLevel::H3 => "h3",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "h1" => Some(HeaderLevel::H1),
            "h2" => Some(HeaderLevel::H2),
            "h3" => Some(HeaderLevel::H3),
            _ => None,
        }
    }

    /// Font size used when the block sets none.
    pub fn font_size(level: Option<Self>) -> &'static str {
        match level {
            Some(HeaderLevel::H1) => "32px",
            Some(HeaderLevel::H2) => "28px",
            Some(HeaderLevel::H3) => "24px",
            None => "20px",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: &str, url: &str) -> Self {
        Self {
            platform: platform.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Spacing and width mode shared by every block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub padding_top: Option<u32>,
    pub padding_bottom: Option<u32>,
    pub padding_left: Option<u32>,
    pub padding_right: Option<u32>,
    pub full_width: Option<bool>,
}

/// Typography and colour. `None` means "use the type's default".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub text_decoration: Option<String>,
    pub text_align: Option<String>,
    pub font_family: Option<String>,
    pub line_height: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Footer {
    pub social_links: Vec<SocialLink>,
    pub footer_text: Option<String>,
    pub unsubscribe_url: Option<String>,
    pub unsubscribe_text: Option<String>,
    pub privacy_url: Option<String>,
    pub privacy_text: Option<String>,
    pub terms_url: Option<String>,
    pub terms_text: Option<String>,
}

/// Type-specific payload. Each variant carries only the fields that are
/// meaningful for that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Header {
        content: Option<String>,
        header_type: Option<HeaderLevel>,
    },
    Text {
        content: Option<String>,
    },
    Button {
        content: Option<String>,
        url: Option<String>,
        /// Takes precedence over `background_color` when rendering.
        gradient: Option<String>,
    },
    Image {
        src: Option<String>,
        alt: Option<String>,
    },
    Divider,
    Spacer {
        height: Option<String>,
    },
    Social {
        links: Vec<SocialLink>,
    },
    Columns {
        columns: Vec<Column>,
    },
    Video {
        thumbnail: Option<String>,
        url: Option<String>,
    },
    Footer(Footer),
    BrandHeader {
        content: Option<String>,
        logo_style: Option<LogoStyle>,
    },
    /// A type name outside the palette, kept verbatim so it survives a round trip.
    Unknown {
        type_name: String,
        content: Option<String>,
    },
}

impl BlockKind {
    pub fn block_type(&self) -> Option<BlockType> {
        Some(match self {
            BlockKind::Header { .. } => BlockType::Header,
            BlockKind::Text { .. } => BlockType::Text,
            BlockKind::Button { .. } => BlockType::Button,
            BlockKind::Image { .. } => BlockType::Image,
            BlockKind::Divider => BlockType::Divider,
            BlockKind::Spacer { .. } => BlockType::Spacer,
            BlockKind::Social { .. } => BlockType::Social,
            BlockKind::Columns { .. } => BlockType::Columns,
            BlockKind::Video { .. } => BlockType::Video,
            BlockKind::Footer(_) => BlockType::Footer,
            BlockKind::BrandHeader { .. } => BlockType::BrandHeader,
            BlockKind::Unknown { .. } => return None,
        })
    }

    pub fn type_name(&self) -> &str {
        match self {
            BlockKind::Unknown { type_name, .. } => type_name,
            other => other.block_type().map(BlockType::as_str).unwrap_or(""),
        }
    }

    fn content_slot(&mut self) -> Option<&mut Option<String>> {
        match self {
            BlockKind::Header { content, .. }
            | BlockKind::Text { content }
            | BlockKind::Button { content, .. }
            | BlockKind::BrandHeader { content, .. }
            | BlockKind::Unknown { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// One content unit of an email document.
///
/// Serializes to the flat camelCase object the editor stores (see
/// [`RawBlock`]), so envelopes and document files stay interchangeable with
/// previously saved campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct Block {
    pub id: String,
    pub kind: BlockKind,
    pub layout: Layout,
    pub style: TextStyle,
    /// Properties this model has no field for, kept so a load/save cycle
    /// hands them back untouched.
    pub extra: Map<String, Value>,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
            layout: Layout::default(),
            style: TextStyle::default(),
            extra: Map::new(),
        }
    }

    pub fn block_type(&self) -> Option<BlockType> {
        self.kind.block_type()
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    /// The rich-text content, for the types that carry one.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Header { content, .. }
            | BlockKind::Text { content }
            | BlockKind::Button { content, .. }
            | BlockKind::BrandHeader { content, .. }
            | BlockKind::Unknown { content, .. } => content.as_deref(),
            _ => None,
        }
    }

    /// Replace the content. Returns `false` (and changes nothing) for types without content.
    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        match self.kind.content_slot() {
            Some(slot) => {
                *slot = Some(value.into());
                true
            }
            None => false,
        }
    }

    pub fn is_full_width(&self) -> bool {
        self.layout.full_width.unwrap_or(false)
    }

    /// Left/right padding used when the block sets none. Buttons, images,
    /// footers and brand headers sit flush; everything else is inset, less
    /// so when full width.
    pub fn default_side_padding(&self) -> u32 {
        match self.block_type() {
            Some(BlockType::Button | BlockType::Image | BlockType::Footer | BlockType::BrandHeader) => 0,
            _ if self.is_full_width() => 24,
            _ => 32,
        }
    }

    /// Top/bottom padding used when the block sets none.
    pub fn default_vertical_padding(&self) -> u32 {
        match self.block_type() {
            Some(BlockType::Footer | BlockType::BrandHeader) => 0,
            _ => 16,
        }
    }
}
