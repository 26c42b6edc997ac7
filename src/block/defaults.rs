use chrono::{Datelike, Utc};
use rand::Rng;
use serde_json::Map;

use super::types::{Block, BlockKind, BlockType, Column, Footer, Layout, LogoStyle, SocialLink, TextStyle};
use crate::config::BrandConfig;

/// Palette entry that inserts a header followed by a text block.
pub const HEADER_TEXT: &str = "header-text";

pub const BUTTON_GRADIENT: &str = "linear-gradient(135deg, #6c63ff 0%, #4ecdc4 100%)";
pub const BRAND_BACKGROUND: &str = "linear-gradient(135deg, #1a1a1a 0%, #121212 100%)";
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/600x300/6c63ff/ffffff?text=Your+Image";
pub const PLACEHOLDER_VIDEO: &str =
    "https://via.placeholder.com/600x300/6c63ff/ffffff?text=Video+Placeholder";

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Result of [`create_block`]: most palette entries produce one block, composite
/// entries produce an ordered pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    One(Block),
    Pair(Block, Block),
}

impl Created {
    pub fn into_vec(self) -> Vec<Block> {
        match self {
            Created::One(block) => vec![block],
            Created::Pair(first, second) => vec![first, second],
        }
    }

    /// The single block, or the first of a pair.
    pub fn first(&self) -> &Block {
        match self {
            Created::One(block) | Created::Pair(block, _) => block,
        }
    }
}

impl IntoIterator for Created {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// `<type>_<unix millis>_<9 random base36 chars>`.
///
/// The random suffix keeps ids distinct when several blocks of one type are
/// created within the same millisecond.
pub fn new_block_id(type_name: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{type_name}_{}_{suffix}", Utc::now().timestamp_millis())
}

/// Create a new block for a palette entry using the default brand settings.
pub fn create_block(type_name: &str) -> Created {
    create_block_with(type_name, &BrandConfig::default())
}

/// Create a new block for a palette entry.
///
/// Known types get their documented defaults, `"header-text"` yields a
/// header/text pair, and any other name yields a generic block that keeps the
/// name as its type.
pub fn create_block_with(type_name: &str, brand: &BrandConfig) -> Created {
    let id = new_block_id(type_name);

    if type_name == HEADER_TEXT {
        let mut header = base_block(format!("{id}_header"), BlockKind::Header {
            content: Some("Your Header Text Here".to_string()),
            header_type: None,
        });
        header.style.font_size = Some("24px".to_string());
        header.style.font_weight = Some("bold".to_string());
        header.layout.padding_bottom = Some(0);

        let mut text = base_block(format!("{id}_text"), BlockKind::Text {
            content: Some(
                "Add your text content here. This is a common combination of header and text elements."
                    .to_string(),
            ),
        });
        text.layout.padding_top = Some(0);
        return Created::Pair(header, text);
    }

    let Some(block_type) = BlockType::parse(type_name) else {
        return Created::One(base_block(id, BlockKind::Unknown {
            type_name: type_name.to_string(),
            content: Some("New element".to_string()),
        }));
    };

    Created::One(default_block(block_type, id, brand))
}

fn default_block(block_type: BlockType, id: String, brand: &BrandConfig) -> Block {
    match block_type {
        BlockType::Header => {
            let mut block = base_block(id, BlockKind::Header {
                content: Some("Your Header Text Here".to_string()),
                header_type: None,
            });
            block.style.font_size = Some("32px".to_string());
            block.style.font_weight = Some("bold".to_string());
            block.style.text_align = Some("center".to_string());
            block
        }
        BlockType::Text => base_block(id, BlockKind::Text {
            content: Some(
                "Add your text content here. You can edit this by double-clicking.".to_string(),
            ),
        }),
        BlockType::Button => {
            let mut block = base_block(id, BlockKind::Button {
                content: Some("Click Here".to_string()),
                url: Some("#".to_string()),
                gradient: None,
            });
            block.style.font_weight = Some("bold".to_string());
            block.style.text_align = Some("center".to_string());
            block.style.background_color = Some(BUTTON_GRADIENT.to_string());
            block.style.text_color = Some("#ffffff".to_string());
            block
        }
        BlockType::Image => base_block(id, BlockKind::Image {
            src: Some(PLACEHOLDER_IMAGE.to_string()),
            alt: Some("Image description".to_string()),
        }),
        BlockType::Divider => base_block(id, BlockKind::Divider),
        BlockType::Spacer => base_block(id, BlockKind::Spacer {
            height: Some("30px".to_string()),
        }),
        BlockType::Social => base_block(id, BlockKind::Social {
            links: ["facebook", "twitter", "instagram", "youtube", "discord"]
                .into_iter()
                .map(|platform| SocialLink::new(platform, "#"))
                .collect(),
        }),
        BlockType::Columns => base_block(id, BlockKind::Columns {
            columns: vec![
                Column {
                    content: "Column 1 content".to_string(),
                    ..Column::default()
                },
                Column {
                    content: "Column 2 content".to_string(),
                    ..Column::default()
                },
            ],
        }),
        BlockType::Video => base_block(id, BlockKind::Video {
            thumbnail: Some(PLACEHOLDER_VIDEO.to_string()),
            url: Some("#".to_string()),
        }),
        BlockType::Footer => {
            let mut block = base_block(id, BlockKind::Footer(default_footer(brand)));
            block.layout.full_width = Some(true);
            block.style.background_color = Some("#363636".to_string());
            block.style.text_color = Some("#ffffff".to_string());
            block
        }
        BlockType::BrandHeader => {
            let mut block = base_block(id, BlockKind::BrandHeader {
                content: Some(brand.brand_name.clone()),
                logo_style: Some(LogoStyle::Gradient),
            });
            block.layout.full_width = Some(true);
            block.style.background_color = Some(BRAND_BACKGROUND.to_string());
            block.style.text_color = Some("#ffffff".to_string());
            block
        }
    }
}

/// Footer fields with every link and label filled in from the brand settings.
pub fn default_footer(brand: &BrandConfig) -> Footer {
    Footer {
        social_links: brand.social_links.clone(),
        footer_text: Some(brand.footer_text(Utc::now().year())),
        unsubscribe_url: Some(brand.unsubscribe_url()),
        unsubscribe_text: Some("Unsubscribe".to_string()),
        privacy_url: Some(brand.privacy_url()),
        privacy_text: Some("Privacy Policy".to_string()),
        terms_url: Some(brand.terms_url()),
        terms_text: Some("Terms of Service".to_string()),
    }
}

/// Shared layout and typography every freshly created block starts with.
fn base_block(id: String, kind: BlockKind) -> Block {
    Block {
        id,
        kind,
        layout: Layout {
            padding_top: Some(16),
            padding_bottom: Some(16),
            full_width: Some(false),
            ..Layout::default()
        },
        style: TextStyle {
            font_size: Some("16px".to_string()),
            font_weight: Some("normal".to_string()),
            font_style: Some("normal".to_string()),
            text_decoration: Some("none".to_string()),
            text_align: Some("left".to_string()),
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            ..TextStyle::default()
        },
        extra: Map::new(),
    }
}
