mod defaults;
mod types;
pub mod wire;

pub use defaults::{
    create_block, create_block_with, default_footer, new_block_id, Created, BRAND_BACKGROUND,
    BUTTON_GRADIENT, DEFAULT_FONT_FAMILY, HEADER_TEXT, PLACEHOLDER_IMAGE, PLACEHOLDER_VIDEO,
};
pub use types::{
    Block, BlockKind, BlockType, Column, Footer, HeaderLevel, Layout, LogoStyle, SocialLink,
    TextStyle,
};
pub use wire::{BlockFields, BlockPatch, RawBlock};
