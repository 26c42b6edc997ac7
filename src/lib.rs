pub mod block;
pub mod collection;
pub mod config;
pub mod data;
pub mod document;
pub mod envelope;
pub mod error;
mod html;
pub mod normalize;
pub mod personalize;
pub mod render;
pub mod session;
pub mod tracking;

pub use block::{create_block, Block, BlockKind, BlockType, Created};
pub use document::{Document, DocumentMeta};
pub use error::MailcraftError;
pub type Result<T> = std::result::Result<T, MailcraftError>;
