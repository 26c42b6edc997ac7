use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::Block;
use crate::config::BrandConfig;
use crate::data::{load_file, value_type_name};
use crate::envelope::{embed, load_blocks, HtmlImporter};
use crate::normalize::normalize_with;
use crate::render::{render_html, render_text_with, RenderOptions};
use crate::MailcraftError;

/// Subject, sender and preheader. Never stored inside blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preheader: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(meta: DocumentMeta, blocks: Vec<Block>) -> Self {
        Self { meta, blocks }
    }

    /// Load a `.json`, `.yml`/`.yaml`, or `.toml` document.
    ///
    /// The root is either an object (`subject`, `senderName`, `preheader`,
    /// `blocks`) or, for JSON and YAML, a bare array of blocks.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let value = load_file(path)?;
        let parse_err = |source| MailcraftError::JsonParse {
            path: path.to_path_buf(),
            source,
        };
        match value {
            Value::Array(_) => Ok(Self {
                meta: DocumentMeta::default(),
                blocks: serde_json::from_value(value).map_err(parse_err)?,
            }),
            Value::Object(_) => serde_json::from_value(value).map_err(parse_err),
            other => Err(MailcraftError::InvalidDocumentShape {
                path: path.to_path_buf(),
                message: format!(
                    "expected array or object at root, got {}",
                    value_type_name(&other)
                ),
            }),
        }
    }

    /// Rebuild blocks from saved HTML: the envelope when present, else `importer`.
    pub fn from_html(html: &str, meta: DocumentMeta, importer: &dyn HtmlImporter) -> Self {
        Self {
            meta,
            blocks: load_blocks(html, importer),
        }
    }

    pub fn normalized(&self, brand: &BrandConfig) -> Self {
        Self {
            meta: self.meta.clone(),
            blocks: normalize_with(&self.blocks, brand),
        }
    }

    pub fn render_html(&self, options: &RenderOptions) -> String {
        render_html(&self.blocks, &self.meta, options)
    }

    pub fn render_text(&self, brand: &BrandConfig) -> String {
        render_text_with(&self.blocks, brand)
    }

    /// Rendered HTML with the block envelope prepended, as it is persisted.
    pub fn to_saved_html(&self, options: &RenderOptions) -> String {
        embed(&self.render_html(options), &self.blocks)
    }
}
