use kuchiki::NodeRef;
use serde_json::Map;
use tracing::debug;

use super::{decode, strip_envelope};
use crate::block::{Block, BlockFields, BlockKind, BlockType, HeaderLevel, RawBlock};
use crate::html::{attr, inner_html, parse_body, strip_html, tag_name};

/// Turns arbitrary HTML into a block sequence. Callers with their own notion
/// of the markup can supply one to [`load_blocks`].
pub trait HtmlImporter {
    fn import(&self, html: &str) -> Vec<Block>;
}

/// Envelope first; otherwise (or when the envelope holds no blocks) fall back
/// to `importer`.
pub fn load_blocks(html: &str, importer: &dyn HtmlImporter) -> Vec<Block> {
    match decode(html) {
        Some(blocks) if !blocks.is_empty() => blocks,
        _ => {
            debug!("no usable envelope, importing blocks from markup");
            importer.import(&strip_envelope(html))
        }
    }
}

/// Elements marked with `data-type` become blocks of that type (with
/// `data-id` kept when present). Without any marked elements, each element
/// child of the body is mapped by tag name: headings to `header`, `p` to
/// `text`, `a` to `button`, `img` to `image`, `hr` to `divider`, anything else
/// to `text`. Bare text with no elements becomes one `text` block.
///
/// The markup goes through html5ever, so implied end tags close where a
/// browser would close them and the importer never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveImporter;

impl HtmlImporter for NaiveImporter {
    fn import(&self, html: &str) -> Vec<Block> {
        let Some(body) = parse_body(html) else {
            return Vec::new();
        };

        let mut marked = Vec::new();
        collect_marked(&body, &mut marked);
        let blocks: Vec<Block> = if !marked.is_empty() {
            marked
                .iter()
                .enumerate()
                .map(|(i, node)| from_marked(node, i))
                .collect()
        } else {
            body.children()
                .filter(|node| node.as_element().is_some())
                .enumerate()
                .map(|(i, node)| from_tag(&node, i))
                .collect()
        };
        if !blocks.is_empty() {
            return blocks;
        }

        let text = body.text_contents().trim().replace('\u{a0}', " ");
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Block::new(
                element_id(0),
                BlockKind::Text {
                    content: Some(text),
                },
            )]
        }
    }
}

fn element_id(index: usize) -> String {
    format!("element_{index}")
}

/// Outermost `data-type` elements in document order.
fn collect_marked(node: &NodeRef, out: &mut Vec<NodeRef>) {
    for child in node.children() {
        if child.as_element().is_none() {
            continue;
        }
        if attr(&child, "data-type").is_some() {
            out.push(child);
        } else {
            collect_marked(&child, out);
        }
    }
}

fn from_marked(node: &NodeRef, index: usize) -> Block {
    let id = attr(node, "data-id")
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| element_id(index));
    let type_name = attr(node, "data-type").unwrap_or_default();
    Block::from(RawBlock {
        id,
        type_name,
        fields: BlockFields {
            content: Some(inner_html(node).trim().to_string()),
            ..BlockFields::default()
        },
        extra: Map::new(),
    })
}

fn from_tag(node: &NodeRef, index: usize) -> Block {
    let tag = tag_name(node).unwrap_or_default();
    let inner = inner_html(node).trim().to_string();
    let kind = match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => BlockKind::Header {
            content: Some(inner),
            header_type: HeaderLevel::parse(&tag),
        },
        "a" => BlockKind::Button {
            content: Some(strip_html(&inner).trim().to_string()),
            url: attr(node, "href"),
            gradient: None,
        },
        "img" => BlockKind::Image {
            src: attr(node, "src"),
            alt: attr(node, "alt"),
        },
        "hr" => BlockKind::Divider,
        _ => BlockKind::Text {
            content: Some(inner),
        },
    };
    let mut block = Block::new(element_id(index), kind);
    if block.block_type() == Some(BlockType::Header) {
        block.style.text_align = Some("center".to_string());
    }
    block
}
