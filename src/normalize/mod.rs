use chrono::{Datelike, Utc};
use tracing::debug;

use crate::block::{Block, BlockKind, BlockType, DEFAULT_FONT_FAMILY};
use crate::config::BrandConfig;

/// Defaults a block is backfilled with, resolved per type.
#[derive(Debug, Clone, PartialEq)]
struct StyleDefaults {
    full_width: bool,
    font_size: &'static str,
    font_weight: &'static str,
    font_style: &'static str,
    text_decoration: &'static str,
    text_align: &'static str,
    font_family: &'static str,
    text_color: &'static str,
    background_color: &'static str,
    line_height: &'static str,
}

const BASE_DEFAULTS: StyleDefaults = StyleDefaults {
    full_width: false,
    font_size: "16px",
    font_weight: "normal",
    font_style: "normal",
    text_decoration: "none",
    text_align: "left",
    font_family: DEFAULT_FONT_FAMILY,
    text_color: "#333333",
    background_color: "transparent",
    line_height: "1.6",
};

fn defaults_for(block_type: Option<BlockType>) -> StyleDefaults {
    match block_type {
        Some(BlockType::Header) => StyleDefaults {
            font_size: "32px",
            font_weight: "bold",
            text_align: "center",
            ..BASE_DEFAULTS
        },
        Some(BlockType::Button) => StyleDefaults {
            font_weight: "bold",
            text_align: "center",
            ..BASE_DEFAULTS
        },
        _ => BASE_DEFAULTS,
    }
}

/// Normalize with the default brand settings.
pub fn normalize(seq: &[Block]) -> Vec<Block> {
    normalize_with(seq, &BrandConfig::default())
}

/// Normalize every block; footer legal fields fall back to `brand`.
///
/// Only absent fields are filled. Anything already set, including
/// `paddingTop: 0` or an empty string, is kept, so a second pass is a no-op.
pub fn normalize_with(seq: &[Block], brand: &BrandConfig) -> Vec<Block> {
    seq.iter()
        .map(|block| {
            let normalized = normalize_block(block, brand);
            if normalized != *block {
                debug!(id = %block.id, "normalized block properties");
            }
            normalized
        })
        .collect()
}

fn normalize_block(block: &Block, brand: &BrandConfig) -> Block {
    let mut out = block.clone();
    let d = defaults_for(block.block_type());

    let vertical = block.default_vertical_padding();
    out.layout.padding_top.get_or_insert(vertical);
    out.layout.padding_bottom.get_or_insert(vertical);
    out.layout.full_width.get_or_insert(d.full_width);
    // Side defaults depend on the width mode, so they come after it.
    let side = out.default_side_padding();
    out.layout.padding_left.get_or_insert(side);
    out.layout.padding_right.get_or_insert(side);

    let style = &mut out.style;
    fill(&mut style.font_size, d.font_size);
    fill(&mut style.font_weight, d.font_weight);
    fill(&mut style.font_style, d.font_style);
    fill(&mut style.text_decoration, d.text_decoration);
    fill(&mut style.text_align, d.text_align);
    fill(&mut style.font_family, d.font_family);
    fill(&mut style.text_color, d.text_color);
    fill(&mut style.background_color, d.background_color);
    fill(&mut style.line_height, d.line_height);

    canonicalize(&mut style.text_color);
    canonicalize(&mut style.background_color);

    if let BlockKind::Footer(footer) = &mut out.kind {
        fill_owned(&mut footer.unsubscribe_url, || brand.unsubscribe_url());
        fill(&mut footer.unsubscribe_text, "Unsubscribe");
        fill_owned(&mut footer.privacy_url, || brand.privacy_url());
        fill(&mut footer.privacy_text, "Privacy Policy");
        fill_owned(&mut footer.terms_url, || brand.terms_url());
        fill(&mut footer.terms_text, "Terms of Service");
        fill_owned(&mut footer.footer_text, || brand.footer_text(Utc::now().year()));
    }

    out
}

fn fill(slot: &mut Option<String>, default: &str) {
    if slot.is_none() {
        *slot = Some(default.to_string());
    }
}

fn fill_owned(slot: &mut Option<String>, default: impl FnOnce() -> String) {
    if slot.is_none() {
        *slot = Some(default());
    }
}

fn canonicalize(slot: &mut Option<String>) {
    if let Some(color) = slot.as_deref() {
        if let Some(expanded) = expand_short_hex(color) {
            *slot = Some(expanded);
        }
    }
}

/// `#abc` becomes `#aabbcc`; every other value (names, `rgb()`, gradients,
/// 6/8-digit hex, `None`) comes back unchanged.
pub fn normalize_hex(color: Option<&str>) -> Option<String> {
    color.map(|c| expand_short_hex(c).unwrap_or_else(|| c.to_string()))
}

fn expand_short_hex(color: &str) -> Option<String> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 3 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let mut out = String::with_capacity(7);
    out.push('#');
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::block::create_block;

    fn block(value: serde_json::Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex(Some("#abc")).as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex(Some("#ABC")).as_deref(), Some("#AABBCC"));
        assert_eq!(normalize_hex(Some("#aabbcc")).as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex(Some("#aabbccdd")).as_deref(), Some("#aabbccdd"));
        assert_eq!(normalize_hex(Some("transparent")).as_deref(), Some("transparent"));
        assert_eq!(normalize_hex(Some("rgb(1, 2, 3)")).as_deref(), Some("rgb(1, 2, 3)"));
        assert_eq!(normalize_hex(Some("#xyz")).as_deref(), Some("#xyz"));
        assert_eq!(normalize_hex(None), None);
    }

    #[test]
    fn test_backfills_missing_fields() {
        let out = normalize(&[block(json!({"id": "t", "type": "text", "content": "hi"}))]);
        let b = &out[0];
        assert_eq!(b.layout.padding_top, Some(16));
        assert_eq!(b.layout.full_width, Some(false));
        assert_eq!(b.style.text_color.as_deref(), Some("#333333"));
        assert_eq!(b.style.background_color.as_deref(), Some("transparent"));
        assert_eq!(b.style.line_height.as_deref(), Some("1.6"));
        assert_eq!(b.content(), Some("hi"));
    }

    #[test]
    fn test_type_specific_defaults() {
        let out = normalize(&[
            block(json!({"id": "h", "type": "header"})),
            block(json!({"id": "b", "type": "button"})),
        ]);
        assert_eq!(out[0].style.font_size.as_deref(), Some("32px"));
        assert_eq!(out[0].style.text_align.as_deref(), Some("center"));
        assert_eq!(out[1].style.font_weight.as_deref(), Some("bold"));
        assert_eq!(out[1].style.font_size.as_deref(), Some("16px"));
    }

    #[test]
    fn test_side_padding_defaults_by_type_and_width() {
        let out = normalize(&[
            block(json!({"id": "t", "type": "text"})),
            block(json!({"id": "w", "type": "text", "fullWidth": true})),
            block(json!({"id": "i", "type": "image"})),
            block(json!({"id": "f", "type": "footer"})),
            block(json!({"id": "p", "type": "text", "paddingLeft": 0})),
        ]);
        let sides: Vec<(Option<u32>, Option<u32>)> = out
            .iter()
            .map(|b| (b.layout.padding_left, b.layout.padding_right))
            .collect();
        assert_eq!(
            sides,
            vec![
                (Some(32), Some(32)),
                (Some(24), Some(24)),
                (Some(0), Some(0)),
                (Some(0), Some(0)),
                (Some(0), Some(32)),
            ]
        );
        assert_eq!(out[3].layout.padding_top, Some(0));
        assert_eq!(out[0].layout.padding_top, Some(16));
    }

    #[test]
    fn test_keeps_falsy_but_present_values() {
        let out = normalize(&[block(json!({
            "id": "t", "type": "text", "paddingTop": 0, "fullWidth": false, "fontSize": ""
        }))]);
        assert_eq!(out[0].layout.padding_top, Some(0));
        assert_eq!(out[0].style.font_size.as_deref(), Some(""));
    }

    #[test]
    fn test_expands_short_hex_colors() {
        let out = normalize(&[block(json!({
            "id": "t", "type": "text", "textColor": "#fff", "backgroundColor": "#1a2"
        }))]);
        assert_eq!(out[0].style.text_color.as_deref(), Some("#ffffff"));
        assert_eq!(out[0].style.background_color.as_deref(), Some("#11aa22"));
    }

    #[test]
    fn test_leaves_gradients_alone() {
        let created = create_block("button").first().clone();
        let out = normalize(&[created.clone()]);
        assert_eq!(out[0].style.background_color, created.style.background_color);
    }

    #[test]
    fn test_footer_legal_defaults() {
        let out = normalize(&[block(json!({"id": "f", "type": "footer", "termsText": "Rules"}))]);
        let BlockKind::Footer(footer) = &out[0].kind else {
            panic!("expected footer");
        };
        assert_eq!(footer.terms_text.as_deref(), Some("Rules"));
        assert_eq!(
            footer.privacy_url.as_deref(),
            Some("https://cymasphere.com/privacy-policy")
        );
        assert!(footer.footer_text.as_deref().unwrap().contains("All rights reserved."));
    }

    #[test]
    fn test_idempotent() {
        let seq = vec![
            block(json!({"id": "1", "type": "header", "textColor": "#abc"})),
            block(json!({"id": "2", "type": "footer"})),
            block(json!({"id": "3", "type": "mystery", "content": "?"})),
            create_block("columns").first().clone(),
        ];
        let once = normalize(&seq);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(normalize(&[]).is_empty());
    }
}
