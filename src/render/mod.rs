mod blocks;
pub mod style;
pub mod text;

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::debug;

use crate::block::Block;
use crate::config::BrandConfig;
use crate::document::DocumentMeta;
use style::{CONTENT_GUTTER_PX, FONT_LINKS, GLOBAL_CSS, MAX_CONTENT_WIDTH_PX};

pub use text::{render_text, render_text_with};

/// Placeholder shown instead of an empty body.
pub const EMPTY_PLACEHOLDER: &str = "No content yet. Add blocks to build your email.";

/// Per-render settings that are not part of the document itself.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub brand: BrandConfig,
    /// Used in the "View in browser" link; `preview` when absent.
    pub campaign_id: Option<String>,
    /// Prepend an inbox-style "From / Subject" strip, as the editor preview does.
    pub inbox_header: bool,
}

/// Render with default options.
pub fn render(seq: &[Block], meta: &DocumentMeta) -> String {
    render_html(seq, meta, &RenderOptions::default())
}

/// Render a complete HTML document. Never fails: every missing or malformed
/// field falls back to a default.
pub fn render_html(seq: &[Block], meta: &DocumentMeta, options: &RenderOptions) -> String {
    let brand = &options.brand;
    debug!(blocks = seq.len(), "rendering html document");

    let body = if seq.is_empty() {
        format!(
            r#"<p style="text-align: center; color: #999999; padding: 40px 0; margin: 0; font-family: Arial, sans-serif;">{EMPTY_PLACEHOLDER}</p>"#
        )
    } else {
        seq.iter()
            .map(|block| blocks::render_block(block, brand))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let title = match non_blank(&meta.subject) {
        Some(subject) => encode_text(subject).into_owned(),
        None => "Email Preview".to_string(),
    };
    let inbox = if options.inbox_header {
        inbox_header(meta, brand)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {FONT_LINKS}
    <style>{GLOBAL_CSS}</style>
</head>
<body style="margin: 0; padding: 20px; background-color: #f7f7f7; font-family: Arial, sans-serif; -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale;">
    <div class="container" style="background-color: #ffffff; max-width: {MAX_CONTENT_WIDTH_PX}px; margin: 0 auto; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); overflow: hidden;">
{inbox}{preheader}
        <div class="content" style="padding: 0 {CONTENT_GUTTER_PX}px;">
{body}
        </div>
    </div>
</body>
</html>"#,
        preheader = preheader_bar(meta, options),
    )
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn inbox_header(meta: &DocumentMeta, brand: &BrandConfig) -> String {
    let sender = non_blank(&meta.sender_name).unwrap_or(&brand.default_sender_name);
    let subject = non_blank(&meta.subject).unwrap_or("Email Subject");
    format!(
        r#"        <div class="inbox-header" style="padding: 12px 20px; background-color: #ffffff; border-bottom: 1px solid #e9ecef; font-size: 13px; color: #333333; line-height: 1.5;"><strong>From:</strong> {}<br/><strong>Subject:</strong> {}</div>
"#,
        encode_text(sender),
        encode_text(subject),
    )
}

fn preheader_bar(meta: &DocumentMeta, options: &RenderOptions) -> String {
    let brand = &options.brand;
    let preheader = non_blank(&meta.preheader).unwrap_or(&brand.default_preheader);
    let campaign = options
        .campaign_id
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or("preview");
    let href = format!(
        "{}/email-preview?c={}",
        brand.site_url.trim_end_matches('/'),
        urlencoding::encode(campaign)
    );
    format!(
        r#"        <div class="preheader" style="padding: 15px 20px; background-color: #f8f9fa; border-bottom: 1px solid #e9ecef;">
            <div style="display: flex; justify-content: space-between; align-items: center; font-size: 12px; color: #666666;">
                <div style="color: #333333; font-weight: 500;">{}</div>
                <div style="text-align: right; margin-left: auto;"><a href="{}" style="color: #6c63ff; text-decoration: underline; font-weight: 500;">View in browser</a></div>
            </div>
        </div>"#,
        encode_text(preheader),
        encode_double_quoted_attribute(&href),
    )
}
