use chrono::{Datelike, Utc};

use crate::block::{Block, BlockKind, Footer, SocialLink};
use crate::config::BrandConfig;
use crate::html::strip_html;

const RULE_WIDTH: usize = 50;

/// Render with the default brand settings.
pub fn render_text(seq: &[Block]) -> String {
    render_text_with(seq, &BrandConfig::default())
}

/// One entry per block, separated by a blank line. Markup is stripped
/// best-effort; malformed tags never cause a failure.
pub fn render_text_with(seq: &[Block], brand: &BrandConfig) -> String {
    seq.iter()
        .map(|block| block_text(block, brand))
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

fn block_text(block: &Block, brand: &BrandConfig) -> String {
    match &block.kind {
        BlockKind::Header { content, .. } => {
            let title = stripped(content);
            let underline = "=".repeat(title.chars().count());
            format!("{title}\n{underline}")
        }
        BlockKind::Text { content } => stripped(content),
        BlockKind::Button { content, url, .. } => {
            let label = format!("[BUTTON: {}]", stripped(content));
            match url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() && url != "#" => format!("{label}\n{url}"),
                _ => label,
            }
        }
        BlockKind::Image { src, .. } => format!("[IMAGE: {}]", src.as_deref().unwrap_or("")),
        BlockKind::Divider => rule(),
        BlockKind::Spacer { .. } => String::new(),
        BlockKind::Social { links } => social_line(links),
        BlockKind::Columns { columns } => columns
            .iter()
            .map(|c| strip_html(&c.content).trim().to_string())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        BlockKind::Video { url, .. } => format!("[VIDEO: {}]", url.as_deref().unwrap_or("")),
        BlockKind::Footer(footer) => footer_text(footer, brand),
        BlockKind::BrandHeader { content, .. } => {
            let name = stripped(content);
            if name.is_empty() {
                format!("[LOGO] {}", brand.brand_name)
            } else {
                format!("[LOGO] {name}")
            }
        }
        BlockKind::Unknown { content, .. } => stripped(content),
    }
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn stripped(content: &Option<String>) -> String {
    content
        .as_deref()
        .map(|c| strip_html(c).trim().to_string())
        .unwrap_or_default()
}

fn social_line(links: &[SocialLink]) -> String {
    links
        .iter()
        .map(|l| format!("{}: {}", l.platform, l.url))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn footer_text(footer: &Footer, brand: &BrandConfig) -> String {
    let mut lines = vec![rule()];
    if !footer.social_links.is_empty() {
        lines.push(social_line(&footer.social_links));
    }
    lines.push(match non_blank(&footer.footer_text) {
        Some(text) => strip_html(text).trim().to_string(),
        None => brand.footer_text(Utc::now().year()),
    });

    let link = |text: &Option<String>, label: &str, url: &Option<String>, default: String| {
        let url = non_blank(url).map(|u| brand.absolutize(u)).unwrap_or(default);
        format!("{}: {url}", non_blank(text).unwrap_or(label))
    };
    lines.push(
        [
            link(
                &footer.unsubscribe_text,
                "Unsubscribe",
                &footer.unsubscribe_url,
                brand.unsubscribe_url(),
            ),
            link(
                &footer.privacy_text,
                "Privacy Policy",
                &footer.privacy_url,
                brand.privacy_url(),
            ),
            link(
                &footer.terms_text,
                "Terms of Service",
                &footer.terms_url,
                brand.terms_url(),
            ),
        ]
        .join(" | "),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn seq(value: serde_json::Value) -> Vec<Block> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_header_and_text() {
        let out = render_text(&seq(json!([
            {"type": "header", "content": "<b>Hello</b>"},
            {"type": "text", "content": "World <i>now</i>"}
        ])));
        assert_eq!(out, "Hello\n=====\n\nWorld now");
    }

    #[test]
    fn test_button_image_and_video() {
        let out = render_text(&seq(json!([
            {"type": "button", "content": "<b>Buy</b>", "url": "https://shop.test"},
            {"type": "button", "content": "Nope", "url": "#"},
            {"type": "image", "src": "a.png"},
            {"type": "video", "url": "https://v.test"}
        ])));
        assert!(out.contains("[BUTTON: Buy]\nhttps://shop.test"));
        assert!(out.contains("[BUTTON: Nope]\n\n"));
        assert!(out.contains("[IMAGE: a.png]"));
        assert!(out.contains("[VIDEO: https://v.test]"));
    }

    #[test]
    fn test_divider_and_spacer() {
        let out = render_text(&seq(json!([
            {"type": "text", "content": "a"},
            {"type": "divider"},
            {"type": "spacer"},
            {"type": "text", "content": "b"}
        ])));
        assert_eq!(out, format!("a\n\n{}\n\n\n\nb", "─".repeat(50)));
    }

    #[test]
    fn test_footer_links() {
        let out = render_text(&seq(json!([{
            "type": "footer",
            "footerText": "© Us",
            "socialLinks": [{"platform": "facebook", "url": "https://fb.test"}],
            "privacyUrl": "/p",
            "termsText": "Rules"
        }])));
        assert!(out.contains("facebook: https://fb.test"));
        assert!(out.contains("© Us"));
        assert!(out.contains(
            "Unsubscribe: https://cymasphere.com/unsubscribe?email={{email}} | Privacy Policy: https://cymasphere.com/p | Rules: https://cymasphere.com/terms-of-service"
        ));
    }

    #[test]
    fn test_brand_header() {
        let out = render_text(&seq(json!([{"type": "brand-header", "content": "<span>CYMA</span>SPHERE"}])));
        assert_eq!(out, "[LOGO] CYMASPHERE");
        let fallback = render_text(&seq(json!([{"type": "brand-header"}])));
        assert_eq!(fallback, "[LOGO] CYMASPHERE");
    }

    #[test]
    fn test_unknown_type_uses_content() {
        let out = render_text(&seq(json!([{"type": "countdown", "content": "<p>Soon</p>"}])));
        assert_eq!(out, "Soon");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render_text(&[]), "");
    }
}
