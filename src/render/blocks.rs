use chrono::{Datelike, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text};
use tracing::debug;

use super::style::{CONTENT_GUTTER_PX, MAX_CONTENT_WIDTH_PX};
use crate::block::{
    Block, BlockKind, BlockType, Column, Footer, HeaderLevel, LogoStyle, SocialLink,
    BRAND_BACKGROUND, BUTTON_GRADIENT, DEFAULT_FONT_FAMILY, PLACEHOLDER_IMAGE, PLACEHOLDER_VIDEO,
};
use crate::config::BrandConfig;
use crate::html::strip_html;

const BRAND_FONT_STACK: &str =
    "Montserrat, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";
const PREFIX_GRADIENT: &str = "linear-gradient(90deg, #6c63ff, #4ecdc4)";

/// Style values after falling back to the render defaults for the block's type.
struct Resolved<'a> {
    font_size: &'a str,
    font_weight: &'a str,
    font_style: &'a str,
    text_decoration: &'a str,
    text_align: &'a str,
    font_family: &'a str,
    line_height: &'a str,
    text_color: &'a str,
    background_color: &'a str,
    padding_top: u32,
    padding_right: u32,
    padding_bottom: u32,
    padding_left: u32,
    full_width: bool,
}

struct Fallbacks {
    font_size: &'static str,
    font_weight: &'static str,
    text_align: &'static str,
    line_height: &'static str,
    text_color: &'static str,
    background_color: &'static str,
}

const BASE_FALLBACKS: Fallbacks = Fallbacks {
    font_size: "16px",
    font_weight: "normal",
    text_align: "left",
    line_height: "1.6",
    text_color: "#555555",
    background_color: "transparent",
};

fn fallbacks(block_type: Option<BlockType>) -> Fallbacks {
    match block_type {
        Some(BlockType::Header) => Fallbacks {
            font_weight: "800",
            text_align: "center",
            line_height: "1.2",
            text_color: "#333333",
            ..BASE_FALLBACKS
        },
        Some(BlockType::Button) => Fallbacks {
            font_size: "1rem",
            font_weight: "700",
            text_align: "center",
            line_height: "1.2",
            text_color: "#ffffff",
            ..BASE_FALLBACKS
        },
        Some(BlockType::Footer) => Fallbacks {
            font_size: "0.8rem",
            line_height: "1.4",
            text_color: "#ffffff",
            background_color: "#363636",
            ..BASE_FALLBACKS
        },
        _ => BASE_FALLBACKS,
    }
}

/// `value` unless it is absent or blank.
fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
}

fn resolve(block: &Block) -> Resolved<'_> {
    let f = fallbacks(block.block_type());
    let s = &block.style;
    let l = &block.layout;
    let font_size = match &block.kind {
        BlockKind::Header { header_type, .. } => HeaderLevel::font_size(*header_type),
        _ => f.font_size,
    };
    let side = block.default_side_padding();
    let vertical = block.default_vertical_padding();
    Resolved {
        font_size: or(&s.font_size, font_size),
        font_weight: or(&s.font_weight, f.font_weight),
        font_style: or(&s.font_style, "normal"),
        text_decoration: or(&s.text_decoration, "none"),
        text_align: or(&s.text_align, f.text_align),
        font_family: or(&s.font_family, DEFAULT_FONT_FAMILY),
        line_height: or(&s.line_height, f.line_height),
        text_color: or(&s.text_color, f.text_color),
        background_color: or(&s.background_color, f.background_color),
        padding_top: l.padding_top.unwrap_or(vertical),
        padding_right: l.padding_right.unwrap_or(side),
        padding_bottom: l.padding_bottom.unwrap_or(vertical),
        padding_left: l.padding_left.unwrap_or(side),
        full_width: block.is_full_width(),
    }
}

impl Resolved<'_> {
    /// Shared typography declarations for text-bearing elements.
    fn typography(&self) -> String {
        format!(
            "font-size: {}; color: {}; text-align: {}; font-weight: {}; font-style: {}; text-decoration: {}; line-height: {}; font-family: {};",
            self.font_size,
            self.text_color,
            self.text_align,
            self.font_weight,
            self.font_style,
            self.text_decoration,
            self.line_height,
            self.font_family,
        )
    }
}

/// Outer container carrying the block's padding. Constrained blocks are
/// centred and capped at the content width. Full-width blocks bleed across the
/// content gutter with inline negative margins, so the bleed holds in clients
/// that strip `<style>`.
fn wrap(block: &Block, r: &Resolved<'_>, inner: &str) -> String {
    let data = format!(
        r#"data-type="{}" data-id="{}""#,
        attr(block.type_name()),
        attr(&block.id)
    );
    // Buttons paint their own fill; the wrapper stays clear.
    let background = match block.kind {
        BlockKind::Button { .. } => "transparent",
        _ => r.background_color,
    };
    let padding = format!(
        "padding: {}px {}px {}px {}px;",
        r.padding_top, r.padding_right, r.padding_bottom, r.padding_left
    );
    if r.full_width {
        format!(
            r#"<div class="full-width" {data} style="margin-left: -{g}px; margin-right: -{g}px; width: calc(100% + {bleed}px); box-sizing: border-box; {padding} background-color: {background};">{inner}</div>"#,
            g = CONTENT_GUTTER_PX,
            bleed = 2 * CONTENT_GUTTER_PX,
        )
    } else {
        format!(
            r#"<div class="constrained-width" {data} style="margin: 0 auto; max-width: {MAX_CONTENT_WIDTH_PX}px; box-sizing: border-box; {padding} background-color: {background};">{inner}</div>"#,
        )
    }
}

pub(crate) fn render_block(block: &Block, brand: &BrandConfig) -> String {
    let r = resolve(block);
    let inner = match &block.kind {
        BlockKind::Header {
            content,
            header_type,
        } => {
            let tag = header_type.unwrap_or(HeaderLevel::H1).as_str();
            format!(
                r#"<{tag} style="{} background-color: {}; margin: 0; padding: 0;">{}</{tag}>"#,
                r.typography(),
                r.background_color,
                or(content, "Header Text"),
            )
        }
        BlockKind::Text { content } => format!(
            r#"<p style="{} background-color: {}; margin: 0; padding: 0;">{}</p>"#,
            r.typography(),
            r.background_color,
            or(content, "Text content"),
        ),
        BlockKind::Button {
            content,
            url,
            gradient,
        } => button(
            &r,
            or(content, "Button Text"),
            or(url, "#"),
            gradient.as_deref(),
            &block.style.background_color,
        ),
        BlockKind::Image { src, alt } => {
            image(&r, or(src, PLACEHOLDER_IMAGE), or(alt, "Email Image"))
        }
        BlockKind::Divider => {
            r#"<hr style="border: none; height: 2px; background: linear-gradient(90deg, #6c63ff, #4ecdc4); margin: 0;" />"#
                .to_string()
        }
        BlockKind::Spacer { height } => {
            let height = or(height, "20px");
            format!(
                r#"<div style="height: {height}; line-height: {height}; font-size: 1px;">&nbsp;</div>"#
            )
        }
        BlockKind::Social { links } => format!(
            r#"<div style="text-align: center;">{}</div>"#,
            social_row(links, brand)
        ),
        BlockKind::Columns { columns } => columns_row(&r, columns),
        BlockKind::Video { thumbnail, url } => {
            video(&r, or(thumbnail, PLACEHOLDER_VIDEO), or(url, "#"))
        }
        BlockKind::Footer(footer) => footer_markup(&r, footer, brand),
        BlockKind::BrandHeader {
            content,
            logo_style,
        } => brand_header(block, &r, content, *logo_style, brand),
        BlockKind::Unknown { type_name, content } => {
            debug!(id = %block.id, type_name, "rendering unknown block type as generic content");
            format!(
                r#"<div style="{} margin: 0;">{}</div>"#,
                r.typography(),
                content.as_deref().unwrap_or("")
            )
        }
    };
    wrap(block, &r, &inner)
}

fn button(
    r: &Resolved<'_>,
    content: &str,
    url: &str,
    gradient: Option<&str>,
    background: &Option<String>,
) -> String {
    // A gradient wins over a flat colour; `transparent` means "not set".
    let fill = gradient
        .filter(|g| !g.trim().is_empty())
        .or_else(|| {
            background
                .as_deref()
                .filter(|b| !b.trim().is_empty() && *b != "transparent")
        })
        .unwrap_or(BUTTON_GRADIENT);
    let (display, radius, shadow, width) = if r.full_width {
        ("block", "0", "none", "100%")
    } else {
        ("inline-block", "50px", "0 8px 25px rgba(108, 99, 255, 0.3)", "auto")
    };
    format!(
        r#"<div style="text-align: {align};"><a href="{href}" style="display: {display}; padding: 1.25rem 2.5rem; background: {fill}; color: {color}; text-decoration: {decoration}; border-radius: {radius}; font-weight: {weight}; font-size: {size}; font-style: {style}; font-family: {family}; line-height: {line}; text-transform: uppercase; letter-spacing: 1px; box-shadow: {shadow}; min-height: 1em; width: {width}; text-align: {align}; box-sizing: border-box; margin: 0;">{content}</a></div>"#,
        align = r.text_align,
        href = attr(url),
        color = r.text_color,
        decoration = r.text_decoration,
        weight = r.font_weight,
        size = r.font_size,
        style = r.font_style,
        family = r.font_family,
        line = r.line_height,
    )
}

fn image(r: &Resolved<'_>, src: &str, alt: &str) -> String {
    let (radius, shadow) = if r.full_width {
        ("0", "none")
    } else {
        ("8px", "0 4px 15px rgba(0, 0, 0, 0.1)")
    };
    format!(
        r#"<div style="text-align: {};"><img src="{}" alt="{}" style="max-width: 100%; height: auto; display: block; margin: 0 auto; border: 0; border-radius: {radius}; box-shadow: {shadow};" /></div>"#,
        r.text_align,
        attr(src),
        attr(alt),
    )
}

fn social_row(links: &[SocialLink], brand: &BrandConfig) -> String {
    links
        .iter()
        .map(|link| {
            let icon = match brand.icon_for(&link.platform) {
                Some(icon) => format!(
                    r#"<img src="{}" alt="{} icon" style="width: 20px; height: 20px; display: block; border: 0;" />"#,
                    attr(icon),
                    attr(&link.platform),
                ),
                None => "🔗".to_string(),
            };
            format!(
                r#"<a href="{}" style="text-decoration: none; display: inline-block; margin: 0 8px; vertical-align: middle;">{icon}</a>"#,
                attr(if link.url.trim().is_empty() { "#" } else { &link.url }),
            )
        })
        .collect()
}

fn columns_row(r: &Resolved<'_>, columns: &[Column]) -> String {
    if columns.is_empty() {
        return String::new();
    }
    let width = 100.0 / columns.len() as f64;
    let cells: String = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let content = if column.content.trim().is_empty() {
                format!("Column {} content", index + 1)
            } else {
                column.content.clone()
            };
            format!(
                r#"<div style="flex: 1 1 0; width: {width:.2}%; padding: 0 10px; box-sizing: border-box; text-align: {align};"><div style="font-size: {size}; color: {color}; line-height: {line}; font-weight: {weight}; font-style: {style}; text-decoration: {decoration}; font-family: {family};">{content}</div></div>"#,
                align = or(&column.text_align, r.text_align),
                size = r.font_size,
                color = or(&column.text_color, r.text_color),
                line = r.line_height,
                weight = r.font_weight,
                style = r.font_style,
                decoration = r.text_decoration,
                family = r.font_family,
            )
        })
        .collect();
    format!(r#"<div style="display: flex; gap: 20px;">{cells}</div>"#)
}

fn video(r: &Resolved<'_>, thumbnail: &str, url: &str) -> String {
    let radius = if r.full_width { "0" } else { "8px" };
    let href = attr(url);
    format!(
        r#"<div style="text-align: center;"><a href="{href}" style="position: relative; display: inline-block; max-width: 100%; text-decoration: none;"><img src="{thumb}" alt="Video thumbnail" style="max-width: 100%; height: auto; display: block; border: 0; border-radius: {radius};" /><span style="position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); width: 64px; height: 64px; border-radius: 50%; background: rgba(0, 0, 0, 0.6); color: #ffffff; font-size: 28px; line-height: 64px; text-align: center;">&#9654;</span></a><div style="margin-top: 0.5rem;"><a href="{href}" style="color: {color}; text-decoration: {decoration}; font-weight: {weight}; font-size: {size}; font-style: {style}; font-family: {family}; line-height: {line};">&#9654; Watch Video</a></div></div>"#,
        thumb = attr(thumbnail),
        color = r.text_color,
        decoration = r.text_decoration,
        weight = r.font_weight,
        size = r.font_size,
        style = r.font_style,
        family = r.font_family,
        line = r.line_height,
    )
}

/// Legal link target: the field if non-blank, else the brand default, made absolute.
fn legal_url(value: &Option<String>, default: String, brand: &BrandConfig) -> String {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(url) => brand.absolutize(url),
        None => default,
    }
}

fn footer_markup(r: &Resolved<'_>, footer: &Footer, brand: &BrandConfig) -> String {
    let social = if footer.social_links.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div style="margin-bottom: 16px; text-align: center;">{}</div>"#,
            social_row(&footer.social_links, brand)
        )
    };
    let year = Utc::now().year();
    let footer_text = match footer.footer_text.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(text) => text.to_string(),
        None => brand.footer_text(year),
    };
    let link_style = format!(
        "color: {}; text-decoration: underline; font-size: {};",
        r.text_color, r.font_size
    );
    let links = [
        (
            legal_url(&footer.unsubscribe_url, brand.unsubscribe_url(), brand),
            or(&footer.unsubscribe_text, "Unsubscribe"),
        ),
        (
            legal_url(&footer.privacy_url, brand.privacy_url(), brand),
            or(&footer.privacy_text, "Privacy Policy"),
        ),
        (
            legal_url(&footer.terms_url, brand.terms_url(), brand),
            or(&footer.terms_text, "Terms of Service"),
        ),
    ]
    .iter()
    .map(|(href, label)| format!(r#"<a href="{}" style="{link_style}">{label}</a>"#, attr(href)))
    .collect::<Vec<_>>()
    .join("&nbsp;|&nbsp;");

    let border = if r.full_width { "none" } else { "1px solid #dee2e6" };
    format!(
        r#"<div class="footer-block" style="text-align: center; padding: 24px 2rem; background: {bg}; border-top: {border}; {typography}">{social}<div style="margin-bottom: 8px;">{footer_text}</div><div>{links}</div></div>"#,
        bg = r.background_color,
        typography = r.typography(),
    )
}

fn brand_header(
    block: &Block,
    r: &Resolved<'_>,
    content: &Option<String>,
    logo_style: Option<LogoStyle>,
    brand: &BrandConfig,
) -> String {
    let logotype = content
        .as_deref()
        .map(strip_html)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| brand.brand_name.clone());
    let logotype = logotype.trim();
    let split = logotype
        .char_indices()
        .nth(brand.brand_prefix_len)
        .map(|(i, _)| i)
        .unwrap_or(logotype.len());
    let (prefix, suffix) = logotype.split_at(split);

    let (prefix_class, prefix_style) = match logo_style.unwrap_or(LogoStyle::Gradient) {
        LogoStyle::Gradient => (
            "brand-prefix brand-prefix-gradient",
            format!(
                "background: {PREFIX_GRADIENT}; -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; color: transparent;"
            ),
        ),
        LogoStyle::Solid => ("brand-prefix", "color: #6c63ff;".to_string()),
        LogoStyle::Outline => (
            "brand-prefix",
            "color: transparent; -webkit-text-fill-color: transparent; -webkit-text-stroke: 1px #6c63ff;"
                .to_string(),
        ),
    };

    let background = or(&block.style.background_color, BRAND_BACKGROUND);
    let background = if background == "transparent" {
        BRAND_BACKGROUND
    } else {
        background
    };
    let suffix_color = or(&block.style.text_color, "#ffffff");
    format!(
        r#"<div class="brand-header" style="text-align: center; background: {background}; padding: {pad}; margin: 0; display: flex; align-items: center; justify-content: center; min-height: 60px; gap: 2px;"><img src="{icon}" alt="{name} Logo" style="width: 36px; height: 36px; object-fit: contain; display: block; border: 0;" /><div style="font-size: {size}; font-weight: {weight}; text-transform: uppercase; letter-spacing: 2.5px; font-family: {family}; line-height: 1.2; margin: 0; padding: 0; display: flex; align-items: center;"><span class="{prefix_class}" style="{prefix_style}">{prefix}</span><span class="brand-suffix" style="color: {suffix_color}; -webkit-text-fill-color: {suffix_color};">{suffix}</span></div></div>"#,
        pad = if r.full_width { "0" } else { "20px" },
        icon = attr(&brand.logo_icon_url),
        name = attr(&brand.brand_name),
        size = or(&block.style.font_size, "1.5rem"),
        weight = or(&block.style.font_weight, "700"),
        family = BRAND_FONT_STACK,
        prefix = encode_text(prefix),
        suffix = encode_text(suffix),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::block::create_block;

    fn block(value: serde_json::Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    fn render(value: serde_json::Value) -> String {
        render_block(&block(value), &BrandConfig::default())
    }

    #[test]
    fn test_header_inlines_style() {
        let html = render(json!({
            "id": "h", "type": "header", "content": "<b>Hi</b>",
            "textAlign": "right", "fontStyle": "italic", "textColor": "#123456",
            "backgroundColor": "#eeeeee", "fontFamily": "Georgia, serif"
        }));
        assert!(html.contains("<h1 "));
        assert!(html.contains("<b>Hi</b>"), "content must not be re-escaped");
        assert!(html.contains("text-align: right;"));
        assert!(html.contains("font-style: italic;"));
        assert!(html.contains("color: #123456;"));
        assert!(html.contains("background-color: #eeeeee;"));
        assert!(html.contains("font-family: Georgia, serif;"));
    }

    #[test]
    fn test_text_is_paragraph() {
        let html = render(json!({"id": "t", "type": "text", "content": "Body"}));
        assert!(html.contains("<p "));
        assert!(html.contains(">Body</p>"));
    }

    #[test]
    fn test_button_gradient_wins_over_flat_color() {
        let html = render(json!({
            "id": "b", "type": "button", "content": "Go", "url": "https://x.test",
            "gradient": "linear-gradient(1deg, red, blue)", "backgroundColor": "#ff0000"
        }));
        assert!(html.contains("background: linear-gradient(1deg, red, blue);"));
        assert!(!html.contains("background: #ff0000;"));
        assert!(html.contains(r#"href="https://x.test""#));
    }

    #[test]
    fn test_button_flat_color_and_width() {
        let html = render(json!({"id": "b", "type": "button", "backgroundColor": "#ff0000"}));
        assert!(html.contains("background: #ff0000;"));
        assert!(html.contains("width: auto;"));
        assert!(html.contains("border-radius: 50px;"));

        let full = render(json!({"id": "b", "type": "button", "fullWidth": true}));
        assert!(full.contains("width: 100%;"));
        assert!(full.contains(&format!("background: {BUTTON_GRADIENT};")));
    }

    #[test]
    fn test_image_full_width_drops_radius_and_shadow() {
        let constrained = render(json!({"id": "i", "type": "image", "src": "a.png"}));
        assert!(constrained.contains("max-width: 100%;"));
        assert!(constrained.contains("border-radius: 8px;"));

        let full = render(json!({"id": "i", "type": "image", "src": "a.png", "fullWidth": true}));
        assert!(full.contains("border-radius: 0;"));
        assert!(full.contains("box-shadow: none;"));
    }

    #[test]
    fn test_image_attributes_are_escaped() {
        let html = render(json!({"id": "i", "type": "image", "src": "a.png", "alt": "\"quoted\""}));
        assert!(html.contains(r#"alt="&quot;quoted&quot;""#));
    }

    #[test]
    fn test_spacer_height() {
        let html = render(json!({"id": "s", "type": "spacer", "height": "45px"}));
        assert!(html.contains("height: 45px;"));
        let fallback = render(json!({"id": "s", "type": "spacer"}));
        assert!(fallback.contains("height: 20px;"));
    }

    #[test]
    fn test_divider_is_two_pixel_line() {
        let html = render(json!({"id": "d", "type": "divider"}));
        assert!(html.contains("height: 2px;"));
    }

    #[test]
    fn test_footer_blank_links_fall_back() {
        let html = render(json!({
            "id": "f", "type": "footer", "unsubscribeUrl": "   ", "privacyUrl": "/privacy",
            "socialLinks": [{"platform": "Facebook", "url": "https://fb.test"}, {"platform": "myspace", "url": "https://ms.test"}]
        }));
        assert!(html.contains(r#"href="https://cymasphere.com/unsubscribe?email={{email}}""#));
        assert!(html.contains(r#"href="https://cymasphere.com/privacy""#));
        assert!(html.contains(r#"href="https://cymasphere.com/terms-of-service""#));
        assert!(html.contains(">Unsubscribe</a>"));
        assert!(html.contains("fb.png"));
        assert!(html.contains("🔗"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn test_columns_are_equal_cells() {
        let html = render(json!({
            "id": "c", "type": "columns",
            "columns": [{"content": "A"}, {"content": "B", "textColor": "#ff0000"}, {"content": ""}]
        }));
        assert_eq!(html.matches("flex: 1 1 0;").count(), 3);
        assert!(html.contains("width: 33.33%;"));
        assert!(html.contains("color: #ff0000;"));
        assert!(html.contains("Column 3 content"));
    }

    #[test]
    fn test_video_has_play_overlay_link() {
        let html = render(json!({"id": "v", "type": "video", "url": "https://v.test", "thumbnail": "t.png"}));
        assert!(html.contains(r#"href="https://v.test""#));
        assert!(html.contains(r#"src="t.png""#));
        assert!(html.contains("&#9654;"));
    }

    #[test]
    fn test_brand_header_splits_logotype() {
        let html = render_block(create_block("brand-header").first(), &BrandConfig::default());
        assert!(html.contains(">CYMA</span>"));
        assert!(html.contains(">SPHERE</span>"));
        assert!(html.contains("brand-prefix-gradient"));
    }

    #[test]
    fn test_brand_header_solid_style_and_short_name() {
        let html = render(json!({"id": "b", "type": "brand-header", "content": "ABC", "logoStyle": "solid"}));
        assert!(html.contains(">ABC</span>"));
        assert!(!html.contains("brand-prefix-gradient"));
        assert!(html.contains("color: #6c63ff;"));
    }

    #[test]
    fn test_unknown_type_renders_content_verbatim() {
        let html = render(json!({"id": "x", "type": "countdown", "content": "<em>soon</em>"}));
        assert!(html.contains("<em>soon</em>"));
        assert!(html.contains(r#"data-type="countdown""#));
    }

    #[test]
    fn test_full_width_wrapper_has_no_constrained_padding() {
        let constrained = render(json!({"id": "t", "type": "text", "content": "x"}));
        let full = render(json!({"id": "t", "type": "text", "content": "x", "fullWidth": true}));
        assert!(constrained.contains(r#"class="constrained-width""#));
        assert!(constrained.contains("max-width: 600px;"));
        assert!(full.contains(r#"class="full-width""#));
        assert!(!full.contains("constrained-width"));
        assert!(!full.contains("max-width: 600px;"));
        assert!(!full.contains("padding: 16px 20px"));
    }

    #[test]
    fn test_header_level_sets_tag_and_size() {
        let h2 = render(json!({"id": "h", "type": "header", "content": "Hi", "headerType": "h2"}));
        assert!(h2.contains("<h2 "));
        assert!(h2.contains(">Hi</h2>"));
        assert!(h2.contains("font-size: 28px;"));

        let h3 = render(json!({"id": "h", "type": "header", "headerType": "h3"}));
        assert!(h3.contains("font-size: 24px;"));

        let unset = render(json!({"id": "h", "type": "header"}));
        assert!(unset.contains("<h1 "));
        assert!(unset.contains("font-size: 20px;"));

        let sized = render(json!({"id": "h", "type": "header", "headerType": "h2", "fontSize": "40px"}));
        assert!(sized.contains("font-size: 40px;"));
    }

    #[test]
    fn test_side_padding_defaults_and_overrides() {
        let text = render(json!({"id": "t", "type": "text"}));
        assert!(text.contains("padding: 16px 32px 16px 32px;"));

        let full = render(json!({"id": "t", "type": "text", "fullWidth": true}));
        assert!(full.contains("padding: 16px 24px 16px 24px;"));

        let image = render(json!({"id": "i", "type": "image"}));
        assert!(image.contains("padding: 16px 0px 16px 0px;"));

        let custom = render(json!({
            "id": "t", "type": "text", "paddingTop": 4, "paddingRight": 0, "paddingBottom": 8, "paddingLeft": 12
        }));
        assert!(custom.contains("padding: 4px 0px 8px 12px;"));

        let footer = render(json!({"id": "f", "type": "footer"}));
        assert!(footer.contains("padding: 0px 0px 0px 0px;"));
    }

    #[test]
    fn test_full_width_bleed_is_inline() {
        let full = render(json!({"id": "t", "type": "text", "fullWidth": true}));
        assert!(full.contains("margin-left: -20px; margin-right: -20px; width: calc(100% + 40px);"));
        let constrained = render(json!({"id": "t", "type": "text"}));
        assert!(!constrained.contains("margin-left: -20px"));
    }

    #[test]
    fn test_every_type_renders_with_no_fields() {
        for block_type in BlockType::ALL {
            let html = render(json!({"type": block_type.as_str()}));
            assert!(!html.is_empty(), "{block_type} rendered nothing");
        }
    }
}
