use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::block::Block;
use crate::document::DocumentMeta;
use crate::render::{render_html, RenderOptions};

pub const CLICK_PATH: &str = "/api/email-campaigns/track/click";
pub const OPEN_PATH: &str = "/api/email-campaigns/track/open";

/// Identifies one delivery of one campaign to one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingIds {
    pub campaign_id: String,
    pub subscriber_id: String,
    pub send_id: String,
}

impl TrackingIds {
    fn query(&self) -> String {
        format!(
            "c={}&u={}&s={}",
            urlencoding::encode(&self.campaign_id),
            urlencoding::encode(&self.subscriber_id),
            urlencoding::encode(&self.send_id)
        )
    }
}

/// Route every link through the click tracker. Links that are already
/// tracked, unsubscribe links and `mailto:` links are left alone.
pub fn track_links(html: &str, ids: &TrackingIds, base_url: &str) -> String {
    static HREF_RE: OnceLock<Regex> = OnceLock::new();
    let re = HREF_RE.get_or_init(|| {
        Regex::new(r#"(?i)(<a\s[^>]*?\bhref=)["']([^"']+)["']"#).unwrap()
    });
    let base = base_url.trim_end_matches('/');
    let query = ids.query();

    re.replace_all(html, |caps: &Captures<'_>| {
        let url = &caps[2];
        if url.contains(CLICK_PATH) || url.contains("unsubscribe") || url.contains("mailto:") {
            return caps[0].to_string();
        }
        // Attribute values arrive entity-encoded; the tracker needs the real URL.
        let target = html_escape::decode_html_entities(url);
        format!(
            r#"{}"{base}{CLICK_PATH}?{query}&url={}""#,
            &caps[1],
            urlencoding::encode(&target)
        )
    })
    .into_owned()
}

/// A 1x1 image that records the open when loaded.
pub fn open_pixel(ids: &TrackingIds, base_url: &str) -> String {
    format!(
        r#"<img src="{}{OPEN_PATH}?{}" width="1" height="1" style="display:block;border:0;margin:0;padding:0;" alt="" />"#,
        base_url.trim_end_matches('/'),
        html_escape::encode_double_quoted_attribute(&ids.query()),
    )
}

/// Render for delivery: the open pixel goes at the end of the body and every
/// link is rewritten for click tracking.
pub fn render_tracked_html(
    seq: &[Block],
    meta: &DocumentMeta,
    options: &RenderOptions,
    ids: &TrackingIds,
) -> String {
    let base = options.brand.tracking_base_url.as_str();
    let html = render_html(seq, meta, options);
    let pixel = open_pixel(ids, base);
    let html = match html.rfind("</body>") {
        Some(at) => format!("{}{pixel}\n{}", &html[..at], &html[at..]),
        None => format!("{html}{pixel}"),
    };
    track_links(&html, ids, base)
}
