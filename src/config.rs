use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::SocialLink;
use crate::MailcraftError;

const DEFAULT_SITE_URL: &str = "https://cymasphere.com";
const SOCIAL_ICON_BASE: &str =
    "https://jibirpbauzqhdiwjlrmf.supabase.co/storage/v1/object/public/email-assets/social-icons";

/// Settings the block defaults and the renderer fall back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandConfig {
    /// Base for relative legal links and the "View in browser" link. No trailing slash.
    pub site_url: String,
    /// Logotype text rendered by `brand-header` blocks.
    pub brand_name: String,
    /// How many leading characters of the logotype get the gradient treatment.
    pub brand_prefix_len: usize,
    pub logo_icon_url: String,
    pub copyright_holder: String,
    pub default_preheader: String,
    pub default_sender_name: String,
    pub social_links: Vec<SocialLink>,
    /// Lower-case platform name to icon URL.
    pub social_icons: BTreeMap<String, String>,
    /// Base URL for click and open tracking endpoints.
    pub tracking_base_url: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        let social_icons = [
            ("facebook", "fb.png"),
            ("twitter", "x.png"),
            ("instagram", "insta.png"),
            ("youtube", "youtube.png"),
            ("discord", "discord.png"),
        ]
        .into_iter()
        .map(|(platform, file)| (platform.to_string(), format!("{SOCIAL_ICON_BASE}/{file}")))
        .collect();

        let social_links = [
            ("facebook", "https://www.facebook.com/cymasphere"),
            ("twitter", "https://x.com/cymasphere"),
            ("instagram", "https://www.instagram.com/cymasphere/"),
            ("youtube", "https://www.youtube.com/@cymasphere"),
            ("discord", "https://discord.gg/gXGqqYR47B"),
        ]
        .into_iter()
        .map(|(platform, url)| SocialLink::new(platform, url))
        .collect();

        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            brand_name: "CYMASPHERE".to_string(),
            brand_prefix_len: 4,
            logo_icon_url: format!("{DEFAULT_SITE_URL}/images/cm-logo-icon.png"),
            copyright_holder: "NNAud.io".to_string(),
            default_preheader: "Cymasphere - Your Music Production Journey".to_string(),
            default_sender_name: "Cymasphere".to_string(),
            social_links,
            social_icons,
            tracking_base_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl BrandConfig {
    /// Load from a `.json`, `.yml`/`.yaml`, or `.toml` file. Absent keys keep their defaults.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let value = crate::data::load_file(path)?;
        serde_json::from_value(value).map_err(|source| MailcraftError::JsonParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn site(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    pub fn unsubscribe_url(&self) -> String {
        format!("{}/unsubscribe?email={{{{email}}}}", self.site())
    }

    pub fn privacy_url(&self) -> String {
        format!("{}/privacy-policy", self.site())
    }

    pub fn terms_url(&self) -> String {
        format!("{}/terms-of-service", self.site())
    }

    pub fn footer_text(&self, year: i32) -> String {
        format!("© {year} {} All rights reserved.", self.copyright_holder)
    }

    pub fn icon_for(&self, platform: &str) -> Option<&str> {
        self.social_icons
            .get(&platform.to_lowercase())
            .map(String::as_str)
    }

    /// Resolve a possibly site-relative link against `site_url`.
    ///
    /// `/path` and bare `path` are joined onto the site; anything with a scheme,
    /// a fragment, or a `mailto:` prefix passes through.
    pub fn absolutize(&self, url: &str) -> String {
        let url = url.trim();
        if let Some(rest) = url.strip_prefix('/') {
            return format!("{}/{rest}", self.site());
        }
        if url.contains("://") || url.starts_with('#') || url.starts_with("mailto:") {
            return url.to_string();
        }
        format!("{}/{url}", self.site())
    }
}
