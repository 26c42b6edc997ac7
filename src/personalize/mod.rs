use std::sync::OnceLock;

use chrono::Utc;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::BrandConfig;
use crate::MailcraftError;

const ENCODED_EMAIL_TAG: &str = "%7B%7Bemail%7D%7D";
const EMAIL_TAG: &str = "{{email}}";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subscriber {
    pub email: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Free-form profile data; `first_name`, `last_name`, `subscription`,
    /// `company_name` and `lifetime_purchase` here win over the fields above.
    pub metadata: Map<String, Value>,
}

impl Subscriber {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Self::default()
        }
    }

    fn meta_str(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| match self.metadata.get(*k) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    fn name_parts(&self) -> (Option<String>, Option<String>) {
        let name = self.name.as_deref().map(str::trim).unwrap_or("");
        let mut words = name.split_whitespace();
        let first = words.next().map(str::to_string);
        let rest: Vec<&str> = words.collect();
        let last = (!rest.is_empty()).then(|| rest.join(" "));
        (first, last)
    }

    pub fn first_name(&self) -> String {
        let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        self.meta_str(&["first_name", "firstName"])
            .or_else(|| non_blank(&self.first_name))
            .or_else(|| self.name_parts().0)
            .unwrap_or_else(|| "there".to_string())
    }

    pub fn last_name(&self) -> String {
        let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        self.meta_str(&["last_name", "lastName"])
            .or_else(|| non_blank(&self.last_name))
            .or_else(|| self.name_parts().1)
            .unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        [self.first_name(), self.last_name()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn make_handlebars() -> handlebars::Handlebars<'static> {
    let mut hbs = handlebars::Handlebars::new();
    hbs.set_strict_mode(false);
    hbs.register_escape_fn(handlebars::no_escape);
    hbs
}

/// Personalize with the default brand settings.
pub fn personalize(html: &str, subscriber: &Subscriber) -> crate::Result<String> {
    personalize_with(html, subscriber, &BrandConfig::default())
}

/// Substitute merge tags for one recipient.
///
/// Unsubscribe links carrying an `{{email}}` placeholder (raw or URL-encoded)
/// are replaced with the recipient's unsubscribe URL; any other link gets the
/// URL-encoded address. Everywhere else `{{email}}` is the plain address.
/// Escaping is off since the input is already HTML, and unknown tags render
/// empty.
pub fn personalize_with(
    html: &str,
    subscriber: &Subscriber,
    brand: &BrandConfig,
) -> crate::Result<String> {
    let encoded_email = urlencoding::encode(&subscriber.email).into_owned();
    let unsubscribe_url = brand.unsubscribe_url().replace(EMAIL_TAG, &encoded_email);

    let linked = rewrite_hrefs(html, &unsubscribe_url, &encoded_email);

    let context = json!({
        "firstName": subscriber.first_name(),
        "lastName": subscriber.last_name(),
        "fullName": subscriber.full_name(),
        "email": subscriber.email,
        "subscription": subscriber.meta_str(&["subscription"]).unwrap_or_else(|| "none".to_string()),
        "companyName": subscriber.meta_str(&["company_name", "companyName"]).unwrap_or_default(),
        "lifetimePurchase": subscriber
            .meta_str(&["lifetime_purchase", "lifetimePurchase"])
            .unwrap_or_else(|| "false".to_string()),
        "unsubscribeUrl": unsubscribe_url,
        "currentDate": Utc::now().format("%B %-d, %Y").to_string(),
    });

    make_handlebars()
        .render_template(&linked, &context)
        .map_err(|e| MailcraftError::HandlebarsRender {
            field: "html".to_string(),
            reason: e.to_string(),
        })
}

fn rewrite_hrefs(html: &str, unsubscribe_url: &str, encoded_email: &str) -> String {
    static HREF_RE: OnceLock<Regex> = OnceLock::new();
    let re = HREF_RE.get_or_init(|| Regex::new(r#"href=["']([^"']*)["']"#).unwrap());

    re.replace_all(html, |caps: &Captures<'_>| {
        let url = &caps[1];
        let has_tag = url.contains(EMAIL_TAG) || url.contains(ENCODED_EMAIL_TAG);
        if !has_tag {
            return caps[0].to_string();
        }
        if url.contains("/unsubscribe") {
            return format!(r#"href="{unsubscribe_url}""#);
        }
        let url = url
            .replace(EMAIL_TAG, encoded_email)
            .replace(ENCODED_EMAIL_TAG, encoded_email);
        format!(r#"href="{url}""#)
    })
    .into_owned()
}
