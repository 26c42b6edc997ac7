pub mod import;

use std::sync::OnceLock;

use base64::prelude::*;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::block::Block;
use crate::MailcraftError;

pub use import::{load_blocks, HtmlImporter, NaiveImporter};

/// Saved email HTML carries `<!--ELEMENTS_B64:<payload>-->`, the payload
/// being standard base64 of the UTF-8 JSON block array.
pub const ENVELOPE_PREFIX: &str = "<!--ELEMENTS_B64:";
pub const ENVELOPE_SUFFIX: &str = "-->";

fn envelope_re() -> &'static Regex {
    static ENVELOPE_RE: OnceLock<Regex> = OnceLock::new();
    ENVELOPE_RE.get_or_init(|| Regex::new(r"<!--ELEMENTS_B64:([^>]*)-->").unwrap())
}

/// Serialize `seq` into a single envelope comment.
pub fn encode(seq: &[Block]) -> String {
    // Block serialization cannot fail: every field is a string, number, bool or list.
    let json = serde_json::to_string(seq).unwrap_or_else(|_| "[]".to_string());
    format!("{ENVELOPE_PREFIX}{}{ENVELOPE_SUFFIX}", BASE64_STANDARD.encode(json))
}

/// Prepend the envelope for `seq` to `html`.
pub fn embed(html: &str, seq: &[Block]) -> String {
    format!("{}{html}", encode(seq))
}

/// Decode the first envelope in `html`, reporting why it could not be read.
pub fn decode_strict(html: &str) -> crate::Result<Vec<Block>> {
    let payload = envelope_re()
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .ok_or(MailcraftError::EnvelopeMissing)?;

    let bytes = BASE64_STANDARD
        .decode(payload)
        .map_err(|source| MailcraftError::EnvelopeBase64 { source })?;
    let json = String::from_utf8(bytes).map_err(|source| MailcraftError::EnvelopeUtf8 { source })?;
    let value: Value =
        serde_json::from_str(&json).map_err(|source| MailcraftError::EnvelopeJson { source })?;

    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|source| MailcraftError::EnvelopeJson { source })
        }
        other => Err(MailcraftError::EnvelopeNotArray {
            found: crate::data::value_type_name(&other),
        }),
    }
}

/// Decode the envelope in `html`, or `None` if it is absent or unreadable.
pub fn decode(html: &str) -> Option<Vec<Block>> {
    match decode_strict(html) {
        Ok(blocks) => Some(blocks),
        Err(MailcraftError::EnvelopeMissing) => None,
        Err(e) => {
            warn!(error = %e, "failed to decode block envelope");
            None
        }
    }
}

/// `html` with every envelope comment removed.
pub fn strip_envelope(html: &str) -> String {
    envelope_re().replace_all(html, "").into_owned()
}
