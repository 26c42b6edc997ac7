use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::types::{
    Block, BlockKind, BlockType, Column, Footer, HeaderLevel, Layout, LogoStyle, SocialLink,
    TextStyle,
};

/// The flat camelCase object the editor stores: `type` plus every property
/// side by side. Scalars are read leniently (`18` for `"18"`, `"16px"` for
/// `16`) and unusable values drop to `None` instead of failing the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(flatten)]
    pub fields: BlockFields,
    /// Keys [`BlockFields`] does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Every optional block property. Also serves as the partial update payload
/// ([`BlockPatch`]): set fields win, `None` fields leave the target alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockFields {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_px", skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(default, deserialize_with = "lenient_px", skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(default, deserialize_with = "lenient_px", skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<u32>,
    #[serde(default, deserialize_with = "lenient_px", skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<u32>,
    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub header_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<SocialLink>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub unsubscribe_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub unsubscribe_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub privacy_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub privacy_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub terms_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub logo_style: Option<String>,
}

pub type BlockPatch = BlockFields;

macro_rules! merge_fields {
    ($target:expr, $patch:expr, [$($field:ident),* $(,)?]) => {
        $(
            if $patch.$field.is_some() {
                $target.$field = $patch.$field;
            }
        )*
    };
}

impl BlockFields {
    /// Shallow merge: every field set in `patch` replaces the current value.
    pub fn merge(&mut self, patch: BlockFields) {
        merge_fields!(self, patch, [
            content, padding_top, padding_bottom, padding_left, padding_right, full_width,
            font_size, font_weight, font_style, text_decoration, text_align, font_family,
            line_height, text_color, background_color, header_type, url, gradient, src, alt, height, thumbnail, links, social_links,
            columns, footer_text, unsubscribe_url, unsubscribe_text, privacy_url, privacy_text,
            terms_url, terms_text, logo_style,
        ]);
    }
}

impl Block {
    /// A copy of this block with `patch` merged over it. The id and type never change;
    /// patch fields the type has no use for are ignored.
    ///
    /// `links` and `socialLinks` name the same list; either one patches the
    /// links of a social row or a footer.
    pub fn patched(&self, patch: &BlockPatch) -> Block {
        let mut patch = patch.clone();
        match self.kind {
            BlockKind::Social { .. } if patch.links.is_none() => {
                patch.links = patch.social_links.take();
            }
            BlockKind::Footer(_) if patch.social_links.is_none() => {
                patch.social_links = patch.links.take();
            }
            _ => {}
        }
        let mut raw = RawBlock::from(self.clone());
        raw.fields.merge(patch);
        Block::from(raw)
    }
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let RawBlock {
            id,
            type_name,
            fields: f,
            extra,
        } = raw;

        let layout = Layout {
            padding_top: f.padding_top,
            padding_bottom: f.padding_bottom,
            padding_left: f.padding_left,
            padding_right: f.padding_right,
            full_width: f.full_width,
        };
        let style = TextStyle {
            font_size: f.font_size,
            font_weight: f.font_weight,
            font_style: f.font_style,
            text_decoration: f.text_decoration,
            text_align: f.text_align,
            font_family: f.font_family,
            line_height: f.line_height,
            text_color: f.text_color,
            background_color: f.background_color,
        };

        let kind = match BlockType::parse(&type_name) {
            Some(BlockType::Header) => BlockKind::Header {
                content: f.content,
                header_type: f.header_type.as_deref().and_then(HeaderLevel::parse),
            },
            Some(BlockType::Text) => BlockKind::Text { content: f.content },
            Some(BlockType::Button) => BlockKind::Button {
                content: f.content,
                url: f.url,
                gradient: f.gradient,
            },
            Some(BlockType::Image) => BlockKind::Image {
                src: f.src,
                alt: f.alt,
            },
            Some(BlockType::Divider) => BlockKind::Divider,
            Some(BlockType::Spacer) => BlockKind::Spacer { height: f.height },
            Some(BlockType::Social) => BlockKind::Social {
                links: f.links.or(f.social_links).unwrap_or_default(),
            },
            Some(BlockType::Columns) => BlockKind::Columns {
                columns: f.columns.unwrap_or_default(),
            },
            Some(BlockType::Video) => BlockKind::Video {
                thumbnail: f.thumbnail,
                url: f.url,
            },
            Some(BlockType::Footer) => BlockKind::Footer(Footer {
                social_links: f.social_links.or(f.links).unwrap_or_default(),
                footer_text: f.footer_text,
                unsubscribe_url: f.unsubscribe_url,
                unsubscribe_text: f.unsubscribe_text,
                privacy_url: f.privacy_url,
                privacy_text: f.privacy_text,
                terms_url: f.terms_url,
                terms_text: f.terms_text,
            }),
            Some(BlockType::BrandHeader) => BlockKind::BrandHeader {
                content: f.content,
                logo_style: f.logo_style.as_deref().and_then(LogoStyle::parse),
            },
            None => BlockKind::Unknown {
                type_name,
                content: f.content,
            },
        };

        Block {
            id,
            kind,
            layout,
            style,
            extra,
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        let Block {
            id,
            kind,
            layout,
            style,
            extra,
        } = block;
        let type_name = kind.type_name().to_string();

        let mut f = BlockFields {
            padding_top: layout.padding_top,
            padding_bottom: layout.padding_bottom,
            padding_left: layout.padding_left,
            padding_right: layout.padding_right,
            full_width: layout.full_width,
            font_size: style.font_size,
            font_weight: style.font_weight,
            font_style: style.font_style,
            text_decoration: style.text_decoration,
            text_align: style.text_align,
            font_family: style.font_family,
            line_height: style.line_height,
            text_color: style.text_color,
            background_color: style.background_color,
            ..BlockFields::default()
        };

        match kind {
            BlockKind::Header {
                content,
                header_type,
            } => {
                f.content = content;
                f.header_type = header_type.map(|h| h.as_str().to_string());
            }
            BlockKind::Text { content } | BlockKind::Unknown { content, .. } => {
                f.content = content
            }
            BlockKind::Button {
                content,
                url,
                gradient,
            } => {
                f.content = content;
                f.url = url;
                f.gradient = gradient;
            }
            BlockKind::Image { src, alt } => {
                f.src = src;
                f.alt = alt;
            }
            BlockKind::Divider => {}
            BlockKind::Spacer { height } => f.height = height,
            BlockKind::Social { links } => f.links = Some(links),
            BlockKind::Columns { columns } => f.columns = Some(columns),
            BlockKind::Video { thumbnail, url } => {
                f.thumbnail = thumbnail;
                f.url = url;
            }
            BlockKind::Footer(footer) => {
                f.social_links = Some(footer.social_links);
                f.footer_text = footer.footer_text;
                f.unsubscribe_url = footer.unsubscribe_url;
                f.unsubscribe_text = footer.unsubscribe_text;
                f.privacy_url = footer.privacy_url;
                f.privacy_text = footer.privacy_text;
                f.terms_url = footer.terms_url;
                f.terms_text = footer.terms_text;
            }
            BlockKind::BrandHeader {
                content,
                logo_style,
            } => {
                f.content = content;
                f.logo_style = logo_style.map(|s| s.as_str().to_string());
            }
        }

        RawBlock {
            id,
            type_name,
            fields: f,
            extra,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Option::unwrap_or_default)
}

fn lenient_px<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().trim_end_matches("px").trim().parse().ok(),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Array(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}
