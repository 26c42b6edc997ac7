#[derive(Debug, thiserror::Error)]
pub enum MailcraftError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported file format: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("JSON parse error in {path}: {source}")]
    JsonParse {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    YamlParse {
        path: std::path::PathBuf,
        source: serde_yaml::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    TomlParse {
        path: std::path::PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid document shape in {path}: {message}")]
    InvalidDocumentShape {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("envelope payload is not valid base64: {source}")]
    EnvelopeBase64 { source: base64::DecodeError },

    #[error("envelope payload is not valid UTF-8: {source}")]
    EnvelopeUtf8 { source: std::string::FromUtf8Error },

    #[error("envelope payload is not valid JSON: {source}")]
    EnvelopeJson { source: serde_json::Error },

    #[error("envelope payload is a JSON {found}, expected an array")]
    EnvelopeNotArray { found: &'static str },

    #[error("no block envelope found")]
    EnvelopeMissing,

    #[error("Handlebars render error in field '{field}': {reason}")]
    HandlebarsRender { field: String, reason: String },
}
