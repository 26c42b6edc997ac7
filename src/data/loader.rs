use std::path::Path;

use serde_json::Value;

use crate::data::{
    format::{detect_format, DataFormat},
    json::parse_json,
    toml::parse_toml,
    yaml::parse_yaml,
};

/// Read a JSON, YAML, or TOML file (chosen by extension) into a JSON value.
pub fn load_file(path: &Path) -> crate::Result<Value> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| crate::MailcraftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(path, format, &content)
}

/// Parse already-read content. `path` is only used for error messages.
pub fn load_str(path: &Path, format: DataFormat, content: &str) -> crate::Result<Value> {
    match format {
        DataFormat::Json => parse_json(path, content),
        DataFormat::Yaml => parse_yaml(path, content),
        DataFormat::Toml => parse_toml(path, content),
    }
}
