use std::path::Path;

use serde_json::Value;

pub fn parse_json(path: &Path, content: &str) -> crate::Result<Value> {
    serde_json::from_str(content).map_err(|source| crate::MailcraftError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
