pub mod format;
pub mod json;
pub mod loader;
pub mod toml;
pub mod yaml;

pub use format::{detect_format, DataFormat};
pub use loader::{load_file, load_str};

use serde_json::Value;

pub(crate) fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
