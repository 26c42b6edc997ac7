use std::path::Path;

use serde_json::Value;

pub fn parse_toml(path: &Path, content: &str) -> crate::Result<Value> {
    let value: toml::Value =
        toml::from_str(content).map_err(|source| crate::MailcraftError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(toml_to_json(value))
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_array_of_tables() {
        let v = parse_toml(
            Path::new("doc.toml"),
            "subject = \"Hi\"\n\n[[blocks]]\ntype = \"text\"\npaddingTop = 0\n\n[[blocks]]\ntype = \"divider\"\n",
        )
        .unwrap();
        assert_eq!(v["subject"], "Hi");
        assert_eq!(v["blocks"][0]["paddingTop"], 0);
        assert_eq!(v["blocks"][1]["type"], "divider");
    }

    #[test]
    fn test_parse_toml_datetime_becomes_string() {
        let v = parse_toml(Path::new("doc.toml"), "sent = 2024-01-02T03:04:05Z\n").unwrap();
        assert!(v["sent"].is_string());
    }

    #[test]
    fn test_parse_toml_invalid() {
        assert!(matches!(
            parse_toml(Path::new("doc.toml"), "subject = "),
            Err(crate::MailcraftError::TomlParse { .. })
        ));
    }
}
