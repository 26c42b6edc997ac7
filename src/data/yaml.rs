use std::path::Path;

use serde_json::Value;

pub fn parse_yaml(path: &Path, content: &str) -> crate::Result<Value> {
    serde_yaml::from_str(content).map_err(|source| crate::MailcraftError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_sequence() {
        let v = parse_yaml(
            Path::new("a.yml"),
            "- type: header\n  content: Hi\n- type: divider\n",
        )
        .unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(2));
        assert_eq!(v[0]["type"], "header");
    }

    #[test]
    fn test_parse_yaml_anchors() {
        let v = parse_yaml(
            Path::new("a.yml"),
            "base: &base\n  fontSize: 16px\nblock:\n  <<: *base\n  type: text\n",
        );
        assert!(v.is_ok());
    }

    #[test]
    fn test_parse_yaml_invalid() {
        assert!(matches!(
            parse_yaml(Path::new("a.yml"), "blocks: [not: a: valid: yaml"),
            Err(crate::MailcraftError::YamlParse { .. })
        ));
    }
}
