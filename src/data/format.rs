use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

pub fn detect_format(path: &Path) -> crate::Result<DataFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "json" => Ok(DataFormat::Json),
        "yml" | "yaml" => Ok(DataFormat::Yaml),
        "toml" => Ok(DataFormat::Toml),
        other => Err(crate::MailcraftError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format(Path::new("campaign.json")).unwrap(),
            DataFormat::Json
        );
    }

    #[test]
    fn test_detect_yml_and_yaml() {
        assert_eq!(
            detect_format(Path::new("campaign.yml")).unwrap(),
            DataFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("campaign.yaml")).unwrap(),
            DataFormat::Yaml
        );
    }

    #[test]
    fn test_detect_toml() {
        assert_eq!(
            detect_format(Path::new("brand.toml")).unwrap(),
            DataFormat::Toml
        );
    }

    #[test]
    fn test_detect_uppercase_extension() {
        assert_eq!(
            detect_format(Path::new("CAMPAIGN.JSON")).unwrap(),
            DataFormat::Json
        );
    }

    #[test]
    fn test_detect_no_extension() {
        let result = detect_format(Path::new("campaign"));
        assert!(matches!(
            result,
            Err(crate::MailcraftError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_detect_csv_is_rejected() {
        let result = detect_format(Path::new("audience.csv"));
        assert!(
            matches!(result, Err(crate::MailcraftError::UnsupportedFormat { extension }) if extension == "csv")
        );
    }
}
