// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// REST API connection section
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Local directory file section
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[api]
base_url = "http://localhost:5000"
token = "abc123"

[data]
path = "/srv/lmf/directory.json"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(config.api.token.as_deref(), Some("abc123"));
        assert_eq!(
            config.data.path,
            Some(PathBuf::from("/srv/lmf/directory.json"))
        );
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let config: Config = toml::from_str("[theme]\naccent = \"cyan\"\n").unwrap();
        assert_eq!(config, Config::default());
    }

    // Missing sections and fields fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_api_section in prop::bool::ANY,
            include_data_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_api_section {
                toml_content.push_str("[api]\n");
            }
            if include_data_section {
                toml_content.push_str("[data]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            prop_assert_eq!(config, Config::default());
        }
    }
}
