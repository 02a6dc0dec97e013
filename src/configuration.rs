use std::{path::Path, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

use crate::error::SearchError;

pub const API_KEY_ENV_VAR: &str = "TAVILY_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.tavily.com";
const DEFAULT_MAX_RESULTS: i64 = 20;
const DEFAULT_TIMEOUT_SECONDS: i64 = 30;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default)]
    pub api_keys: ApiKeySettings,
    pub search: SearchSettings,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApiKeySettings {
    pub tavily: Option<String>,
}

impl ApiKeySettings {
    /// A blank key counts as missing.
    pub fn tavily(&self) -> Result<&str, SearchError> {
        self.tavily
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SearchError::MissingApiKey)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct SearchSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_results: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_seconds: u64,
    pub default_company: String,
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Search endpoint. A base url with a path must end in `/` for the path to be kept.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join("search")
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    load_configuration(
        &base_path.join("configuration"),
        std::env::var(API_KEY_ENV_VAR).ok(),
    )
}

/// Defaults, then `base.yaml` if present, then `APP_*` variables. The api key is applied last.
pub fn load_configuration(
    configuration_directory: &Path,
    api_key: Option<String>,
) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("search.base_url", DEFAULT_BASE_URL)?
        .set_default("search.max_results", DEFAULT_MAX_RESULTS)?
        .set_default("search.timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
        .set_default("search.default_company", crate::domain::DEFAULT_COMPANY)?
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("api_keys.tavily", api_key)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{load_configuration, ApiKeySettings, SearchSettings};
    use crate::error::SearchError;

    fn search_settings(base_url: &str) -> SearchSettings {
        SearchSettings {
            base_url: base_url.to_string(),
            max_results: 20,
            timeout_seconds: 30,
            default_company: "Microsoft".to_string(),
        }
    }

    #[test]
    fn defaults_without_configuration_file() {
        let settings =
            load_configuration(Path::new("does/not/exist"), Some("tvly-123".to_string())).unwrap();

        assert_eq!(settings.search.base_url, "https://api.tavily.com");
        assert_eq!(settings.search.max_results, 20);
        assert_eq!(settings.search.timeout_seconds, 30);
        assert_eq!(settings.search.default_company, "Microsoft");
        assert_eq!(settings.api_keys.tavily().unwrap(), "tvly-123");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let settings = load_configuration(Path::new("does/not/exist"), None).unwrap();

        assert!(matches!(
            settings.api_keys.tavily(),
            Err(SearchError::MissingApiKey)
        ));
    }

    #[test]
    fn blank_api_key_is_missing() {
        let keys = ApiKeySettings {
            tavily: Some("   ".to_string()),
        };

        assert!(matches!(keys.tavily(), Err(SearchError::MissingApiKey)));
    }

    #[test]
    fn endpoint_appends_search_path() {
        let endpoint = search_settings("https://api.tavily.com").endpoint().unwrap();
        assert_eq!(endpoint.as_str(), "https://api.tavily.com/search");

        let endpoint = search_settings("http://127.0.0.1:8080/proxy/")
            .endpoint()
            .unwrap();
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8080/proxy/search");
    }

    #[test]
    fn invalid_base_url() {
        assert!(search_settings("not a url").endpoint().is_err());
    }
}
