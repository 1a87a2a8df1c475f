use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// The configuration document consumed by the automation tool.
///
/// Holds one full set of settings for `automation.main`. Field names and
/// declaration order match the keys of `config.json`, so serializing this
/// struct produces the file the tool expects.
///
/// A `Configuration` is a snapshot: it is derived from the form on every
/// interaction and replaced wholesale by the next one.
///
/// # Examples
///
/// ```
/// use shorts_config::Configuration;
///
/// let config = Configuration::default();
/// assert_eq!(config.videos_per_day, 4);
/// assert!(config.background_music_file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub trending_region: String,
    pub videos_per_day: u32,
    pub output_dir: String,
    pub assets_dir: String,
    pub youtube_category_id: String,
    pub tags: Vec<String>,
    pub video_title_template: String,
    pub video_description_template: String,
    pub youtube_privacy_status: PrivacyStatus,
    pub youtube_client_secrets_file: String,
    pub youtube_token_file: String,
    pub background_music_file: Option<String>,
}

/// Name of the file the automation tool is pointed at with `--config`.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default values for every field, built once and only ever cloned.
pub static DEFAULTS: Lazy<Configuration> = Lazy::new(|| Configuration {
    trending_region: String::from("united_states"),
    videos_per_day: 4,
    output_dir: String::from("output"),
    assets_dir: String::from("assets"),
    youtube_category_id: String::from("23"),
    tags: vec![
        String::from("shorts"),
        String::from("cartoon"),
        String::from("comedy"),
    ],
    video_title_template: String::from("{topic} - Cartoon Comedy Short"),
    video_description_template: String::from(
        "A quick cartoon short riffing on {topic}. Script: {script}",
    ),
    youtube_privacy_status: PrivacyStatus::Private,
    youtube_client_secrets_file: String::from("credentials/client_secret.json"),
    youtube_token_file: String::from("credentials/token.json"),
    background_music_file: None,
});

impl Default for Configuration {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl Configuration {
    /// Renders the snapshot as pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a previously written `config.json`.
    ///
    /// Keys missing from the file take their default values.
    ///
    /// # Errors
    /// * If the file cannot be read
    /// * If the content is not a valid configuration document
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Visibility applied to uploaded videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    #[default]
    Private,
    Unlisted,
    Public,
}

impl PrivacyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyStatus::Private => "private",
            PrivacyStatus::Unlisted => "unlisted",
            PrivacyStatus::Public => "public",
        }
    }
}

impl std::fmt::Display for PrivacyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PrivacyStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "private" => Ok(PrivacyStatus::Private),
            "unlisted" => Ok(PrivacyStatus::Unlisted),
            "public" => Ok(PrivacyStatus::Public),
            _ => Err(format!(
                "Invalid privacy status: {}. Use 'private', 'unlisted', or 'public'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_serializes_in_document_order() {
        let json = Configuration::default().to_pretty_json().unwrap();
        let keys: Vec<&str> = json
            .lines()
            .filter_map(|line| line.strip_prefix("  \""))
            .filter_map(|line| line.split('"').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "trending_region",
                "videos_per_day",
                "output_dir",
                "assets_dir",
                "youtube_category_id",
                "tags",
                "video_title_template",
                "video_description_template",
                "youtube_privacy_status",
                "youtube_client_secrets_file",
                "youtube_token_file",
                "background_music_file",
            ]
        );
        assert!(json.contains("  \"videos_per_day\": 4,"));
        assert!(json.contains("\"youtube_privacy_status\": \"private\""));
        assert!(json.contains("\"background_music_file\": null"));
    }

    #[test]
    fn json_round_trip_preserves_snapshot() {
        let mut config = Configuration::default();
        config.videos_per_day = 9;
        config.tags = vec!["a".into(), "b".into()];
        config.youtube_privacy_status = PrivacyStatus::Unlisted;
        config.background_music_file = Some("music/loop.mp3".into());

        let json = config.to_pretty_json().unwrap();
        let parsed: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn clones_do_not_alias_defaults() {
        let mut config = Configuration::default();
        config.tags.push("extra".into());
        assert_eq!(DEFAULTS.tags.len(), 3);
    }

    #[test]
    fn privacy_status_parsing() {
        assert_eq!(" Public ".parse::<PrivacyStatus>(), Ok(PrivacyStatus::Public));
        assert_eq!("unlisted".parse::<PrivacyStatus>(), Ok(PrivacyStatus::Unlisted));
        assert!("secret".parse::<PrivacyStatus>().is_err());
        assert_eq!(PrivacyStatus::Private.to_string(), "private");
    }

    #[test]
    fn load_fills_missing_keys_with_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "videos_per_day": 7, "youtube_privacy_status": "public" }"#)?;

        let config = Configuration::load(&path)?;
        assert_eq!(config.videos_per_day, 7);
        assert_eq!(config.youtube_privacy_status, PrivacyStatus::Public);
        assert_eq!(config.trending_region, "united_states");
        assert_eq!(config.tags, DEFAULTS.tags);
        Ok(())
    }

    #[test]
    fn load_rejects_malformed_documents() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json")?;

        assert!(matches!(Configuration::load(&path), Err(crate::AppError::Json(_))));
        assert!(matches!(
            Configuration::load(&temp_dir.path().join("missing.json")),
            Err(crate::AppError::Io(_))
        ));
        Ok(())
    }
}
