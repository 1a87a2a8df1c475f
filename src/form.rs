use crate::error::AppError;
use crate::model::{Configuration, DEFAULTS};

/// Source of raw form input.
///
/// The generator only sees this trait, so any surface that can hand back
/// the current text of each field can drive it: the in-memory
/// [`FormFields`], a terminal prompt, or a test double.
pub trait FormState {
    fn trending_region(&self) -> &str;
    fn videos_per_day(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn assets_dir(&self) -> &str;
    fn youtube_category_id(&self) -> &str;
    fn tags(&self) -> &str;
    fn video_title_template(&self) -> &str;
    fn video_description_template(&self) -> &str;
    fn youtube_privacy_status(&self) -> &str;
    fn youtube_client_secrets_file(&self) -> &str;
    fn youtube_token_file(&self) -> &str;
    fn background_music_file(&self) -> &str;
}

/// Names of the form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TrendingRegion,
    VideosPerDay,
    OutputDir,
    AssetsDir,
    YoutubeCategoryId,
    Tags,
    VideoTitleTemplate,
    VideoDescriptionTemplate,
    YoutubePrivacyStatus,
    YoutubeClientSecretsFile,
    YoutubeTokenFile,
    BackgroundMusicFile,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::TrendingRegion,
        Field::VideosPerDay,
        Field::OutputDir,
        Field::AssetsDir,
        Field::YoutubeCategoryId,
        Field::Tags,
        Field::VideoTitleTemplate,
        Field::VideoDescriptionTemplate,
        Field::YoutubePrivacyStatus,
        Field::YoutubeClientSecretsFile,
        Field::YoutubeTokenFile,
        Field::BackgroundMusicFile,
    ];

    /// The configuration key this field feeds.
    pub fn key(&self) -> &'static str {
        match self {
            Field::TrendingRegion => "trending_region",
            Field::VideosPerDay => "videos_per_day",
            Field::OutputDir => "output_dir",
            Field::AssetsDir => "assets_dir",
            Field::YoutubeCategoryId => "youtube_category_id",
            Field::Tags => "tags",
            Field::VideoTitleTemplate => "video_title_template",
            Field::VideoDescriptionTemplate => "video_description_template",
            Field::YoutubePrivacyStatus => "youtube_privacy_status",
            Field::YoutubeClientSecretsFile => "youtube_client_secrets_file",
            Field::YoutubeTokenFile => "youtube_token_file",
            Field::BackgroundMusicFile => "background_music_file",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

/// Raw text of every form field.
///
/// `Default` holds the text the form shows on first load, which is the
/// default configuration written back into the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub trending_region: String,
    pub videos_per_day: String,
    pub output_dir: String,
    pub assets_dir: String,
    pub youtube_category_id: String,
    pub tags: String,
    pub video_title_template: String,
    pub video_description_template: String,
    pub youtube_privacy_status: String,
    pub youtube_client_secrets_file: String,
    pub youtube_token_file: String,
    pub background_music_file: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self::from_config(&DEFAULTS)
    }
}

impl FormFields {
    /// A form with every field cleared.
    pub fn empty() -> Self {
        Self {
            trending_region: String::new(),
            videos_per_day: String::new(),
            output_dir: String::new(),
            assets_dir: String::new(),
            youtube_category_id: String::new(),
            tags: String::new(),
            video_title_template: String::new(),
            video_description_template: String::new(),
            youtube_privacy_status: String::new(),
            youtube_client_secrets_file: String::new(),
            youtube_token_file: String::new(),
            background_music_file: String::new(),
        }
    }

    /// Writes a configuration back into form text.
    ///
    /// Tags are joined with `", "` and an unset music file becomes an
    /// empty field.
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            trending_region: config.trending_region.clone(),
            videos_per_day: config.videos_per_day.to_string(),
            output_dir: config.output_dir.clone(),
            assets_dir: config.assets_dir.clone(),
            youtube_category_id: config.youtube_category_id.clone(),
            tags: config.tags.join(", "),
            video_title_template: config.video_title_template.clone(),
            video_description_template: config.video_description_template.clone(),
            youtube_privacy_status: config.youtube_privacy_status.to_string(),
            youtube_client_secrets_file: config.youtube_client_secrets_file.clone(),
            youtube_token_file: config.youtube_token_file.clone(),
            background_music_file: config.background_music_file.clone().unwrap_or_default(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::TrendingRegion => &mut self.trending_region,
            Field::VideosPerDay => &mut self.videos_per_day,
            Field::OutputDir => &mut self.output_dir,
            Field::AssetsDir => &mut self.assets_dir,
            Field::YoutubeCategoryId => &mut self.youtube_category_id,
            Field::Tags => &mut self.tags,
            Field::VideoTitleTemplate => &mut self.video_title_template,
            Field::VideoDescriptionTemplate => &mut self.video_description_template,
            Field::YoutubePrivacyStatus => &mut self.youtube_privacy_status,
            Field::YoutubeClientSecretsFile => &mut self.youtube_client_secrets_file,
            Field::YoutubeTokenFile => &mut self.youtube_token_file,
            Field::BackgroundMusicFile => &mut self.background_music_file,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TrendingRegion => self.trending_region(),
            Field::VideosPerDay => self.videos_per_day(),
            Field::OutputDir => self.output_dir(),
            Field::AssetsDir => self.assets_dir(),
            Field::YoutubeCategoryId => self.youtube_category_id(),
            Field::Tags => self.tags(),
            Field::VideoTitleTemplate => self.video_title_template(),
            Field::VideoDescriptionTemplate => self.video_description_template(),
            Field::YoutubePrivacyStatus => self.youtube_privacy_status(),
            Field::YoutubeClientSecretsFile => self.youtube_client_secrets_file(),
            Field::YoutubeTokenFile => self.youtube_token_file(),
            Field::BackgroundMusicFile => self.background_music_file(),
        }
    }
}

impl FormState for FormFields {
    fn trending_region(&self) -> &str {
        &self.trending_region
    }

    fn videos_per_day(&self) -> &str {
        &self.videos_per_day
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn assets_dir(&self) -> &str {
        &self.assets_dir
    }

    fn youtube_category_id(&self) -> &str {
        &self.youtube_category_id
    }

    fn tags(&self) -> &str {
        &self.tags
    }

    fn video_title_template(&self) -> &str {
        &self.video_title_template
    }

    fn video_description_template(&self) -> &str {
        &self.video_description_template
    }

    fn youtube_privacy_status(&self) -> &str {
        &self.youtube_privacy_status
    }

    fn youtube_client_secrets_file(&self) -> &str {
        &self.youtube_client_secrets_file
    }

    fn youtube_token_file(&self) -> &str {
        &self.youtube_token_file
    }

    fn background_music_file(&self) -> &str {
        &self.background_music_file
    }
}
