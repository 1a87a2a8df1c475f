use crate::form::FormState;
use crate::model::{Configuration, PrivacyStatus, DEFAULTS};
use crate::normalize::{
    optional_path, parse_tags, parse_videos_per_day, path_or_default, text_or_default,
};

/// Derives a configuration snapshot from the current form input.
///
/// Every field that is empty or fails to parse takes its default, so the
/// result is always complete. Nothing is validated beyond that; whether a
/// path exists or a category id is real is left to the automation tool.
///
/// # Examples
///
/// ```
/// use shorts_config::{generate, Configuration, FormFields};
///
/// assert_eq!(generate(&FormFields::empty()), Configuration::default());
/// ```
pub fn generate(form: &impl FormState) -> Configuration {
    let defaults = &*DEFAULTS;

    Configuration {
        trending_region: text_or_default(form.trending_region(), &defaults.trending_region),
        videos_per_day: parse_videos_per_day(form.videos_per_day(), defaults.videos_per_day),
        output_dir: path_or_default(form.output_dir(), &defaults.output_dir),
        assets_dir: path_or_default(form.assets_dir(), &defaults.assets_dir),
        youtube_category_id: text_or_default(
            form.youtube_category_id(),
            &defaults.youtube_category_id,
        ),
        tags: parse_tags(form.tags(), &defaults.tags),
        video_title_template: text_or_default(
            form.video_title_template(),
            &defaults.video_title_template,
        ),
        video_description_template: text_or_default(
            form.video_description_template(),
            &defaults.video_description_template,
        ),
        youtube_privacy_status: form
            .youtube_privacy_status()
            .parse::<PrivacyStatus>()
            .unwrap_or(defaults.youtube_privacy_status),
        youtube_client_secrets_file: path_or_default(
            form.youtube_client_secrets_file(),
            &defaults.youtube_client_secrets_file,
        ),
        youtube_token_file: path_or_default(
            form.youtube_token_file(),
            &defaults.youtube_token_file,
        ),
        background_music_file: optional_path(form.background_music_file()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Field, FormFields};

    fn filled_form() -> FormFields {
        let mut form = FormFields::empty();
        form.set(Field::TrendingRegion, " japan ");
        form.set(Field::VideosPerDay, "6");
        form.set(Field::OutputDir, "out\\videos\\");
        form.set(Field::AssetsDir, " art ");
        form.set(Field::YoutubeCategoryId, "24");
        form.set(Field::Tags, "a, b ,, c");
        form.set(Field::VideoTitleTemplate, "{topic}!");
        form.set(Field::VideoDescriptionTemplate, "About {topic}: {script}");
        form.set(Field::YoutubePrivacyStatus, "public");
        form.set(Field::YoutubeClientSecretsFile, "creds\\secret.json");
        form.set(Field::YoutubeTokenFile, "creds/token.json");
        form.set(Field::BackgroundMusicFile, " music\\loop.mp3 ");
        form
    }

    #[test]
    fn empty_form_yields_defaults() {
        let config = generate(&FormFields::empty());
        assert_eq!(config, Configuration::default());
        assert_eq!(config.tags, DEFAULTS.tags);
    }

    #[test]
    fn filled_form_is_normalized() {
        let config = generate(&filled_form());
        assert_eq!(config.trending_region, "japan");
        assert_eq!(config.videos_per_day, 6);
        assert_eq!(config.output_dir, "out/videos/");
        assert_eq!(config.assets_dir, "art");
        assert_eq!(config.youtube_category_id, "24");
        assert_eq!(config.tags, vec!["a", "b", "c"]);
        assert_eq!(config.video_title_template, "{topic}!");
        assert_eq!(config.video_description_template, "About {topic}: {script}");
        assert_eq!(config.youtube_privacy_status, PrivacyStatus::Public);
        assert_eq!(config.youtube_client_secrets_file, "creds/secret.json");
        assert_eq!(config.youtube_token_file, "creds/token.json");
        assert_eq!(config.background_music_file.as_deref(), Some("music/loop.mp3"));
    }

    #[test]
    fn generation_is_idempotent() {
        let form = filled_form();
        assert_eq!(generate(&form), generate(&form));
    }

    #[test]
    fn required_fields_are_never_empty() {
        let mut form = FormFields::empty();
        for field in Field::ALL {
            form.set(field, "   ");
        }
        form.set(Field::VideosPerDay, "-12");

        let config = generate(&form);
        assert_eq!(config.videos_per_day, 1);
        for value in [
            &config.trending_region,
            &config.output_dir,
            &config.assets_dir,
            &config.youtube_category_id,
            &config.video_title_template,
            &config.video_description_template,
            &config.youtube_client_secrets_file,
            &config.youtube_token_file,
        ] {
            assert!(!value.is_empty());
        }
        assert!(!config.tags.is_empty());
        assert!(config.tags.iter().all(|tag| !tag.is_empty()));
        assert!(config.background_music_file.is_none());
    }

    #[test]
    fn unknown_privacy_status_falls_back() {
        let mut form = FormFields::default();
        form.set(Field::YoutubePrivacyStatus, "secret");
        assert_eq!(generate(&form).youtube_privacy_status, PrivacyStatus::Private);
    }

    #[test]
    fn populated_form_regenerates_the_same_snapshot() {
        let config = generate(&filled_form());
        assert_eq!(generate(&FormFields::from_config(&config)), config);
    }
}
