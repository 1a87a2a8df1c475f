//! Pure conversions from raw form text to configuration values.
//!
//! Every function takes the fallback value explicitly, so nothing here reads
//! the default table on its own.

/// Trims the input and converts every backslash to a forward slash.
///
/// Trailing separators are preserved as typed.
pub fn normalize_path(raw: &str) -> String {
    raw.trim().replace('\\', "/")
}

/// Normalizes a path field, substituting `default` when nothing is left.
pub fn path_or_default(raw: &str, default: &str) -> String {
    let normalized = normalize_path(raw);
    if normalized.is_empty() {
        default.to_string()
    } else {
        normalized
    }
}

/// Normalizes an optional path field; empty input means "not set".
pub fn optional_path(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(normalize_path(raw))
    }
}

/// Trims a text field, substituting `default` when it is empty.
pub fn text_or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Splits a comma-separated list, dropping empty entries.
///
/// Returns a fresh copy of `default` when no entry survives.
pub fn parse_tags(raw: &str, default: &[String]) -> Vec<String> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect();

    if tags.is_empty() {
        default.to_vec()
    } else {
        tags
    }
}

/// Parses the daily video count.
///
/// Empty, unparsable, non-finite and zero inputs give `default`. Other
/// values are floored to a whole count and clamped up to one, so `2.5`
/// gives 2 and `-3` gives 1.
pub fn parse_videos_per_day(raw: &str, default: u32) -> u32 {
    let value = match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => return default,
    };

    let value = value.floor();
    if value < 1.0 {
        1
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        vec!["shorts".into(), "cartoon".into(), "comedy".into()]
    }

    #[test]
    fn path_normalization_keeps_trailing_separator() {
        assert_eq!(normalize_path("  out\\videos\\ "), "out/videos/");
        assert_eq!(normalize_path("C:\\media\\music.mp3"), "C:/media/music.mp3");
        assert_eq!(path_or_default("   ", "output"), "output");
    }

    #[test]
    fn optional_path_is_absent_when_blank() {
        assert_eq!(optional_path(""), None);
        assert_eq!(optional_path(" \t "), None);
        assert_eq!(optional_path(" music\\loop.mp3"), Some("music/loop.mp3".to_string()));
    }

    #[test]
    fn text_fields_trim_and_fall_back() {
        assert_eq!(text_or_default("  japan ", "united_states"), "japan");
        assert_eq!(text_or_default("", "united_states"), "united_states");
    }

    #[test]
    fn tags_are_split_trimmed_and_filtered() {
        assert_eq!(parse_tags("a, b ,, c", &defaults()), vec!["a", "b", "c"]);
        assert_eq!(parse_tags(" , ,", &defaults()), defaults());
        assert_eq!(parse_tags("", &defaults()), defaults());
    }

    #[test]
    fn video_count_parsing() {
        assert_eq!(parse_videos_per_day("6", 4), 6);
        assert_eq!(parse_videos_per_day(" 12 ", 4), 12);
        assert_eq!(parse_videos_per_day("6.0", 4), 6);
        assert_eq!(parse_videos_per_day("", 4), 4);
        assert_eq!(parse_videos_per_day("lots", 4), 4);
        assert_eq!(parse_videos_per_day("0", 4), 4);
        assert_eq!(parse_videos_per_day("NaN", 4), 4);
        assert_eq!(parse_videos_per_day("inf", 4), 4);
        assert_eq!(parse_videos_per_day("-3", 4), 1);
        assert_eq!(parse_videos_per_day("0.5", 4), 1);
        assert_eq!(parse_videos_per_day("2.5", 4), 2);
        assert_eq!(parse_videos_per_day("1.9", 4), 1);
        assert_eq!(parse_videos_per_day("-2.5", 4), 1);
        assert_eq!(parse_videos_per_day("1e12", 4), u32::MAX);
    }
}
