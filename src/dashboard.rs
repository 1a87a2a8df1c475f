use crate::model::Configuration;
use serde::Serialize;

/// Lower bound for the topics-analysed estimate.
const MIN_TOPICS_ANALYSED: u32 = 12;

/// Shown when the privacy status has no dedicated message.
pub const FALLBACK_STATUS: &str = "Ready for launch";

/// Summary figures shown next to the configuration preview.
///
/// `topics_analysed` is a display estimate of how many trending topics the
/// tool will look at, not a promise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub videos_queued: u32,
    pub topics_analysed: u32,
    pub uploads_complete: u32,
    pub status_text: String,
}

/// Builds the dashboard figures for a snapshot.
pub fn present(config: &Configuration) -> DashboardView {
    DashboardView {
        videos_queued: config.videos_per_day,
        topics_analysed: config
            .videos_per_day
            .saturating_mul(3)
            .max(MIN_TOPICS_ANALYSED),
        uploads_complete: 0,
        status_text: status_text(config.youtube_privacy_status.as_str()).to_string(),
    }
}

/// Maps a privacy status name to its dashboard message.
pub fn status_text(status: &str) -> &'static str {
    match status {
        "private" => "Uploads saved as Private",
        "unlisted" => "Uploads shared as Unlisted",
        "public" => "Uploads published instantly",
        _ => FALLBACK_STATUS,
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Videos queued:    {}", self.videos_queued)?;
        writeln!(f, "Topics analysed:  {}", self.topics_analysed)?;
        writeln!(f, "Uploads complete: {}", self.uploads_complete)?;
        write!(f, "Status:           {}", self.status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrivacyStatus;

    #[test]
    fn default_snapshot_dashboard() {
        let view = present(&Configuration::default());
        assert_eq!(view.videos_queued, 4);
        assert_eq!(view.topics_analysed, 12);
        assert_eq!(view.uploads_complete, 0);
        assert_eq!(view.status_text, "Uploads saved as Private");
    }

    #[test]
    fn topics_estimate_scales_past_the_floor() {
        let mut config = Configuration::default();
        config.videos_per_day = 5;
        assert_eq!(present(&config).topics_analysed, 15);
        config.videos_per_day = 1;
        assert_eq!(present(&config).topics_analysed, 12);
        config.videos_per_day = u32::MAX;
        assert_eq!(present(&config).topics_analysed, u32::MAX);
    }

    #[test]
    fn status_messages() {
        let mut config = Configuration::default();
        config.youtube_privacy_status = PrivacyStatus::Public;
        assert_eq!(present(&config).status_text, "Uploads published instantly");
        config.youtube_privacy_status = PrivacyStatus::Unlisted;
        assert_eq!(present(&config).status_text, "Uploads shared as Unlisted");
        assert_eq!(status_text("members-only"), "Ready for launch");
    }
}
