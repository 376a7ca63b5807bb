pub mod blobs;
pub mod catalog;
pub mod config;
pub mod error;
pub mod paper;
pub mod session;
pub mod solution;
pub mod upload;

use chrono::{DateTime, Datelike, Utc};

use catalog::Catalog;
use config::PortalConfig;
use upload::UploadRules;

/// Starting working set for a fresh page.
pub fn seed_catalog(config: &PortalConfig) -> Catalog {
    if config.seed_demo_data {
        Catalog::new(paper::demo_papers())
    } else {
        Catalog::default()
    }
}

pub fn upload_rules(config: &PortalConfig, now: DateTime<Utc>) -> UploadRules {
    UploadRules {
        current_year: now.year(),
        recent_year_count: config.recent_year_count,
        max_upload_bytes: config.max_upload_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seed_catalog_follows_config() {
        let mut config = PortalConfig::default();
        assert_eq!(seed_catalog(&config).len(), 4);

        config.seed_demo_data = false;
        assert!(seed_catalog(&config).is_empty());
    }

    #[test]
    fn test_upload_rules_use_current_year() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        let rules = upload_rules(&PortalConfig::default(), now);
        assert_eq!(rules.current_year, 2026);
        assert_eq!(rules.allowed_years().last().map(String::as_str), Some("2017"));
    }
}
