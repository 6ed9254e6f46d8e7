//! In-memory announcement catalog loaded from a JSON file.

use std::path::Path;

use anyhow::Context;
use common::announcement::Announcement;
use tokio::sync::OnceCell;

pub const ANNOUNCEMENTS_PATH_ENV: &str = "CONNECTDOG_ANNOUNCEMENTS_PATH";
pub const DEFAULT_ANNOUNCEMENTS_PATH: &str = "announcements.json";

static SHARED_CATALOG: OnceCell<AnnouncementCatalog> = OnceCell::const_new();


#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnouncementCatalog {
    announcements: Vec<Announcement>,
}

impl AnnouncementCatalog {
    pub fn from_announcements(announcements: Vec<Announcement>) -> Self {
        Self { announcements }
    }

    /// Reads a JSON array of announcements. A missing file is an empty catalog;
    /// any other I/O failure (permissions, a file where a directory should be) is an error.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check announcements file {:?}", path))?;
        if !exists {
            tracing::warn!("Announcement file {:?} not found, serving an empty catalog", path);
            return Ok(Self::default());
        }
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read announcements from {:?}", path))?;
        let announcements: Vec<Announcement> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse announcements from {:?}", path))?;
        tracing::info!("Loaded {} announcements from {:?}", announcements.len(), path);
        Ok(Self { announcements })
    }

    pub async fn from_env() -> anyhow::Result<Self> {
        let path = std::env::var(ANNOUNCEMENTS_PATH_ENV).unwrap_or(DEFAULT_ANNOUNCEMENTS_PATH.to_string());
        Self::load(path).await
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn get(&self, post_id: u64) -> Option<&Announcement> {
        self.announcements.iter().find(|a| a.post_id == post_id)
    }
}

/// Catalog shared by all requests, loaded once on first use.
pub async fn shared_catalog() -> anyhow::Result<&'static AnnouncementCatalog> {
    SHARED_CATALOG.get_or_try_init(AnnouncementCatalog::from_env).await
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::filter::DogSize;

    fn sample() -> Announcement {
        Announcement {
            post_id: 3,
            image_url: "https://example.com/dog.png".to_string(),
            departure: "서울시 마포구".to_string(),
            arrival: "대구시 중구".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 11, 8).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 11, 10).unwrap(),
            organization: "행복한 보호소".to_string(),
            has_kennel: false,
            dog_size: DogSize::Small,
            created_at: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap().and_hms_opt(12, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("announcements.json");
        std::fs::write(&path, serde_json::to_string(&vec![sample()]).unwrap()).unwrap();

        let catalog = AnnouncementCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.announcements(), &[sample()]);
        assert_eq!(catalog.get(3), Some(&sample()));
        assert_eq!(catalog.get(4), None);
    }

    #[tokio::test]
    async fn test_bundled_sample_catalog_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(DEFAULT_ANNOUNCEMENTS_PATH);
        let catalog = AnnouncementCatalog::load(path).await.unwrap();
        assert_eq!(catalog.announcements().len(), 3);
        assert_eq!(catalog.get(1).map(|a| a.dog_size), Some(DogSize::Big));
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = AnnouncementCatalog::load(dir.path().join("nope.json")).await.unwrap();
        assert!(catalog.announcements().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_path_is_error_not_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("announcements.json");
        std::fs::write(&blocker, "[]").unwrap();

        // a regular file used as a directory is not "missing"
        let err = AnnouncementCatalog::load(blocker.join("nested.json")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to check announcements file"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("announcements.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AnnouncementCatalog::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse announcements"));
    }
}
