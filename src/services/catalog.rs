use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::dashboard::{DashboardView, filter_lessons, group_by_month, summarize};
use crate::error::AppError;
use crate::models::{Lesson, LessonFilters};
use crate::source::LessonSource;

/// Holds the lesson collection loaded from the source and runs the
/// dashboard pipeline over it. `None` means the catalog was never loaded
/// or the last load failed; every read then surfaces a blocking error
/// until an explicit reload succeeds.
pub struct CatalogService {
    source: Arc<dyn LessonSource>,
    lessons: RwLock<Option<Vec<Lesson>>>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn LessonSource>) -> Self {
        Self {
            source,
            lessons: RwLock::new(None),
        }
    }

    /// Fetch the full lesson list from the source, replacing the local
    /// collection. A failed fetch discards whatever was loaded before.
    pub async fn load(&self) -> Result<usize, AppError> {
        match self.source.fetch_all().await {
            Ok(lessons) => {
                let count = lessons.len();
                *self.lessons.write().await = Some(lessons);
                info!("loaded {} lessons from source", count);
                Ok(count)
            }
            Err(err) => {
                *self.lessons.write().await = None;
                warn!("lesson fetch failed: {}", err);
                Err(err)
            }
        }
    }

    /// Snapshot of the loaded collection.
    pub async fn lessons(&self) -> Result<Vec<Lesson>, AppError> {
        self.lessons
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::SourceUnavailable("lesson catalog is not loaded".to_string()))
    }

    /// Accept an open slot and replace the matching record in the local
    /// collection with the returned copy.
    pub async fn accept(&self, lesson_id: &str) -> Result<Lesson, AppError> {
        let accepted = self.source.accept(lesson_id).await?;

        if let Some(lessons) = self.lessons.write().await.as_mut() {
            for lesson in lessons.iter_mut() {
                if lesson.id == accepted.id {
                    *lesson = accepted.clone();
                }
            }
        }

        info!("accepted lesson {}", accepted.id);
        Ok(accepted)
    }

    /// Filter the snapshot and compute the summary and month grouping the
    /// dashboard renders.
    pub async fn dashboard(&self, filters: &LessonFilters) -> Result<DashboardView, AppError> {
        let lessons = self.lessons().await?;
        let visible = filter_lessons(&lessons, filters);

        Ok(DashboardView {
            summary: summarize(&visible),
            months: group_by_month(&visible),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LessonStatus;
    use crate::source::{MockLessonSource, demo_lessons};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::time::Duration;

    struct FailingSource;

    #[async_trait]
    impl LessonSource for FailingSource {
        async fn fetch_all(&self) -> Result<Vec<Lesson>, AppError> {
            Err(AppError::SourceUnavailable("connection refused".to_string()))
        }

        async fn accept(&self, _lesson_id: &str) -> Result<Lesson, AppError> {
            Err(AppError::SourceUnavailable("connection refused".to_string()))
        }

        async fn fetch_by_range(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Lesson>, AppError> {
            Err(AppError::SourceUnavailable("connection refused".to_string()))
        }
    }

    fn catalog() -> CatalogService {
        CatalogService::new(Arc::new(MockLessonSource::new(
            demo_lessons(),
            Duration::ZERO,
            Duration::ZERO,
        )))
    }

    #[tokio::test]
    async fn reads_fail_until_the_catalog_is_loaded() {
        let catalog = catalog();

        let err = catalog.lessons().await.expect_err("expected unavailable");
        assert!(matches!(err, AppError::SourceUnavailable(_)));

        catalog.load().await.expect("load failed");
        assert_eq!(catalog.lessons().await.expect("read failed").len(), 5);
    }

    #[tokio::test]
    async fn accept_replaces_the_record_in_the_local_collection() {
        let catalog = catalog();
        catalog.load().await.expect("load failed");

        let accepted = catalog.accept("4").await.expect("accept failed");
        assert_eq!(accepted.status, LessonStatus::Upcoming);

        let lessons = catalog.lessons().await.expect("read failed");
        let chem = lessons.iter().find(|l| l.id == "4").expect("missing lesson");
        assert_eq!(chem.status, LessonStatus::Upcoming);
        assert_eq!(lessons.len(), 5);
    }

    #[tokio::test]
    async fn accept_unknown_id_leaves_the_collection_untouched() {
        let catalog = catalog();
        catalog.load().await.expect("load failed");

        let err = catalog.accept("999").await.expect_err("expected NotFound");
        assert!(matches!(err, AppError::NotFound));

        let lessons = catalog.lessons().await.expect("read failed");
        let chem = lessons.iter().find(|l| l.id == "4").expect("missing lesson");
        assert_eq!(chem.status, LessonStatus::Available);
    }

    #[tokio::test]
    async fn dashboard_runs_the_pipeline_over_the_filtered_snapshot() {
        let catalog = catalog();
        catalog.load().await.expect("load failed");

        let view = catalog
            .dashboard(&LessonFilters::default())
            .await
            .expect("dashboard failed");
        assert_eq!(view.summary.total(), 5);
        assert_eq!(view.months.len(), 2);

        let filters = LessonFilters {
            subject: Some("chem".to_string()),
            ..Default::default()
        };
        let view = catalog.dashboard(&filters).await.expect("dashboard failed");
        assert_eq!(view.summary.available, 1);
        assert_eq!(view.summary.total(), 1);
        assert_eq!(view.months.len(), 1);
        assert_eq!(view.months[0].label, "January 2024");
    }

    #[tokio::test]
    async fn failed_load_discards_previously_loaded_data() {
        let catalog = CatalogService::new(Arc::new(FailingSource));
        *catalog.lessons.write().await = Some(demo_lessons());

        let err = catalog.load().await.expect_err("expected failure");
        assert!(matches!(err, AppError::SourceUnavailable(_)));
        assert!(catalog.lessons().await.is_err());
    }
}
