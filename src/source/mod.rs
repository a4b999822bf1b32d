pub mod mock;

pub use mock::{MockLessonSource, demo_lessons};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::Lesson;

/// Upstream supplier of lesson records. Implementations are treated as
/// opaque remote collaborators: no caching, retries or consistency
/// guarantees are layered on top of them.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Fetch the full lesson list. No pagination.
    async fn fetch_all(&self) -> Result<Vec<Lesson>, AppError>;

    /// Accept an open slot. Returns a copy of the record with its status
    /// forced to upcoming; every other field, the id included, is
    /// unchanged. Fails with `NotFound` for an unknown id.
    async fn accept(&self, lesson_id: &str) -> Result<Lesson, AppError>;

    /// Fetch lessons dated within `[start, end]`, both bounds inclusive.
    /// The dashboard pipeline filters client-side over the full set and
    /// does not call this; it is part of the collaborator surface.
    async fn fetch_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Lesson>, AppError>;
}
