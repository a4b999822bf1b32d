use serde::{Deserialize, Serialize};

use crate::models::{Lesson, LessonStatus};

/// Per-status counts shown in the dashboard's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub today: usize,
    pub upcoming: usize,
    pub available: usize,
    pub completed: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.today + self.upcoming + self.available + self.completed
    }
}

/// Count lessons by status. Runs over the filtered set, after the same
/// criteria the grouping stage sees.
pub fn summarize(lessons: &[Lesson]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for lesson in lessons {
        match lesson.status {
            LessonStatus::Today => summary.today += 1,
            LessonStatus::Upcoming => summary.upcoming += 1,
            LessonStatus::Available => summary.available += 1,
            LessonStatus::Completed => summary.completed += 1,
        }
    }
    summary
}
