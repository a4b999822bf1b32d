use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Lesson, LessonStatus};

/// Lessons of one calendar month, partitioned by status. Within each
/// status list the input order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthBucket {
    /// First day of the month, the bucket key.
    pub month: NaiveDate,
    pub label: String,
    pub today: Vec<Lesson>,
    pub upcoming: Vec<Lesson>,
    pub available: Vec<Lesson>,
    pub completed: Vec<Lesson>,
}

impl MonthBucket {
    fn empty(month: NaiveDate) -> Self {
        Self {
            month,
            label: month.format("%B %Y").to_string(),
            today: Vec::new(),
            upcoming: Vec::new(),
            available: Vec::new(),
            completed: Vec::new(),
        }
    }

    fn push(&mut self, lesson: Lesson) {
        match lesson.status {
            LessonStatus::Today => self.today.push(lesson),
            LessonStatus::Upcoming => self.upcoming.push(lesson),
            LessonStatus::Available => self.available.push(lesson),
            LessonStatus::Completed => self.completed.push(lesson),
        }
    }

    pub fn total(&self) -> usize {
        self.today.len() + self.upcoming.len() + self.available.len() + self.completed.len()
    }
}

/// Group lessons into one bucket per calendar month, ordered from the
/// oldest month to the newest. Months without lessons produce no bucket.
pub fn group_by_month(lessons: &[Lesson]) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<NaiveDate, MonthBucket> = BTreeMap::new();

    for lesson in lessons {
        let month = month_start(lesson.date);
        buckets
            .entry(month)
            .or_insert_with(|| MonthBucket::empty(month))
            .push(lesson.clone());
    }

    buckets.into_values().collect()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so the fallback is never taken.
    date.with_day(1).unwrap_or(date)
}
