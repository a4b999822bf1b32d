use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a lesson. Stored on the record rather than derived
/// from the date, so accepting a slot can overwrite it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Completed,
    Today,
    Upcoming,
    Available,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryFormat {
    Online,
    InPerson,
}

/// A scheduled or schedulable tutoring session.
///
/// Records are immutable once created; the accept mutation replaces the
/// whole record with a copy. `duration_minutes` is assumed to equal the
/// minute span between `start_time` and `end_time` but is not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub student_name: String,
    pub student_id: String,
    pub tutor_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: u32,
    pub status: LessonStatus,
    pub delivery: DeliveryFormat,
    pub description: Option<String>,
    pub price: Option<u32>,
    /// Expected when `delivery` is in-person.
    pub location: Option<String>,
    /// Expected when `delivery` is online.
    pub meeting_link: Option<String>,
}

/// Criteria for narrowing the lesson list. Every field is optional; an
/// absent field places no constraint on that dimension. Request-scoped,
/// never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<LessonStatus>,
    pub subject: Option<String>,
    pub student_name: Option<String>,
}
