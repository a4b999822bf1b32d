use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use tokio::time::sleep;

use crate::error::AppError;
use crate::models::{DeliveryFormat, Lesson, LessonStatus};
use crate::source::LessonSource;

/// In-memory lesson supplier with artificial latency, standing in for a
/// real booking backend. The collection is fixed at construction; accept
/// returns a transformed copy without consuming the original record.
pub struct MockLessonSource {
    lessons: Vec<Lesson>,
    fetch_delay: Duration,
    mutate_delay: Duration,
}

impl MockLessonSource {
    pub fn new(lessons: Vec<Lesson>, fetch_delay: Duration, mutate_delay: Duration) -> Self {
        Self {
            lessons,
            fetch_delay,
            mutate_delay,
        }
    }

    /// Demo dataset with the latencies of the real collaborator.
    pub fn seeded() -> Self {
        Self::new(
            demo_lessons(),
            Duration::from_millis(500),
            Duration::from_millis(300),
        )
    }
}

#[async_trait]
impl LessonSource for MockLessonSource {
    async fn fetch_all(&self) -> Result<Vec<Lesson>, AppError> {
        sleep(self.fetch_delay).await;
        Ok(self.lessons.clone())
    }

    async fn accept(&self, lesson_id: &str) -> Result<Lesson, AppError> {
        sleep(self.mutate_delay).await;

        let lesson = self
            .lessons
            .iter()
            .find(|l| l.id == lesson_id)
            .ok_or(AppError::NotFound)?;

        // The prior status is not checked: accepting a slot that is not
        // available still transitions it to upcoming.
        let mut accepted = lesson.clone();
        accepted.status = LessonStatus::Upcoming;
        Ok(accepted)
    }

    async fn fetch_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Lesson>, AppError> {
        sleep(self.mutate_delay).await;
        Ok(self
            .lessons
            .iter()
            .filter(|l| l.date >= start && l.date <= end)
            .cloned()
            .collect())
    }
}

/// The five demo lessons every environment starts with.
pub fn demo_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "1".to_string(),
            title: "High School Math Tutoring".to_string(),
            subject: "Mathematics".to_string(),
            student_name: "Alex Johnson".to_string(),
            student_id: "s1".to_string(),
            tutor_id: "t1".to_string(),
            date: date(2024, 1, 2),
            start_time: time(14, 0),
            end_time: time(15, 30),
            duration_minutes: 90,
            status: LessonStatus::Completed,
            delivery: DeliveryFormat::Online,
            description: Some("Quadratic functions and trigonometry review".to_string()),
            price: Some(200),
            location: None,
            meeting_link: Some("https://zoom.us/j/123456".to_string()),
        },
        Lesson {
            id: "2".to_string(),
            title: "English Speaking Practice".to_string(),
            subject: "English".to_string(),
            student_name: "Sarah Miller".to_string(),
            student_id: "s2".to_string(),
            tutor_id: "t1".to_string(),
            date: date(2024, 1, 16),
            start_time: time(10, 0),
            end_time: time(11, 0),
            duration_minutes: 60,
            status: LessonStatus::Today,
            delivery: DeliveryFormat::InPerson,
            description: Some("Daily conversation and pronunciation correction".to_string()),
            price: Some(150),
            location: Some("School Library".to_string()),
            meeting_link: None,
        },
        Lesson {
            id: "3".to_string(),
            title: "Physics Mechanics".to_string(),
            subject: "Physics".to_string(),
            student_name: "Michael Chen".to_string(),
            student_id: "s3".to_string(),
            tutor_id: "t1".to_string(),
            date: date(2024, 1, 17),
            start_time: time(15, 0),
            end_time: time(16, 30),
            duration_minutes: 90,
            status: LessonStatus::Upcoming,
            delivery: DeliveryFormat::Online,
            description: Some("Application of Newton's Laws".to_string()),
            price: Some(200),
            location: None,
            meeting_link: None,
        },
        Lesson {
            id: "4".to_string(),
            title: "Chemistry Lab Guidance".to_string(),
            subject: "Chemistry".to_string(),
            student_name: "Emily Wang".to_string(),
            student_id: "s4".to_string(),
            tutor_id: "t1".to_string(),
            date: date(2024, 1, 18),
            start_time: time(9, 0),
            end_time: time(10, 0),
            duration_minutes: 60,
            status: LessonStatus::Available,
            delivery: DeliveryFormat::InPerson,
            description: Some("Organic chemistry experiment preparation".to_string()),
            price: Some(180),
            location: Some("Chemistry Lab".to_string()),
            meeting_link: None,
        },
        Lesson {
            id: "5".to_string(),
            title: "Biology Genetics".to_string(),
            subject: "Biology".to_string(),
            student_name: "David Kim".to_string(),
            student_id: "s5".to_string(),
            tutor_id: "t1".to_string(),
            date: date(2024, 2, 19),
            start_time: time(13, 0),
            end_time: time(14, 30),
            duration_minutes: 90,
            status: LessonStatus::Available,
            delivery: DeliveryFormat::Online,
            description: Some("Mendelian Genetics Principles".to_string()),
            price: Some(200),
            location: None,
            meeting_link: None,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid demo time")
}
