use crate::models::{Lesson, LessonFilters};

/// Narrow a lesson list by the given criteria. All constraints are ANDed,
/// date bounds are inclusive, and text criteria are case-insensitive
/// substring matches. The relative order of the input is preserved; empty
/// criteria return the input unchanged.
pub fn filter_lessons(lessons: &[Lesson], filters: &LessonFilters) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|lesson| matches(lesson, filters))
        .cloned()
        .collect()
}

fn matches(lesson: &Lesson, filters: &LessonFilters) -> bool {
    if let Some(start) = filters.start_date {
        if lesson.date < start {
            return false;
        }
    }
    if let Some(end) = filters.end_date {
        if lesson.date > end {
            return false;
        }
    }
    if let Some(status) = filters.status {
        if lesson.status != status {
            return false;
        }
    }
    if let Some(subject) = &filters.subject {
        if !contains_ignore_case(&lesson.subject, subject) {
            return false;
        }
    }
    if let Some(student) = &filters.student_name {
        if !contains_ignore_case(&lesson.student_name, student) {
            return false;
        }
    }
    true
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
