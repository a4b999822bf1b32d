pub mod lesson;
pub mod user;

pub use lesson::{DeliveryFormat, Lesson, LessonFilters, LessonStatus};
pub use user::{Role, Session, User};
