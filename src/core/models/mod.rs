//! Data models for `cgpa`

pub mod ids;
pub mod record;
pub mod semester;
pub mod subject;

pub use ids::{SemesterId, SubjectId};
pub use record::{AcademicRecord, RecordError};
pub use semester::Semester;
pub use subject::{parse_credits, Subject, SubjectEdit};
