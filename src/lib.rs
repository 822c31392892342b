//! Library for `cgpa-calc`
//! Credit-weighted GPA and CGPA over semesters, shared by the CLI and tests

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
