//! Data models for the grade tracker

pub mod semester;
pub mod subject;

pub use semester::{SemesterEntry, SemesterId};
pub use subject::{SubjectEntry, SubjectId};
