//! Error types for roster-core operations.
//!
//! Display strings double as the user-facing messages a presentation layer
//! shows verbatim, so they are fixed and covered by tests.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Bad day letters, duplicate days, malformed military times, or an
    /// end time earlier than the start time.
    #[error("Invalid meeting days and times.")]
    InvalidMeeting,

    #[error("Invalid title.")]
    InvalidTitle,

    #[error("Invalid course name.")]
    InvalidCourseName,

    #[error("Invalid section.")]
    InvalidSection,

    #[error("Invalid credits.")]
    InvalidCredits,

    #[error("Invalid instructor id.")]
    InvalidInstructorId,

    /// The schedule already holds a course with this name and section.
    #[error("You are already enrolled in {0}")]
    DuplicateCourse(String),

    #[error("The course cannot be added due to a conflict.")]
    CourseConflict,

    /// The schedule already holds an event with this title.
    #[error("You have already created an event called {0}")]
    DuplicateEvent(String),

    #[error("The event cannot be added due to a conflict.")]
    EventConflict,

    /// The catalog source could not be opened or read at all.
    /// Individual malformed records never raise this.
    #[error("Cannot find file.")]
    CatalogUnreadable,

    #[error("The file cannot be saved.")]
    ExportFailed,
}

/// Convenience alias used throughout roster-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
