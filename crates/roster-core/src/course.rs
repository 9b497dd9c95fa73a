//! Catalog courses -- activities with a course-code identity, credits, and
//! an optional "arranged" (no fixed time) meeting mode.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::meeting::MeetingPattern;

/// Course-code shape: 1-4 letters, an optional space, then exactly 3 digits
/// (`CSC216`, `CSC 216`, `E115`).
static COURSE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{1,4} ?\d{3}$").unwrap());

/// Sections are a fixed-length digit string (`001`, `601`).
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}$").unwrap());

pub const MIN_CREDITS: u8 = 1;
pub const MAX_CREDITS: u8 = 5;

/// A course offered in the catalog.
///
/// Identity for catalog lookup and duplicate detection is the
/// (name, section) pair; the meeting pattern plays no part in it. Courses
/// are immutable once constructed, so catalog entries and scheduled copies
/// can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    meeting: MeetingPattern,
}

/// Unvalidated field mirror; deserialization converts through the same
/// field checks as the constructors.
#[derive(Deserialize)]
struct RawCourse {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    meeting: MeetingPattern,
}

impl TryFrom<RawCourse> for Course {
    type Error = ScheduleError;

    fn try_from(raw: RawCourse) -> Result<Course> {
        Course::with_meeting(
            &raw.name,
            &raw.title,
            &raw.section,
            raw.credits,
            &raw.instructor_id,
            raw.meeting,
        )
    }
}

impl Course {
    /// Build a course from raw record fields.
    ///
    /// The day-string may be the `"A"` arranged sentinel, in which case both
    /// times must be 0 (see [`MeetingPattern::parse`]).
    ///
    /// # Errors
    /// One of the `Invalid*` variants of [`ScheduleError`] naming the first
    /// field that failed validation.
    pub fn new(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: &str,
        days: &str,
        start: u16,
        end: u16,
    ) -> Result<Course> {
        let meeting = MeetingPattern::parse(days, start, end)?;
        Course::with_meeting(name, title, section, credits, instructor_id, meeting)
    }

    /// Build a course with no fixed meeting time.
    pub fn arranged(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: &str,
    ) -> Result<Course> {
        Course::with_meeting(
            name,
            title,
            section,
            credits,
            instructor_id,
            MeetingPattern::Arranged,
        )
    }

    fn with_meeting(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: &str,
        meeting: MeetingPattern,
    ) -> Result<Course> {
        if !COURSE_NAME.is_match(name) {
            return Err(ScheduleError::InvalidCourseName);
        }
        if title.trim().is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        if !SECTION.is_match(section) {
            return Err(ScheduleError::InvalidSection);
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
            return Err(ScheduleError::InvalidCredits);
        }
        if instructor_id.trim().is_empty() {
            return Err(ScheduleError::InvalidInstructorId);
        }

        Ok(Course {
            name: name.to_string(),
            title: title.to_string(),
            section: section.to_string(),
            credits,
            instructor_id: instructor_id.to_string(),
            meeting,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn meeting(&self) -> &MeetingPattern {
        &self.meeting
    }
}
