//! The closed activity sum type -- everything a schedule can hold.
//!
//! Courses and events share a title, a meeting pattern, display rows, and
//! the conflict check, but differ in what makes two entries "the same
//! thing": courses by (name, section), events by title, and never across
//! variants. A closed enum with a match on the variant pair keeps that rule
//! in one place instead of scattering downcasts.

use serde::{Deserialize, Serialize};

use crate::conflict;
use crate::course::Course;
use crate::event::Event;
use crate::meeting::MeetingPattern;

/// A schedulable activity: either a catalog [`Course`] or a user [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    pub fn title(&self) -> &str {
        match self {
            Activity::Course(course) => course.title(),
            Activity::Event(event) => event.title(),
        }
    }

    pub fn meeting(&self) -> &MeetingPattern {
        match self {
            Activity::Course(course) => course.meeting(),
            Activity::Event(event) => event.meeting(),
        }
    }

    /// Row for list views: `[name, section, title, meeting summary]`.
    /// Events have no catalog identity, so their first two cells are blank
    /// placeholders, not missing data.
    pub fn short_display_row(&self) -> [String; 4] {
        match self {
            Activity::Course(course) => course_short_row(course),
            Activity::Event(event) => [
                String::new(),
                String::new(),
                event.title().to_string(),
                event.meeting().summary(),
            ],
        }
    }

    /// Row for detail views:
    /// `[name, section, title, credits, instructor, meeting summary, details]`,
    /// with the cells the variant lacks left blank.
    pub fn long_display_row(&self) -> [String; 7] {
        match self {
            Activity::Course(course) => [
                course.name().to_string(),
                course.section().to_string(),
                course.title().to_string(),
                course.credits().to_string(),
                course.instructor_id().to_string(),
                course.meeting().summary(),
                String::new(),
            ],
            Activity::Event(event) => [
                String::new(),
                String::new(),
                event.title().to_string(),
                String::new(),
                String::new(),
                event.meeting().summary(),
                event.details().to_string(),
            ],
        }
    }

    /// Whether `self` and `other` represent the same schedule entry.
    ///
    /// Courses compare (name, section) and ignore the meeting pattern;
    /// events compare titles. A course is never a duplicate of an event.
    pub fn is_duplicate(&self, other: &Activity) -> bool {
        match (self, other) {
            (Activity::Course(a), Activity::Course(b)) => {
                a.name() == b.name() && a.section() == b.section()
            }
            (Activity::Event(a), Activity::Event(b)) => a.title() == b.title(),
            _ => false,
        }
    }

    /// Whether the two activities' meeting times collide.
    /// See [`conflict::overlaps`] for the exact rule.
    pub fn conflicts_with(&self, other: &Activity) -> bool {
        conflict::overlaps(self.meeting(), other.meeting())
    }
}

/// Short row for a course that may still live in the catalog; also used by
/// the scheduler's catalog table so it need not clone courses into
/// activities just to render them.
pub(crate) fn course_short_row(course: &Course) -> [String; 4] {
    [
        course.name().to_string(),
        course.section().to_string(),
        course.title().to_string(),
        course.meeting().summary(),
    ]
}

impl From<Course> for Activity {
    fn from(course: Course) -> Activity {
        Activity::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Activity {
        Activity::Event(event)
    }
}
