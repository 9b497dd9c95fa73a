//! Free-form calendar events -- activities with free-text details and
//! always a concrete weekly meeting time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::meeting::{MeetingPattern, WeeklyMeeting};

/// A user-created event on the schedule.
///
/// Events have no catalog identity; duplicate detection compares titles
/// alone. The arranged mode is course-only: `"A"` is not a day letter, so
/// it fails day validation here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    title: String,
    meeting: MeetingPattern,
    details: String,
}

/// Unvalidated field mirror; deserialization rejects what the constructor
/// rejects, in particular an arranged meeting pattern.
#[derive(Deserialize)]
struct RawEvent {
    title: String,
    meeting: MeetingPattern,
    details: String,
}

impl TryFrom<RawEvent> for Event {
    type Error = ScheduleError;

    fn try_from(raw: RawEvent) -> Result<Event> {
        if raw.title.trim().is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        if raw.meeting.is_arranged() {
            return Err(ScheduleError::InvalidMeeting);
        }
        Ok(Event {
            title: raw.title,
            meeting: raw.meeting,
            details: raw.details,
        })
    }
}

impl Event {
    /// Build an event from raw fields.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidTitle`] for an empty title, or
    /// [`ScheduleError::InvalidMeeting`] for a bad day-string or times.
    pub fn new(title: &str, days: &str, start: u16, end: u16, details: &str) -> Result<Event> {
        if title.trim().is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        let meeting = MeetingPattern::Weekly(WeeklyMeeting::new(days, start, end)?);

        Ok(Event {
            title: title.to_string(),
            meeting,
            details: details.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meeting(&self) -> &MeetingPattern {
        &self.meeting
    }

    /// Free-text details; may be empty.
    pub fn details(&self) -> &str {
        &self.details
    }
}
