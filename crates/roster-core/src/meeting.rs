//! Meeting patterns -- the validated day-set plus start/end times shared by
//! every schedulable activity.
//!
//! Times travel through the public API and record files as military `u16`
//! values (e.g. `1330`), and are held internally as [`chrono::NaiveTime`] so
//! hour/minute ranges, ordering, and 12-hour formatting come from chrono
//! instead of hand-rolled arithmetic. "Arranged" (no fixed meeting time) is a
//! distinct enum case rather than zeroed sentinel times, so a real
//! midnight meeting can never be mistaken for an arranged one.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Day of the week, written in record files and summaries as a single
/// letter code: `U M T W H F S`, Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// The single-letter record-file code for this day.
    pub fn code(self) -> char {
        match self {
            Day::Sunday => 'U',
            Day::Monday => 'M',
            Day::Tuesday => 'T',
            Day::Wednesday => 'W',
            Day::Thursday => 'H',
            Day::Friday => 'F',
            Day::Saturday => 'S',
        }
    }

    /// Inverse of [`Day::code`]. Anything else, including lowercase letters
    /// and the `A` arranged sentinel, is `None`.
    pub fn from_code(code: char) -> Option<Day> {
        match code {
            'U' => Some(Day::Sunday),
            'M' => Some(Day::Monday),
            'T' => Some(Day::Tuesday),
            'W' => Some(Day::Wednesday),
            'H' => Some(Day::Thursday),
            'F' => Some(Day::Friday),
            'S' => Some(Day::Saturday),
            _ => None,
        }
    }
}

/// A fixed weekly meeting: one or more distinct days and a start/end time
/// with `start <= end`.
///
/// Fields are private and every way in, [`WeeklyMeeting::new`] and the
/// `Deserialize` impl alike, runs the same validation, so a value that
/// exists is well-formed. Day order follows the input string (record files
/// echo the days back in the order they were written).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeeklyMeeting")]
pub struct WeeklyMeeting {
    days: Vec<Day>,
    start: NaiveTime,
    end: NaiveTime,
}

/// Unvalidated field mirror; deserialization converts through
/// [`WeeklyMeeting::from_parts`] so serde input cannot bypass the
/// constructor checks.
#[derive(Deserialize)]
struct RawWeeklyMeeting {
    days: Vec<Day>,
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawWeeklyMeeting> for WeeklyMeeting {
    type Error = ScheduleError;

    fn try_from(raw: RawWeeklyMeeting) -> Result<WeeklyMeeting> {
        WeeklyMeeting::from_parts(raw.days, raw.start, raw.end)
    }
}

impl WeeklyMeeting {
    /// Validate a raw day-string and two military times.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidMeeting`] when the day-string is
    /// empty, contains an unknown letter, or repeats a day; when either time
    /// has an hour outside 0-23 or a minute outside 0-59; or when the end
    /// time precedes the start time.
    pub fn new(days: &str, start: u16, end: u16) -> Result<WeeklyMeeting> {
        let mut parsed = Vec::with_capacity(days.len());
        for code in days.chars() {
            parsed.push(Day::from_code(code).ok_or(ScheduleError::InvalidMeeting)?);
        }
        WeeklyMeeting::from_parts(parsed, time_from_military(start)?, time_from_military(end)?)
    }

    /// Validate already-parsed fields. Shared by [`WeeklyMeeting::new`] and
    /// deserialization.
    fn from_parts(days: Vec<Day>, start: NaiveTime, end: NaiveTime) -> Result<WeeklyMeeting> {
        if days.is_empty() {
            return Err(ScheduleError::InvalidMeeting);
        }
        for (i, day) in days.iter().enumerate() {
            if days[..i].contains(day) {
                return Err(ScheduleError::InvalidMeeting);
            }
        }
        // Meetings are minute-granular; times carrying seconds are not
        // representable as military integers.
        if start.second() != 0 || end.second() != 0 {
            return Err(ScheduleError::InvalidMeeting);
        }
        if end < start {
            return Err(ScheduleError::InvalidMeeting);
        }

        Ok(WeeklyMeeting { days, start, end })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Start time as a military integer (`1330` for 1:30 PM).
    pub fn start_military(&self) -> u16 {
        to_military(self.start)
    }

    /// End time as a military integer.
    pub fn end_military(&self) -> u16 {
        to_military(self.end)
    }

    /// The day letters concatenated in input order, e.g. `"MW"`.
    pub fn day_codes(&self) -> String {
        self.days.iter().map(|d| d.code()).collect()
    }
}

/// When and whether an activity meets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingPattern {
    /// No fixed meeting time (courses only).
    Arranged,
    Weekly(WeeklyMeeting),
}

impl MeetingPattern {
    /// Parse a raw day-string and military times into a pattern.
    ///
    /// The day-string `"A"` is the arranged sentinel and requires both times
    /// to be 0; any other day-string must form a valid [`WeeklyMeeting`].
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidMeeting`] for the sentinel with
    /// non-zero times, or for any input [`WeeklyMeeting::new`] rejects.
    pub fn parse(days: &str, start: u16, end: u16) -> Result<MeetingPattern> {
        if days == "A" {
            if start != 0 || end != 0 {
                return Err(ScheduleError::InvalidMeeting);
            }
            return Ok(MeetingPattern::Arranged);
        }
        Ok(MeetingPattern::Weekly(WeeklyMeeting::new(days, start, end)?))
    }

    pub fn is_arranged(&self) -> bool {
        matches!(self, MeetingPattern::Arranged)
    }

    /// The weekly meeting, or `None` for arranged patterns.
    pub fn weekly(&self) -> Option<&WeeklyMeeting> {
        match self {
            MeetingPattern::Arranged => None,
            MeetingPattern::Weekly(meeting) => Some(meeting),
        }
    }

    /// Human-readable summary: `"Arranged"` or e.g. `"MW 1:30PM-2:45PM"`.
    pub fn summary(&self) -> String {
        match self {
            MeetingPattern::Arranged => "Arranged".to_string(),
            MeetingPattern::Weekly(meeting) => format!(
                "{} {}-{}",
                meeting.day_codes(),
                twelve_hour(meeting.start),
                twelve_hour(meeting.end)
            ),
        }
    }
}

fn time_from_military(time: u16) -> Result<NaiveTime> {
    let hour = u32::from(time / 100);
    let minute = u32::from(time % 100);
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ScheduleError::InvalidMeeting)
}

fn to_military(time: NaiveTime) -> u16 {
    (time.hour() * 100 + time.minute()) as u16
}

/// 12-hour clock without a leading zero: `1:30PM`, `12:00AM` for midnight.
fn twelve_hour(time: NaiveTime) -> String {
    time.format("%-I:%M%p").to_string()
}
