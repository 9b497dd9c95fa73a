//! Schedule export -- comma-delimited activity files.
//!
//! One activity per line, each variant in its own field order:
//!
//! - Course: `name,title,section,credits,instructor,A` or
//!   `name,title,section,credits,instructor,DAYS,start,end`
//! - Event: `title,DAYS,start,end,details`
//!
//! Military times print as plain integers (`800`, not `0800`), matching
//! what the catalog reader accepts.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use roster_core::{Activity, Course, Event, MeetingPattern, ScheduleSink};

/// A schedule export file; implements [`ScheduleSink`] for
/// [`roster_core::Scheduler::export_schedule`].
#[derive(Debug, Clone)]
pub struct ScheduleRecordFile {
    path: PathBuf,
}

impl ScheduleRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> ScheduleRecordFile {
        ScheduleRecordFile { path: path.into() }
    }
}

impl ScheduleSink for ScheduleRecordFile {
    fn write_activities(&mut self, activities: &[Activity]) -> io::Result<()> {
        write_activity_records(&self.path, activities)
    }
}

/// Write one record line per activity to `path`, creating or truncating it.
pub fn write_activity_records(path: &Path, activities: &[Activity]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for activity in activities {
        writeln!(file, "{}", activity_record(activity))?;
    }
    file.flush()
}

/// The record line for a single activity, without the trailing newline.
pub fn activity_record(activity: &Activity) -> String {
    match activity {
        Activity::Course(course) => course_record(course),
        Activity::Event(event) => event_record(event),
    }
}

fn course_record(course: &Course) -> String {
    let head = format!(
        "{},{},{},{},{}",
        course.name(),
        course.title(),
        course.section(),
        course.credits(),
        course.instructor_id()
    );
    match course.meeting() {
        MeetingPattern::Arranged => format!("{head},A"),
        MeetingPattern::Weekly(meeting) => format!(
            "{head},{},{},{}",
            meeting.day_codes(),
            meeting.start_military(),
            meeting.end_military()
        ),
    }
}

fn event_record(event: &Event) -> String {
    // Events always meet weekly; the arranged case cannot be constructed.
    let meeting = event
        .meeting()
        .weekly()
        .expect("events always have a weekly meeting");
    format!(
        "{},{},{},{},{}",
        event.title(),
        meeting.day_codes(),
        meeting.start_military(),
        meeting.end_military(),
        event.details()
    )
}
