//! The scheduler -- owns the course catalog and the personal schedule, and
//! mediates every mutation through the duplicate and conflict checks.
//!
//! Record I/O lives behind the [`CatalogSource`] and [`ScheduleSink`] traits
//! so the model never touches the filesystem directly; `roster-records`
//! provides the file-backed implementations.

use std::io;

use crate::activity::Activity;
use crate::course::Course;
use crate::error::{Result, ScheduleError};
use crate::event::Event;

/// Supplies catalog courses, typically by parsing a record file.
///
/// Implementations skip malformed records themselves; an `Err` means the
/// source as a whole could not be read.
pub trait CatalogSource {
    fn read_courses(&mut self) -> io::Result<Vec<Course>>;
}

/// Consumes a validated, ordered activity list, typically writing a record
/// file.
pub trait ScheduleSink {
    fn write_activities(&mut self, activities: &[Activity]) -> io::Result<()>;
}

const DEFAULT_TITLE: &str = "My Schedule";

/// Catalog + schedule manager.
///
/// The catalog is read-only between loads; the schedule is the only mutable
/// collection, and every path that appends to it validates first, so the
/// schedule is never left partially updated.
#[derive(Debug)]
pub struct Scheduler {
    catalog: Vec<Course>,
    schedule: Vec<Activity>,
    title: String,
}

impl Default for Scheduler {
    fn default() -> Scheduler {
        Scheduler::new()
    }
}

impl Scheduler {
    /// An empty scheduler titled "My Schedule".
    pub fn new() -> Scheduler {
        Scheduler {
            catalog: Vec::new(),
            schedule: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// An empty scheduler with the catalog loaded from `source`.
    ///
    /// # Errors
    /// [`ScheduleError::CatalogUnreadable`] when the source cannot be read.
    pub fn from_source(source: &mut impl CatalogSource) -> Result<Scheduler> {
        let mut scheduler = Scheduler::new();
        scheduler.load_catalog(source)?;
        Ok(scheduler)
    }

    /// Replace the catalog with the courses read from `source`.
    ///
    /// Duplicate (name, section) pairs are dropped, first occurrence wins.
    /// The schedule is untouched, as is the catalog when the read fails.
    ///
    /// # Errors
    /// [`ScheduleError::CatalogUnreadable`] when the source cannot be read.
    pub fn load_catalog(&mut self, source: &mut impl CatalogSource) -> Result<()> {
        let courses = source
            .read_courses()
            .map_err(|_| ScheduleError::CatalogUnreadable)?;

        self.catalog.clear();
        for course in courses {
            if self
                .find_in_catalog(course.name(), course.section())
                .is_none()
            {
                self.catalog.push(course);
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn schedule(&self) -> &[Activity] {
        &self.schedule
    }

    /// Linear catalog lookup by (name, section). A miss is a normal outcome,
    /// not an error.
    pub fn find_in_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|course| course.name() == name && course.section() == section)
    }

    /// Look up a catalog course and append it to the schedule.
    ///
    /// Returns `Ok(false)` when no such course exists in the catalog. The
    /// candidate is checked against the schedule in order; for each entry
    /// the duplicate check runs before the conflict check, so re-adding an
    /// enrolled course reports the enrollment duplicate rather than the
    /// self-conflict its identical meeting times would produce.
    ///
    /// # Errors
    /// [`ScheduleError::DuplicateCourse`] or [`ScheduleError::CourseConflict`]
    /// for the first schedule entry that trips either check; the schedule is
    /// unchanged in both cases.
    pub fn add_course_to_schedule(&mut self, name: &str, section: &str) -> Result<bool> {
        let Some(course) = self.find_in_catalog(name, section) else {
            return Ok(false);
        };
        let candidate = Activity::Course(course.clone());

        for existing in &self.schedule {
            if existing.is_duplicate(&candidate) {
                return Err(ScheduleError::DuplicateCourse(name.to_string()));
            }
            if existing.conflicts_with(&candidate) {
                return Err(ScheduleError::CourseConflict);
            }
        }

        self.schedule.push(candidate);
        Ok(true)
    }

    /// Construct an event from raw fields and append it to the schedule.
    ///
    /// Field validation happens first, before the schedule is consulted.
    /// Then duplicate detection runs as its own full pass before conflict
    /// detection begins: a title duplicate is reported even when an earlier
    /// entry would also conflict.
    ///
    /// # Errors
    /// Whatever [`Event::new`] rejects, then
    /// [`ScheduleError::DuplicateEvent`], then
    /// [`ScheduleError::EventConflict`]. The schedule is unchanged on error.
    pub fn add_event_to_schedule(
        &mut self,
        title: &str,
        days: &str,
        start: u16,
        end: u16,
        details: &str,
    ) -> Result<()> {
        let candidate = Activity::Event(Event::new(title, days, start, end, details)?);

        if self.schedule.iter().any(|a| a.is_duplicate(&candidate)) {
            return Err(ScheduleError::DuplicateEvent(title.to_string()));
        }
        if self.schedule.iter().any(|a| a.conflicts_with(&candidate)) {
            return Err(ScheduleError::EventConflict);
        }

        self.schedule.push(candidate);
        Ok(())
    }

    /// Remove the schedule entry at `idx`. Returns false when the index is
    /// out of bounds; an expected outcome of user interaction, not an error.
    pub fn remove_activity_from_schedule(&mut self, idx: usize) -> bool {
        if idx < self.schedule.len() {
            self.schedule.remove(idx);
            true
        } else {
            false
        }
    }

    /// Clear the schedule. The catalog is untouched.
    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
    }

    /// Hand the schedule to `sink` for serialization.
    ///
    /// # Errors
    /// [`ScheduleError::ExportFailed`] on any sink failure.
    pub fn export_schedule(&self, sink: &mut impl ScheduleSink) -> Result<()> {
        sink.write_activities(&self.schedule)
            .map_err(|_| ScheduleError::ExportFailed)
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    /// # Errors
    /// [`ScheduleError::InvalidTitle`] for an empty title.
    pub fn set_schedule_title(&mut self, title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        self.title = title.to_string();
        Ok(())
    }

    /// Short display rows for every catalog course.
    pub fn course_catalog(&self) -> Vec<[String; 4]> {
        self.catalog
            .iter()
            .map(crate::activity::course_short_row)
            .collect()
    }

    /// Short display rows for the schedule, in schedule order.
    pub fn scheduled_activities(&self) -> Vec<[String; 4]> {
        self.schedule.iter().map(Activity::short_display_row).collect()
    }

    /// Long display rows for the schedule, in schedule order.
    pub fn full_scheduled_activities(&self) -> Vec<[String; 7]> {
        self.schedule.iter().map(Activity::long_display_row).collect()
    }
}
