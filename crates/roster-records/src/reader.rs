//! Catalog record parsing -- comma-delimited course files.
//!
//! One course per line:
//! `name,title,section,credits,instructor,days[,start,end]` -- exactly 6
//! fields when days is the `A` arranged sentinel, exactly 8 otherwise.
//! Malformed lines are skipped, never fatal; only a file that cannot be
//! read at all is an error. Duplicate (name, section) lines keep the first
//! occurrence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use roster_core::{CatalogSource, Course};

/// A catalog record file; implements [`CatalogSource`] for
/// [`roster_core::Scheduler::load_catalog`].
#[derive(Debug, Clone)]
pub struct CourseRecordFile {
    path: PathBuf,
}

impl CourseRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> CourseRecordFile {
        CourseRecordFile { path: path.into() }
    }
}

impl CatalogSource for CourseRecordFile {
    fn read_courses(&mut self) -> io::Result<Vec<Course>> {
        read_course_records(&self.path)
    }
}

/// Read every valid course record from `path`.
///
/// # Errors
/// Only I/O errors from reading the file itself; individual bad records are
/// dropped silently.
pub fn read_course_records(path: &Path) -> io::Result<Vec<Course>> {
    let text = fs::read_to_string(path)?;

    let mut courses: Vec<Course> = Vec::new();
    for line in text.lines() {
        let Some(course) = parse_course_record(line) else {
            continue;
        };
        let duplicate = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if !duplicate {
            courses.push(course);
        }
    }
    Ok(courses)
}

/// Parse one record line, or `None` for anything malformed: wrong field
/// count, non-numeric credits or times, time fields after the `A` sentinel,
/// or field values the [`Course`] constructors reject.
fn parse_course_record(line: &str) -> Option<Course> {
    let fields: Vec<&str> = line.split(',').collect();
    match fields.as_slice() {
        [name, title, section, credits, instructor, days] => {
            // Arranged courses carry no time fields at all.
            if *days != "A" {
                return None;
            }
            let credits: u8 = credits.parse().ok()?;
            Course::arranged(name, title, section, credits, instructor).ok()
        }
        [name, title, section, credits, instructor, days, start, end] => {
            if *days == "A" {
                return None;
            }
            let credits: u8 = credits.parse().ok()?;
            let start: u16 = start.parse().ok()?;
            let end: u16 = end.parse().ok()?;
            Course::new(name, title, section, credits, instructor, days, start, end).ok()
        }
        _ => None,
    }
}
