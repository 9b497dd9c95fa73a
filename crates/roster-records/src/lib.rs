//! # roster-records
//!
//! Comma-delimited record files for [`roster_core`]: the catalog reader and
//! the schedule export writer, plus path-holding adapters implementing the
//! core's [`CatalogSource`](roster_core::CatalogSource) and
//! [`ScheduleSink`](roster_core::ScheduleSink) collaborator traits.
//!
//! ```rust,no_run
//! use roster_core::Scheduler;
//! use roster_records::{CourseRecordFile, ScheduleRecordFile};
//!
//! let mut catalog = CourseRecordFile::new("course_records.txt");
//! let mut scheduler = Scheduler::from_source(&mut catalog).unwrap();
//!
//! scheduler.add_course_to_schedule("CSC216", "001").unwrap();
//! scheduler
//!     .export_schedule(&mut ScheduleRecordFile::new("my_schedule.txt"))
//!     .unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`reader`] — catalog file parsing (malformed lines skipped, first-wins dedup)
//! - [`writer`] — schedule export, one line per activity

pub mod reader;
pub mod writer;

pub use reader::{read_course_records, CourseRecordFile};
pub use writer::{activity_record, write_activity_records, ScheduleRecordFile};
