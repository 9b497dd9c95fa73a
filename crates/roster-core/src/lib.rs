//! # roster-core
//!
//! Course catalog and personal schedule model with weekly-meeting conflict
//! detection.
//!
//! The model distinguishes catalog [`Course`]s (looked up by name and
//! section, possibly "arranged" with no fixed time) from free-form
//! [`Event`]s (always a fixed weekly time, identified by title alone). The
//! [`Scheduler`] owns both collections and refuses any addition that
//! duplicates or collides with what is already scheduled.
//!
//! ## Quick start
//!
//! ```rust
//! use roster_core::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler
//!     .add_event_to_schedule("Exercise", "MWF", 800, 900, "Morning cardio")
//!     .unwrap();
//!
//! // Same days, touching end/start times still collide.
//! let err = scheduler
//!     .add_event_to_schedule("Breakfast", "MW", 900, 930, "")
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "The event cannot be added due to a conflict.");
//! ```
//!
//! ## Modules
//!
//! - [`meeting`] — day-sets and start/end times, validated once at construction
//! - [`conflict`] — the day-intersection + interval-overlap predicate
//! - [`course`] / [`event`] — the two activity variants
//! - [`activity`] — the closed `{Course, Event}` sum type and its display rows
//! - [`scheduler`] — catalog + schedule manager and the record I/O traits
//! - [`error`] — error types

pub mod activity;
pub mod conflict;
pub mod course;
pub mod error;
pub mod event;
pub mod meeting;
pub mod scheduler;

pub use activity::Activity;
pub use conflict::overlaps;
pub use course::Course;
pub use error::ScheduleError;
pub use event::Event;
pub use meeting::{Day, MeetingPattern, WeeklyMeeting};
pub use scheduler::{CatalogSource, ScheduleSink, Scheduler};
