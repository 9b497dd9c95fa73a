//! Tests for event field validation.

use roster_core::{Event, ScheduleError};

#[test]
fn valid_event_exposes_fields() {
    let event = Event::new("Exercise", "MWF", 800, 900, "Morning cardio.").unwrap();

    assert_eq!(event.title(), "Exercise");
    assert_eq!(event.details(), "Morning cardio.");
    assert_eq!(event.meeting().summary(), "MWF 8:00AM-9:00AM");
}

#[test]
fn details_may_be_empty() {
    let event = Event::new("Exercise", "MWF", 800, 900, "").unwrap();
    assert_eq!(event.details(), "");
}

#[test]
fn empty_title_rejected() {
    assert_eq!(
        Event::new("", "MWF", 800, 900, "details"),
        Err(ScheduleError::InvalidTitle)
    );
    assert_eq!(
        Event::new("  ", "MWF", 800, 900, "details"),
        Err(ScheduleError::InvalidTitle)
    );
}

#[test]
fn arranged_sentinel_rejected_for_events() {
    // Events always meet at a fixed time; "A" is not a day code here.
    assert_eq!(
        Event::new("Exercise", "A", 0, 0, ""),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn bad_meeting_times_rejected() {
    assert_eq!(
        Event::new("Exercise", "MWF", 900, 800, ""),
        Err(ScheduleError::InvalidMeeting)
    );
    assert_eq!(
        Event::new("Exercise", "MWF", 2500, 2530, ""),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn event_is_never_arranged() {
    let event = Event::new("Exercise", "U", 0, 0, "").unwrap();
    // Midnight start is a real time, not the arranged mode.
    assert!(!event.meeting().is_arranged());
}
