//! Tests for meeting-pattern validation and summary formatting.

use roster_core::{Day, MeetingPattern, ScheduleError, WeeklyMeeting};

#[test]
fn valid_weekly_meeting_parses() {
    let meeting = WeeklyMeeting::new("MW", 1330, 1445).unwrap();

    assert_eq!(meeting.days(), &[Day::Monday, Day::Wednesday]);
    assert_eq!(meeting.start_military(), 1330);
    assert_eq!(meeting.end_military(), 1445);
    assert_eq!(meeting.day_codes(), "MW");
}

#[test]
fn day_order_follows_input() {
    let meeting = WeeklyMeeting::new("WM", 900, 1000).unwrap();
    assert_eq!(meeting.day_codes(), "WM", "days are echoed in input order");
}

#[test]
fn all_seven_day_codes_accepted() {
    let meeting = WeeklyMeeting::new("UMTWHFS", 800, 900).unwrap();
    assert_eq!(meeting.days().len(), 7);
}

#[test]
fn empty_day_string_rejected() {
    assert_eq!(
        WeeklyMeeting::new("", 800, 900),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn unknown_day_letter_rejected() {
    assert_eq!(
        WeeklyMeeting::new("MX", 800, 900),
        Err(ScheduleError::InvalidMeeting)
    );
    // Lowercase is not a valid code either.
    assert_eq!(
        WeeklyMeeting::new("mw", 800, 900),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn repeated_day_rejected() {
    assert_eq!(
        WeeklyMeeting::new("MM", 800, 900),
        Err(ScheduleError::InvalidMeeting)
    );
    // Repeat that is not adjacent.
    assert_eq!(
        WeeklyMeeting::new("MWM", 800, 900),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn out_of_range_times_rejected() {
    // Hour 24.
    assert_eq!(
        WeeklyMeeting::new("M", 2400, 2430),
        Err(ScheduleError::InvalidMeeting)
    );
    // Minute 60.
    assert_eq!(
        WeeklyMeeting::new("M", 1360, 1400),
        Err(ScheduleError::InvalidMeeting)
    );
    assert_eq!(
        WeeklyMeeting::new("M", 1300, 1365),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn end_before_start_rejected() {
    assert_eq!(
        WeeklyMeeting::new("M", 1445, 1330),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn zero_length_meeting_allowed() {
    let meeting = WeeklyMeeting::new("M", 1330, 1330).unwrap();
    assert_eq!(meeting.start(), meeting.end());
}

#[test]
fn arranged_sentinel_parses_with_zero_times() {
    let pattern = MeetingPattern::parse("A", 0, 0).unwrap();
    assert!(pattern.is_arranged());
    assert!(pattern.weekly().is_none());
}

#[test]
fn arranged_sentinel_with_times_rejected() {
    assert_eq!(
        MeetingPattern::parse("A", 1330, 1445),
        Err(ScheduleError::InvalidMeeting)
    );
    assert_eq!(
        MeetingPattern::parse("A", 0, 1),
        Err(ScheduleError::InvalidMeeting)
    );
}

#[test]
fn weekly_summary_uses_twelve_hour_clock() {
    let pattern = MeetingPattern::parse("MW", 1330, 1445).unwrap();
    assert_eq!(pattern.summary(), "MW 1:30PM-2:45PM");
}

#[test]
fn morning_summary_has_no_leading_zero_hour() {
    let pattern = MeetingPattern::parse("TH", 800, 915).unwrap();
    assert_eq!(pattern.summary(), "TH 8:00AM-9:15AM");
}

#[test]
fn midnight_and_noon_format_as_twelve() {
    // A real midnight-to-noon meeting is NOT arranged.
    let pattern = MeetingPattern::parse("M", 0, 1200).unwrap();
    assert!(!pattern.is_arranged());
    assert_eq!(pattern.summary(), "M 12:00AM-12:00PM");
}

#[test]
fn arranged_summary() {
    assert_eq!(MeetingPattern::Arranged.summary(), "Arranged");
}

#[test]
fn day_codes_round_trip() {
    for code in "UMTWHFS".chars() {
        let day = Day::from_code(code).unwrap();
        assert_eq!(day.code(), code);
    }
    assert_eq!(Day::from_code('A'), None);
    assert_eq!(Day::from_code('u'), None);
}
