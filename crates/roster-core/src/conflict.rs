//! Meeting-time overlap test shared by every activity variant.
//!
//! A single boolean predicate; the scheduler owns the user-facing conflict
//! messages. Unlike interval overlap in most calendar code, touching
//! endpoints DO collide here: a class ending at 14:45 conflicts with one
//! starting at 14:45, because back-to-back meetings in different rooms are
//! not walkable.

use crate::meeting::MeetingPattern;

/// True when two meeting patterns collide.
///
/// Arranged patterns never collide with anything. Weekly patterns collide
/// iff they share at least one day and the closed intervals
/// `[a.start, a.end]` and `[b.start, b.end]` intersect, endpoints included.
///
/// Symmetric by construction: `overlaps(a, b) == overlaps(b, a)`.
pub fn overlaps(a: &MeetingPattern, b: &MeetingPattern) -> bool {
    let (Some(a), Some(b)) = (a.weekly(), b.weekly()) else {
        return false;
    };

    let shared_day = a.days().iter().any(|day| b.days().contains(day));

    // Closed-interval intersection: NOT (a ends before b starts OR vice versa).
    shared_day && a.start() <= b.end() && b.start() <= a.end()
}
