// Journaling streak engine.
//
// Works on UTC calendar days: every entry timestamp is truncated to its
// UTC date, duplicates on the same day collapse, and a streak is a run of
// consecutive days with at least one entry. A streak stays current for the
// whole day after the last entry (write today or the streak survives until
// tomorrow), so it only breaks after two consecutive empty days.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::entry::EntryRef;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_entry_date: Option<NaiveDate>,
    pub streak_dates: Vec<NaiveDate>,
}

/// Calculate streak statistics from journal entries.
///
/// `now` is passed in rather than read from the clock so results are
/// reproducible; callers pass `Utc::now()`.
pub fn calculate_streaks(entries: &[EntryRef], now: DateTime<Utc>) -> StreakData {
    if entries.is_empty() {
        return StreakData::default();
    }

    let days = unique_entry_days(entries);
    let (current_streak, streak_dates) = compute_current_streak(&days, now.date_naive());

    StreakData {
        current_streak,
        longest_streak: compute_longest_streak(&days),
        last_entry_date: days.iter().next_back().copied(),
        streak_dates,
    }
}

/// Check whether the streak is still alive: an entry today or yesterday.
pub fn is_streak_active(entries: &[EntryRef], now: DateTime<Utc>) -> bool {
    let today = now.date_naive();
    let yesterday = today - Duration::days(1);

    entries.iter().any(|entry| {
        let day = entry.created_at.date_naive();
        day == today || day == yesterday
    })
}

/// Status line shown next to the streak counter.
pub fn streak_status_message(streaks: &StreakData, today: NaiveDate) -> String {
    if streaks.current_streak == 0 {
        return "Start your journaling streak today! ✨".to_string();
    }

    let has_entry_today = streaks.last_entry_date == Some(today);

    match (streaks.current_streak, has_entry_today) {
        (1, true) => "Great start! Keep it going tomorrow! 🔥".to_string(),
        (1, false) => "1 day streak - write today to continue! 💪".to_string(),
        (count, true) => format!("Amazing! {} day streak! 🔥", count),
        (count, false) => format!("{} day streak - write today to continue! 🔥", count),
    }
}

fn unique_entry_days(entries: &[EntryRef]) -> BTreeSet<NaiveDate> {
    entries
        .iter()
        .map(|entry| entry.created_at.date_naive())
        .collect()
}

/// Walk backwards from today (or yesterday, if today has no entry yet)
/// counting consecutive days. Returns the length and the matched days
/// oldest first.
fn compute_current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> (u32, Vec<NaiveDate>) {
    let anchor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak_dates = Vec::new();
    let mut cursor = anchor;
    while days.contains(&cursor) {
        streak_dates.push(cursor);
        cursor -= Duration::days(1);
    }

    streak_dates.reverse();
    (streak_dates.len() as u32, streak_dates)
}

/// Longest run of consecutive days anywhere in the history. Single
/// ascending scan with a running count.
fn compute_longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prev) if (day - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}
