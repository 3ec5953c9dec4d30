//! Journaling core for Emberlog.
//!
//! Pure data transformations over journal entries the app fetches
//! elsewhere: streak math, day grouping and formatting, mood tags, and
//! daily prompt selection. Nothing in here performs I/O or reads the
//! clock: "now" and randomness always arrive as parameters, so every
//! call is deterministic given its input.

pub mod date;
pub mod entry;
pub mod milestones;
pub mod moods;
pub mod prompts;
pub mod streaks;
pub mod user;

pub use entry::{eligible_entries, group_by_day, DayGroup, EntryRef, RawEntry};
pub use milestones::{next_milestone, MilestoneProjection, MILESTONES};
pub use moods::{mood_config, MoodConfig, MOOD_OPTIONS};
pub use prompts::{pick_weighted, DailyPrompt};
pub use streaks::{calculate_streaks, is_streak_active, streak_status_message, StreakData};
pub use user::UserProfile;
