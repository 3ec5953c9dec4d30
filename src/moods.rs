use serde::Serialize;

/// Display configuration for a mood tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodConfig {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

pub const MOOD_OPTIONS: [MoodConfig; 5] = [
    MoodConfig {
        icon: "sentiment-very-dissatisfied",
        label: "Very Sad",
        value: "very-sad",
        color: "#ef4444",
    },
    MoodConfig {
        icon: "sentiment-dissatisfied",
        label: "Sad",
        value: "sad",
        color: "#f97316",
    },
    MoodConfig {
        icon: "sentiment-neutral",
        label: "Neutral",
        value: "neutral",
        color: "#6b7280",
    },
    MoodConfig {
        icon: "sentiment-satisfied",
        label: "Happy",
        value: "happy",
        color: "#22c55e",
    },
    MoodConfig {
        icon: "sentiment-very-satisfied",
        label: "Very Happy",
        value: "very-happy",
        color: "#eab308",
    },
];

/// Look up a mood by its stored value. Unknown values fall back to
/// neutral so stale entries still render.
pub fn mood_config(value: &str) -> &'static MoodConfig {
    MOOD_OPTIONS
        .iter()
        .find(|mood| mood.value == value)
        .unwrap_or(&MOOD_OPTIONS[2]) // neutral
}
