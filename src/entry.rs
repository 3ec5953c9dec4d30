use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entry as it arrives from the document store, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: Option<String>,
    pub created_at: Option<String>,
}

/// Minimal entry projection used by streak math and grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// Entries written on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub entries: Vec<EntryRef>,
}

/// Keep only entries with a non-empty id and a parseable RFC 3339
/// timestamp. Everything downstream assumes this filter has run.
pub fn eligible_entries(raw: &[RawEntry]) -> Vec<EntryRef> {
    raw.iter()
        .filter_map(|entry| {
            let id = entry.id.as_deref().filter(|id| !id.is_empty())?;
            let created_at = entry.created_at.as_deref()?.parse::<DateTime<Utc>>().ok()?;
            Some(EntryRef {
                id: id.to_string(),
                created_at,
            })
        })
        .collect()
}

/// Group entries by UTC calendar day, newest day first. Entries keep
/// their input order within a day.
pub fn group_by_day(entries: &[EntryRef]) -> Vec<DayGroup> {
    let mut groups: BTreeMap<NaiveDate, Vec<EntryRef>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.created_at.date_naive())
            .or_default()
            .push(entry.clone());
    }

    groups
        .into_iter()
        .rev()
        .map(|(day, entries)| DayGroup { day, entries })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: Option<&str>, created_at: Option<&str>) -> RawEntry {
        RawEntry {
            id: id.map(str::to_string),
            created_at: created_at.map(str::to_string),
        }
    }

    fn entry(id: &str, timestamp: &str) -> EntryRef {
        EntryRef {
            id: id.to_string(),
            created_at: timestamp.parse().expect("valid timestamp"),
        }
    }

    #[test]
    fn drops_entries_missing_id_or_timestamp() {
        let raw_entries = vec![
            raw(Some("a"), Some("2024-01-02T08:00:00Z")),
            raw(None, Some("2024-01-02T09:00:00Z")),
            raw(Some(""), Some("2024-01-02T10:00:00Z")),
            raw(Some("b"), None),
            raw(Some("c"), Some("not a timestamp")),
        ];

        let entries = eligible_entries(&raw_entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "a");
    }

    #[test]
    fn accepts_offset_timestamps_and_normalizes_to_utc() {
        let raw_entries = vec![raw(Some("a"), Some("2024-01-02T01:30:00+05:00"))];

        let entries = eligible_entries(&raw_entries);
        assert_eq!(entries.len(), 1);
        // 01:30 at +05:00 is still Jan 1 in UTC
        assert_eq!(
            entries[0].created_at.date_naive(),
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
        );
    }

    #[test]
    fn groups_entries_by_utc_day_newest_first() {
        let entries = vec![
            entry("a", "2024-01-01T23:59:00Z"),
            entry("b", "2024-01-03T08:00:00Z"),
            entry("c", "2024-01-03T21:00:00Z"),
            entry("d", "2024-01-02T12:00:00Z"),
        ];

        let groups = group_by_day(&entries);
        let days: Vec<String> = groups
            .iter()
            .map(|group| group.day.format("%Y-%m-%d").to_string())
            .collect();

        assert_eq!(days, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
        assert_eq!(groups[0].entries.len(), 2);
        // Input order is preserved inside a day
        assert_eq!(groups[0].entries[0].id, "b");
        assert_eq!(groups[0].entries[1].id, "c");
    }

    #[test]
    fn grouping_empty_input_yields_no_groups() {
        assert!(group_by_day(&[]).is_empty());
    }
}
