use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{calendar::normalize_day, cost::CostEntry};

/// One ISO week of spending: lowercase day name to the entries booked that day.
/// Days keep the order in which they were first booked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekRecord {
    days: IndexMap<String, Vec<CostEntry>>,
}

impl WeekRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: &str) -> Option<&[CostEntry]> {
        self.days.get(&normalize_day(day)).map(Vec::as_slice)
    }

    pub fn days(&self) -> impl Iterator<Item = (&str, &[CostEntry])> {
        self.days
            .iter()
            .map(|(day, entries)| (day.as_str(), entries.as_slice()))
    }

    /// Unrounded sum of every entry in the week.
    pub fn total(&self) -> f64 {
        self.days.values().flatten().map(|entry| entry.cost).sum()
    }

    fn push(&mut self, day: &str, entry: CostEntry) {
        self.days.entry(normalize_day(day)).or_default().push(entry);
    }
}

/// Week identifier to [`WeekRecord`]. Serialises to the plain nested JSON document
/// `{ "<week>": { "<day>": [ { "name", "cost" } ] } }`, keys in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    weeks: IndexMap<String, WeekRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week(&self, week: &str) -> Option<&WeekRecord> {
        self.weeks.get(week)
    }

    pub fn weeks(&self) -> impl Iterator<Item = (&str, &WeekRecord)> {
        self.weeks.iter().map(|(week, record)| (week.as_str(), record))
    }

    /// Unrounded weekly sum; an absent week totals zero.
    pub fn week_total(&self, week: &str) -> f64 {
        self.week(week).map(WeekRecord::total).unwrap_or(0.0)
    }

    /// Unrounded daily sum; an absent week or day totals zero.
    pub fn day_total(&self, week: &str, day: &str) -> f64 {
        self.week(week)
            .and_then(|record| record.day(day))
            .map(|entries| entries.iter().map(|entry| entry.cost).sum())
            .unwrap_or(0.0)
    }

    /// Appends `entry` under `week`/`day`, creating both keys on first use.
    pub fn append(&mut self, week: &str, day: &str, entry: CostEntry) {
        self.weeks.entry(week.to_string()).or_default().push(day, entry);
    }

    pub fn entry_count(&self) -> usize {
        self.weeks
            .values()
            .flat_map(|record| record.days.values())
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_week_and_day_lazily() {
        let mut ledger = Ledger::new();
        assert!(ledger.week("9").is_none());

        ledger.append("9", "Wednesday", CostEntry::new("Coffee", 4.5));

        let week = ledger.week("9").expect("week created");
        let entries = week.day("wednesday").expect("day created");
        assert_eq!(entries, &[CostEntry::new("Coffee", 4.5)]);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append("9", "monday", CostEntry::new("Lunch", 12.0));
        ledger.append("9", "monday", CostEntry::new("Bus", 2.4));
        ledger.append("9", "monday", CostEntry::new("Apples", 1.1));

        let names: Vec<&str> = ledger
            .week("9")
            .and_then(|week| week.day("monday"))
            .unwrap()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["Lunch", "Bus", "Apples"]);
        assert_eq!(ledger.entry_count(), 3);
    }

    #[test]
    fn totals_treat_absence_as_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.week_total("12"), 0.0);
        assert_eq!(ledger.day_total("12", "friday"), 0.0);
    }

    #[test]
    fn serializes_as_plain_nested_maps() {
        let mut ledger = Ledger::new();
        ledger.append("9", "friday", CostEntry::new("Coffee", 4.0));

        let value = serde_json::to_value(&ledger).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({ "9": { "friday": [ { "name": "Coffee", "cost": 4.0 } ] } })
        );
    }

    #[test]
    fn keys_keep_document_order() {
        let raw = r#"{"9": {"monday": [], "friday": []}, "10": {}}"#;
        let mut ledger: Ledger = serde_json::from_str(raw).expect("parse ledger");
        ledger.append("9", "tuesday", CostEntry::new("Tea", 2.0));

        let weeks: Vec<&str> = ledger.weeks().map(|(week, _)| week).collect();
        assert_eq!(weeks, ["9", "10"]);
        let days: Vec<&str> = ledger.week("9").unwrap().days().map(|(day, _)| day).collect();
        assert_eq!(days, ["monday", "friday", "tuesday"]);
        assert_eq!(
            serde_json::to_string(&ledger).unwrap(),
            r#"{"9":{"monday":[],"friday":[],"tuesday":[{"name":"Tea","cost":2.0}]},"10":{}}"#
        );
    }

    #[test]
    fn deserializes_integer_costs() {
        let raw = r#"{"9": {"monday": [{"name": "Lunch", "cost": 12}]}}"#;
        let ledger: Ledger = serde_json::from_str(raw).expect("parse ledger");
        assert_eq!(ledger.day_total("9", "monday"), 12.0);
    }
}
