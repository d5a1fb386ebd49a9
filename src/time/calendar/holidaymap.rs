use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::NaiveDate;
use serde::Serialize;

/// Immutable, date-ordered mapping from observed date to holiday label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct HolidayMap {
    entries: BTreeMap<NaiveDate, String>
}

impl HolidayMap {
    pub fn get(&self, d: &NaiveDate) -> Option<&str> {
        self.entries.get(d).map(String::as_str)
    }

    pub fn contains(&self, d: &NaiveDate) -> bool {
        self.entries.contains_key(d)
    }

    /// Observed date(s) carrying `label`.
    pub fn dates_of(&self, label: &str) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .filter(|(_, l)| l.as_str() == label)
            .map(|(d, _)| *d)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (&'a NaiveDate, &'a String);
    type IntoIter = btree_map::Iter<'a, NaiveDate, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Collects entries while rules are applied; a later entry on the same date replaces the earlier one.
#[derive(Default)]
pub struct HolidayMapBuilder {
    entries: BTreeMap<NaiveDate, String>
}

impl HolidayMapBuilder {
    pub fn new() -> HolidayMapBuilder {
        HolidayMapBuilder::default()
    }

    pub fn insert(&mut self, d: NaiveDate, label: &str) -> &mut HolidayMapBuilder {
        if let Some(previous) = self.entries.insert(d, label.to_owned()) {
            tracing::debug!(date = %d, replaced = %previous, by = label, "holiday collision");
        }
        self
    }

    pub fn build(self) -> HolidayMap {
        HolidayMap { entries: self.entries }
    }
}
