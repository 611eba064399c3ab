//! National age-group record table
//!
//! A fixed, read-only nested mapping gender → age band → course → event →
//! record time string. The table is built once on first use and never mutated.

use crate::core::error::CompareError;
use crate::core::models::Selection;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One leaf of the record table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordEntry {
    /// Gender key
    pub gender: &'static str,
    /// Age band key
    pub age_band: &'static str,
    /// Course key
    pub course: &'static str,
    /// Event key
    pub event: &'static str,
    /// Record time as written in the source table
    pub time: &'static str,
}

const fn entry(
    gender: &'static str,
    age_band: &'static str,
    course: &'static str,
    event: &'static str,
    time: &'static str,
) -> RecordEntry {
    RecordEntry {
        gender,
        age_band,
        course,
        event,
        time,
    }
}

const NATIONAL_RECORDS: &[RecordEntry] = &[
    entry("male", "18-24", "long", "50m freestyle", "22.68"),
    entry("male", "18-24", "long", "100m freestyle", "50.03"),
    entry("male", "18-24", "long", "200m freestyle", "1:49.55"),
    entry("male", "18-24", "long", "400m freestyle", "3:54.31"),
    entry("male", "18-24", "long", "800m freestyle", "8:12.53"),
    entry("male", "18-24", "long", "1500m freestyle", "15:44.97"),
    entry("male", "18-24", "short", "50m freestyle", "22.24"),
    entry("male", "18-24", "short", "100m freestyle", "48.99"),
    entry("male", "18-24", "short", "200m freestyle", "1:47.57"),
    entry("male", "18-24", "short", "400m freestyle", "3:50.33"),
    entry("male", "18-24", "short", "800m freestyle", "8:04.48"),
    entry("male", "18-24", "short", "1500m freestyle", "15:28.02"),
    entry("male", "25-29", "long", "50m freestyle", "22.89"),
    entry("male", "25-29", "long", "100m freestyle", "50.53"),
    entry("male", "25-29", "long", "200m freestyle", "1:51.04"),
    entry("male", "25-29", "long", "400m freestyle", "3:57.85"),
    entry("male", "25-29", "long", "800m freestyle", "8:19.78"),
    entry("male", "25-29", "long", "1500m freestyle", "15:59.87"),
    entry("male", "25-29", "short", "50m freestyle", "22.46"),
    entry("male", "25-29", "short", "100m freestyle", "49.48"),
    entry("male", "25-29", "short", "200m freestyle", "1:49.05"),
    entry("male", "25-29", "short", "400m freestyle", "3:53.84"),
    entry("male", "25-29", "short", "800m freestyle", "8:11.53"),
    entry("male", "25-29", "short", "1500m freestyle", "15:43.58"),
    entry("female", "18-24", "long", "50m freestyle", "25.27"),
    entry("female", "18-24", "long", "100m freestyle", "55.03"),
    entry("female", "18-24", "long", "200m freestyle", "2:00.55"),
    entry("female", "18-24", "long", "400m freestyle", "4:15.31"),
    entry("female", "18-24", "long", "800m freestyle", "8:45.53"),
    entry("female", "18-24", "long", "1500m freestyle", "16:44.97"),
    entry("female", "18-24", "short", "50m freestyle", "24.74"),
    entry("female", "18-24", "short", "100m freestyle", "53.99"),
    entry("female", "18-24", "short", "200m freestyle", "1:58.57"),
    entry("female", "18-24", "short", "400m freestyle", "4:11.33"),
    entry("female", "18-24", "short", "800m freestyle", "8:37.48"),
    entry("female", "18-24", "short", "1500m freestyle", "16:28.02"),
    entry("female", "25-29", "long", "50m freestyle", "25.52"),
    entry("female", "25-29", "long", "100m freestyle", "55.58"),
    entry("female", "25-29", "long", "200m freestyle", "2:02.06"),
    entry("female", "25-29", "long", "400m freestyle", "4:18.96"),
    entry("female", "25-29", "long", "800m freestyle", "8:52.99"),
    entry("female", "25-29", "long", "1500m freestyle", "17:00.42"),
    entry("female", "25-29", "short", "50m freestyle", "24.99"),
    entry("female", "25-29", "short", "100m freestyle", "54.53"),
    entry("female", "25-29", "short", "200m freestyle", "2:00.06"),
    entry("female", "25-29", "short", "400m freestyle", "4:14.95"),
    entry("female", "25-29", "short", "800m freestyle", "8:44.91"),
    entry("female", "25-29", "short", "1500m freestyle", "16:43.41"),
];

type Events = HashMap<&'static str, &'static str>;
type Courses = HashMap<&'static str, Events>;
type AgeBands = HashMap<&'static str, Courses>;

static NATIONAL: LazyLock<RecordTable> =
    LazyLock::new(|| RecordTable::from_entries(NATIONAL_RECORDS));

/// Nested record lookup plus the entries in their source order
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    entries: Vec<RecordEntry>,
    by_gender: HashMap<&'static str, AgeBands>,
}

impl RecordTable {
    /// The built-in national age-group records
    #[must_use]
    pub fn national() -> &'static Self {
        &NATIONAL
    }

    /// Build a table from flat entries; a later duplicate key replaces the earlier time
    #[must_use]
    pub fn from_entries(entries: &[RecordEntry]) -> Self {
        let mut table = Self::default();
        for e in entries {
            let previous = table
                .by_gender
                .entry(e.gender)
                .or_default()
                .entry(e.age_band)
                .or_default()
                .entry(e.course)
                .or_default()
                .insert(e.event, e.time);

            match previous {
                Some(_) => {
                    if let Some(existing) = table.entries.iter_mut().find(|x| {
                        (x.gender, x.age_band, x.course, x.event)
                            == (e.gender, e.age_band, e.course, e.event)
                    }) {
                        *existing = *e;
                    }
                }
                None => table.entries.push(*e),
            }
        }
        table
    }

    /// Resolve a selection to its record time string
    ///
    /// # Errors
    /// Returns [`CompareError::RecordNotFound`] if any of the four levels is absent.
    pub fn lookup(&self, selection: &Selection) -> Result<&'static str, CompareError> {
        self.by_gender
            .get(selection.gender.as_str())
            .and_then(|ages| ages.get(selection.age_band.as_str()))
            .and_then(|courses| courses.get(selection.course.as_str()))
            .and_then(|events| events.get(selection.event.as_str()))
            .copied()
            .ok_or_else(|| CompareError::RecordNotFound {
                gender: selection.gender.clone(),
                age_band: selection.age_band.clone(),
                course: selection.course.clone(),
                event: selection.event.clone(),
            })
    }

    /// All leaves in source order
    pub fn iter(&self) -> impl Iterator<Item = &RecordEntry> {
        self.entries.iter()
    }

    /// Number of leaves
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no leaves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct gender keys in source order
    #[must_use]
    pub fn genders(&self) -> Vec<&'static str> {
        self.distinct(|e| e.gender)
    }

    /// Distinct age band keys in source order
    #[must_use]
    pub fn age_bands(&self) -> Vec<&'static str> {
        self.distinct(|e| e.age_band)
    }

    /// Distinct course keys in source order
    #[must_use]
    pub fn courses(&self) -> Vec<&'static str> {
        self.distinct(|e| e.course)
    }

    /// Distinct event keys in source order
    #[must_use]
    pub fn events(&self) -> Vec<&'static str> {
        self.distinct(|e| e.event)
    }

    fn distinct(&self, key: impl Fn(&RecordEntry) -> &'static str) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for e in &self.entries {
            let k = key(e);
            if !seen.contains(&k) {
                seen.push(k);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a RecordEntry;
    type IntoIter = std::slice::Iter<'a, RecordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
