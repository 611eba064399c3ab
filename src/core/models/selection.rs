//! Selection model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound key into the record table: gender, age band, course, event.
///
/// Keys are normalized on construction (trimmed, ASCII lower-cased, inner
/// whitespace collapsed). An event given as a bare distance such as `100` or
/// `100m` is expanded to `100m freestyle`. Nothing else is validated here; a
/// combination missing from the table is a lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Gender key (e.g., "male", "female")
    pub gender: String,

    /// Age band key (e.g., "18-24")
    pub age_band: String,

    /// Course key: "long" (50m pool) or "short" (25m pool)
    pub course: String,

    /// Event key (e.g., "100m freestyle")
    pub event: String,
}

impl Selection {
    /// Create a selection from raw user-facing values
    #[must_use]
    pub fn new(gender: &str, age_band: &str, course: &str, event: &str) -> Self {
        Self {
            gender: normalize_key(gender),
            age_band: normalize_key(age_band),
            course: normalize_key(course),
            event: normalize_event(event),
        }
    }

    /// File-name friendly slug, e.g. `male_18_24_long_100m_freestyle`
    #[must_use]
    pub fn slug(&self) -> String {
        let joined = format!(
            "{}_{}_{}_{}",
            self.gender, self.age_band, self.course, self.event
        );
        joined
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} course {}",
            self.gender, self.age_band, self.course, self.event
        )
    }
}

fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn normalize_event(raw: &str) -> String {
    let key = normalize_key(raw);
    let distance = key.strip_suffix('m').unwrap_or(&key);
    if !distance.is_empty() && distance.bytes().all(|b| b.is_ascii_digit()) {
        format!("{distance}m freestyle")
    } else {
        key
    }
}
