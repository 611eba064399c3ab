//! Comparison form state and the notification seam
//!
//! The form owns the transient inputs (four selections plus the free-text
//! time) and the current comparison. Failures never touch the stored
//! comparison; they are routed to an injected [`Notifier`] instead.

use crate::core::compare::compare_with;
use crate::core::error::CompareError;
use crate::core::models::{Comparison, Selection};
use crate::core::records::RecordTable;
use std::fmt;

/// A user-visible notice raised by a failed submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A required input has not been filled in
    MissingField(&'static str),
    /// The comparison itself failed
    Failed(CompareError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Please select or enter a {field}"),
            Self::Failed(err @ CompareError::RecordNotFound { .. }) => {
                write!(f, "No record found for the selected criteria ({err})")
            }
            Self::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// Synchronous notification channel for failed submits
pub trait Notifier {
    /// Show `notice` to the user; returns once the notice has been delivered
    fn notify(&self, notice: &Notice);
}

impl<F: Fn(&Notice)> Notifier for F {
    fn notify(&self, notice: &Notice) {
        self(notice);
    }
}

/// Inputs of the comparison form and its latest result
#[derive(Debug, Clone, Default)]
pub struct ComparisonForm {
    gender: Option<String>,
    age_band: Option<String>,
    course: Option<String>,
    event: Option<String>,
    user_time: Option<String>,
    comparison: Option<Comparison>,
}

impl ComparisonForm {
    /// Create an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gender; discards the current comparison
    pub fn set_gender(&mut self, value: impl Into<String>) {
        self.gender = Some(value.into());
        self.comparison = None;
    }

    /// Set the age band; discards the current comparison
    pub fn set_age_band(&mut self, value: impl Into<String>) {
        self.age_band = Some(value.into());
        self.comparison = None;
    }

    /// Set the course; discards the current comparison
    pub fn set_course(&mut self, value: impl Into<String>) {
        self.course = Some(value.into());
        self.comparison = None;
    }

    /// Set the event; discards the current comparison
    pub fn set_event(&mut self, value: impl Into<String>) {
        self.event = Some(value.into());
        self.comparison = None;
    }

    /// Set the free-text time; discards the current comparison
    pub fn set_user_time(&mut self, value: impl Into<String>) {
        self.user_time = Some(value.into());
        self.comparison = None;
    }

    /// The latest successful comparison, if still current
    #[must_use]
    pub const fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// The selection built from the current inputs, if all four are set
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        Some(Selection::new(
            self.gender.as_deref()?,
            self.age_band.as_deref()?,
            self.course.as_deref()?,
            self.event.as_deref()?,
        ))
    }

    /// Run the comparison against the national records
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Option<Comparison> {
        self.submit_with(RecordTable::national(), notifier)
    }

    /// Run the comparison against `table`.
    ///
    /// On success the new comparison replaces the old one and is returned.
    /// On failure `notifier` is called exactly once and the state is left as is.
    pub fn submit_with(
        &mut self,
        table: &RecordTable,
        notifier: &dyn Notifier,
    ) -> Option<Comparison> {
        let required = [
            ("gender", self.gender.as_deref()),
            ("age group", self.age_band.as_deref()),
            ("course", self.course.as_deref()),
            ("event", self.event.as_deref()),
            ("time", self.user_time.as_deref()),
        ];
        if let Some(&(name, _)) = required
            .iter()
            .find(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        {
            notifier.notify(&Notice::MissingField(name));
            return None;
        }

        let selection = self.selection()?;
        let user_time = self.user_time.as_deref().unwrap_or_default();
        match compare_with(table, &selection, user_time) {
            Ok(comparison) => {
                self.comparison = Some(comparison);
                Some(comparison)
            }
            Err(err) => {
                notifier.notify(&Notice::Failed(err));
                None
            }
        }
    }
}
