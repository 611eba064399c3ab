//! Record comparator: resolve a selection and measure a time against it

use crate::core::error::CompareError;
use crate::core::models::{Comparison, Selection};
use crate::core::records::RecordTable;
use crate::core::time::parse_time;
use crate::debug;

/// Compare a user time against the national record for `selection`.
///
/// The lookup happens before the user time is parsed, so an unknown category
/// is reported as [`CompareError::RecordNotFound`] even when the time is also bad.
///
/// # Errors
/// - [`CompareError::RecordNotFound`] if the selection is not in the table
/// - [`CompareError::InvalidFormat`] if `user_time_text` cannot be parsed
///
/// # Examples
/// ```
/// use swim_compare::core::compare::compare;
/// use swim_compare::core::models::Selection;
///
/// let selection = Selection::new("male", "18-24", "long", "100m freestyle");
/// let comparison = compare(&selection, "55.00").unwrap();
/// assert!((comparison.difference - 4.97).abs() < 1e-9);
/// ```
pub fn compare(selection: &Selection, user_time_text: &str) -> Result<Comparison, CompareError> {
    compare_with(RecordTable::national(), selection, user_time_text)
}

/// Same as [`compare`], against an explicit table
///
/// # Errors
/// See [`compare`].
pub fn compare_with(
    table: &RecordTable,
    selection: &Selection,
    user_time_text: &str,
) -> Result<Comparison, CompareError> {
    let record_text = table.lookup(selection)?;
    let user_time = parse_time(user_time_text)?;
    let record_time = parse_time(record_text)?;

    let comparison = Comparison::new(user_time, record_time);
    debug!(
        "Compared {selection}: user={user_time:.2}s record={record_time:.2}s diff={:+.2}s",
        comparison.difference
    );
    Ok(comparison)
}
