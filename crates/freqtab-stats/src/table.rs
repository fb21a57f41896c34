//! Frequency table construction
//!
//! Builds the per-class rows (label, bounds, width, absolute and cumulative
//! frequency) shown by presenters and exported to CSV.

use serde::Serialize;

use crate::class::Class;

/// Label shown in the interval column of the total row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// A single row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// Interval label, `[ min , max [` or `[ min , max ]` for the last class.
    pub label: String,
    /// Lower bound of the class.
    pub minimum: f64,
    /// Upper bound of the class.
    pub maximum: f64,
    /// `maximum - minimum`.
    pub width: f64,
    /// Number of observations in the class (`fi`).
    pub absolute_frequency: u64,
    /// Running sum of absolute frequencies up to and including this row.
    pub cumulative_frequency: u64,
}

/// Frequency table of a class sequence, one row per class in input order.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, table::FrequencyTable};
///
/// let classes = [
///     Class::new(20.0, 25.0, 2).unwrap(),
///     Class::new(25.0, 30.0, 5).unwrap(),
/// ];
/// let table = FrequencyTable::new(&classes);
///
/// assert_eq!(table.total, 7);
/// assert_eq!(table.rows[0].label, "[ 20 , 25 [");
/// assert_eq!(table.rows[1].label, "[ 25 , 30 ]");
/// assert_eq!(table.rows[1].cumulative_frequency, 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub rows: Vec<FrequencyRow>,
    /// Total number of observations `n`.
    pub total: u64,
}

/// Summary row appended after the class rows by presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalRow {
    pub absolute_frequency: u64,
    pub cumulative_frequency: u64,
}

impl FrequencyTable {
    #[must_use]
    pub fn new(classes: &[Class]) -> Self {
        let last_index = classes.len().saturating_sub(1);
        let mut cumulative_frequency = 0;
        let rows = classes
            .iter()
            .enumerate()
            .map(|(i, class)| {
                cumulative_frequency += class.absolute_frequency();
                FrequencyRow {
                    label: interval_label(class, i == last_index),
                    minimum: class.minimum(),
                    maximum: class.maximum(),
                    width: class.width(),
                    absolute_frequency: class.absolute_frequency(),
                    cumulative_frequency,
                }
            })
            .collect();

        Self {
            rows,
            total: cumulative_frequency,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the `TOTAL` row, holding `n` in both frequency columns.
    #[must_use]
    pub fn total_row(&self) -> TotalRow {
        TotalRow {
            absolute_frequency: self.total,
            cumulative_frequency: self.total,
        }
    }
}

/// Formats the interval label of a class.
///
/// Bounds use the shortest representation that round-trips, so `20.0` is
/// printed as `20` and `0.1` as `0.1`.
#[must_use]
pub fn interval_label(class: &Class, is_last: bool) -> String {
    let close = if is_last { ']' } else { '[' };
    format!("[ {} , {} {close}", class.minimum(), class.maximum())
}
