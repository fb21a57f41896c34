use serde::Serialize;

use crate::{
    central,
    class::Class,
    dispersion::DispersionSummary,
    quantile::{self, Quartiles},
    table::FrequencyTable,
};

/// Every statistic of a class sequence, computed in one pass over the API.
///
/// This structure combines:
/// - The frequency table with cumulative frequencies
/// - Position measures (mean, median, mode and quartiles)
/// - Dispersion measures
///
/// Statistics that are undefined for the input (no observations) are `None`.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, summary::GroupedSummary};
///
/// let classes = [
///     Class::new(20.0, 25.0, 2).unwrap(),
///     Class::new(25.0, 30.0, 5).unwrap(),
///     Class::new(30.0, 35.0, 8).unwrap(),
///     Class::new(35.0, 40.0, 4).unwrap(),
///     Class::new(40.0, 45.0, 1).unwrap(),
/// ];
/// let summary = GroupedSummary::new(&classes);
///
/// assert_eq!(summary.table.total, 20);
/// assert_eq!(summary.modal_class, Some(2));
/// assert!((summary.mean.unwrap() - 31.75).abs() < 1e-9);
/// assert_eq!(summary.median, summary.quartiles.map(|q| q.q2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub table: FrequencyTable,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
    /// Index of the modal class in `table.rows`.
    pub modal_class: Option<usize>,
    pub quartiles: Option<Quartiles>,
    pub dispersion: Option<DispersionSummary>,
}

impl GroupedSummary {
    #[must_use]
    pub fn new(classes: &[Class]) -> Self {
        Self {
            table: FrequencyTable::new(classes),
            mean: central::mean(classes),
            median: quantile::median(classes),
            mode: central::mode(classes),
            modal_class: central::modal_class_index(classes),
            quartiles: Quartiles::new(classes),
            dispersion: DispersionSummary::new(classes),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

    use super::*;
    use crate::class::MAX_FREQUENCY;

    /// Contiguous classes with random widths and frequencies.
    fn random_classes(rng: &mut StdRng) -> Vec<Class> {
        let len = rng.random_range(1..=8);
        let mut minimum = rng.random_range(-50.0..50.0);
        (0..len)
            .map(|_| {
                let maximum = minimum + rng.random_range(0.5..20.0);
                let class = Class::new(minimum, maximum, rng.random_range(0..=20)).unwrap();
                minimum = maximum;
                class
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_all_undefined() {
        let summary = GroupedSummary::new(&[]);
        assert!(summary.table.is_empty());
        assert_eq!(summary.table.total, 0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.median, None);
        assert_eq!(summary.mode, None);
        assert_eq!(summary.modal_class, None);
        assert_eq!(summary.quartiles, None);
        assert_eq!(summary.dispersion, None);
    }

    #[test]
    fn test_serializes_undefined_as_null() {
        let summary = GroupedSummary::new(&[]);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["mean"].is_null());
        assert!(json["dispersion"].is_null());
        assert_eq!(json["table"]["total"], 0);
    }

    #[test]
    fn test_serializes_infinite_variation_as_string() {
        let classes = [
            Class::new(-10.0, 0.0, 3).unwrap(),
            Class::new(0.0, 10.0, 3).unwrap(),
        ];
        let json = serde_json::to_value(GroupedSummary::new(&classes)).unwrap();
        let variation = &json["dispersion"]["coefficient_of_variation_percent"];
        assert!(!variation.is_null());
        assert_eq!(variation, "inf");
        assert_eq!(json["mean"], 0.0);
    }

    #[test]
    fn test_largest_frequencies_do_not_overflow() {
        let classes = [
            Class::new(0.0, 1.0, MAX_FREQUENCY).unwrap(),
            Class::new(1.0, 2.0, MAX_FREQUENCY).unwrap(),
            Class::new(2.0, 3.0, MAX_FREQUENCY).unwrap(),
        ];
        let summary = GroupedSummary::new(&classes);
        assert_eq!(summary.table.total, 3 * MAX_FREQUENCY);
        assert_eq!(
            summary.table.rows[1].cumulative_frequency,
            2 * MAX_FREQUENCY
        );
        assert_eq!(summary.modal_class, Some(0));
        assert!(summary.mean.is_some_and(|mean| (mean - 1.5).abs() < 1e-9));
        assert!(summary.dispersion.is_some());
    }

    #[test]
    fn test_single_class() {
        let summary = GroupedSummary::new(&[Class::new(10.0, 20.0, 7).unwrap()]);
        assert_eq!(summary.mode, Some(15.0));
        assert_eq!(summary.median, Some(15.0));
        let dispersion = summary.dispersion.unwrap();
        assert_eq!(dispersion.variance, 0.0);
        assert_eq!(dispersion.standard_deviation, 0.0);
    }

    #[test]
    fn test_invariants_on_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let classes = random_classes(&mut rng);
            let summary = GroupedSummary::new(&classes);
            let table = &summary.table;

            assert_eq!(table.rows.len(), classes.len());
            assert_eq!(
                table.rows.iter().map(|r| r.absolute_frequency).sum::<u64>(),
                table.total
            );
            assert_eq!(
                table.rows.last().map(|r| r.cumulative_frequency),
                Some(table.total)
            );
            assert!(
                table
                    .rows
                    .is_sorted_by(|a, b| a.cumulative_frequency <= b.cumulative_frequency)
            );

            let modal = &classes[summary.modal_class.unwrap()];
            let mode = summary.mode.unwrap();
            // L + 1.0 * (U - L) may round one ulp past U
            assert!(mode >= modal.minimum() - 1e-9 && mode <= modal.maximum() + 1e-9);

            if table.total == 0 {
                assert_eq!(summary.mean, None);
                assert_eq!(summary.dispersion, None);
                continue;
            }

            let quartiles = summary.quartiles.unwrap();
            assert!(quartiles.q1 <= quartiles.q2 && quartiles.q2 <= quartiles.q3);
            assert_eq!(summary.median, Some(quartiles.q2));

            let dispersion = summary.dispersion.unwrap();
            assert!(dispersion.variance >= 0.0);
            assert_eq!(dispersion.standard_deviation, dispersion.variance.sqrt());
            assert!(dispersion.interquartile_range >= 0.0);

            assert_eq!(GroupedSummary::new(&classes), summary);
        }
    }
}
