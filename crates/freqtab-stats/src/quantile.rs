//! Quantiles of grouped data
//!
//! A quantile `k/m` of grouped data is estimated by locating the class that
//! contains the cumulative position `k * n / m` and interpolating linearly
//! inside it:
//!
//! ```text
//! Q = L + (position - F) / f * A
//! ```
//!
//! where `L` is the lower bound of the class, `F` the cumulative frequency
//! before it, `f` its absolute frequency and `A` its width.

use serde::Serialize;

use crate::{
    class::{Class, total_frequency},
    locate::locate_position,
};

/// Estimates the `k/m` quantile of grouped data.
///
/// `quantile(classes, 1, 4)` is the first quartile, `quantile(classes, 9, 10)`
/// the ninth decile, and so on.
///
/// # Returns
///
/// * `Some(value)` - the interpolated quantile
/// * `None` - if the total frequency is zero, `m` is zero, or the position
///   falls on a class with zero frequency (only possible for `k = 0` or
///   `k > m`)
///
/// Positions past the total (`k > m`) extrapolate within the last class.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, quantile::quantile};
///
/// let classes = [
///     Class::new(0.0, 10.0, 5).unwrap(),
///     Class::new(10.0, 20.0, 5).unwrap(),
/// ];
/// assert_eq!(quantile(&classes, 1, 4), Some(5.0));
/// assert_eq!(quantile(&classes, 3, 4), Some(15.0));
/// assert_eq!(quantile(&[], 1, 4), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn quantile(classes: &[Class], k: u32, m: u32) -> Option<f64> {
    let n = total_frequency(classes);
    if n == 0 || m == 0 {
        return None;
    }

    let position = f64::from(k) * n as f64 / f64::from(m);
    let located = locate_position(classes, position)?;
    let class = &classes[located.index];
    if class.absolute_frequency() == 0 {
        return None;
    }

    let fraction = (position - located.cumulative_before as f64) / class.weight();
    Some(class.minimum() + fraction * class.width())
}

/// Median of grouped data, the `2/4` quantile.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, quantile::median};
///
/// let classes = [Class::new(10.0, 20.0, 7).unwrap()];
/// assert_eq!(median(&classes), Some(15.0));
/// ```
#[must_use]
pub fn median(classes: &[Class]) -> Option<f64> {
    quantile(classes, 2, 4)
}

/// The three quartiles of grouped data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// First quartile, `quantile(1, 4)`.
    pub q1: f64,
    /// Second quartile, equal to the median.
    pub q2: f64,
    /// Third quartile, `quantile(3, 4)`.
    pub q3: f64,
}

impl Quartiles {
    /// Computes Q1, Q2 and Q3.
    ///
    /// Returns `None` if the total frequency is zero.
    #[must_use]
    pub fn new(classes: &[Class]) -> Option<Self> {
        Some(Self {
            q1: quantile(classes, 1, 4)?,
            q2: quantile(classes, 2, 4)?,
            q3: quantile(classes, 3, 4)?,
        })
    }

    /// Interquartile range `Q3 - Q1`.
    #[must_use]
    pub fn interquartile_range(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_classes() -> Vec<Class> {
        [
            (20.0, 25.0, 2),
            (25.0, 30.0, 5),
            (30.0, 35.0, 8),
            (35.0, 40.0, 4),
            (40.0, 45.0, 1),
        ]
        .into_iter()
        .map(|(min, max, fi)| Class::new(min, max, fi).unwrap())
        .collect()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap();
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_quartiles_of_sample() {
        let classes = sample_classes();
        // Q1: position 5 in [25, 30[ with F = 2, f = 5
        assert_close(quantile(&classes, 1, 4), 28.0);
        // Q2: position 10 in [30, 35[ with F = 7, f = 8
        assert_close(quantile(&classes, 2, 4), 31.875);
        // Q3: position 15 is the upper edge of [30, 35[
        assert_close(quantile(&classes, 3, 4), 35.0);
    }

    #[test]
    fn test_median_is_second_quartile() {
        let classes = sample_classes();
        assert_eq!(median(&classes), quantile(&classes, 2, 4));
        assert_eq!(median(&classes), quantile(&classes, 1, 2));
    }

    #[test]
    fn test_boundary_position_uses_upper_edge_of_earlier_class() {
        let classes = [
            Class::new(0.0, 10.0, 2).unwrap(),
            Class::new(10.0, 20.0, 2).unwrap(),
        ];
        // Position 2 is exactly F of the first class: fraction 1.0 there,
        // not fraction 0.0 of the second class. Both give 10 here, so check
        // with a gap between the classes.
        assert_close(quantile(&classes, 2, 4), 10.0);
        let gapped = [
            Class::new(0.0, 10.0, 2).unwrap(),
            Class::new(50.0, 60.0, 2).unwrap(),
        ];
        assert_close(quantile(&gapped, 2, 4), 10.0);
    }

    #[test]
    fn test_deciles_and_percentiles() {
        let classes = sample_classes();
        // D1: position 2 -> upper edge of the first class
        assert_close(quantile(&classes, 1, 10), 25.0);
        // P90: position 18 in [35, 40[ with F = 15, f = 4
        assert_close(quantile(&classes, 90, 100), 38.75);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(quantile(&[], 1, 4), None);
        let zeros = [Class::new(0.0, 1.0, 0).unwrap()];
        assert_eq!(quantile(&zeros, 1, 4), None);
        assert_eq!(quantile(&sample_classes(), 1, 0), None);
    }

    #[test]
    fn test_zero_frequency_target_is_undefined() {
        let classes = [
            Class::new(0.0, 10.0, 0).unwrap(),
            Class::new(10.0, 20.0, 4).unwrap(),
        ];
        // k = 0 lands on the empty first class
        assert_eq!(quantile(&classes, 0, 4), None);
        assert_close(quantile(&classes, 4, 4), 20.0);
    }

    #[test]
    fn test_past_total_extrapolates_in_last_class() {
        let classes = [
            Class::new(0.0, 10.0, 4).unwrap(),
            Class::new(10.0, 20.0, 4).unwrap(),
        ];
        assert_close(quantile(&classes, 5, 4), 25.0);
    }

    #[test]
    fn test_quartiles_struct() {
        let quartiles = Quartiles::new(&sample_classes()).unwrap();
        assert!((quartiles.interquartile_range() - 7.0).abs() < 1e-9);
        assert_eq!(Quartiles::new(&[]), None);
    }
}
