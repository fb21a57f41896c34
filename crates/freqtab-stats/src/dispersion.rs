use serde::{Serialize, Serializer};

use crate::{
    central,
    class::{Class, total_frequency},
    quantile::Quartiles,
};

/// Dispersion measures of grouped data.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, dispersion::DispersionSummary};
///
/// let classes = [Class::new(10.0, 20.0, 7).unwrap()];
/// let summary = DispersionSummary::new(&classes).unwrap();
/// assert_eq!(summary.range, 10.0);
/// assert_eq!(summary.variance, 0.0);
/// assert_eq!(summary.standard_deviation, 0.0);
///
/// assert_eq!(DispersionSummary::new(&[]), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DispersionSummary {
    /// Upper bound of the last class minus lower bound of the first.
    pub range: f64,
    /// Sample variance of the class midpoints (denominator `n - 1`).
    pub variance: f64,
    /// Square root of the variance.
    pub standard_deviation: f64,
    /// `Q3 - Q1`.
    pub interquartile_range: f64,
    /// `standard_deviation / mean * 100`, or positive infinity when the mean is zero.
    ///
    /// Serialized as the string `"inf"` when infinite, since JSON has no
    /// number for it and `null` already means "undefined".
    #[serde(serialize_with = "serialize_unbounded")]
    pub coefficient_of_variation_percent: f64,
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "signature required by serialize_with"
)]
fn serialize_unbounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*value)
    }
}

impl DispersionSummary {
    /// Computes all dispersion measures.
    ///
    /// Returns `None` if the total frequency is zero. A single observation
    /// has variance `0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(classes: &[Class]) -> Option<Self> {
        let n = total_frequency(classes);
        let mean = central::mean(classes)?;
        let quartiles = Quartiles::new(classes)?;
        let (first, last) = (classes.first()?, classes.last()?);

        let sum_of_squares = classes
            .iter()
            .map(|class| class.weight() * (class.midpoint() - mean).powi(2))
            .sum::<f64>();
        let variance = if n > 1 {
            sum_of_squares / (n - 1) as f64
        } else {
            0.0
        };
        let standard_deviation = variance.sqrt();
        let coefficient_of_variation_percent = if mean == 0.0 {
            f64::INFINITY
        } else {
            standard_deviation / mean * 100.0
        };

        Some(Self {
            range: last.maximum() - first.minimum(),
            variance,
            standard_deviation,
            interquartile_range: quartiles.interquartile_range(),
            coefficient_of_variation_percent,
        })
    }
}
