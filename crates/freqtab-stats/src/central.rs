//! Mean and mode of grouped data

use crate::class::{Class, total_frequency};

/// Weighted mean of the class midpoints.
///
/// Returns `None` if the total frequency is zero.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, central::mean};
///
/// let classes = [
///     Class::new(0.0, 10.0, 1).unwrap(),
///     Class::new(10.0, 20.0, 3).unwrap(),
/// ];
/// assert_eq!(mean(&classes), Some(12.5));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(classes: &[Class]) -> Option<f64> {
    let n = total_frequency(classes);
    if n == 0 {
        return None;
    }
    let weighted_sum = classes
        .iter()
        .map(|class| class.midpoint() * class.weight())
        .sum::<f64>();
    Some(weighted_sum / n as f64)
}

/// Index of the modal class, the one with the highest absolute frequency.
///
/// Ties resolve to the class that comes first in the sequence.
/// Returns `None` for an empty sequence.
#[must_use]
pub fn modal_class_index(classes: &[Class]) -> Option<usize> {
    let (first, rest) = classes.split_first()?;
    let (index, _) = rest.iter().enumerate().fold(
        (0, first.absolute_frequency()),
        |(best, best_fi), (i, class)| {
            if class.absolute_frequency() > best_fi {
                (i + 1, class.absolute_frequency())
            } else {
                (best, best_fi)
            }
        },
    );
    Some(index)
}

/// Mode of grouped data, interpolated inside the modal class.
///
/// With `d1` the excess of the modal frequency over the previous class and
/// `d2` its excess over the next class (a missing neighbor counts as zero):
///
/// ```text
/// Mo = L + d1 / (d1 + d2) * A
/// ```
///
/// When `d1 + d2` is zero the modal class midpoint is returned.
///
/// Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, central::mode};
///
/// let classes = [
///     Class::new(0.0, 10.0, 2).unwrap(),
///     Class::new(10.0, 20.0, 6).unwrap(),
///     Class::new(20.0, 30.0, 4).unwrap(),
/// ];
/// // d1 = 4, d2 = 2
/// let value = mode(&classes).unwrap();
/// assert!((value - (10.0 + 4.0 / 6.0 * 10.0)).abs() < 1e-9);
///
/// let single = [Class::new(10.0, 20.0, 7).unwrap()];
/// assert_eq!(mode(&single), Some(15.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mode(classes: &[Class]) -> Option<f64> {
    let index = modal_class_index(classes)?;
    let modal = &classes[index];
    let neighbor_frequency = |i: Option<usize>| {
        i.and_then(|i| classes.get(i))
            .map_or(0, Class::absolute_frequency)
    };

    // The modal frequency is a maximum, so neither difference can underflow.
    let d1 = modal.absolute_frequency() - neighbor_frequency(index.checked_sub(1));
    let d2 = modal.absolute_frequency() - neighbor_frequency(Some(index + 1));
    if d1 + d2 == 0 {
        return Some(modal.midpoint());
    }

    Some(modal.minimum() + (d1 as f64 / (d1 + d2) as f64) * modal.width())
}
