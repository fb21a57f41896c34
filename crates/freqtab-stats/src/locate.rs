use crate::class::{Class, total_frequency};

/// The class containing a cumulative position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index of the first class whose cumulative frequency reaches the position.
    pub index: usize,
    /// Cumulative frequency of all classes before `index`.
    pub cumulative_before: u64,
}

/// Finds the class containing the cumulative position `position`.
///
/// Classes are scanned in order and the first one whose cumulative frequency
/// is `>= position` is returned. A position that lands exactly on a cumulative
/// frequency belongs to the earlier class, i.e. it sits on that class's upper
/// edge.
///
/// When no class reaches the position (it is past the total), the last class
/// is returned.
///
/// Returns `None` only for an empty sequence.
///
/// # Examples
///
/// ```
/// use freqtab_stats::{Class, locate::{Position, locate_position}};
///
/// let classes = [
///     Class::new(0.0, 10.0, 2).unwrap(),
///     Class::new(10.0, 20.0, 5).unwrap(),
/// ];
///
/// assert_eq!(
///     locate_position(&classes, 2.0),
///     Some(Position { index: 0, cumulative_before: 0 })
/// );
/// assert_eq!(
///     locate_position(&classes, 2.5),
///     Some(Position { index: 1, cumulative_before: 2 })
/// );
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn locate_position(classes: &[Class], position: f64) -> Option<Position> {
    let mut cumulative = 0;
    for (index, class) in classes.iter().enumerate() {
        let cumulative_before = cumulative;
        cumulative += class.absolute_frequency();
        if position <= cumulative as f64 {
            return Some(Position {
                index,
                cumulative_before,
            });
        }
    }

    let last = classes.last()?;
    Some(Position {
        index: classes.len() - 1,
        cumulative_before: total_frequency(classes) - last.absolute_frequency(),
    })
}
