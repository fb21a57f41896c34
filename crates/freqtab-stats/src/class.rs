use serde::{Deserialize, Serialize};

/// Largest absolute frequency a class may hold.
///
/// Keeps totals, cumulative frequencies and mode differences of any class
/// sequence that fits in memory within `u64`.
pub const MAX_FREQUENCY: u64 = (1 << 32) - 1;

/// Error returned when class boundaries or frequency violate the class invariants.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ClassError {
    #[display("class bounds must be finite (minimum: {minimum}, maximum: {maximum})")]
    NonFiniteBound { minimum: f64, maximum: f64 },
    #[display("class maximum ({maximum}) must be greater than its minimum ({minimum})")]
    EmptyInterval { minimum: f64, maximum: f64 },
    #[display("absolute frequency must be non-negative (got {absolute_frequency})")]
    NegativeFrequency { absolute_frequency: i64 },
    #[display("absolute frequency must be at most {MAX_FREQUENCY} (got {absolute_frequency})")]
    FrequencyTooLarge { absolute_frequency: u64 },
}

/// A class interval of grouped data with its absolute frequency.
///
/// Every class except the last one of a sequence covers `[minimum, maximum)`;
/// the last one covers `[minimum, maximum]`.
///
/// A `Class` can only be built through [`Class::new`] (or [`Class::from_signed`]),
/// so `maximum > minimum` always holds, both bounds are finite and the
/// frequency is at most [`MAX_FREQUENCY`].
///
/// # Examples
///
/// ```
/// use freqtab_stats::Class;
///
/// let class = Class::new(20.0, 25.0, 3).unwrap();
/// assert_eq!(class.width(), 5.0);
/// assert_eq!(class.midpoint(), 22.5);
///
/// assert!(Class::new(25.0, 20.0, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClass")]
pub struct Class {
    minimum: f64,
    maximum: f64,
    absolute_frequency: u64,
}

/// Unvalidated class record as it appears in external data.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawClass {
    minimum: f64,
    maximum: f64,
    absolute_frequency: i64,
}

impl TryFrom<RawClass> for Class {
    type Error = ClassError;

    fn try_from(raw: RawClass) -> Result<Self, Self::Error> {
        Self::from_signed(raw.minimum, raw.maximum, raw.absolute_frequency)
    }
}

impl Class {
    /// Creates a class after checking its bounds and frequency.
    pub fn new(minimum: f64, maximum: f64, absolute_frequency: u64) -> Result<Self, ClassError> {
        if !minimum.is_finite() || !maximum.is_finite() {
            return Err(ClassError::NonFiniteBound { minimum, maximum });
        }
        if maximum <= minimum {
            return Err(ClassError::EmptyInterval { minimum, maximum });
        }
        if absolute_frequency > MAX_FREQUENCY {
            return Err(ClassError::FrequencyTooLarge { absolute_frequency });
        }
        Ok(Self {
            minimum,
            maximum,
            absolute_frequency,
        })
    }

    /// Creates a class from a signed frequency, as read from user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqtab_stats::{Class, ClassError};
    ///
    /// assert_eq!(
    ///     Class::from_signed(0.0, 1.0, -2),
    ///     Err(ClassError::NegativeFrequency { absolute_frequency: -2 })
    /// );
    /// ```
    pub fn from_signed(
        minimum: f64,
        maximum: f64,
        absolute_frequency: i64,
    ) -> Result<Self, ClassError> {
        let absolute_frequency = u64::try_from(absolute_frequency)
            .map_err(|_| ClassError::NegativeFrequency { absolute_frequency })?;
        Self::new(minimum, maximum, absolute_frequency)
    }

    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    #[must_use]
    pub fn absolute_frequency(&self) -> u64 {
        self.absolute_frequency
    }

    /// Returns the absolute frequency as a float, for weighting.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.absolute_frequency as f64
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Class mark: the value representing the whole class in mean and variance.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.minimum + self.maximum) / 2.0
    }
}

/// Total number of observations `n` over a class sequence.
#[must_use]
pub fn total_frequency(classes: &[Class]) -> u64 {
    classes.iter().map(Class::absolute_frequency).sum()
}
