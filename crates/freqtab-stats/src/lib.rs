//! Descriptive statistics for grouped frequency data.
//!
//! Data is given as an ordered sequence of [`Class`] intervals, each with an
//! absolute frequency. Every function is pure: it takes a borrowed snapshot of
//! the sequence and recomputes everything from it.
//!
//! # Modules
//!
//! - [`class`]: The validated [`Class`] record
//! - [`table`]: Frequency table with interval labels and cumulative frequencies
//! - [`locate`]: Finding the class that contains a cumulative position
//! - [`quantile`]: Quantiles, median and quartiles by linear interpolation
//! - [`central`]: Mean and mode
//! - [`dispersion`]: Range, variance, standard deviation, IQR, coefficient of variation
//! - [`summary`]: All of the above at once
//!
//! Statistics that cannot be computed (no observations) are returned as `None`,
//! never as NaN.
//!
//! # Examples
//!
//! ```
//! use freqtab_stats::{Class, central, quantile, table::FrequencyTable};
//!
//! let classes = [
//!     Class::new(20.0, 25.0, 2).unwrap(),
//!     Class::new(25.0, 30.0, 5).unwrap(),
//!     Class::new(30.0, 35.0, 8).unwrap(),
//!     Class::new(35.0, 40.0, 4).unwrap(),
//!     Class::new(40.0, 45.0, 1).unwrap(),
//! ];
//!
//! let table = FrequencyTable::new(&classes);
//! assert_eq!(table.total, 20);
//!
//! assert_eq!(quantile::median(&classes), Some(31.875));
//! assert!((central::mean(&classes).unwrap() - 31.75).abs() < 1e-9);
//! assert!(central::mean(&[]).is_none());
//! ```

pub use self::class::{Class, ClassError, MAX_FREQUENCY, total_frequency};

pub mod central;
pub mod class;
pub mod dispersion;
pub mod locate;
pub mod quantile;
pub mod summary;
pub mod table;
