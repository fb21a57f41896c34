//! Class input collection
//!
//! Classes come from a JSON or CSV file (`--input`) and from repeated
//! `--class MIN:MAX:FI` arguments. Every class is validated by
//! [`Class::from_signed`] before it reaches any computation.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use freqtab_stats::{Class, ClassError};

use crate::util;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ClassSourceArg {
    /// JSON or CSV file with `minimum`, `maximum` and `absolute_frequency` per class
    ///
    /// Files ending in `.csv` are read as CSV with a header row, anything else as a JSON array.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Class given as MIN:MAX:FI, appended after the classes of `--input`
    ///
    /// Decimal commas are accepted: `20,5:25:3` is the class [20.5, 25[ with 3 observations.
    #[arg(
        long = "class",
        short = 'c',
        value_name = "MIN:MAX:FI",
        allow_hyphen_values = true,
        value_parser = parse_class_spec
    )]
    pub classes: Vec<Class>,
}

impl ClassSourceArg {
    /// Collects all classes, file classes first.
    pub fn load(&self) -> anyhow::Result<Vec<Class>> {
        let mut classes = match &self.input {
            Some(path) => {
                let classes = read_classes_file(path)?;
                eprintln!("Loaded {} classes from {}", classes.len(), path.display());
                classes
            }
            None => vec![],
        };
        classes.extend_from_slice(&self.classes);
        Ok(classes)
    }

    /// Like [`Self::load`], but reports and returns `None` when no class was given.
    pub fn load_non_empty(&self) -> anyhow::Result<Option<Vec<Class>>> {
        let classes = self.load()?;
        if classes.is_empty() {
            eprintln!("No classes given. Supply them with --input <FILE> or --class MIN:MAX:FI.");
            return Ok(None);
        }
        Ok(Some(classes))
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub(crate) enum ClassSpecError {
    #[display("expected MIN:MAX:FI, got '{spec}'")]
    Format { spec: String },
    #[display("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[display("{source}")]
    Class { source: ClassError },
}

/// Parses a `MIN:MAX:FI` class argument.
pub(crate) fn parse_class_spec(spec: &str) -> Result<Class, ClassSpecError> {
    let mut fields = spec.split(':');
    let (Some(minimum), Some(maximum), Some(frequency), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ClassSpecError::Format {
            spec: spec.to_owned(),
        });
    };

    let minimum = parse_decimal("minimum", minimum)?;
    let maximum = parse_decimal("maximum", maximum)?;
    let frequency = frequency
        .trim()
        .parse::<i64>()
        .map_err(|_| ClassSpecError::InvalidNumber {
            field: "frequency",
            value: frequency.to_owned(),
        })?;

    Class::from_signed(minimum, maximum, frequency)
        .map_err(|source| ClassSpecError::Class { source })
}

fn parse_decimal(field: &'static str, value: &str) -> Result<f64, ClassSpecError> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ClassSpecError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}

fn read_classes_file(path: &Path) -> anyhow::Result<Vec<Class>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return util::read_json_file("classes", path);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open classes file: {}", path.display()))?;
    read_classes_csv(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse classes CSV file: {}", path.display()))
}

fn read_classes_csv<R>(reader: R) -> anyhow::Result<Vec<Class>>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader
        .deserialize()
        .enumerate()
        .map(|(i, record)| record.with_context(|| format!("Invalid class in record {}", i + 1)))
        .collect()
}
