use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Destination of a command result: the given file, or stdout when no path is given.
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        serde_json::to_writer_pretty(&mut output, value)
            .with_context(|| format!("Failed to write JSON to {}", output.display_path()))?;
        writeln!(&mut output).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                output.display_path()
            )
        })?;
        output.finish()
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout {
                writer: io::stdout().lock(),
            });
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Flushes buffered output.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Formats a number with `significant` significant digits, dropping trailing
/// zeros, switching to exponent notation for very large or small magnitudes.
///
/// `31.75` stays `31.75`, `1234567.0` becomes `1.23457e+06`.
pub fn format_general(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let significant = significant.max(1);
    // Exponent after rounding to the requested precision
    let scientific = format!("{:.*e}", significant - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let significant_i32 = i32::try_from(significant).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= significant_i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }

    let decimals = usize::try_from(significant_i32 - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Formats an optional statistic, `N/A` when undefined.
pub fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format_general(v, 6))
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(31.75, 6), "31.75");
        assert_eq!(format_general(31.875, 6), "31.875");
        assert_eq!(format_general(15.0, 6), "15");
        assert_eq!(format_general(32.142_857_142_857, 6), "32.1429");
        assert_eq!(format_general(-0.5, 6), "-0.5");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(123_456.0, 6), "123456");
    }

    #[test]
    fn test_format_general_exponent() {
        assert_eq!(format_general(1_234_567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.000_012_5, 6), "1.25e-05");
        assert_eq!(format_general(999_999.9, 6), "1e+06");
    }

    #[test]
    fn test_format_general_special() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(None), "N/A");
        assert_eq!(format_stat(Some(2.5)), "2.5");
    }
}
