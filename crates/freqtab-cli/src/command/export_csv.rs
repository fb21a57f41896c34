//! CSV export of the frequency table

use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Args;
use freqtab_stats::table::{FrequencyTable, TOTAL_LABEL};

use crate::{input::ClassSourceArg, util::Output};

const HEADER: [&str; 6] = [
    "Interval label",
    "Minimum",
    "Maximum",
    "Width",
    "Absolute frequency",
    "Cumulative frequency",
];

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ExportCsvArg {
    /// Output CSV file path (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &ExportCsvArg) -> anyhow::Result<()> {
    let Some(classes) = arg.source.load_non_empty()? else {
        return Ok(());
    };
    let table = FrequencyTable::new(&classes);

    let mut output = Output::from_output_path(arg.output.clone())?;
    let display_path = output.display_path();
    write_table_csv(&mut output, &table)
        .with_context(|| format!("Failed to write CSV to {display_path}"))?;
    output.finish()?;
    if arg.output.is_some() {
        eprintln!("Frequency table saved to: {display_path}");
    }
    Ok(())
}

/// Write the table rows followed by a `TOTAL` row.
///
/// The `TOTAL` row holds the total frequency in the two frequency columns and
/// empty strings elsewhere.
fn write_table_csv<W>(writer: W, table: &FrequencyTable) -> anyhow::Result<()>
where
    W: io::Write,
{
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for row in &table.rows {
        writer.write_record([
            row.label.clone(),
            row.minimum.to_string(),
            row.maximum.to_string(),
            row.width.to_string(),
            row.absolute_frequency.to_string(),
            row.cumulative_frequency.to_string(),
        ])?;
    }
    let total = table.total_row();
    writer.write_record([
        TOTAL_LABEL.to_owned(),
        String::new(),
        String::new(),
        String::new(),
        total.absolute_frequency.to_string(),
        total.cumulative_frequency.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use freqtab_stats::Class;

    use super::*;

    #[test]
    fn test_write_table_csv() {
        let classes = [
            Class::new(20.0, 25.0, 2).unwrap(),
            Class::new(25.0, 30.5, 5).unwrap(),
        ];
        let mut buf = Vec::new();
        write_table_csv(&mut buf, &FrequencyTable::new(&classes)).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(
            csv,
            "Interval label,Minimum,Maximum,Width,Absolute frequency,Cumulative frequency\n\
             [ 20 , 25 [,20,25,5,2,2\n\
             [ 25 , 30.5 ],25,30.5,5.5,5,7\n\
             TOTAL,,,,7,7\n"
        );
    }

    #[test]
    fn test_write_empty_table_csv() {
        let mut buf = Vec::new();
        write_table_csv(&mut buf, &FrequencyTable::new(&[])).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.ends_with("TOTAL,,,,0,0\n"));
    }
}
