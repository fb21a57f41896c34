//! Text charts of a frequency table
//!
//! Draws one horizontal bar per class: absolute frequencies (`fi`) first,
//! then the ogive of cumulative frequencies (`Fi`).

use clap::Args;
use freqtab_stats::table::{FrequencyRow, FrequencyTable};

use crate::input::ClassSourceArg;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ChartArg {
    /// Width in characters of the longest bar
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &ChartArg) -> anyhow::Result<()> {
    let Some(classes) = arg.source.load_non_empty()? else {
        return Ok(());
    };
    let table = FrequencyTable::new(&classes);

    println!("Absolute frequency (fi)");
    for line in bar_lines(
        &table,
        |row| row.absolute_frequency,
        |_, row| row.label.clone(),
        arg.width,
    ) {
        println!("{line}");
    }
    println!();

    println!("Ogive (cumulative frequency Fi)");
    for line in bar_lines(
        &table,
        |row| row.cumulative_frequency,
        |i, _| format!("class {}", i + 1),
        arg.width,
    ) {
        println!("{line}");
    }
    Ok(())
}

/// Render one bar per row, scaled so the largest value spans `width` characters.
fn bar_lines<V, L>(table: &FrequencyTable, value: V, label: L, width: usize) -> Vec<String>
where
    V: Fn(&FrequencyRow) -> u64,
    L: Fn(usize, &FrequencyRow) -> String,
{
    let max = table.rows.iter().map(&value).max().unwrap_or(0);
    let labels = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| label(i, row))
        .collect::<Vec<_>>();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    table
        .rows
        .iter()
        .zip(labels)
        .map(|(row, label)| {
            let value = value(row);
            let bar = "#".repeat(bar_length(value, max, width));
            format!("  {label:<label_width$} | {bar} {value}")
        })
        .collect()
}

#[expect(clippy::cast_possible_truncation)]
fn bar_length(value: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let width = width as u128;
    (u128::from(value) * width / u128::from(max)) as usize
}
