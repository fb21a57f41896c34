//! Frequency table display

use clap::Args;
use freqtab_stats::table::{FrequencyRow, FrequencyTable, TOTAL_LABEL};

use crate::input::ClassSourceArg;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct TableArg {
    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &TableArg) -> anyhow::Result<()> {
    let Some(classes) = arg.source.load_non_empty()? else {
        return Ok(());
    };
    let table = FrequencyTable::new(&classes);

    println!("Frequency Table");
    println!("===============\n");
    print_table(&table);
    Ok(())
}

/// Print the table rows, followed by a `TOTAL` row when there are observations
pub(super) fn print_table(table: &FrequencyTable) {
    println!(
        "  {:<24} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Interval", "Min", "Max", "Width", "fi", "Fi",
    );
    // label(24) + 5 numeric columns(10) + spaces(5)
    println!("  {}", "-".repeat(79));

    for row in &table.rows {
        print_row(row);
    }

    if table.total > 0 {
        let total = table.total_row();
        println!(
            "  {:<24} {:>10} {:>10} {:>10} {:>10} {:>10}",
            TOTAL_LABEL, "", "", "", total.absolute_frequency, total.cumulative_frequency,
        );
    }
}

fn print_row(row: &FrequencyRow) {
    println!(
        "  {:<24} {:>10} {:>10} {:>10} {:>10} {:>10}",
        row.label,
        row.minimum,
        row.maximum,
        row.width,
        row.absolute_frequency,
        row.cumulative_frequency,
    );
}
