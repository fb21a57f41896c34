use clap::{Parser, Subcommand};

use self::{
    chart::ChartArg, dispersion::DispersionArg, export_csv::ExportCsvArg, position::PositionArg,
    quantile::QuantileArg, report::ReportArg, table::TableArg,
};

mod chart;
mod dispersion;
mod export_csv;
mod position;
mod quantile;
mod report;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute from the classes
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the frequency table with cumulative frequencies
    Table(#[clap(flatten)] TableArg),
    /// Print mean, median, mode and quartiles
    Position(#[clap(flatten)] PositionArg),
    /// Print range, variance, standard deviation, IQR and coefficient of variation
    Dispersion(#[clap(flatten)] DispersionArg),
    /// Print an arbitrary K/M quantile
    Quantile(#[clap(flatten)] QuantileArg),
    /// Draw text charts of absolute frequencies and the ogive
    Chart(#[clap(flatten)] ChartArg),
    /// Export the frequency table as CSV
    ExportCsv(#[clap(flatten)] ExportCsvArg),
    /// Write every statistic as JSON
    Report(#[clap(flatten)] ReportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Table(arg) => table::run(&arg)?,
        Mode::Position(arg) => position::run(&arg)?,
        Mode::Dispersion(arg) => dispersion::run(&arg)?,
        Mode::Quantile(arg) => quantile::run(&arg)?,
        Mode::Chart(arg) => chart::run(&arg)?,
        Mode::ExportCsv(arg) => export_csv::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}
