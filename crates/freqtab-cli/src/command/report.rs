use std::path::PathBuf;

use clap::Args;
use freqtab_stats::summary::GroupedSummary;

use crate::{input::ClassSourceArg, util::Output};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Output JSON file path (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let classes = arg.source.load()?;
    eprintln!("Computing statistics for {} classes...", classes.len());
    let summary = GroupedSummary::new(&classes);
    Output::save_json(&summary, arg.output.clone())?;
    if let Some(path) = &arg.output {
        eprintln!("Report saved to: {}", path.display());
    }
    Ok(())
}
