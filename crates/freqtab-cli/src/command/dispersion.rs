use clap::Args;
use freqtab_stats::dispersion::DispersionSummary;

use crate::{input::ClassSourceArg, util::format_stat};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct DispersionArg {
    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &DispersionArg) -> anyhow::Result<()> {
    let Some(classes) = arg.source.load_non_empty()? else {
        return Ok(());
    };
    let summary = DispersionSummary::new(&classes);
    let field = |f: fn(&DispersionSummary) -> f64| format_stat(summary.as_ref().map(f));

    println!("--- Dispersion measures ---");
    println!("Range         : {}", field(|s| s.range));
    println!("Variance (s2) : {}", field(|s| s.variance));
    println!("Std. dev. (s) : {}", field(|s| s.standard_deviation));
    println!("IQR (Q3-Q1)   : {}", field(|s| s.interquartile_range));
    println!(
        "CV (%)        : {}",
        field(|s| s.coefficient_of_variation_percent)
    );
    Ok(())
}
