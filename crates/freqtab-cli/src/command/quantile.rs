use clap::Args;
use freqtab_stats::quantile;

use crate::{input::ClassSourceArg, util::format_stat};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct QuantileArg {
    /// Numerator of the quantile fraction
    pub k: u32,

    /// Denominator of the quantile fraction (4 for quartiles, 10 for deciles, 100 for percentiles)
    #[arg(long, short, default_value_t = 4)]
    pub m: u32,

    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &QuantileArg) -> anyhow::Result<()> {
    let Some(classes) = arg.source.load_non_empty()? else {
        return Ok(());
    };
    if arg.k > arg.m {
        eprintln!(
            "Warning: {}/{} is past the last observation; extrapolating in the last class",
            arg.k, arg.m
        );
    }

    let value = quantile::quantile(&classes, arg.k, arg.m);
    println!("Quantile {}/{}: {}", arg.k, arg.m, format_stat(value));
    Ok(())
}
