use clap::Args;
use freqtab_stats::{
    central,
    quantile::{self, Quartiles},
};

use crate::{input::ClassSourceArg, util::format_stat};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct PositionArg {
    #[command(flatten)]
    pub source: ClassSourceArg,
}

pub(crate) fn run(arg: &PositionArg) -> anyhow::Result<()> {
    let Some(classes) = arg.source.load_non_empty()? else {
        return Ok(());
    };
    let quartiles = Quartiles::new(&classes);

    println!("--- Position measures ---");
    println!("Mean          : {}", format_stat(central::mean(&classes)));
    println!("Median (Q2)   : {}", format_stat(quantile::median(&classes)));
    println!("Mode          : {}", format_stat(central::mode(&classes)));
    println!("Q1            : {}", format_stat(quartiles.map(|q| q.q1)));
    println!("Q2            : {}", format_stat(quartiles.map(|q| q.q2)));
    println!("Q3            : {}", format_stat(quartiles.map(|q| q.q3)));
    Ok(())
}
