use qascore_core::f1::pair_stats;

use crate::cli::args::{OutputFormat, PairArgs};
use crate::exit_codes;

pub fn run(args: PairArgs) -> anyhow::Result<i32> {
    let stats = pair_stats(&args.gold, &args.predicted);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => println!(
            "f1={:.4} precision={:.4} recall={:.4} common={} gold_tokens={} predicted_tokens={}",
            stats.f1,
            stats.precision,
            stats.recall,
            stats.num_same,
            stats.gold_tokens,
            stats.predicted_tokens
        ),
    }
    Ok(exit_codes::OK)
}
