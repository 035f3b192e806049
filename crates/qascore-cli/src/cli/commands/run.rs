use qascore_core::config::{read_config, EvalConfig};
use qascore_core::f1::score_dataset;
use qascore_core::metrics_api::Metric;
use qascore_core::report::RunReport;
use qascore_metrics::TokenF1Metric;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::exit_codes;

pub async fn run(args: RunArgs, verbose: bool) -> anyhow::Result<i32> {
    // 1. Config file, then command-line overrides
    let mut cfg = match &args.config {
        Some(path) => match read_config(path) {
            Ok(cfg) => cfg,
            Err(e) => return Ok(config_error(&e)),
        },
        None => EvalConfig::default(),
    };
    apply_overrides(&mut cfg, &args);
    let source = match cfg.validate() {
        Ok(source) => source,
        Err(e) => return Ok(config_error(&e)),
    };

    // 2. Load answers
    let answers = match source.load() {
        Ok(answers) => answers,
        Err(e) => return Ok(config_error(&e)),
    };

    // 3. Score once; misaligned or empty input stops here
    tracing::info!(
        gold = answers.gold.len(),
        predicted = answers.predicted.len(),
        "scoring answers"
    );
    let scores = match score_dataset(&answers.gold, &answers.predicted) {
        Ok(scores) => scores,
        Err(e) => return Ok(config_error(&e)),
    };
    let metric = TokenF1Metric {
        min_score: cfg.min_score,
    };
    let result = metric.judge(&scores);
    let report = RunReport::new(metric.name(), &result, cfg.min_score, scores.items);

    // 4. Export
    if let Some(path) = &cfg.output {
        report.write_json(path)?;
    }
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.render_text(verbose)),
    }

    Ok(if report.passed {
        exit_codes::OK
    } else {
        exit_codes::BELOW_THRESHOLD
    })
}

fn apply_overrides(cfg: &mut EvalConfig, args: &RunArgs) {
    if let Some(dataset) = &args.dataset {
        cfg.dataset = Some(dataset.clone());
        cfg.gold = None;
        cfg.predicted = None;
    }
    if let (Some(gold), Some(predicted)) = (&args.gold, &args.predicted) {
        cfg.dataset = None;
        cfg.gold = Some(gold.clone());
        cfg.predicted = Some(predicted.clone());
    }
    if args.min_score.is_some() {
        cfg.min_score = args.min_score;
    }
    if args.output.is_some() {
        cfg.output = args.output.clone();
    }
}

fn config_error(e: &dyn std::error::Error) -> i32 {
    eprintln!("error: {}", e);
    exit_codes::CONFIG_ERROR
}
