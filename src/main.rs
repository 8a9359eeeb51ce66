//! knumber - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

use knumber::{
    analysis::{ConvergenceAnalyzer, ConvergenceRecord, RoutineState},
    cli::{Args, Commands, Config, Verbosity},
    report::{self, ReportOptions},
    telemetry::{SweepTelemetry, TelemetryDisplay},
    types::{DigitNumber, DigitSpace},
};

/// Progress bar redraw granularity, in starting values
const PROGRESS_STRIDE: u64 = 1024;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(msg) = args.validate() {
        eprintln!("Error: {}", msg);
        std::process::exit(2);
    }

    let mut config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate().context("Invalid command-line overrides")?;

    if !config.display.color_output {
        colored::control::set_override(false);
    }
    let verbosity = args.resolve_verbosity(config.default_verbosity());

    match &args.command {
        None | Some(Commands::Sweep) => run_sweeps(&args, &config, verbosity)?,
        Some(Commands::Inspect { number, radix }) => inspect(number, *radix)?,
        Some(Commands::Trace { number, radix }) => trace(number, *radix, &config)?,
        Some(Commands::Config) => show_config(&config)?,
    }

    Ok(())
}

/// Build a number whose digit count is the length of the input
fn parse_number(number: &str, radix: u32) -> Result<DigitNumber> {
    let digit_count =
        u32::try_from(number.chars().count()).context("Digit string is too long")?;
    let space = DigitSpace::new(radix, digit_count)?;
    Ok(DigitNumber::from_digit_string(number, space)?)
}

fn run_sweeps(args: &Args, config: &Config, verbosity: Verbosity) -> Result<()> {
    let analyzer =
        ConvergenceAnalyzer::with_config(config.convergence_config(verbosity.show_events()));
    let options = ReportOptions {
        show_timing: config.display.show_timing,
        color: config.display.color_output,
    };
    let text = !args.json;

    let mut telemetry = SweepTelemetry::new();
    let mut records = Vec::new();

    for &radix in &config.analysis.radices {
        let radix_started = Instant::now();
        if text {
            println!("{}", report::render_radix_header(radix, &options));
        }

        for &digits in &config.analysis.digit_counts {
            let space = DigitSpace::new(radix, digits)?;
            let started = telemetry.sweep_started(space);
            let record = sweep(&analyzer, &space, config, verbosity)
                .with_context(|| format!("Sweep of {} failed", space))?;
            let elapsed = telemetry.sweep_completed(&record, started);

            if text {
                println!("{}", report::render_record(&record, Some(elapsed), &options));
                if let (true, Some(constant)) =
                    (verbosity.show_events(), record.universal_constant())
                {
                    println!("  - every start reaches {}", constant.green());
                }
            }
            records.push(record);
        }

        let elapsed = telemetry.radix_completed(radix, radix_started);
        if text {
            println!("{}", report::render_radix_footer(radix, elapsed, &options));
        }
    }

    if args.json {
        println!("{}", report::render_json(&records)?);
    } else {
        TelemetryDisplay::new(&telemetry, verbosity).display_summary();
    }

    Ok(())
}

/// One space, with an optional progress bar on stderr
fn sweep(
    analyzer: &ConvergenceAnalyzer,
    space: &DigitSpace,
    config: &Config,
    verbosity: Verbosity,
) -> Result<ConvergenceRecord> {
    let pb = if verbosity.show_progress() && config.display.show_progress_bars {
        let pb = ProgressBar::new(analyzer.start_count(space));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {msg} [{bar:40.cyan/blue}] {pos}/{len} | ETA: {eta}")?
                .progress_chars("=>-"),
        );
        pb.set_message(space.label());
        Some(pb)
    } else {
        None
    };

    let mut swept = 0u64;
    let record = analyzer.run_with(space, |start, outcome| {
        if verbosity.show_steps() && outcome.is_diverged() {
            let line = format!(
                "[SWEEP] {} failed to converge in {} steps",
                start.to_prefixed_string(),
                outcome.iterations()
            );
            match &pb {
                Some(pb) => pb.println(line),
                None => eprintln!("{}", line),
            }
        }
        swept += 1;
        if let Some(pb) = &pb {
            if swept % PROGRESS_STRIDE == 0 {
                pb.set_position(swept);
            }
        }
    })?;

    if let Some(pb) = pb {
        pb.set_position(swept);
        pb.finish_and_clear();
    }

    Ok(record)
}

fn inspect(number: &str, radix: u32) -> Result<()> {
    let k = parse_number(number, radix)?;
    let space = k.space();
    let max = DigitNumber::from_integer(space.max_value(), space)?;

    println!("- space is {}", space);
    println!("- space max is {}", max);
    println!("- k is {}", k);
    if k.is_repdigit() {
        println!("- k {}", "has identical digits; one step reaches zero".yellow());
    }
    println!("- k.min()     is {}", k.min_permutation());
    println!("- k.max()     is {}", k.max_permutation());
    match k.kaprekar_sum() {
        Ok(sum) => println!("- k.max+k.min is {}", sum),
        Err(e) => println!("- k.max+k.min {}", e.to_string().yellow()),
    }
    println!("- k.max-k.min is {}", k.kaprekar_step());

    Ok(())
}

fn trace(number: &str, radix: u32, config: &Config) -> Result<()> {
    let start = parse_number(number, radix)?;
    let analyzer = ConvergenceAnalyzer::with_config(config.convergence_config(false));
    let trace = analyzer.trace(start);

    println!("{}", start);
    let mut previous = start;
    for (i, step) in trace.steps.iter().enumerate() {
        println!(
            "  {:>2}: {} - {} = {}",
            i + 1,
            previous.max_digit_string(),
            previous.min_digit_string(),
            step.to_digit_string()
        );
        previous = *step;
    }

    match &trace.outcome {
        RoutineState::Converged {
            fixed_point,
            iterations,
        } => println!(
            "{} {} after {} iterations",
            "converged to".green(),
            fixed_point.to_prefixed_string(),
            iterations
        ),
        RoutineState::Degenerate { iterations } => println!(
            "{} after {} iterations (all digits identical)",
            "reached zero".yellow(),
            iterations
        ),
        RoutineState::Diverged { iterations } => println!(
            "{} within {} iterations",
            "failed to converge".red(),
            iterations
        ),
        RoutineState::Running { .. } => {}
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "knumber configuration".bold());
    if let Some(path) = Config::default_path() {
        println!("# default location: {}", path.display());
    }
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
