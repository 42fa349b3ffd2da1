use anyhow::Context;
use clap::Parser;
use lifetrace_data::TraceStyle;
use lifetrace_io::{compare_traces, parse_trace, row_values};
use std::fs;

/// Compares a simulator trace against a reference trace, generation by generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference trace
    #[arg(short, long)]
    expected: String,

    /// Trace to check
    #[arg(short, long)]
    actual: String,

    /// Framing of both traces
    #[arg(short, long, default_value = "plain")]
    style: TraceStyle,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    lifetrace_core::init_logging("warn");

    let expected_text = fs::read_to_string(&args.expected)
        .with_context(|| format!("failed to read {}", args.expected))?;
    let actual_text = fs::read_to_string(&args.actual)
        .with_context(|| format!("failed to read {}", args.actual))?;

    let expected = parse_trace(&expected_text, args.style)
        .with_context(|| format!("failed to parse {}", args.expected))?;
    let actual = parse_trace(&actual_text, args.style)
        .with_context(|| format!("failed to parse {}", args.actual))?;

    let report = compare_traces(&expected, &actual);

    for mismatch in &report.mismatches {
        let (e, a) = (&expected[mismatch.block], &actual[mismatch.block]);
        println!("Generation block {} differs:", mismatch.block);
        // Row values are only printable for grids up to 128 columns wide.
        match (row_values(e), row_values(a)) {
            (Ok(ev), Ok(av)) => println!("  expected {ev:?}\n  actual   {av:?}"),
            _ => println!("  expected\n{}\n  actual\n{}", mismatch.expected, mismatch.actual),
        }
    }
    if report.expected_blocks != report.actual_blocks {
        println!(
            "Block count differs: expected {}, actual {}",
            report.expected_blocks, report.actual_blocks
        );
    }

    if report.passed() {
        println!("passed");
        Ok(())
    } else {
        println!("failed");
        std::process::exit(1);
    }
}
