use anyhow::Context;
use clap::Parser;
use lifetrace_data::TraceStyle;
use lifetrace_io::trace::block_stats;
use lifetrace_io::{parse_trace, to_json_pretty, write_json_lines};
use std::fs;
use std::io::{self, Read};

/// Prints per-generation statistics of a trace as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trace file; `-` reads standard input
    #[arg(default_value = "-")]
    input: String,

    /// Framing of the trace
    #[arg(short, long, default_value = "plain")]
    style: TraceStyle,

    /// One pretty-printed JSON array instead of JSON lines
    #[arg(long)]
    pretty: bool,
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    lifetrace_core::init_logging("warn");

    let text = read_input(&args.input)?;
    let grids = parse_trace(&text, args.style).context("failed to parse trace")?;
    let stats = block_stats(&grids);

    if args.pretty {
        println!("{}", to_json_pretty(&stats)?);
    } else {
        write_json_lines(io::stdout().lock(), &stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["analyze"]);
        assert_eq!(args.input, "-");
        assert_eq!(args.style, TraceStyle::Plain);
        assert!(!args.pretty);
    }

    #[test]
    fn test_args_parsing_custom() {
        let args = Args::parse_from(["analyze", "run.trace", "-s", "labeled", "--pretty"]);
        assert_eq!(args.input, "run.trace");
        assert_eq!(args.style, TraceStyle::Labeled);
        assert!(args.pretty);
    }
}
