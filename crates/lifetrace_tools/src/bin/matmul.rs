use anyhow::Context;
use clap::Parser;
use lifetrace_io::Matrix;

/// Multiplies two matrix files: `A × B`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Left operand
    a: String,

    /// Right operand
    b: String,

    /// Where to write the product; printed to stdout when omitted
    output: Option<String>,

    /// Compare the product with this matrix and print passed/failed instead
    #[arg(long, conflicts_with = "output")]
    expect: Option<String>,

    /// Tolerance used by --expect
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    lifetrace_core::init_logging("warn");

    let a = Matrix::read(&args.a)?;
    let b = Matrix::read(&args.b)?;
    let product = a
        .multiply(&b)
        .with_context(|| format!("multiplying {} by {}", args.a, args.b))?;

    if let Some(expected) = &args.expect {
        let expected = Matrix::read(expected)?;
        let ok = product.approx_eq(&expected, args.tolerance);
        println!("{}", if ok { "passed" } else { "failed" });
        if !ok {
            std::process::exit(1);
        }
    } else if let Some(output) = &args.output {
        product
            .write(output)
            .with_context(|| format!("failed to write {output}"))?;
    } else {
        print!("{product}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_positional() {
        let args = Args::parse_from(["matmul", "a.txt", "b.txt", "c.txt"]);
        assert_eq!(args.a, "a.txt");
        assert_eq!(args.output.as_deref(), Some("c.txt"));
        assert!(args.expect.is_none());
    }

    #[test]
    fn test_expect_conflicts_with_output() {
        assert!(Args::try_parse_from(["matmul", "a", "b", "c", "--expect", "d"]).is_err());
        let args = Args::parse_from(["matmul", "a", "b", "--expect", "d"]);
        assert_eq!(args.expect.as_deref(), Some("d"));
    }
}
