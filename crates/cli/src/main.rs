use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use looper_core::{
    Callable, CheckedMultiplier, Multiplier, OverflowError, Palindrome, Uppercase, from_fn,
    try_from_fn,
};
use looper_dispatch::{LineSink, doubling, for_each_invoke_into, select_into};

/// Dispatch callables over sequences and print the results.
#[derive(Debug, Parser)]
#[command(name = "looper", version, about)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print each value multiplied by a factor.
    Scale {
        /// The factor captured by the multiplier.
        #[arg(short, long)]
        factor: i64,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print each value squared.
    Square {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print each word in upper case.
    Upcase {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the words that read the same reversed.
    Palindromes {
        /// Print the words that are not palindromes instead.
        #[arg(long)]
        invert: bool,

        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print a sequence that doubles on every step.
    Doubling {
        #[arg(long, allow_negative_numbers = true)]
        start: i64,

        /// Number of terms to print.
        #[arg(long, default_value_t = doubling::Config::default().steps())]
        steps: usize,
    },

    /// Double, then triple, the values 1, 2, and 3.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = io::stdout().lock();
    run(cli.command, &mut out)
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    builder.init();
}

/// Runs one command, writing its lines to `out`.
fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    let mut sink = LineSink::new(out);

    match command {
        Command::Scale { factor, values } => {
            info!("scaling {} values by {factor}", values.len());
            for_each_invoke_into(values, &CheckedMultiplier::new(factor), &mut sink)
                .context("failed to scale values")?;
        }
        Command::Square { values } => {
            let square = try_from_fn(|n: i64| {
                n.checked_mul(n).ok_or(OverflowError {
                    value: n,
                    factor: n,
                })
            });
            for_each_invoke_into(values, &square, &mut sink)
                .context("failed to square values")?;
        }
        Command::Upcase { words } => {
            for_each_invoke_into(words, &Uppercase::new(), &mut sink)
                .context("failed to upcase words")?;
        }
        Command::Palindromes { invert, words } => {
            let kept = if invert {
                select_into(words, &Palindrome::<String>::new().negate(), &mut sink)
            } else {
                select_into(words, &Palindrome::new(), &mut sink)
            }
            .context("failed to select palindromes")?;
            info!("kept {} words", kept.len());
        }
        Command::Doubling { start, steps } => {
            let config = doubling::Config::new(steps).context("invalid doubling config")?;
            doubling::for_each(start, &config, &from_fn(|term: i64| term), &mut sink)
                .with_context(|| format!("failed to double from {start}"))?;
        }
        Command::Demo => {
            let values = [1, 2, 3];
            for factor in [2, 3] {
                for_each_invoke_into(values, &Multiplier::new(factor), &mut sink)
                    .with_context(|| format!("failed to multiply by {factor}"))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("looper").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn demo_doubles_then_triples() {
        assert_eq!(run_args(&["demo"]).unwrap(), "2\n4\n6\n3\n6\n9\n");
    }

    #[test]
    fn scale_by_factor() {
        assert_eq!(
            run_args(&["scale", "--factor", "3", "1", "-2", "3"]).unwrap(),
            "3\n-6\n9\n"
        );
    }

    #[test]
    fn scale_overflow_is_an_error() {
        let max = i64::MAX.to_string();
        let error = run_args(&["scale", "-f", "2", "1", &max, "3"]).unwrap_err();

        assert_eq!(error.to_string(), "failed to scale values");
        assert!(format!("{error:#}").contains("overflows i64"));
    }

    #[test]
    fn square_values() {
        assert_eq!(run_args(&["square", "1", "2", "3"]).unwrap(), "1\n4\n9\n");
    }

    #[test]
    fn upcase_words() {
        assert_eq!(
            run_args(&["upcase", "hello", "from", "ruby"]).unwrap(),
            "HELLO\nFROM\nRUBY\n"
        );
    }

    #[test]
    fn palindromes_and_inverse() {
        let words = ["hello", "mom", "bob", "monday"];

        let mut args = vec!["palindromes"];
        args.extend(words);
        assert_eq!(run_args(&args).unwrap(), "mom\nbob\n");

        let mut args = vec!["palindromes", "--invert"];
        args.extend(words);
        assert_eq!(run_args(&args).unwrap(), "hello\nmonday\n");
    }

    #[test]
    fn doubling_defaults_to_five_steps() {
        assert_eq!(
            run_args(&["doubling", "--start", "5"]).unwrap(),
            "5\n10\n20\n40\n80\n"
        );
    }

    #[test]
    fn doubling_rejects_zero_steps() {
        let error = run_args(&["doubling", "--start", "5", "--steps", "0"]).unwrap_err();
        assert_eq!(error.to_string(), "invalid doubling config");
    }

    #[test]
    fn missing_values_are_rejected() {
        assert!(run_args(&["scale", "--factor", "2"]).is_err());
        assert!(run_args(&["upcase"]).is_err());
    }
}
