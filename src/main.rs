use std::io::{self, BufRead};
use std::process::ExitCode;

use calc_rs::{Calculator, DigitLimit, DEFAULT_MAX_DIGITS};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Evaluate calculator expressions over arbitrary-precision non-negative integers.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about)]
struct Cli {
    /// Expressions such as `2^100` or `25!`; read one per line from stdin when omitted
    expressions: Vec<String>,

    /// Largest digit count `^` and `!` may produce
    #[arg(long, env = "CALC_MAX_DIGITS", default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let calculator = Calculator::new(DigitLimit::new(cli.max_digits));
    info!(limit = %calculator.limit(), "calculator ready");

    let mut failed = false;
    if cli.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    error!(%err, "failed to read stdin");
                    return ExitCode::FAILURE;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            failed |= !run(&calculator, &line);
        }
    } else {
        for expr in &cli.expressions {
            failed |= !run(&calculator, expr);
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Prints the result, or `Error` like the calculator display does.
fn run(calculator: &Calculator, expr: &str) -> bool {
    match calculator.evaluate(expr) {
        Ok(result) => {
            println!("{result}");
            true
        }
        Err(err) => {
            error!(expression = expr, %err, "evaluation failed");
            println!("Error");
            false
        }
    }
}
