//! BlockCrab Interpreter
//!
//! Runs one of the built-in sample programs. Input values are taken from the
//! command line or, when none are given, from one line of standard input.
//! The program result is printed on standard output; logs go to standard error.

use anyhow::{Context, Result};
use blockcrab::ast::Program;
use blockcrab::runner;
use blockcrab::samples;
use blockcrab::value::Int;
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Built-in program to execute
    #[arg(short, long, value_enum, default_value_t = Sample::Constant)]
    program: Sample,

    /// Value returned by the `constant` program
    #[arg(long, default_value_t = 777, allow_negative_numbers = true)]
    constant: Int,

    /// Input values, bound to the program inputs in declaration order.
    /// Read from standard input when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<Int>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Sample {
    /// Return a constant, ignoring inputs `x` and `y`
    Constant,
    /// Greatest common divisor of `x` and `y`
    Euclid,
    /// Count `n` down to zero
    Countdown,
}

fn main() -> ExitCode {
    let log_level = std::env::var("BLOCKCRAB_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Interpretation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Int> {
    let program = load_sample(cli)?;
    info!(
        "Running {:?} program with inputs {:?}",
        cli.program,
        program.inputs()
    );

    if cli.values.is_empty() {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read input values")?;
        runner::run_from_line(&program, &line)
    } else {
        runner::run_with_values(&program, &cli.values)
    }
}

fn load_sample(cli: &Cli) -> Result<Program> {
    let program = match cli.program {
        Sample::Constant => samples::constant(cli.constant),
        Sample::Euclid => samples::euclid(),
        Sample::Countdown => samples::countdown(),
    };
    program.context("Invalid sample program")
}
