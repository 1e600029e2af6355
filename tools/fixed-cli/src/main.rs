use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;
mod logging;

use cli::mandelbrot::NumericType;
use cli::math_check::{MathCheckConfig, MathFunc};

#[derive(Parser)]
#[command(name = "fixed-cli")]
#[command(about = "more-fixed 고정소수점 데모/검증 도구")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ASCII Mandelbrot plot in the chosen numeric type
    Mandelbrot {
        max_iterations: u32,
        #[arg(value_enum)]
        numeric_type: NumericType,
    },
    /// Compare forwarded math functions against libm for many fractional widths
    MathCheck {
        #[arg(default_value_t = 8191, value_parser = clap::value_parser!(u32).range(1..))]
        step: u32,
        #[arg(long, default_value_t = 8)]
        threads: usize,
        #[arg(long = "func", value_enum)]
        funcs: Vec<MathFunc>,
        #[arg(long = "bits")]
        bits: Vec<u32>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print the determinism vector and its blake3 digest
    Vector,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init();

    match cli.command {
        Commands::Mandelbrot {
            max_iterations,
            numeric_type,
        } => {
            if let Err(err) = cli::mandelbrot::run_mandelbrot(max_iterations, numeric_type) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
        Commands::MathCheck {
            step,
            threads,
            funcs,
            bits,
            json,
        } => {
            let result = MathCheckConfig::from_args(step, threads, funcs, bits, json)
                .and_then(|config| cli::math_check::run_math_check(&config));
            match result {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            }
        }
        Commands::Vector => match cli::vector::run_vector() {
            Ok(true) => {}
            Ok(false) => std::process::exit(2),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        },
    }
}
