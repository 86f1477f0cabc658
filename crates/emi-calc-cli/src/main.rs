mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::amortization::{LoanArgs, ScheduleArgs};
use commands::comparison::CompareArgs;
use commands::products::ProductArgs;
use output::OutputFormat;

/// Loan EMI and amortization calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI and amortization calculations",
    long_about = "Computes equated monthly installments, full amortization schedules, \
                  year-wise tables, product quotes and balance-transfer savings with \
                  decimal precision and a fixed rounding policy."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log each computation to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly installment and totals
    Emi(LoanArgs),
    /// Full amortization schedule with year-wise table
    Schedule(ScheduleArgs),
    /// Quote a catalogue product (home, personal, gold, ...)
    Product(ProductArgs),
    /// List catalogue products and their limits
    Products,
    /// Savings from switching to a lower rate
    Compare(CompareArgs),
    /// Print version information
    Version,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::amortization::run_emi(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Product(args) => commands::products::run_product(args),
        Commands::Products => commands::products::run_list_products(),
        Commands::Compare(args) => commands::comparison::run_compare(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            cli.output.print(&value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
