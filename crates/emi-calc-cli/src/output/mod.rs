pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use clap::ValueEnum;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full envelope as pretty JSON
    Json,
    /// Summary, schedule and year-wise tables
    Table,
    /// One row per period, or field,value pairs
    Csv,
    /// The installment (or savings) figure alone
    Minimal,
}

impl OutputFormat {
    pub fn print(self, value: &Value) {
        match self {
            OutputFormat::Json => json::print_json(value),
            OutputFormat::Table => table::print_table(value),
            OutputFormat::Csv => csv_out::print_csv(value),
            OutputFormat::Minimal => minimal::print_minimal(value),
        }
    }
}
