use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, ValueEnum};
use crate::customer::Customer;

mod amount;
mod customer;
mod error;
mod loader;
mod report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
}

/// Loads bank customers from a data file and prints account reports.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Customer data file
    #[arg(env = "BANK_REPORT_DATA")]
    data_file: PathBuf,

    /// Show a single customer, given as "Last, First"
    #[arg(short, long, conflicts_with = "list")]
    customer: Option<String>,

    /// List customer names only
    #[arg(short, long)]
    list: bool,

    /// Output format for reports
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, conflicts_with = "list")]
    format: OutputFormat,
}

fn write_output(args: &Args, customers: &[Customer]) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();

    if args.list {
        for customer in customers {
            writeln!(stdout, "{}", customer.full_name())?;
        }
        return Ok(());
    }

    let selected: Vec<&Customer> = match &args.customer {
        Some(name) => {
            let customer = customers
                .iter()
                .find(|c| c.full_name() == *name)
                .ok_or_else(|| format!("No customer named {:?}", name))?;
            vec![customer]
        }
        None => customers.iter().collect(),
    };

    match (args.format, selected.as_slice()) {
        (OutputFormat::Csv, _) => report::write_accounts_csv(selected.iter().copied(), stdout)?,
        (OutputFormat::Text, [customer]) if args.customer.is_some() => {
            writeln!(stdout, "{}", customer.full_name())?;
            write!(stdout, "{}", report::customer_report(customer))?;
        }
        (OutputFormat::Text, _) => write!(stdout, "{}", report::full_report(customers))?,
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let customers = match loader::load_customers(&args.data_file) {
        Ok(customers) => customers,
        Err(e) => {
            eprintln!("Failed to read customers: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_output(&args, &customers) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
