use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tabled::{builder::Builder, Table};

use home_loan_rs::{
    AmortizationCalculator, AmortizationResult, CalculatorConfig, CurrencyFormatter, Decimal,
    ExtraPaymentComparison, LoanParameters,
};

/// Home loan EMI calculator
#[derive(Parser)]
#[command(
    name = "home-loan",
    version,
    about = "Home loan EMI and amortization schedule calculator"
)]
struct Cli {
    /// Loan amount
    #[arg(long, default_value = "5000000")]
    principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long, default_value = "8.5")]
    rate: Decimal,

    /// Loan tenure in years
    #[arg(long, default_value_t = 20)]
    tenure: u32,

    /// Extra payment made every month on top of the EMI
    #[arg(long, default_value = "0")]
    extra: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    output: OutputFormat,

    /// Also write the schedule as csv to this path
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// JSON calculator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compare against the same loan without the extra payment
    #[arg(long)]
    compare: bool,

    /// Log calculation details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Summary,
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// formats whose stdout is meant for another program
    fn is_machine_readable(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Csv)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("logger init failed: {}", e);
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> home_loan_rs::Result<()> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => CalculatorConfig::default(),
    };
    let formatter = CurrencyFormatter::new(&config.formatting);
    let calculator = AmortizationCalculator::from_config(&config);

    let params = LoanParameters::from_percent(cli.principal, cli.rate, cli.tenure, cli.extra);
    let result = calculator.compute(&params)?;

    match cli.output {
        OutputFormat::Summary => print_summary(&result, &formatter),
        OutputFormat::Table => {
            print_summary(&result, &formatter);
            println!();
            print_schedule_table(&result, &formatter);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).map_err(|e| {
                home_loan_rs::LoanError::CalculationError { message: e.to_string() }
            })?;
            println!("{}", json);
        }
        OutputFormat::Csv => home_loan_rs::write_csv(&result, io::stdout().lock())?,
    }

    // keep stdout clean for csv and json consumers
    let mut notes: Box<dyn Write> = if cli.output.is_machine_readable() {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };

    if cli.compare {
        let comparison = calculator.compare_with_baseline(&params)?;
        write_comparison(&mut notes, &comparison, &formatter)?;
    }

    if let Some(path) = &cli.csv_out {
        let path = if path.is_dir() { path.join(&config.csv_file_name) } else { path.clone() };
        home_loan_rs::write_csv_file(&result, &path)?;
        writeln!(notes, "Schedule written to {}", path.display())?;
    }

    Ok(())
}

fn print_summary(result: &AmortizationResult, formatter: &CurrencyFormatter) {
    println!("Monthly EMI (without extra): {}", formatter.format(result.baseline_emi));
    println!("Total Payment: {}", formatter.format(result.total_payment));
    println!("Total Interest Paid: {}", formatter.format(result.total_interest));
    println!("Loan paid off in {}", result.payoff_summary());
}

fn print_schedule_table(result: &AmortizationResult, formatter: &CurrencyFormatter) {
    let mut builder = Builder::default();
    builder.push_record(home_loan_rs::export::CSV_HEADERS);
    for record in &result.schedule {
        builder.push_record([
            record.month.to_string(),
            formatter.format(record.emi_paid),
            formatter.format(record.principal_paid),
            formatter.format(record.interest_paid),
            formatter.format(record.remaining_principal),
            formatter.format(record.cumulative_interest),
        ]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn write_comparison(
    out: &mut impl Write,
    comparison: &ExtraPaymentComparison,
    formatter: &CurrencyFormatter,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Without extra payment: {}, total interest {}",
        comparison.without_extra.payoff_summary(),
        formatter.format(comparison.without_extra.total_interest)
    )?;
    writeln!(out, "Months saved: {}", comparison.months_saved)?;
    writeln!(out, "Interest saved: {}", formatter.format(comparison.interest_saved))
}
