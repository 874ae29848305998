/// extra payment - how a constant monthly prepayment shortens the loan
use home_loan_rs::{
    compare_with_baseline, to_csv_string, CalculatorConfig, CurrencyFormatter, LoanParameters,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LoanParameters::from_percent(dec!(5000000), dec!(8.5), 20, dec!(10000));
    let comparison = compare_with_baseline(&params)?;

    let formatter = CurrencyFormatter::new(&CalculatorConfig::default().formatting);
    println!(
        "with extra: {} / interest {}",
        comparison.with_extra.payoff_summary(),
        formatter.format(comparison.with_extra.total_interest)
    );
    println!(
        "without extra: {} / interest {}",
        comparison.without_extra.payoff_summary(),
        formatter.format(comparison.without_extra.total_interest)
    );
    println!("interest saved: {}", formatter.format(comparison.interest_saved));

    // chart data for the EMI split
    let series = comparison.with_extra.chart_series();
    println!("{} points per series", series.len());

    // last rows of the export
    let csv = to_csv_string(&comparison.with_extra)?;
    for line in csv.lines().rev().take(3) {
        println!("{}", line);
    }

    Ok(())
}
